//! Service layer containing business logic and console side effects.
//!
//! ## Service map
//! - `input.rs` — prompting console with the numeric retry loop.
//! - `registry.rs` — ordered employee store, duplicate-id checks, text report.
//! - `output.rs` — text/JSON report selection.
//!
//! ## Conventions
//! - Services are generic over `BufRead`/`Write` so tests drive them in memory.
//! - Keep the menu handler thin; delegate to services.

pub mod input;
pub mod output;
pub mod registry;
