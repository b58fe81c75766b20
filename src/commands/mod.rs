//! Command handler layer.
//!
//! This module owns the interactive menu and its console wiring.
//!
//! ## Files
//! - `menu.rs` — menu loop, field collection, report dispatch.
//!
//! ## Principles
//! - Read and match menu input here.
//! - Delegate storage and rendering to `services/*`.
//! - Keep prompts and messages stable; scripted sessions depend on them.

pub mod menu;

pub use menu::Session;
