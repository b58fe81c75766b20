//! Shared data model layer.
//!
//! ## Files
//! - `models.rs` — employee records, pay rules, report DTOs.
//! - `errors.rs` — typed errors raised by the service layer.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no console side effects.
//! Rendering returns strings; writing them is the caller's job.
//!
//! ## Compatibility note
//! `Employee` serializes straight into the `--json` report, so field
//! renames here change that output.

pub mod errors;
pub mod models;
