//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — page lookup and the surahs/juzs/info summaries.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate lookup logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod runtime;

pub use runtime::handle_runtime_commands;
