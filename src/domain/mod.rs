//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — dataset records, summary and output structs.
//! - `constants.rs` — default page, default dataset path.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Field names here are the `--json` output schema.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
