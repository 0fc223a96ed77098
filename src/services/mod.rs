//! Service layer containing lookup logic and side-effect helpers.
//!
//! ## Service map
//! - `dataset.rs` — reading and decoding the hafs_smart JSON asset.
//! - `mushaf.rs` — page filter, line rendering, surah/juz/page summaries.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod dataset;
pub mod mushaf;
pub mod output;
