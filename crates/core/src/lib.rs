//! # Isoproc Core
//!
//! Core parsing and search logic for the isolation procedure service.
//!
//! This crate contains pure, synchronous text operations:
//! - Whitespace/unicode normalisation of raw document text
//! - Locating a named procedure's block inside a larger document
//! - Segmenting a block into description and numbered steps
//! - Parsing each step's branch and flow-control semantics
//! - Keyword classification of free-text queries
//! - Rule-based next-action suggestions
//!
//! **No API concerns**: HTTP servers, JSON extraction, or OpenAPI documentation
//! belong in the `isoproc-run` binary. Everything here is request-scoped and
//! holds no state between calls.

pub mod classify;
pub mod locate;
pub mod normalize;
pub mod segment;
pub mod service;
pub mod steps;
pub mod suggest;

pub use classify::classify;
pub use locate::locate_block;
pub use normalize::normalize;
pub use segment::{derive_title, segment, Segmented};
pub use service::SearchService;
pub use steps::parse_steps;
pub use suggest::suggest;
