//! # API Shared
//!
//! Shared wire types for the isolation procedure search API.
//!
//! Contains:
//! - Request/response schema types (`schema` module)
//! - Shared services like `HealthService`
//!
//! Used by `isoproc-core` (which produces the response types) and the
//! `isoproc-run` server binary (which exposes them over HTTP).

pub mod health;
pub mod schema;

pub use health::HealthService;
pub use schema::*;
