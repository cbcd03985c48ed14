//! Data models for the current weather API.
//!
//! Query parameter handling lives in `query`, provider and response
//! payloads in `weather`.

pub mod query;
pub mod weather;

pub use query::*;
pub use weather::*;
