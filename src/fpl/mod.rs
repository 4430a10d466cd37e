//! Fantasy Premier League API: transport, validation, models, caching and batching.

pub mod batch;
pub mod endpoints;
pub mod http;
pub mod schema;
pub mod snapshot_cache;
pub mod types;
