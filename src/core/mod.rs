//! Core utilities shared by the client and the CLI
//!
//! - `config`: base URL, timeout and user agent, with environment overrides

pub mod config;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
