//! Fantasy Premier League client library
//!
//! A typed client for the Fantasy Premier League API. Raw JSON never leaves
//! the crate unvalidated unless asked for: every payload goes through the
//! schema validator and comes back as a strongly-typed record.
//!
//! ## Features
//!
//! - **Snapshot cache**: the bulk `bootstrap-static` payload is fetched once,
//!   shared behind an `Arc`, and refreshed on demand
//! - **Strict validation**: unknown, missing and mistyped fields are errors
//! - **Concurrent summaries**: per-player detail requests fan out together and
//!   come back in the order asked for
//! - **Raw mode**: every query has a `*_json` twin returning `serde_json::Value`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_client::{FplClient, PlayerId, TeamId};
//!
//! # async fn example() -> fpl_client::Result<()> {
//! let client = FplClient::from_env()?;
//!
//! let arsenal = client.get_team(TeamId::new(1)).await?;
//! println!("{} ({})", arsenal.name, arsenal.short_name);
//!
//! let summaries = client
//!     .get_player_summaries(&[PlayerId::new(302), PlayerId::new(355)])
//!     .await?;
//! println!("{} summaries", summaries.len());
//!
//! client.close().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FPL_BASE_URL=https://fantasy.premierleague.com
//! export FPL_TIMEOUT_SECS=10
//! ```

#![recursion_limit = "256"]

pub mod cli;
pub mod client;
pub mod commands;
pub mod core;
pub mod error;
pub mod fpl;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types
pub use cli::types::ids::{CupId, EntryId, PlayerId, TeamId};
pub use client::FplClient;
pub use crate::core::ClientConfig;
pub use error::{FplError, Result, TransportError};
pub use fpl::types::{ElementSummary, Fixture, Me, Player, Snapshot, Team};

pub const BASE_URL_ENV_VAR: &str = "FPL_BASE_URL";
pub const TIMEOUT_ENV_VAR: &str = "FPL_TIMEOUT_SECS";
