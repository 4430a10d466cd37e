//! Path templates for the Fantasy Premier League API.
//!
//! Paths are relative to [`ClientConfig::base_url`](crate::core::ClientConfig).

use crate::cli::types::ids::{CupId, EntryId, PlayerId};

pub const BOOTSTRAP_STATIC: &str = "/api/bootstrap-static/";
pub const ME: &str = "/api/me/";

pub fn my_team(entry_id: EntryId) -> String {
    format!("/api/my-team/{entry_id}")
}

pub fn entry(entry_id: EntryId) -> String {
    format!("/api/entry/{entry_id}/")
}

pub fn entry_cup(entry_id: EntryId, cup_id: CupId) -> String {
    format!("/api/entry/{entry_id}/{cup_id}/")
}

pub fn player_summary(player_id: PlayerId) -> String {
    format!("/api/element-summary/{player_id}")
}
