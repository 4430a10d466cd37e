//! Command implementations for the Fantasy Premier League CLI

pub mod common;
pub mod players;
pub mod teams;
pub mod user;

use crate::{cli::GetCmd, FplClient, Result};

/// Dispatch one `get` subcommand against `client`.
pub async fn handle_get(client: &FplClient, cmd: GetCmd) -> Result<()> {
    match cmd {
        GetCmd::Teams { ids, json, refresh } => teams::handle_teams(client, ids, json, refresh).await,
        GetCmd::Team { id, json } => teams::handle_team(client, id, json).await,
        GetCmd::Player { id, json } => players::handle_player(client, id, json).await,
        GetCmd::Summaries { ids, json } => players::handle_summaries(client, &ids, json).await,
        GetCmd::Me { json } => user::handle_me(client, json).await,
        GetCmd::Entry { id, json } => user::handle_entry(client, id, json).await,
    }
}
