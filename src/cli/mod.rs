//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::ids::{EntryId, PlayerId, TeamId};

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// List Premier League clubs from the bootstrap snapshot.
    Teams {
        /// Only these club ids (repeatable): `--id 1 --id 14`.
        #[clap(long = "id")]
        ids: Vec<TeamId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Force a fresh snapshot instead of the cached one.
        #[clap(long)]
        refresh: bool,
    },

    /// Show one club (id 1-20).
    Team {
        id: TeamId,

        #[clap(long)]
        json: bool,
    },

    /// Show one player from the bootstrap snapshot.
    Player {
        id: PlayerId,

        #[clap(long)]
        json: bool,
    },

    /// Fetch per-player summaries concurrently: `fpl get summaries 302 355 14`.
    Summaries {
        #[clap(required = true)]
        ids: Vec<PlayerId>,

        #[clap(long)]
        json: bool,
    },

    /// Show the logged-in user (requires a session).
    Me {
        #[clap(long)]
        json: bool,
    },

    /// Show a manager's entry.
    Entry {
        id: EntryId,

        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "fpl", about = "Fantasy Premier League CLI")]
pub struct Fpl {
    /// Log requests and cache activity to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from Fantasy Premier League
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_teams_with_ids() {
        let app = Fpl::try_parse_from(["fpl", "get", "teams", "--id", "5", "--id", "9", "--json"])
            .unwrap();
        match app.command {
            Commands::Get {
                cmd: GetCmd::Teams { ids, json, refresh },
            } => {
                assert_eq!(ids, vec![TeamId::new(5), TeamId::new(9)]);
                assert!(json);
                assert!(!refresh);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_team_out_of_range_rejected() {
        assert!(Fpl::try_parse_from(["fpl", "get", "team", "21"]).is_err());
        assert!(Fpl::try_parse_from(["fpl", "get", "team", "0"]).is_err());
    }

    #[test]
    fn test_parse_summaries_requires_ids() {
        assert!(Fpl::try_parse_from(["fpl", "get", "summaries"]).is_err());

        let app = Fpl::try_parse_from(["fpl", "-v", "get", "summaries", "3", "1", "2"]).unwrap();
        assert!(app.verbose);
        match app.command {
            Commands::Get {
                cmd: GetCmd::Summaries { ids, .. },
            } => assert_eq!(ids, vec![PlayerId::new(3), PlayerId::new(1), PlayerId::new(2)]),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
