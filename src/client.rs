//! Client facade over the Fantasy Premier League API.
//!
//! Club and player lookups are answered from the cached bootstrap snapshot;
//! everything else is fetched fresh on every call. Each query has a `*_json`
//! twin: snapshot-backed twins serialize the validated record, fetch-backed
//! twins return the response body as received.

use std::{collections::HashSet, sync::Arc};

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    cli::types::ids::{CupId, EntryId, PlayerId, TeamId},
    core::ClientConfig,
    error::FplError,
    fpl::{
        batch::{fetch_many, fetch_one},
        endpoints,
        http::{get_json, HttpTransport, Transport},
        schema,
        snapshot_cache::SnapshotCache,
        types::{ElementSummary, EntryCup, ManagerEntry, Me, MyTeam, Player, Snapshot, Team},
    },
    Result,
};


pub struct FplClient {
    transport: Arc<dyn Transport>,
    snapshot: SnapshotCache,
}

impl FplClient {
    /// Client over HTTP with the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(config)?)))
    }

    /// Client configured from `FPL_BASE_URL` / `FPL_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env()?)
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            snapshot: SnapshotCache::new(),
        }
    }

    /// Release the transport and drop the cached snapshot.
    pub async fn close(&self) {
        self.snapshot.clear();
        self.transport.close().await;
    }

    // -- snapshot ----------------------------------------------------------

    pub async fn get_snapshot(&self, force_refresh: bool) -> Result<Arc<Snapshot>> {
        self.snapshot.get(self.transport.as_ref(), force_refresh).await
    }

    /// Reload the bootstrap snapshot now. On failure the previous one stays cached.
    pub async fn refresh(&self) -> Result<Arc<Snapshot>> {
        self.get_snapshot(true).await
    }

    async fn snapshot(&self) -> Result<Arc<Snapshot>> {
        self.get_snapshot(false).await
    }

    // -- teams -------------------------------------------------------------

    /// All clubs, or those whose id is in `ids`, in snapshot order.
    ///
    /// `None` and an empty set both mean "no filter".
    pub async fn get_teams(&self, ids: Option<&HashSet<TeamId>>) -> Result<Vec<Team>> {
        let snapshot = self.snapshot().await?;
        let teams = match ids {
            Some(ids) if !ids.is_empty() => snapshot
                .teams
                .iter()
                .filter(|team| ids.contains(&team.id))
                .cloned()
                .collect(),
            _ => snapshot.teams.clone(),
        };
        Ok(teams)
    }

    pub async fn get_teams_json(&self, ids: Option<&HashSet<TeamId>>) -> Result<Value> {
        to_json("team list", &self.get_teams(ids).await?)
    }

    /// One club. The id is range-checked before the snapshot is consulted.
    pub async fn get_team(&self, id: TeamId) -> Result<Team> {
        let id = id.validate()?;
        let snapshot = self.snapshot().await?;
        snapshot.team(id).cloned().ok_or(FplError::NotFound {
            entity: "team",
            id: id.as_u32(),
        })
    }

    pub async fn get_team_json(&self, id: TeamId) -> Result<Value> {
        to_json("team", &self.get_team(id).await?)
    }

    // -- players -----------------------------------------------------------

    pub async fn get_player(&self, id: PlayerId) -> Result<Player> {
        let id = id.validate()?;
        let snapshot = self.snapshot().await?;
        snapshot.player(id).cloned().ok_or(FplError::NotFound {
            entity: "player",
            id: id.as_u32(),
        })
    }

    pub async fn get_player_json(&self, id: PlayerId) -> Result<Value> {
        to_json("player", &self.get_player(id).await?)
    }

    /// History and upcoming fixtures for one player. Not cached.
    pub async fn get_player_summary(&self, id: PlayerId) -> Result<ElementSummary> {
        schema::parse(self.get_player_summary_json(id).await?)
    }

    pub async fn get_player_summary_json(&self, id: PlayerId) -> Result<Value> {
        let id = id.validate()?;
        fetch_one(self.transport.as_ref(), id, endpoints::player_summary).await
    }

    /// Summaries for several players, fetched concurrently, in the order given.
    ///
    /// A body that fails validation is reported under its player id, like a
    /// failed request.
    pub async fn get_player_summaries(&self, ids: &[PlayerId]) -> Result<Vec<ElementSummary>> {
        schema::parse_batch(ids, self.get_player_summaries_json(ids).await?)
    }

    pub async fn get_player_summaries_json(&self, ids: &[PlayerId]) -> Result<Vec<Value>> {
        for id in ids {
            id.validate()?;
        }
        debug!(count = ids.len(), "fetching player summaries");
        fetch_many(self.transport.as_ref(), ids, endpoints::player_summary).await
    }

    // -- user and entries --------------------------------------------------

    /// The logged-in user. Fails with `AuthenticationRequired` without a session.
    pub async fn get_user(&self) -> Result<Me> {
        schema::parse(self.get_user_json().await?)
    }

    pub async fn get_user_json(&self) -> Result<Value> {
        self.fetch(endpoints::ME).await
    }

    /// A manager's squad. Requires a session owning `entry_id`.
    pub async fn get_my_team(&self, entry_id: EntryId) -> Result<MyTeam> {
        schema::parse(self.get_my_team_json(entry_id).await?)
    }

    pub async fn get_my_team_json(&self, entry_id: EntryId) -> Result<Value> {
        let entry_id = entry_id.validate()?;
        self.fetch(&endpoints::my_team(entry_id)).await
    }

    pub async fn get_entry(&self, entry_id: EntryId) -> Result<ManagerEntry> {
        schema::parse(self.get_entry_json(entry_id).await?)
    }

    pub async fn get_entry_json(&self, entry_id: EntryId) -> Result<Value> {
        let entry_id = entry_id.validate()?;
        self.fetch(&endpoints::entry(entry_id)).await
    }

    pub async fn get_entry_cup(&self, entry_id: EntryId, cup_id: CupId) -> Result<EntryCup> {
        schema::parse(self.get_entry_cup_json(entry_id, cup_id).await?)
    }

    pub async fn get_entry_cup_json(&self, entry_id: EntryId, cup_id: CupId) -> Result<Value> {
        let entry_id = entry_id.validate()?;
        self.fetch(&endpoints::entry_cup(entry_id, cup_id)).await
    }

    async fn fetch(&self, path: &str) -> Result<Value> {
        get_json(self.transport.as_ref(), path).await
    }
}

fn to_json<T: Serialize>(shape: &'static str, value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| FplError::schema(shape, e.to_string()))
}
