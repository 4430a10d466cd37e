//! In-memory cache for the bootstrap snapshot.
//!
//! Holds at most one validated [`Snapshot`] behind an `Arc`, so readers share it
//! without copying and never see a half-built value. Refreshes are serialized
//! by an async mutex; a caller that queued behind an in-flight refresh gets that
//! refresh's result instead of issuing a second request.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, RwLock,
};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
    fpl::{
        endpoints::BOOTSTRAP_STATIC,
        http::{get_json, Transport},
        schema,
        types::Snapshot,
    },
    Result,
};


/// Outcome of a cache lookup, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
    Refreshed,
    Coalesced,
}

#[derive(Debug, Default)]
pub struct SnapshotCache {
    slot: RwLock<Option<Arc<Snapshot>>>,
    /// Bumped after every successful store.
    generation: AtomicU64,
    refresh_lock: Mutex<()>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached snapshot, without touching the network.
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.slot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Drop the cached snapshot.
    pub fn clear(&self) {
        *self
            .slot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }

    /// Return the cached snapshot, fetching it when absent or when `force_refresh` is set.
    pub async fn get(&self, transport: &dyn Transport, force_refresh: bool) -> Result<Arc<Snapshot>> {
        self.get_with_status(transport, force_refresh)
            .await
            .map(|(snapshot, _)| snapshot)
    }

    pub async fn get_with_status(
        &self,
        transport: &dyn Transport,
        force_refresh: bool,
    ) -> Result<(Arc<Snapshot>, CacheStatus)> {
        if !force_refresh {
            if let Some(snapshot) = self.current() {
                debug!("snapshot cache hit");
                return Ok((snapshot, CacheStatus::Hit));
            }
        }

        let seen = self.generation.load(Ordering::Acquire);
        let _guard = self.refresh_lock.lock().await;

        // Someone else stored a snapshot while we were queued. A plain read
        // takes whatever is cached now, even if it landed before `seen` was read.
        if !force_refresh || self.generation.load(Ordering::Acquire) != seen {
            if let Some(snapshot) = self.current() {
                debug!("joined in-flight snapshot refresh");
                return Ok((snapshot, CacheStatus::Coalesced));
            }
        }

        let had_snapshot = self.current().is_some();
        let snapshot = match Self::fetch(transport).await {
            Ok(snapshot) => Arc::new(snapshot),
            Err(e) => {
                warn!(error = %e, kept_previous = had_snapshot, "snapshot refresh failed");
                return Err(e);
            }
        };

        *self
            .slot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(Arc::clone(&snapshot));
        self.generation.fetch_add(1, Ordering::AcqRel);

        info!(
            teams = snapshot.teams.len(),
            players = snapshot.elements.len(),
            "snapshot loaded"
        );

        let status = if had_snapshot {
            CacheStatus::Refreshed
        } else {
            CacheStatus::Miss
        };
        Ok((snapshot, status))
    }

    async fn fetch(transport: &dyn Transport) -> Result<Snapshot> {
        let raw = get_json(transport, BOOTSTRAP_STATIC).await?;
        schema::parse(raw)
    }
}
