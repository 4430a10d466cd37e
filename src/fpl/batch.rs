//! Concurrent fetches of per-id endpoints.
//!
//! All requests of a batch are started before any is awaited and run on the
//! caller's task. Results come back in input order. The first failure ends the
//! batch: the remaining requests are dropped, which cancels them and releases
//! their connections.

use futures::{stream::FuturesUnordered, FutureExt, StreamExt};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::{
    error::{BatchFailure, FplError},
    fpl::http::{get_json, Transport},
    Result,
};


/// GET `path_for(id)` for every id concurrently and return the JSON bodies in input order.
///
/// An empty `ids` returns immediately without touching the transport. If any
/// request fails the whole batch fails with `BatchPartialFailure`, listing the
/// failed id and any others that had already failed by then.
#[instrument(skip_all, fields(count = ids.len()))]
pub async fn fetch_many<I, F>(transport: &dyn Transport, ids: &[I], path_for: F) -> Result<Vec<Value>>
where
    I: Copy + Into<u32>,
    F: Fn(I) -> String,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut pending: FuturesUnordered<_> = ids
        .iter()
        .enumerate()
        .map(|(index, &id)| {
            let path = path_for(id);
            async move { (index, id.into(), get_json(transport, &path).await) }
        })
        .collect();
    debug!(in_flight = pending.len(), "batch dispatched");

    let mut slots: Vec<Option<Value>> = vec![None; ids.len()];

    while let Some((index, id, outcome)) = pending.next().await {
        match outcome {
            Ok(body) => slots[index] = Some(body),
            Err(error) => {
                let mut failures = vec![BatchFailure { id, error }];

                // Collect anything else that has already failed, without waiting.
                while let Some(Some((_, id, outcome))) = pending.next().now_or_never() {
                    if let Err(error) = outcome {
                        failures.push(BatchFailure { id, error });
                    }
                }

                warn!(
                    failed = failures.len(),
                    cancelled = pending.len(),
                    "batch aborted"
                );
                drop(pending);
                return Err(FplError::BatchPartialFailure { failures });
            }
        }
    }

    Ok(slots.into_iter().flatten().collect())
}

/// Single-id form of [`fetch_many`]. A failure is returned as the underlying error.
pub async fn fetch_one<I, F>(transport: &dyn Transport, id: I, path_for: F) -> Result<Value>
where
    I: Copy + Into<u32>,
    F: Fn(I) -> String,
{
    match fetch_many(transport, &[id], path_for).await {
        Ok(mut bodies) => bodies
            .pop()
            .ok_or_else(|| FplError::schema("batch result", "empty result for a single id")),
        Err(FplError::BatchPartialFailure { mut failures }) if failures.len() == 1 => {
            Err(failures.remove(0).error)
        }
        Err(e) => Err(e),
    }
}
