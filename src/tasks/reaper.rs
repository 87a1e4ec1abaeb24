//! Reaper Task
//!
//! Background task that periodically reclaims expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::BoundedStore;

/// Spawns the background reaper for a shared store.
///
/// The task loops until `shutdown` is notified, sleeping for `sweep_interval`
/// between sweeps. Each sweep snapshots the expired keys under a read lock
/// and then removes them one at a time, taking the write lock briefly per key
/// so callers are never stalled behind a whole-store scan. Before removing a
/// key the sweep re-checks its deadline: an entry overwritten since the
/// snapshot carries a fresh deadline and is left alone.
///
/// An entry may therefore outlive its deadline physically by up to one sweep
/// interval, but never indefinitely, and never logically (reads check the
/// deadline themselves).
///
/// # Arguments
/// * `store` - Shared store to sweep
/// * `sweep_interval` - Time between sweeps
/// * `shutdown` - Cooperative stop signal
///
/// # Returns
/// A JoinHandle the owner can await after signalling shutdown.
pub fn spawn_reaper<V>(
    store: Arc<RwLock<BoundedStore<V>>>,
    sweep_interval: Duration,
    shutdown: Arc<Notify>,
) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(
            interval_secs = sweep_interval.as_secs(),
            "reaper started"
        );

        loop {
            tokio::select! {
                _ = shutdown.notified() => {
                    info!("reaper stopping");
                    break;
                }
                _ = tokio::time::sleep(sweep_interval) => {}
            }

            let candidates = {
                let guard = store.read().await;
                guard.expired_keys()
            };

            let mut reclaimed = 0usize;
            for key in candidates {
                // One write lock per key; a key that vanished or was
                // refreshed since the snapshot is skipped, never an abort.
                let mut guard = store.write().await;
                match guard.peek(&key) {
                    Some(entry) if entry.is_expired() => {
                        guard.remove(&key);
                        guard.record_expiration();
                        reclaimed += 1;
                    }
                    Some(_) => {
                        debug!(key = %key, "entry refreshed since snapshot, skipping");
                    }
                    None => {
                        debug!(key = %key, "entry already removed, skipping");
                    }
                }
            }

            if reclaimed > 0 {
                info!(reclaimed, "reaper reclaimed expired entries");
            } else {
                debug!("reaper found no expired entries");
            }
        }
    })
}
