//! Expiry Sweep Task
//!
//! Background task that periodically drops expired memoized outputs.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::TransformStore;

/// Spawns a task purging expired entries every `cleanup_interval_secs`.
///
/// An interval of 0 is treated as 1 second. The returned handle is aborted
/// during graceful shutdown.
pub fn spawn_cleanup_task(
    store: Arc<RwLock<TransformStore>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));
    spawn_with_interval(store, interval)
}

fn spawn_with_interval(store: Arc<RwLock<TransformStore>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting expiry sweep every {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = store.write().await.purge_expired();

            if removed > 0 {
                info!("Expiry sweep: removed {} entries", removed);
            } else {
                debug!("Expiry sweep: nothing to remove");
            }
        }
    })
}
