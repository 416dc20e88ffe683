//! Short-lived store for data handed from one step of a flow to a later one, e.g. profile
//! fields collected before an OAuth redirect and consumed once the client comes back.

pub mod consts;
pub mod handlers;
pub mod responses;
pub mod store;

use std::time::Duration;
use store::HandoffStore;
use tokio::task::JoinHandle;

/// Periodically drops expired entries that were never taken.
pub fn spawn_janitor(store: HandoffStore, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            let purged = store.purge_expired().await;
            if purged > 0 {
                tracing::debug!(
                    "Purged {purged} expired handoff entries, {} left.",
                    store.len().await
                );
            }
        }
    })
}
