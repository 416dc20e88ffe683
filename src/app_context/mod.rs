use crate::categories::CategoryCatalog;
use crate::cli::Args;
use crate::handoff::store::HandoffStore;
use crate::proximity::feed::InsertFeed;
use crate::proximity::models::ProximityConfig;
use crate::reports::storage::HashMapReportsStorage;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppContext {
    pub reports: HashMapReportsStorage,
    pub feed: InsertFeed,
    pub categories: Arc<dyn CategoryCatalog>,
    pub handoffs: HandoffStore,
    pub default_proximity: ProximityConfig,
}

pub fn init(args: &Args, categories: Arc<dyn CategoryCatalog>) -> AppContext {
    let default_proximity = ProximityConfig::new(args.default_radius_km)
        .expect("`--default-radius-km` must be a positive number.");
    AppContext {
        reports: HashMapReportsStorage::default(),
        feed: InsertFeed::new(args.feed_capacity.get()),
        categories,
        handoffs: HandoffStore::new(Duration::from_secs(args.handoff_ttl_secs)),
        default_proximity,
    }
}
