use crate::geo::decoder::decode_point;
use crate::geo::distance::distance_km;
use crate::geo::models::GeoPoint;
use crate::reports::models::{NearbyReport, Report};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct HashMapReportsStorage {
    storage: Arc<RwLock<HashMap<String, Report>>>,
}

impl HashMapReportsStorage {
    pub async fn insert(&self, report: Report) {
        self.storage.write().await.insert(report.id.clone(), report);
    }

    pub async fn get(&self, report_id: &str) -> Option<Report> {
        self.storage.read().await.get(report_id).cloned()
    }

    /// Reports strictly within `radius_km` of `origin`, closest first. Reports whose location
    /// can't be decoded are left out.
    pub async fn nearby(&self, origin: GeoPoint, radius_km: f64) -> Vec<NearbyReport> {
        let mut nearby = self
            .storage
            .read()
            .await
            .values()
            .filter_map(|report| {
                let point = decode_point(report.location.as_deref())?;
                let distance_km = distance_km(origin, point);
                (distance_km < radius_km).then(|| NearbyReport {
                    report: report.clone(),
                    distance_km,
                })
            })
            .collect::<Vec<_>>();
        nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        nearby
    }
}
