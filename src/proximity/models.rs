use crate::categories::CatalogError;
use crate::geo::models::GeoPoint;
use crate::proximity::consts::DEFAULT_RADIUS_KM;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A freshly inserted row, as delivered by the change feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertedRecord {
    pub subject_id: String,
    pub serialized_point: Option<String>,
    pub record_type: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProximityEvent {
    pub subject_id: String,
    pub point: GeoPoint,
    pub distance_km: f64,
    /// Human readable label of the record's type.
    pub category: String,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProximityConfig {
    radius_km: f64,
}

#[derive(Debug, Error, PartialEq)]
#[error("proximity radius must be a positive number of kilometers, got {0}")]
pub struct InvalidRadius(pub f64);

impl ProximityConfig {
    pub fn new(radius_km: f64) -> Result<Self, InvalidRadius> {
        if radius_km.is_finite() && radius_km > 0.0 {
            Ok(Self { radius_km })
        } else {
            Err(InvalidRadius(radius_km))
        }
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

#[derive(Debug, Error)]
pub enum ProximityError {
    #[error("failed to resolve the category of record `{subject_id}`: {source}")]
    CategoryLookup {
        subject_id: String,
        #[source]
        source: CatalogError,
    },
}
