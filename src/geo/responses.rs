use crate::geo::models::{GeoPoint, LocationStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodePointResponse {
    pub error: bool,
    pub status: LocationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<GeoPoint>,
    /// Canonical re-encodings of the decoded point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wkt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wkb: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceResponse {
    pub error: bool,
    pub distance_meters: f64,
}
