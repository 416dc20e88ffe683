use crate::geo::models::GeoPoint;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct DecodePointQueryParam {
    pub serialized: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct DistanceRequest {
    pub from: GeoPoint,
    pub to: GeoPoint,
}
