use crate::geo::models::GeoPoint;
use crate::proximity::models::ProximityConfig;
use serde::{Deserialize, Serialize};

/// Observer location and search radius, as passed in query strings.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationQueryParams {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius_km: Option<f64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationQueryError {
    InvalidLocation,
    InvalidRadius,
}

impl LocationQueryParams {
    /// `Ok(None)` means the client has no location to share (e.g. permission denied).
    pub fn user_location(&self) -> Result<Option<GeoPoint>, LocationQueryError> {
        match (self.lat, self.lng) {
            (None, None) => Ok(None),
            (Some(lat), Some(lng)) => GeoPoint::new(lat, lng)
                .map(Some)
                .map_err(|_| LocationQueryError::InvalidLocation),
            _ => Err(LocationQueryError::InvalidLocation),
        }
    }

    pub fn proximity_config(
        &self,
        default: ProximityConfig,
    ) -> Result<ProximityConfig, LocationQueryError> {
        match self.radius_km {
            Some(radius_km) => {
                ProximityConfig::new(radius_km).map_err(|_| LocationQueryError::InvalidRadius)
            }
            None => Ok(default),
        }
    }
}
