use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validated latitude/longitude pair, in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidGeoPoint {
    #[error("latitude {0} is outside of [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} is outside of [-180, 180]")]
    Longitude(f64),
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidGeoPoint> {
        // `contains` is false for NaN, so NaN coordinates are rejected here too.
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidGeoPoint::Latitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidGeoPoint::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Deserialize)]
struct RawGeoPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = InvalidGeoPoint;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        GeoPoint::new(raw.latitude, raw.longitude)
    }
}

/// Outcome of decoding a serialized point, keeping "no location" apart from "broken location".
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointDecoding {
    Absent,
    Malformed,
    Decoded(GeoPoint),
}

impl PointDecoding {
    pub fn point(self) -> Option<GeoPoint> {
        match self {
            PointDecoding::Decoded(point) => Some(point),
            PointDecoding::Absent | PointDecoding::Malformed => None,
        }
    }

    pub fn status(&self) -> LocationStatus {
        match self {
            PointDecoding::Absent => LocationStatus::Absent,
            PointDecoding::Malformed => LocationStatus::Malformed,
            PointDecoding::Decoded(_) => LocationStatus::Decoded,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationStatus {
    Absent,
    Malformed,
    Decoded,
}
