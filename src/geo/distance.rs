use crate::geo::consts::{EARTH_RADIUS_METERS, METERS_PER_KILOMETER};
use crate::geo::models::GeoPoint;

/// Great-circle distance between two points, in meters, using the haversine formula.
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi_1 = a.latitude().to_radians();
    let phi_2 = b.latitude().to_radians();
    let delta_phi = (b.latitude() - a.latitude()).to_radians();
    let delta_lambda = (b.longitude() - a.longitude()).to_radians();
    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push `h` a hair past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_METERS * c
}

pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    distance_meters(a, b) / METERS_PER_KILOMETER
}
