//! Decoding of points serialized by the data store, either as hex WKB or as `POINT(lon lat)` WKT
//! (optionally EWKT, with a leading `SRID=<n>;`).

use crate::geo::consts::{WKB_COORDINATES_HEX_LEN, WKB_LITTLE_ENDIAN, WKB_POINT_TYPE};
use crate::geo::models::{GeoPoint, PointDecoding};
use regex::Regex;
use std::sync::OnceLock;

static WKT_POINT: OnceLock<Regex> = OnceLock::new();

/// Signed decimal, leading or trailing dot allowed, optional exponent.
const WKT_NUMBER: &str = r"[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?";

fn wkt_point_regex() -> &'static Regex {
    WKT_POINT.get_or_init(|| {
        Regex::new(&format!(
            r"(?i)^\s*(?:SRID=\d+\s*;\s*)?POINT\s*\(\s*({WKT_NUMBER})\s+({WKT_NUMBER})\s*\)\s*$"
        ))
        .expect("The WKT point pattern is not a valid regex.")
    })
}

/// Decodes a serialized point, flattening every failure into `None`.
pub fn decode_point(serialized: Option<&str>) -> Option<GeoPoint> {
    decode(serialized).point()
}

pub fn decode(serialized: Option<&str>) -> PointDecoding {
    let serialized = match serialized.map(str::trim) {
        None | Some("") => return PointDecoding::Absent,
        Some(serialized) => serialized,
    };
    let coordinates = match wkt_point_regex().captures(serialized) {
        Some(captures) => parse_wkt_coordinates(&captures[1], &captures[2]),
        None => parse_wkb_coordinates(serialized),
    };
    match coordinates {
        Some((longitude, latitude)) => match GeoPoint::new(latitude, longitude) {
            Ok(point) => PointDecoding::Decoded(point),
            Err(_) => PointDecoding::Malformed,
        },
        None => PointDecoding::Malformed,
    }
}

fn parse_wkt_coordinates(longitude: &str, latitude: &str) -> Option<(f64, f64)> {
    Some((longitude.parse().ok()?, latitude.parse().ok()?))
}

/// Reads the trailing X/Y doubles of a hex WKB blob. Header bytes (byte order, type, SRID) are
/// not validated.
fn parse_wkb_coordinates(hex_blob: &str) -> Option<(f64, f64)> {
    let tail_start = hex_blob.len().checked_sub(WKB_COORDINATES_HEX_LEN)?;
    let tail = hex_blob.get(tail_start..)?;
    let bytes = hex::decode(tail).ok()?;
    let (x, y) = bytes.split_at(8);
    let longitude = f64::from_le_bytes(x.try_into().ok()?);
    let latitude = f64::from_le_bytes(y.try_into().ok()?);
    Some((longitude, latitude))
}

/// Encodes a point as little-endian WKB, hex-encoded, the way the data store emits it.
pub fn encode_wkb_hex(point: GeoPoint) -> String {
    let mut bytes = Vec::with_capacity(21);
    bytes.push(WKB_LITTLE_ENDIAN);
    bytes.extend_from_slice(&WKB_POINT_TYPE.to_le_bytes());
    bytes.extend_from_slice(&point.longitude().to_le_bytes());
    bytes.extend_from_slice(&point.latitude().to_le_bytes());
    hex::encode(bytes)
}

pub fn encode_wkt(point: GeoPoint) -> String {
    format!("POINT({} {})", point.longitude(), point.latitude())
}
