/// Mean Earth radius, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Hex characters holding the trailing X/Y coordinate pair of a WKB point.
pub const WKB_COORDINATES_HEX_LEN: usize = 32;

/// Byte order marker for little-endian (NDR) WKB.
pub const WKB_LITTLE_ENDIAN: u8 = 1;

pub const WKB_POINT_TYPE: u32 = 1;
