use crate::geo::decoder::{decode, decode_point, encode_wkb_hex, encode_wkt};
use crate::geo::distance::{distance_km, distance_meters};
use crate::geo::models::{GeoPoint, InvalidGeoPoint, LocationStatus, PointDecoding};
use crate::geo::responses::{DecodePointResponse, DistanceResponse};
use crate::http::tests::test_server;
use axum::http::StatusCode;
use serde_json::json;

fn point(latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint::new(latitude, longitude).expect("Test point should be valid.")
}

#[test]
fn test_geo_point_rejects_out_of_range_coordinates() {
    assert_eq!(GeoPoint::new(90.5, 0.0), Err(InvalidGeoPoint::Latitude(90.5)));
    assert_eq!(
        GeoPoint::new(0.0, -180.5),
        Err(InvalidGeoPoint::Longitude(-180.5))
    );
    assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
    assert!(GeoPoint::new(-90.0, 180.0).is_ok());
}

#[test]
fn test_decode_wkb_round_trip() {
    let fixtures = [
        point(-31.4201, -64.1888),
        point(0.0, 0.0),
        point(89.999999, -179.5),
        point(-45.123456789, 170.987654321),
    ];
    for original in fixtures {
        let decoded = decode_point(Some(&encode_wkb_hex(original))).expect("Should decode.");
        assert!((decoded.latitude() - original.latitude()).abs() < 1e-9);
        assert!((decoded.longitude() - original.longitude()).abs() < 1e-9);
    }
}

#[test]
fn test_decode_wkb_known_hex() {
    let decoded = decode_point(Some("0101000000075f984c150c50c0b30c71ac8b6b3fc0"))
        .expect("Should decode.");
    assert_eq!(decoded, point(-31.4201, -64.1888));
}

#[test]
fn test_decode_wkb_ignores_ewkb_header() {
    // Extended WKB with the SRID flag set and SRID 4326 ahead of the coordinates.
    let decoded = decode_point(Some(
        "0101000020E6100000075f984c150c50c0b30c71ac8b6b3fc0",
    ))
    .expect("Should decode.");
    assert_eq!(decoded, point(-31.4201, -64.1888));
}

#[test]
fn test_decode_wkt() {
    assert_eq!(
        decode_point(Some("POINT(-64.1888 -31.4201)")),
        Some(point(-31.4201, -64.1888))
    );
    assert_eq!(
        decode_point(Some("  point ( 13 52.52 ) ")),
        Some(point(52.52, 13.0))
    );
    assert_eq!(
        decode_point(Some(&encode_wkt(point(12.5, -7.25)))),
        Some(point(12.5, -7.25))
    );
}

#[test]
fn test_decode_wkt_number_forms_and_srid_prefix() {
    assert_eq!(
        decode_point(Some("SRID=4326;POINT(-64.1888 -31.4201)")),
        Some(point(-31.4201, -64.1888))
    );
    assert_eq!(
        decode_point(Some("srid=4326; POINT (1 2)")),
        Some(point(2.0, 1.0))
    );
    assert_eq!(decode_point(Some("POINT(+1 2)")), Some(point(2.0, 1.0)));
    assert_eq!(decode_point(Some("POINT(.5 -2.)")), Some(point(-2.0, 0.5)));
    assert_eq!(decode_point(Some("POINT(1e1 -2.5E-1)")), Some(point(-0.25, 10.0)));
    assert_eq!(decode_point(Some("SRID=;POINT(1 2)")), None);
    assert_eq!(decode_point(Some("POINT(. 2)")), None);
    assert_eq!(decode_point(Some("POINT(1e 2)")), None);
}

#[test]
fn test_decode_soft_fails() {
    assert_eq!(decode_point(None), None);
    assert_eq!(decode_point(Some("")), None);
    assert_eq!(decode_point(Some("not a point")), None);
    assert_eq!(decode_point(Some("garbage")), None);
    assert_eq!(decode_point(Some("POINT(1)")), None);
    assert_eq!(
        decode_point(Some("zz01000000075f984c150c50c0b30c71ac8b6b3fzz")),
        None
    );
}

#[test]
fn test_decode_tells_absent_from_malformed() {
    assert_eq!(decode(None), PointDecoding::Absent);
    assert_eq!(decode(Some("   ")), PointDecoding::Absent);
    assert_eq!(decode(Some("garbage")), PointDecoding::Malformed);
    // Latitude out of range.
    assert_eq!(decode(Some("POINT(10 95)")), PointDecoding::Malformed);
    let nan_blob = format!(
        "{}{}",
        hex::encode(1.0f64.to_le_bytes()),
        hex::encode(f64::NAN.to_le_bytes())
    );
    assert_eq!(decode(Some(&nan_blob)), PointDecoding::Malformed);
}

#[test]
fn test_distance_to_itself_is_zero() {
    let a = point(-31.4201, -64.1888);
    assert_eq!(distance_meters(a, a), 0.0);
}

#[test]
fn test_distance_is_symmetric() {
    let pairs = [
        (point(-31.4201, -64.1888), point(-34.6037, -58.3816)),
        (point(51.5074, -0.1278), point(40.7128, -74.006)),
        (point(0.0, 179.9), point(0.0, -179.9)),
    ];
    for (a, b) in pairs {
        assert!((distance_meters(a, b) - distance_meters(b, a)).abs() < 1e-9);
    }
}

#[test]
fn test_distance_known_fixture() {
    let distance = distance_meters(point(-31.4201, -64.1888), point(-31.43, -64.19));
    assert!((distance - 1103.0).abs() < 5.0, "got {distance}");
}

#[test]
fn test_distance_km_between_cities() {
    let cordoba = point(-31.4201, -64.1888);
    let buenos_aires = point(-34.6037, -58.3816);
    let distance = distance_km(cordoba, buenos_aires);
    assert!((distance - 646.7).abs() < 1.0, "got {distance}");
}

#[test]
fn test_distance_antipodal_is_half_circumference() {
    let distance = distance_meters(point(0.0, 0.0), point(0.0, 180.0));
    assert!((distance - std::f64::consts::PI * 6_371_000.0).abs() < 1e-3);
}

#[tokio::test]
async fn test_decode_endpoint() {
    let server = test_server();

    let response = server
        .get("/geo/decode")
        .add_query_param("serialized", "POINT(-64.1888 -31.4201)")
        .await;

    response.assert_status_ok();
    response.assert_json(&DecodePointResponse {
        error: false,
        status: LocationStatus::Decoded,
        point: Some(point(-31.4201, -64.1888)),
        wkt: Some(String::from("POINT(-64.1888 -31.4201)")),
        wkb: Some(String::from("0101000000075f984c150c50c0b30c71ac8b6b3fc0")),
    });
}

#[tokio::test]
async fn test_decode_endpoint_reports_absent_and_malformed() {
    let server = test_server();

    let absent = server.get("/geo/decode").await;
    absent.assert_status_ok();
    absent.assert_json(&DecodePointResponse {
        error: false,
        status: LocationStatus::Absent,
        point: None,
        wkt: None,
        wkb: None,
    });

    let malformed = server
        .get("/geo/decode")
        .add_query_param("serialized", "garbage")
        .await;
    malformed.assert_status_ok();
    malformed.assert_json(&DecodePointResponse {
        error: false,
        status: LocationStatus::Malformed,
        point: None,
        wkt: None,
        wkb: None,
    });
}

#[tokio::test]
async fn test_distance_endpoint() {
    let server = test_server();

    let response = server
        .post("/geo/distance")
        .json(&json!({
            "from": {"latitude": -31.4201, "longitude": -64.1888},
            "to": {"latitude": -31.4201, "longitude": -64.1888},
        }))
        .await;

    response.assert_status_ok();
    response.assert_json(&DistanceResponse {
        error: false,
        distance_meters: 0.0,
    });
}

#[tokio::test]
async fn test_distance_endpoint_rejects_invalid_points() {
    let server = test_server();

    let response = server
        .post("/geo/distance")
        .json(&json!({
            "from": {"latitude": 123.0, "longitude": 0.0},
            "to": {"latitude": 0.0, "longitude": 0.0},
        }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
