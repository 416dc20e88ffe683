use crate::geo::decoder::{encode_wkb_hex, encode_wkt};
use crate::geo::models::{GeoPoint, LocationStatus};
use crate::http::responses::ErrorResponse;
use crate::http::tests::test_server;
use crate::reports::responses::{
    CreateReportResponse, NearbyReportsResponse, ReportResponse, ReportsResponseError,
};
use axum::http::StatusCode;
use serde_json::json;

fn point(latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint::new(latitude, longitude).expect("Test point should be valid.")
}

#[tokio::test]
async fn test_create_and_get_report() {
    let server = test_server();

    let created = server
        .post("/reports")
        .json(&json!({
            "kind": "lost",
            "description": "Grey tabby, answers to Mishi",
            "location": encode_wkb_hex(point(-31.4201, -64.1888)),
        }))
        .await;
    created.assert_status_ok();
    let created = created.json::<CreateReportResponse>();
    assert_eq!(created.location_status, LocationStatus::Decoded);
    assert_eq!(created.report.kind, "lost");

    let fetched = server
        .get(&format!("/reports/{}", created.report.id))
        .await;

    fetched.assert_status_ok();
    fetched.assert_json(&ReportResponse {
        error: false,
        report: created.report,
    });
}

#[tokio::test]
async fn test_create_report_tells_absent_from_malformed_location() {
    let server = test_server();

    let absent = server
        .post("/reports")
        .json(&json!({"kind": "found"}))
        .await
        .json::<CreateReportResponse>();
    let malformed = server
        .post("/reports")
        .json(&json!({"kind": "found", "location": "garbage"}))
        .await
        .json::<CreateReportResponse>();

    assert_eq!(absent.location_status, LocationStatus::Absent);
    assert_eq!(malformed.location_status, LocationStatus::Malformed);
    assert_eq!(malformed.report.location.as_deref(), Some("garbage"));
}

#[tokio::test]
async fn test_create_report_with_unknown_kind() {
    let server = test_server();

    let response = server
        .post("/reports")
        .json(&json!({"kind": "stolen", "location": "POINT(0 0)"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&ErrorResponse {
        error: true,
        error_code: ReportsResponseError::UnknownCategory,
    });
}

#[tokio::test]
async fn test_get_missing_report() {
    let server = test_server();

    let response = server.get("/reports/not-a-report").await;

    response.assert_status_not_found();
    response.assert_json(&ErrorResponse {
        error: true,
        error_code: ReportsResponseError::ReportNotFound,
    });
}

#[tokio::test]
async fn test_nearby_reports_are_sorted_and_filtered() {
    let server = test_server();
    let reports = [
        ("far", encode_wkt(point(-34.6037, -58.3816))),
        ("close", encode_wkt(point(-31.43, -64.19))),
        ("closer", encode_wkb_hex(point(-31.4201, -64.1889))),
        ("broken", String::from("garbage")),
    ];
    for (description, location) in reports {
        server
            .post("/reports")
            .json(&json!({"kind": "lost", "description": description, "location": location}))
            .await
            .assert_status_ok();
    }

    let response = server
        .get("/reports/nearby")
        .add_query_param("lat", -31.4201)
        .add_query_param("lng", -64.1888)
        .add_query_param("radiusKm", 10.0)
        .await;

    response.assert_status_ok();
    let nearby = response.json::<NearbyReportsResponse>();
    let descriptions = nearby
        .reports
        .iter()
        .map(|nearby| nearby.report.description.as_str())
        .collect::<Vec<_>>();
    assert_eq!(descriptions, vec!["closer", "close"]);
    assert!(nearby.reports[0].distance_km < nearby.reports[1].distance_km);
}

#[tokio::test]
async fn test_nearby_reports_with_bad_query() {
    let server = test_server();

    let no_location = server.get("/reports/nearby").await;
    no_location.assert_status(StatusCode::BAD_REQUEST);
    no_location.assert_json(&ErrorResponse {
        error: true,
        error_code: ReportsResponseError::InvalidLocation,
    });

    let bad_radius = server
        .get("/reports/nearby")
        .add_query_param("lat", 0.0)
        .add_query_param("lng", 0.0)
        .add_query_param("radiusKm", -5.0)
        .await;
    bad_radius.assert_status(StatusCode::BAD_REQUEST);
    bad_radius.assert_json(&ErrorResponse {
        error: true,
        error_code: ReportsResponseError::InvalidRadius,
    });
}
