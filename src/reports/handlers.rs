use crate::app_context::AppContext;
use crate::geo::decoder;
use crate::http::requests::{LocationQueryError, LocationQueryParams};
use crate::http::responses::reject;
use crate::reports::models::Report;
use crate::reports::requests::CreateReportRequest;
use crate::reports::responses::{
    CreateReportResponse, NearbyReportsResponse, ReportResponse, ReportsResponseError,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub async fn create(
    State(app_context): State<AppContext>,
    Json(request): Json<CreateReportRequest>,
) -> Response {
    if !app_context.categories.contains(&request.kind).await {
        return reject(StatusCode::BAD_REQUEST, ReportsResponseError::UnknownCategory);
    }
    let location_status = decoder::decode(request.location.as_deref()).status();
    let report = Report {
        id: Uuid::new_v4().to_string(),
        kind: request.kind,
        description: request.description,
        location: request.location,
        created_at: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default(),
    };
    app_context.reports.insert(report.clone()).await;
    let subscribers = app_context.feed.publish(report.as_inserted_record());
    tracing::info!(
        task = "report_created",
        report_id = report.id,
        kind = report.kind,
        location_status = ?location_status,
        subscribers,
    );
    Json(CreateReportResponse {
        error: false,
        report,
        location_status,
    })
    .into_response()
}

pub async fn get(
    Path(report_id): Path<String>,
    State(app_context): State<AppContext>,
) -> Response {
    match app_context.reports.get(&report_id).await {
        Some(report) => Json(ReportResponse {
            error: false,
            report,
        })
        .into_response(),
        None => reject(StatusCode::NOT_FOUND, ReportsResponseError::ReportNotFound),
    }
}

pub async fn nearby(
    Query(query_params): Query<LocationQueryParams>,
    State(app_context): State<AppContext>,
) -> Response {
    let origin = match query_params.user_location() {
        Ok(Some(origin)) => origin,
        Ok(None) | Err(LocationQueryError::InvalidLocation) => {
            return reject(StatusCode::BAD_REQUEST, ReportsResponseError::InvalidLocation)
        }
        Err(LocationQueryError::InvalidRadius) => {
            return reject(StatusCode::BAD_REQUEST, ReportsResponseError::InvalidRadius)
        }
    };
    let config = match query_params.proximity_config(app_context.default_proximity) {
        Ok(config) => config,
        Err(_) => return reject(StatusCode::BAD_REQUEST, ReportsResponseError::InvalidRadius),
    };
    let reports = app_context
        .reports
        .nearby(origin, config.radius_km())
        .await;
    Json(NearbyReportsResponse {
        error: false,
        reports,
    })
    .into_response()
}
