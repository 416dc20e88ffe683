use crate::app_context::AppContext;
use crate::handoff::responses::{HandoffResponseError, PutHandoffResponse, TakeHandoffResponse};
use crate::http::responses::reject;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::Value;

pub async fn put(
    State(app_context): State<AppContext>,
    Json(payload): Json<Value>,
) -> Json<PutHandoffResponse> {
    let token = app_context.handoffs.put(payload).await;
    Json(PutHandoffResponse {
        error: false,
        token,
        expires_in_secs: app_context.handoffs.ttl().as_secs(),
    })
}

pub async fn take(Path(token): Path<String>, State(app_context): State<AppContext>) -> Response {
    match app_context.handoffs.take(&token).await {
        Some(payload) => Json(TakeHandoffResponse {
            error: false,
            payload,
        })
        .into_response(),
        None => reject(StatusCode::NOT_FOUND, HandoffResponseError::HandoffNotFound),
    }
}
