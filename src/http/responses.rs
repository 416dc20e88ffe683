use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse<E> {
    pub error: bool,
    pub error_code: E,
}

pub fn reject<E: Serialize>(status: StatusCode, error_code: E) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: true,
            error_code,
        }),
    )
        .into_response()
}
