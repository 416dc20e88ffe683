use crate::geo::decoder;
use crate::geo::distance::distance_meters;
use crate::geo::requests::{DecodePointQueryParam, DistanceRequest};
use crate::geo::responses::{DecodePointResponse, DistanceResponse};
use axum::extract::Query;
use axum::response::Json;

pub async fn decode_point(
    Query(query_params): Query<DecodePointQueryParam>,
) -> Json<DecodePointResponse> {
    let decoding = decoder::decode(query_params.serialized.as_deref());
    let point = decoding.point();
    Json(DecodePointResponse {
        error: false,
        status: decoding.status(),
        point,
        wkt: point.map(decoder::encode_wkt),
        wkb: point.map(decoder::encode_wkb_hex),
    })
}

pub async fn distance(Json(request): Json<DistanceRequest>) -> Json<DistanceResponse> {
    Json(DistanceResponse {
        error: false,
        distance_meters: distance_meters(request.from, request.to),
    })
}
