use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::{cors, middleware};
use crate::{geo, handoff, health, proximity, reports};
use axum::{
    routing::{any, get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let geo_routes = Router::new()
        .route("/decode", get(geo::handlers::decode_point))
        .route("/distance", post(geo::handlers::distance));
    let reports_routes = Router::new()
        .route("/", post(reports::handlers::create))
        .route("/nearby", get(reports::handlers::nearby))
        .route("/:report-id", get(reports::handlers::get));
    let proximity_routes = Router::new().route("/ws", any(proximity::handlers::ws));
    let handoff_routes = Router::new()
        .route("/", post(handoff::handlers::put))
        .route("/:token", get(handoff::handlers::take));

    Router::new()
        .nest("/health", health_routes)
        .nest("/geo", geo_routes)
        .nest("/reports", reports_routes)
        .nest("/proximity", proximity_routes)
        .nest("/handoff", handoff_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(middleware::tracing))
}
