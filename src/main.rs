use clap::Parser;
use std::sync::Arc;

mod app_context;
mod categories;
mod cli;
mod geo;
mod handoff;
mod health;
mod http;
mod logging;
mod proximity;
mod reports;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init(&args);
    let categories = categories::init(&args.categories);
    let app_context = app_context::init(&args, Arc::new(categories));
    handoff::spawn_janitor(
        app_context.handoffs.clone(),
        handoff::consts::HANDOFF_PURGE_PERIOD,
    );
    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .await
        .expect("Failed to run the HTTP server.");
}
