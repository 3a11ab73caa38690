mod api;
mod config;
mod dto;
mod state;

use crate::{config::ServerConfig, state::AppState};
use axum::routing::{get, post};
use locmap::prelude::*;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let config = ServerConfig::from_env();
    let geocoder = match Nominatim::new(config.geocoder()) {
        Ok(geocoder) => geocoder,
        Err(err) => {
            error!("Failed to build geocoder: {err}");
            std::process::exit(1);
        }
    };
    let view = LocationView::new(config.view());
    info!(
        "{} -> {}: {}",
        view.start().label,
        view.destination().label,
        view.distance_text().unwrap_or_default()
    );
    let state = Arc::new(AppState::new(view, geocoder));

    let app = axum::Router::new()
        .route("/view", get(api::view))
        .route("/scene", get(api::scene))
        .route("/label", post(api::label))
        .route("/search", post(api::search))
        .route("/swap", post(api::swap))
        .route("/current-location", post(api::current_location))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", config.port);
            std::process::exit(1);
        }
    };
    info!("Listening to port {}", config.port);
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
