use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use futures_util::future;
use locmap::prelude::*;
use std::sync::Arc;

/// Resolves both labels without holding the view lock; each side is written
/// as soon as its own lookup completes. Last completed write wins: a swap or
/// label edit landing mid-search can pair a resolved coordinate with the
/// other label.
pub async fn search(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let (start_label, destination_label) = {
        let view = state.view.read().await;
        (
            view.label(Side::Start).to_string(),
            view.label(Side::Destination).to_string(),
        )
    };
    let (start, destination) = future::join(
        resolve_side(&state, Side::Start, &start_label),
        resolve_side(&state, Side::Destination, &destination_label),
    )
    .await;
    Ok(Json(SearchReport { start, destination }).into_response())
}

async fn resolve_side(state: &AppState, side: Side, label: &str) -> Resolution {
    let outcome = state.geocoder.resolve(label).await;
    state.view.write().await.apply_resolution(side, outcome)
}
