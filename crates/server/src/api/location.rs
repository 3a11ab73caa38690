use crate::{dto::ViewDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use locmap::{prelude::*, view::locate};
use std::{collections::HashMap, sync::Arc};
use tracing::error;

/// The browser posts its own position; a request with neither `lat` nor
/// `lon` means the client has no geolocation capability.
pub async fn current_location(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let position = position_from_params(&params)?;
    let labelling = state
        .view
        .read()
        .await
        .config()
        .current_location_label
        .clone();

    let located = match position {
        Some(coordinate) => locate(&FixedLocator(coordinate), &state.geocoder, &labelling).await,
        None => locate(&UnsupportedLocator, &state.geocoder, &labelling).await,
    };

    match located {
        Ok(location) => {
            let mut view = state.view.write().await;
            view.apply_device_location(location);
            Ok(Json(ViewDto::from(&view)).into_response())
        }
        Err(alert) => Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(alert)).into_response()),
    }
}

fn position_from_params(
    params: &HashMap<String, String>,
) -> Result<Option<Coordinate>, StatusCode> {
    let (lat, lon) = match (params.get("lat"), params.get("lon")) {
        (Some(lat), Some(lon)) => (lat, lon),
        (None, None) => return Ok(None),
        _ => return Err(StatusCode::BAD_REQUEST),
    };
    let latitude: f64 = lat.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
    let longitude: f64 = lon.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
    let coordinate = Coordinate::new(latitude, longitude);
    if !coordinate.is_valid() {
        error!("Rejected device position out of range: {coordinate}");
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(Some(coordinate))
}

#[tokio::test]
async fn current_location_test() {
    let state = crate::state::test_state();
    let response = current_location(
        super::query(&[("lat", "28.6139"), ("lon", "77.209")]),
        State(state.clone()),
    )
    .await
    .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let view = state.view.read().await;
    assert_eq!(view.start().label, locmap::view::CURRENT_LOCATION);
    assert_eq!(view.start().coordinate, Coordinate::new(28.6139, 77.209));
    assert_eq!(view.destination().label, "Pune");
}

#[tokio::test]
async fn current_location_unsupported_test() {
    let state = crate::state::test_state();
    let before = state.view.read().await.start().clone();

    let response = current_location(super::query(&[]), State(state.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = super::body_text(response).await;
    assert!(body.contains(locmap::view::UNSUPPORTED_MESSAGE));
    assert_eq!(state.view.read().await.start(), &before);
}

#[tokio::test]
async fn current_location_bad_position_test() {
    let state = crate::state::test_state();
    let before = state.view.read().await.start().clone();

    let requests: [&[(&str, &str)]; 4] = [
        &[("lat", "91.0"), ("lon", "72.0")],
        &[("lat", "19.0"), ("lon", "-180.5")],
        &[("lat", "north"), ("lon", "72.0")],
        &[("lat", "19.0")],
    ];
    for pairs in requests {
        let result = current_location(super::query(pairs), State(state.clone())).await;
        assert!(matches!(result, Err(StatusCode::BAD_REQUEST)), "{pairs:?}");
    }
    assert_eq!(state.view.read().await.start(), &before);
}
