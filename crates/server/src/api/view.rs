use crate::{dto::ViewDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use locmap::prelude::*;
use std::{collections::HashMap, sync::Arc};

pub async fn view(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let view = state.view.read().await;
    Ok(Json(ViewDto::from(&view)).into_response())
}

pub async fn scene(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let view = state.view.read().await;
    Ok(Json(view.scene()).into_response())
}

pub async fn label(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let side = side_from_str(params.get("side").ok_or(StatusCode::BAD_REQUEST)?)?;
    let value = params.get("value").ok_or(StatusCode::BAD_REQUEST)?;
    let mut view = state.view.write().await;
    view.set_label(side, value.as_str());
    Ok(Json(ViewDto::from(&view)).into_response())
}

pub async fn swap(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let mut view = state.view.write().await;
    view.swap();
    Ok(Json(ViewDto::from(&view)).into_response())
}

fn side_from_str(str: &str) -> Result<Side, StatusCode> {
    match str {
        "start" => Ok(Side::Start),
        "destination" => Ok(Side::Destination),
        _ => Err(StatusCode::BAD_REQUEST),
    }
}

#[tokio::test]
async fn label_test() {
    let state = crate::state::test_state();
    let response = label(
        super::query(&[("side", "destination"), ("value", "Goa")]),
        State(state.clone()),
    )
    .await
    .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let view = state.view.read().await;
    assert_eq!(view.label(Side::Destination), "Goa");
    assert_eq!(view.label(Side::Start), "Mumbai");
}

#[tokio::test]
async fn label_bad_request_test() {
    let state = crate::state::test_state();
    let requests: [&[(&str, &str)]; 3] = [
        &[("side", "middle"), ("value", "Goa")],
        &[("value", "Goa")],
        &[("side", "start")],
    ];
    for pairs in requests {
        let result = label(super::query(pairs), State(state.clone())).await;
        assert!(matches!(result, Err(StatusCode::BAD_REQUEST)), "{pairs:?}");
    }
    let view = state.view.read().await;
    assert_eq!(view.label(Side::Start), "Mumbai");
    assert_eq!(view.label(Side::Destination), "Pune");
}

#[tokio::test]
async fn swap_test() {
    let state = crate::state::test_state();
    let response = swap(State(state.clone())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = super::body_text(response).await;
    let start = body.find("\"start\"").unwrap();
    let destination = body.find("\"destination\"").unwrap();
    assert!(body[start..destination].contains("Pune"));
    assert!(body[destination..].contains("Mumbai"));
    assert!(body.contains("Distance: 120.15 km"));

    let view = state.view.read().await;
    assert_eq!(view.start().label, "Pune");
    assert_eq!(view.destination().label, "Mumbai");
}
