//! Album route handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, MethodRouter},
    Json,
};
use std::time::Instant;

use crate::encoding::{Encoded, Format, Payload};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::store::Album;

/// `GET /{format}/albums` for one format.
pub fn list_route(format: Format) -> MethodRouter<AppState> {
    get(move |state: State<AppState>| list_albums(state, format))
}

/// Every album in the requested encoding.
pub async fn list_albums(
    State(state): State<AppState>,
    format: Format,
) -> Result<Encoded, ApiError> {
    let start = Instant::now();
    let result = state
        .dispatcher
        .render_all(format, &state.store)
        .await
        .map_err(ApiError::from);

    if let Ok(encoded) = &result {
        tracing::debug!(format = %format, bytes = encoded.body.len(), "Rendered album list");
    }
    observe(format.path_segment(), StatusCode::OK, &result, start);
    result
}

/// One album as JSON, or 404.
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Encoded, ApiError> {
    let start = Instant::now();
    let result = match state.store.find_by_id(&id).await {
        Some(album) => state
            .dispatcher
            .render(Format::Json, Payload::One(&album))
            .map_err(ApiError::from),
        None => {
            tracing::debug!(id = %id, "Album not found");
            Err(ApiError::NotFound)
        }
    };
    observe("get_album", StatusCode::OK, &result, start);
    result
}

/// Decode a JSON album, append it, and echo it back with 201.
pub async fn create_album(
    State(state): State<AppState>,
    payload: Result<Json<Album>, JsonRejection>,
) -> Result<(StatusCode, Encoded), ApiError> {
    let start = Instant::now();
    let result = append_album(&state, payload).await;
    observe("create_album", StatusCode::CREATED, &result, start);
    result.map(|encoded| (StatusCode::CREATED, encoded))
}

async fn append_album(
    state: &AppState,
    payload: Result<Json<Album>, JsonRejection>,
) -> Result<Encoded, ApiError> {
    let Json(album) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected album payload");
        ApiError::from(rejection)
    })?;

    let encoded = state
        .dispatcher
        .render(Format::Json, Payload::One(&album))?;
    tracing::info!(id = %album.id, title = %album.title, "Album created");
    state.store.append(album).await;
    Ok(encoded)
}

/// Liveness plus the current store size.
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "albums": state.store.len().await,
    }))
}

fn observe<T>(
    route: &'static str,
    ok_status: StatusCode,
    result: &Result<T, ApiError>,
    start: Instant,
) {
    let status = match result {
        Ok(_) => ok_status,
        Err(e) => e.status(),
    };
    metrics::record_request(route, status.as_u16(), start);
}
