//! Raw PokéAPI pass-through.
//!
//! Keeps its own `{ "error": ... }` body instead of the envelope so existing
//! callers of the route keep working.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ProxyQuery {
    pub q: Option<String>,
}

/// GET /api/pokemon?q= - One Pokémon by name or id, or the first page of the
/// list when `q` is missing or empty.
pub async fn proxy_pokemon(
    State(state): State<AppState>,
    Query(params): Query<ProxyQuery>,
) -> Response {
    let query = params.q.as_deref().filter(|q| !q.is_empty());

    match state
        .client
        .raw_pokemon(query, state.config.proxy_list_limit)
        .await
    {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) if e.is_status() => {
            tracing::debug!("Proxy lookup for {:?} failed: {}", query, e);
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Pokémon not found" })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!("Proxy request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Something went wrong" })),
            )
                .into_response()
        }
    }
}
