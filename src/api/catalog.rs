//! Catalog status and refresh.

use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{success, ApiResult};
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub count: usize,
    pub loaded_at: Option<DateTime<Utc>>,
}

/// GET /api/catalog - Size and load time of the current catalog.
pub async fn get_catalog(State(state): State<AppState>) -> ApiResult<CatalogInfo> {
    let snapshot = state.catalog.snapshot().await;

    success(CatalogInfo {
        count: snapshot.species.len(),
        loaded_at: snapshot.loaded_at,
    })
}

/// POST /api/catalog/refresh - Reload the catalog from PokéAPI.
pub async fn refresh_catalog(State(state): State<AppState>) -> ApiResult<CatalogInfo> {
    state.catalog.load().await?;
    get_catalog(State(state)).await
}
