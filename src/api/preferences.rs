//! Persisted UI preferences.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::db::DarkModePreference;
use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DarkModeRequest {
    pub enabled: bool,
}

/// GET /api/preferences/dark-mode
pub async fn get_dark_mode(State(state): State<AppState>) -> ApiResult<DarkModePreference> {
    success(state.repo.get_dark_mode().await?)
}

/// PUT /api/preferences/dark-mode
pub async fn set_dark_mode(
    State(state): State<AppState>,
    payload: Result<Json<DarkModeRequest>, JsonRejection>,
) -> ApiResult<DarkModePreference> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    success(state.repo.set_dark_mode(request.enabled).await?)
}
