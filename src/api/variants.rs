//! Variant ability lookups.

use axum::extract::{Path, State};
use serde::Serialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantAbilitiesResponse {
    pub variant_id: u32,
    pub abilities: Vec<String>,
    pub known: bool,
}

/// GET /api/variants/:id/abilities - Cached abilities of a variant, fetched
/// on first request. A failed lookup answers with the placeholder. Ids outside
/// the form tables are rejected before they reach the cache.
pub async fn get_variant_abilities(
    State(state): State<AppState>,
    Path(variant_id): Path<u32>,
) -> ApiResult<VariantAbilitiesResponse> {
    if !state.tables.has_variant_id(variant_id) {
        return Err(AppError::NotFound(format!(
            "#{} is not a known form variant",
            variant_id
        )));
    }

    let cached = state.abilities.get_or_fetch(variant_id).await;

    success(VariantAbilitiesResponse {
        variant_id,
        abilities: cached.names(),
        known: cached.is_known(),
    })
}
