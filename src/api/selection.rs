//! Selection toggles.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{DisplayEntry, FormSlot, ImageStyle, PokemonSelection};
use crate::pokedex::{resolve_display, ResolveContext};
use crate::AppState;

/// What to flip.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Toggle {
    Shiny,
    Form { slot: FormSlot, key: String },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    pub species_id: u32,
    #[serde(default)]
    pub selection: PokemonSelection,
    #[serde(default)]
    pub image_style: ImageStyle,
    pub toggle: Toggle,
}

/// The new selection and the card it resolves to.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub selection: PokemonSelection,
    pub entry: DisplayEntry,
}

/// POST /api/selection/toggle - Apply one toggle to a species' selection.
pub async fn toggle_selection(
    State(state): State<AppState>,
    Json(request): Json<ToggleRequest>,
) -> ApiResult<ToggleResponse> {
    let snapshot = state.catalog.snapshot().await;
    let species = snapshot.find(request.species_id).ok_or_else(|| {
        AppError::NotFound(format!(
            "Pokémon #{} is not in the catalog",
            request.species_id
        ))
    })?;
    let descriptor = state.tables.get(&species.raw_name);

    let selection = match &request.toggle {
        Toggle::Shiny => PokemonSelection {
            shiny: !request.selection.shiny,
            ..request.selection.clone()
        },
        Toggle::Form { slot, key } => match descriptor {
            Some(d) => d.toggle(&request.selection, *slot, key),
            None => request.selection.clone(),
        },
    };

    if let Some(variant) = descriptor.and_then(|d| d.active_variant(&selection)) {
        state.abilities.prefetch(variant.pokedex_id).await;
    }

    let abilities = state.abilities.snapshot().await;
    let ctx = ResolveContext {
        tables: state.tables,
        sprites: state.sprites.as_ref(),
        abilities: &abilities,
        style: request.image_style,
    };
    let entry = resolve_display(species, &selection, &ctx);

    success(ToggleResponse { selection, entry })
}
