//! List view, filter options and the detail panel.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    dex_number, AbilityDetail, DisplayEntry, ImageStyle, PokemonSelection, SortOrder,
    SpeciesDetail, ViewState,
};
use crate::pokedex::{
    active_variant_ids, available_types, style_icon_path, type_color, type_icon_path,
    visible_entries, Generation, ResolveContext,
};
use crate::upstream::UpstreamError;
use crate::AppState;

/// Resolved list for one view state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub entries: Vec<DisplayEntry>,
    pub matched: usize,
    pub total: usize,
}

/// POST /api/pokedex/view - Filter, sort and resolve the catalog.
pub async fn view_pokedex(
    State(state): State<AppState>,
    Json(view): Json<ViewState>,
) -> ApiResult<ViewResponse> {
    let snapshot = state.catalog.snapshot().await;

    for variant_id in active_variant_ids(&snapshot.species, &view, state.tables) {
        state.abilities.prefetch(variant_id).await;
    }

    let abilities = state.abilities.snapshot().await;
    let ctx = ResolveContext {
        tables: state.tables,
        sprites: state.sprites.as_ref(),
        abilities: &abilities,
        style: view.image_style,
    };
    let entries = visible_entries(&snapshot.species, &view, &ctx);

    success(ViewResponse {
        matched: entries.len(),
        total: snapshot.species.len(),
        entries,
    })
}

#[derive(Debug, Serialize)]
pub struct TypeOption {
    pub name: &'static str,
    pub icon: String,
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
pub struct GenerationOption {
    pub name: &'static str,
    pub first: u32,
    pub last: u32,
}

#[derive(Debug, Serialize)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StyleOption {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersResponse {
    pub types: Vec<TypeOption>,
    pub generations: Vec<GenerationOption>,
    pub sort_orders: Vec<SortOption>,
    pub image_styles: Vec<StyleOption>,
}

/// GET /api/pokedex/filters - Options for the filter bar.
pub async fn list_filters(State(state): State<AppState>) -> ApiResult<FiltersResponse> {
    let snapshot = state.catalog.snapshot().await;

    success(FiltersResponse {
        types: available_types(&snapshot.species)
            .into_iter()
            .map(|name| TypeOption {
                name,
                icon: type_icon_path(name),
                color: type_color(name),
            })
            .collect(),
        generations: Generation::ALL
            .iter()
            .map(|g| GenerationOption {
                name: g.name(),
                first: *g.range().start(),
                last: *g.range().end(),
            })
            .collect(),
        sort_orders: SortOrder::ALL
            .iter()
            .map(|s| SortOption {
                value: s.as_str(),
                label: s.label(),
            })
            .collect(),
        image_styles: ImageStyle::ALL
            .iter()
            .map(|s| StyleOption {
                value: s.as_str(),
                label: s.title(),
                icon: style_icon_path(*s),
            })
            .collect(),
    })
}

fn variant_error(name: &str, err: UpstreamError) -> AppError {
    match err {
        UpstreamError::NotFound(_) => {
            AppError::NotFound(format!("{} data not found in PokéAPI.", name))
        }
        other => {
            tracing::warn!("Loading {} failed: {}", name, other);
            AppError::Upstream(format!("Failed to load {} data.", name))
        }
    }
}

/// GET /api/pokedex/:id - Detail panel for a species under a selection.
pub async fn get_pokemon_detail(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Query(selection): Query<PokemonSelection>,
) -> ApiResult<SpeciesDetail> {
    let snapshot = state.catalog.snapshot().await;
    let species = snapshot
        .find(id)
        .ok_or_else(|| AppError::NotFound(format!("Pokémon #{} is not in the catalog", id)))?;

    let active = state
        .tables
        .get(&species.raw_name)
        .and_then(|d| d.active_variant(&selection));

    let mut pokemon = match active {
        Some(variant) => {
            let name = variant.display_name(&species.name);
            state
                .client
                .pokemon(&variant.pokedex_id.to_string(), Some(&name))
                .await
                .map_err(|e| variant_error(&name, e))?
        }
        None => species.clone(),
    };

    for ability in &mut pokemon.abilities {
        match state.client.ability_description(&ability.name).await {
            Ok(description) => ability.description = description,
            Err(e) => tracing::debug!("No description for {}: {}", ability.name, e),
        }
    }

    let evolution_chain = state
        .client
        .evolution_chain(species.id)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Evolution chain for #{} unavailable: {}", species.id, e);
            Vec::new()
        });

    success(SpeciesDetail {
        species_id: species.id,
        number: dex_number(species.id),
        abilities: pokemon.abilities.iter().map(AbilityDetail::from_ability).collect(),
        evolution_chain,
        alternate_forms: state
            .tables
            .alternate_forms(&species.raw_name)
            .iter()
            .map(|f| f.to_string())
            .collect(),
        pokemon,
    })
}
