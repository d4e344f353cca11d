//! Pure list-view logic: naming, filtering, ordering and variant resolution.
//!
//! Nothing in here performs I/O. Handlers take a catalog snapshot and an
//! ability-cache snapshot and hand them to [`visible_entries`].

mod assets;
mod filter;
mod names;
mod resolve;

pub use assets::{style_icon_path, type_color, type_icon_path, POKEMON_TYPES};
pub use filter::Generation;
pub use names::{format_ability_name, format_pokemon_name};
pub use resolve::{resolve_display, ResolveContext, SpriteTemplates};

use crate::forms::FormTables;
use crate::models::{DisplayEntry, Species, ViewState};

use filter::{sort_rows, ListFilter};

/// The filtered, ordered and resolved list for one view state.
///
/// Text and generation filters look at the base record, the type filter at
/// the resolved types so that an active variant's override counts.
pub fn visible_entries(
    species: &[Species],
    view: &ViewState,
    ctx: &ResolveContext<'_>,
) -> Vec<DisplayEntry> {
    let filter = ListFilter::new(
        &view.search,
        view.selected_type.as_deref(),
        view.generation.as_deref(),
    );

    let mut rows: Vec<(&Species, DisplayEntry)> = species
        .iter()
        .filter(|s| filter.matches_generation(s) && filter.matches_text(s))
        .map(|s| (s, resolve_display(s, view.selection(s.id), ctx)))
        .filter(|(_, entry)| filter.matches_type(&entry.types))
        .collect();

    sort_rows(&mut rows, view.sort);
    rows.into_iter().map(|(_, entry)| entry).collect()
}

/// Pokédex ids of every variant the view currently shows instead of its base.
pub fn active_variant_ids(species: &[Species], view: &ViewState, tables: &FormTables) -> Vec<u32> {
    species
        .iter()
        .filter_map(|s| {
            tables
                .get(&s.raw_name)
                .and_then(|d| d.active_variant(view.selection(s.id)))
                .map(|v| v.pokedex_id)
        })
        .collect()
}

/// Types that occur in the loaded catalog, in filter order.
pub fn available_types(species: &[Species]) -> Vec<&'static str> {
    POKEMON_TYPES
        .into_iter()
        .filter(|t| species.iter().any(|s| s.types.iter().any(|own| own == t)))
        .collect()
}
