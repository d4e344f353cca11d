//! Variant overlay: turns a species and its selection into what a card shows.

use crate::cache::AbilitySnapshot;
use crate::forms::FormTables;
use crate::models::{dex_number, DisplayEntry, FormOption, ImageStyle, PokemonSelection, Species};

/// Builds artwork URLs from the sprite repository root.
#[derive(Debug, Clone)]
pub struct SpriteTemplates {
    base: String,
}

impl SpriteTemplates {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, style: ImageStyle, shiny: bool, id: u32, suffix: &str) -> String {
        let shiny = if shiny { "shiny/" } else { "" };
        match style {
            ImageStyle::Official => format!(
                "{}/other/official-artwork/{}{}{}.png",
                self.base, shiny, id, suffix
            ),
            ImageStyle::Home => format!("{}/other/home/{}{}{}.png", self.base, shiny, id, suffix),
            ImageStyle::Sprite => format!("{}/{}{}{}.png", self.base, shiny, id, suffix),
        }
    }
}

/// Everything besides the species and its selection that resolution reads.
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    pub tables: &'a FormTables,
    pub sprites: &'a SpriteTemplates,
    pub abilities: &'a AbilitySnapshot,
    pub style: ImageStyle,
}

/// Resolve the displayed id, name, types, abilities and artwork.
///
/// Pure: the species record is only read, and the same inputs always give
/// the same entry. Artwork URLs are not checked; a missing file is the
/// renderer's problem.
pub fn resolve_display(
    species: &Species,
    selection: &PokemonSelection,
    ctx: &ResolveContext<'_>,
) -> DisplayEntry {
    let descriptor = ctx.tables.get(&species.raw_name);
    let active = descriptor.and_then(|d| d.active_variant(selection));

    let (display_id, name, types) = match active {
        Some(variant) => (
            variant.pokedex_id,
            variant.display_name(&species.name),
            variant.types.iter().map(|t| t.to_string()).collect(),
        ),
        None => (
            species.id,
            descriptor
                .and_then(|d| d.base_label)
                .map(String::from)
                .unwrap_or_else(|| species.name.clone()),
            species.types.clone(),
        ),
    };

    // Variant abilities only show once they have been fetched into the cache.
    let abilities = active
        .and_then(|variant| ctx.abilities.get(&variant.pokedex_id))
        .map(|cached| cached.names())
        .unwrap_or_else(|| species.abilities.iter().map(|a| a.name.clone()).collect());

    let image_url = match active {
        None if !selection.shiny => species.images.for_style(ctx.style).to_string(),
        _ => ctx.sprites.url(
            ctx.style,
            selection.shiny,
            display_id,
            active.map_or("", |v| v.sprite_suffix),
        ),
    };

    let forms = descriptor
        .map(|d| {
            d.variants
                .iter()
                .map(|variant| FormOption {
                    slot: variant.slot,
                    key: variant.key.to_string(),
                    form_name: variant.form_name.to_string(),
                    symbol: variant.symbol_path(),
                    active: d.is_active(selection, variant),
                })
                .collect()
        })
        .unwrap_or_default();

    DisplayEntry {
        species_id: species.id,
        display_id,
        number: dex_number(species.id),
        name,
        types,
        abilities,
        image_url,
        shiny: selection.shiny,
        forms,
    }
}
