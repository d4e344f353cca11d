//! Search, type and generation filters plus list ordering.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::models::{SortOrder, Species};

use super::assets::POKEMON_TYPES;

/// Named national-dex ranges used by the generation filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Generation {
    Kanto,
    Johto,
    Hoenn,
    Sinnoh,
    Unova,
    Kalos,
    Alola,
    Galar,
    Paldea,
}

impl Generation {
    pub const ALL: [Generation; 9] = [
        Generation::Kanto,
        Generation::Johto,
        Generation::Hoenn,
        Generation::Sinnoh,
        Generation::Unova,
        Generation::Kalos,
        Generation::Alola,
        Generation::Galar,
        Generation::Paldea,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Generation::Kanto => "Kanto",
            Generation::Johto => "Johto",
            Generation::Hoenn => "Hoenn",
            Generation::Sinnoh => "Sinnoh",
            Generation::Unova => "Unova",
            Generation::Kalos => "Kalos",
            Generation::Alola => "Alola",
            Generation::Galar => "Galar",
            Generation::Paldea => "Paldea",
        }
    }

    pub fn range(&self) -> RangeInclusive<u32> {
        match self {
            Generation::Kanto => 1..=151,
            Generation::Johto => 152..=251,
            Generation::Hoenn => 252..=386,
            Generation::Sinnoh => 387..=493,
            Generation::Unova => 494..=649,
            Generation::Kalos => 650..=721,
            Generation::Alola => 722..=809,
            Generation::Galar => 810..=898,
            Generation::Paldea => 899..=1025,
        }
    }

    /// Case-insensitive lookup by bucket name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(name.trim()))
    }

    #[cfg(test)]
    pub fn containing(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.range().contains(&id))
    }
}

/// Lowercase, treat `-` and `_` as spaces, trim.
pub fn normalize_search(term: &str) -> String {
    term.to_lowercase().replace(['-', '_'], " ").trim().to_string()
}

/// Filters derived from the view state. Unknown type or generation names
/// disable that filter instead of failing.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub term: String,
    pub pokemon_type: Option<&'static str>,
    pub generation: Option<Generation>,
}

impl ListFilter {
    pub fn new(search: &str, pokemon_type: Option<&str>, generation: Option<&str>) -> Self {
        let pokemon_type = pokemon_type.and_then(|wanted| {
            let wanted = wanted.trim().to_lowercase();
            POKEMON_TYPES.iter().copied().find(|t| *t == wanted)
        });
        Self {
            term: normalize_search(search),
            pokemon_type,
            generation: generation.and_then(Generation::from_name),
        }
    }

    /// Name, number or base ability contains the search term.
    pub fn matches_text(&self, species: &Species) -> bool {
        if self.term.is_empty() {
            return true;
        }
        normalize_search(&species.raw_name).contains(&self.term)
            || species.id.to_string().contains(&self.term)
            || species
                .abilities
                .iter()
                .any(|a| normalize_search(&a.name).contains(&self.term))
    }

    pub fn matches_generation(&self, species: &Species) -> bool {
        self.generation
            .map_or(true, |g| g.range().contains(&species.id))
    }

    /// Checked against the resolved types, so an active variant's type
    /// override decides membership.
    pub fn matches_type(&self, displayed_types: &[String]) -> bool {
        self.pokemon_type
            .map_or(true, |wanted| displayed_types.iter().any(|t| t == wanted))
    }
}

/// Case-insensitive comparison first, exact comparison as tie-breaker.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Stable sort of species-keyed rows.
pub fn sort_rows<T>(rows: &mut [(&Species, T)], order: SortOrder) {
    match order {
        SortOrder::NumberAsc => rows.sort_by(|(a, _), (b, _)| a.id.cmp(&b.id)),
        SortOrder::NumberDesc => rows.sort_by(|(a, _), (b, _)| b.id.cmp(&a.id)),
        SortOrder::NameAsc => rows.sort_by(|(a, _), (b, _)| compare_names(&a.name, &b.name)),
        SortOrder::NameDesc => rows.sort_by(|(a, _), (b, _)| compare_names(&b.name, &a.name)),
    }
}
