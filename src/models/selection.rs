//! UI selection state sent by the presentation layer.
//!
//! The server keeps no selection state of its own: every request carries the
//! snapshot it wants resolved.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ImageStyle;

/// Independent selection categories a species' variants live in, ordered by
/// resolution priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormSlot {
    Mega,
    Regional,
    Special,
}

impl FormSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormSlot::Mega => "mega",
            FormSlot::Regional => "regional",
            FormSlot::Special => "special",
        }
    }
}

/// Per-species toggles. Each slot holds at most one active key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonSelection {
    #[serde(default)]
    pub shiny: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mega: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regional: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<String>,
}

static NO_SELECTION: PokemonSelection = PokemonSelection {
    shiny: false,
    mega: None,
    regional: None,
    special: None,
};

impl PokemonSelection {
    pub fn slot(&self, slot: FormSlot) -> Option<&str> {
        match slot {
            FormSlot::Mega => self.mega.as_deref(),
            FormSlot::Regional => self.regional.as_deref(),
            FormSlot::Special => self.special.as_deref(),
        }
    }

    pub fn set_slot(&mut self, slot: FormSlot, key: Option<String>) {
        match slot {
            FormSlot::Mega => self.mega = key,
            FormSlot::Regional => self.regional = key,
            FormSlot::Special => self.special = key,
        }
    }
}

/// Sort orders offered by the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "number-asc")]
    NumberAsc,
    #[serde(rename = "number-desc")]
    NumberDesc,
    #[serde(rename = "name-asc")]
    NameAsc,
    #[serde(rename = "name-desc")]
    NameDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::NumberAsc,
        SortOrder::NumberDesc,
        SortOrder::NameAsc,
        SortOrder::NameDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::NumberAsc => "number-asc",
            SortOrder::NumberDesc => "number-desc",
            SortOrder::NameAsc => "name-asc",
            SortOrder::NameDesc => "name-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::NumberAsc => "Sort by Number (1-1025)",
            SortOrder::NumberDesc => "Sort by Number (1025-1)",
            SortOrder::NameAsc => "Sort by Name (A-Z)",
            SortOrder::NameDesc => "Sort by Name (Z-A)",
        }
    }
}

/// Full list-view state: filters, ordering, artwork style and the per-species
/// toggles keyed by base species id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub selected_type: Option<String>,
    #[serde(default)]
    pub generation: Option<String>,
    #[serde(default)]
    pub sort: SortOrder,
    #[serde(default)]
    pub image_style: ImageStyle,
    #[serde(default)]
    pub selections: BTreeMap<u32, PokemonSelection>,
}

impl ViewState {
    /// Selection for a species, or the all-off selection if none was sent.
    pub fn selection(&self, species_id: u32) -> &PokemonSelection {
        self.selections.get(&species_id).unwrap_or(&NO_SELECTION)
    }
}
