//! Resolved display models returned to the presentation layer.

use serde::{Deserialize, Serialize};

use super::{Ability, FormSlot, Species};

/// A form toggle offered for one species card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOption {
    pub slot: FormSlot,
    pub key: String,
    pub form_name: String,
    pub symbol: String,
    pub active: bool,
}

/// What a card shows for one species under the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEntry {
    /// Base species id; the key selections are stored under.
    pub species_id: u32,
    /// Id of the shown form, used for artwork and variant lookups.
    pub display_id: u32,
    /// Dex label of the base species, kept while a variant is shown.
    pub number: String,
    pub name: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub image_url: String,
    pub shiny: bool,
    pub forms: Vec<FormOption>,
}

/// One stage of an evolution chain, flattened depth-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionStage {
    pub name: String,
    pub label: String,
    pub stage: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
}

/// Everything the detail panel shows for one species or active variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesDetail {
    pub species_id: u32,
    pub number: String,
    pub pokemon: Species,
    pub abilities: Vec<AbilityDetail>,
    pub evolution_chain: Vec<EvolutionStage>,
    pub alternate_forms: Vec<String>,
}

/// Ability with its display label and English description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityDetail {
    pub name: String,
    pub label: String,
    pub description: String,
}

impl AbilityDetail {
    pub fn from_ability(ability: &Ability) -> Self {
        Self {
            name: ability.name.clone(),
            label: crate::pokedex::format_ability_name(&ability.name),
            description: ability.description.clone(),
        }
    }
}

/// Zero-padded dex number label, e.g. `#0025`.
pub fn dex_number(id: u32) -> String {
    format!("#{:04}", id)
}
