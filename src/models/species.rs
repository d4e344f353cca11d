//! Canonical species record produced at the fetch boundary.

use serde::{Deserialize, Serialize};

/// One ability of a species. The description is only filled in for the
/// detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A named base stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub name: String,
    pub base_stat: u32,
}

/// A move learned by level-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnedMove {
    pub name: String,
    pub level_learned_at: u32,
    pub move_learn_method: String,
}

/// Artwork URLs for the three image styles. Missing upstream values are
/// stored as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesImages {
    pub official: String,
    pub home: String,
    pub sprite: String,
}

impl SpeciesImages {
    pub fn for_style(&self, style: ImageStyle) -> &str {
        match style {
            ImageStyle::Official => &self.official,
            ImageStyle::Home => &self.home,
            ImageStyle::Sprite => &self.sprite,
        }
    }
}

/// Artwork style selected in the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    Official,
    #[default]
    Home,
    Sprite,
}

impl ImageStyle {
    pub const ALL: [ImageStyle; 3] = [ImageStyle::Home, ImageStyle::Official, ImageStyle::Sprite];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageStyle::Official => "official",
            ImageStyle::Home => "home",
            ImageStyle::Sprite => "sprite",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ImageStyle::Official => "Official Artwork",
            ImageStyle::Home => "Home Artwork",
            ImageStyle::Sprite => "Sprite Artwork",
        }
    }
}

/// A species as loaded from the species API. Never mutated after
/// normalization; form selections are overlaid at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub id: u32,
    pub raw_name: String,
    pub name: String,
    pub types: Vec<String>,
    pub abilities: Vec<Ability>,
    pub stats: Vec<Stat>,
    pub moves: Vec<LearnedMove>,
    pub height: u32,
    pub weight: u32,
    pub images: SpeciesImages,
}
