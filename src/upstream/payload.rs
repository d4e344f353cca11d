//! Raw PokéAPI payload shapes and their normalization.
//!
//! Only the fields the service reads are modelled; everything else in the
//! upstream JSON is ignored.

use std::collections::HashSet;

use serde::Deserialize;

use crate::models::{Ability, EvolutionStage, LearnedMove, Species, SpeciesImages, Stat};
use crate::pokedex::format_pokemon_name;

const LEVEL_UP: &str = "level-up";
const ENGLISH: &str = "en";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: u32,
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
pub struct RawPokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<RawTypeSlot>,
    #[serde(default)]
    pub abilities: Vec<RawAbilitySlot>,
    #[serde(default)]
    pub stats: Vec<RawStat>,
    #[serde(default)]
    pub moves: Vec<RawMove>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub sprites: RawSprites,
}

#[derive(Debug, Deserialize)]
pub struct RawTypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct RawAbilitySlot {
    pub slot: u32,
    pub ability: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct RawStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct RawMove {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<RawMoveDetail>,
}

#[derive(Debug, Deserialize)]
pub struct RawMoveDetail {
    pub level_learned_at: u32,
    pub move_learn_method: NamedResource,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawSprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: RawOtherSprites,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawOtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: RawArtwork,
    #[serde(default)]
    pub home: RawArtwork,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawArtwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawAbility {
    #[serde(default)]
    pub effect_entries: Vec<RawEffectEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RawEffectEntry {
    #[serde(default)]
    pub short_effect: String,
    pub language: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct RawSpecies {
    pub evolution_chain: Option<RawUrl>,
}

#[derive(Debug, Deserialize)]
pub struct RawUrl {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct RawEvolutionChain {
    pub chain: RawChainLink,
}

#[derive(Debug, Deserialize)]
pub struct RawChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<RawEvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<RawChainLink>,
}

#[derive(Debug, Deserialize)]
pub struct RawEvolutionDetail {
    pub min_level: Option<u32>,
    pub trigger: Option<NamedResource>,
}

impl RawPokemon {
    /// Convert to the canonical record. `display_name` overrides the
    /// formatted raw name, which variant records need.
    pub fn normalize(self, display_name: Option<&str>) -> Species {
        let name = display_name
            .map(String::from)
            .unwrap_or_else(|| format_pokemon_name(&self.name));

        let mut types = self.types;
        types.sort_by_key(|t| t.slot);

        let mut abilities = self.abilities;
        abilities.sort_by_key(|a| a.slot);

        let images = SpeciesImages {
            official: self.sprites.other.official_artwork.front_default.unwrap_or_default(),
            home: self.sprites.other.home.front_default.unwrap_or_default(),
            sprite: self.sprites.front_default.unwrap_or_default(),
        };

        Species {
            id: self.id,
            raw_name: self.name,
            name,
            types: types.into_iter().map(|t| t.kind.name).collect(),
            abilities: abilities
                .into_iter()
                .map(|a| Ability {
                    name: a.ability.name,
                    description: String::new(),
                })
                .collect(),
            stats: self
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    base_stat: s.base_stat,
                })
                .collect(),
            moves: level_up_moves(self.moves),
            height: self.height,
            weight: self.weight,
            images,
        }
    }
}

/// Level-up moves, one per move, ordered by level then name. The most recent
/// version group's level wins.
fn level_up_moves(moves: Vec<RawMove>) -> Vec<LearnedMove> {
    let mut seen = HashSet::new();
    let mut learned: Vec<LearnedMove> = moves
        .into_iter()
        .filter(|m| seen.insert(m.move_ref.name.clone()))
        .filter_map(|m| {
            let detail = m
                .version_group_details
                .iter()
                .rev()
                .find(|d| d.move_learn_method.name == LEVEL_UP)?;
            Some(LearnedMove {
                name: m.move_ref.name,
                level_learned_at: detail.level_learned_at,
                move_learn_method: LEVEL_UP.to_string(),
            })
        })
        .collect();

    learned.sort_by(|a, b| {
        a.level_learned_at
            .cmp(&b.level_learned_at)
            .then_with(|| a.name.cmp(&b.name))
    });
    learned
}

impl RawAbility {
    /// English short effect, empty if none is published.
    pub fn english_short_effect(&self) -> String {
        self.effect_entries
            .iter()
            .find(|e| e.language.name == ENGLISH)
            .map(|e| e.short_effect.replace(['\n', '\u{c}'], " "))
            .unwrap_or_default()
    }
}

impl RawEvolutionChain {
    /// Depth-first flattening; the root is stage 1.
    pub fn flatten(&self) -> Vec<EvolutionStage> {
        let mut stages = Vec::new();
        push_link(&self.chain, 1, &mut stages);
        stages
    }
}

fn push_link(link: &RawChainLink, stage: u32, out: &mut Vec<EvolutionStage>) {
    let detail = link.evolution_details.first();
    out.push(EvolutionStage {
        name: link.species.name.clone(),
        label: format_pokemon_name(&link.species.name),
        stage,
        min_level: detail.and_then(|d| d.min_level),
        trigger: detail.and_then(|d| d.trigger.as_ref()).map(|t| t.name.clone()),
    });
    for next in &link.evolves_to {
        push_link(next, stage + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn charmander() -> serde_json::Value {
        json!({
            "id": 4,
            "name": "charmander",
            "height": 6,
            "weight": 85,
            "types": [{ "slot": 1, "type": { "name": "fire", "url": "" } }],
            "abilities": [
                { "slot": 3, "is_hidden": true, "ability": { "name": "solar-power", "url": "" } },
                { "slot": 1, "is_hidden": false, "ability": { "name": "blaze", "url": "" } }
            ],
            "stats": [{ "base_stat": 39, "effort": 0, "stat": { "name": "hp", "url": "" } }],
            "moves": [
                {
                    "move": { "name": "scratch", "url": "" },
                    "version_group_details": [
                        { "level_learned_at": 1, "move_learn_method": { "name": "level-up", "url": "" } }
                    ]
                },
                {
                    "move": { "name": "ember", "url": "" },
                    "version_group_details": [
                        { "level_learned_at": 7, "move_learn_method": { "name": "level-up", "url": "" } },
                        { "level_learned_at": 4, "move_learn_method": { "name": "level-up", "url": "" } }
                    ]
                },
                {
                    "move": { "name": "growl", "url": "" },
                    "version_group_details": [
                        { "level_learned_at": 1, "move_learn_method": { "name": "level-up", "url": "" } }
                    ]
                },
                {
                    "move": { "name": "flamethrower", "url": "" },
                    "version_group_details": [
                        { "level_learned_at": 0, "move_learn_method": { "name": "machine", "url": "" } }
                    ]
                }
            ],
            "sprites": {
                "front_default": "https://img/4.png",
                "other": {
                    "official-artwork": { "front_default": "https://img/official/4.png" },
                    "home": { "front_default": null }
                }
            }
        })
    }

    #[test]
    fn test_normalize_pokemon() {
        let raw: RawPokemon = serde_json::from_value(charmander()).unwrap();
        let species = raw.normalize(None);

        assert_eq!(species.id, 4);
        assert_eq!(species.name, "Charmander");
        assert_eq!(species.types, vec!["fire"]);
        let abilities: Vec<&str> = species.abilities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(abilities, vec!["blaze", "solar-power"]);
        assert_eq!(species.stats[0].base_stat, 39);
        assert_eq!(species.images.official, "https://img/official/4.png");
        assert_eq!(species.images.home, "");
        assert_eq!(species.images.sprite, "https://img/4.png");
    }

    #[test]
    fn test_level_up_moves_sorted_and_filtered() {
        let raw: RawPokemon = serde_json::from_value(charmander()).unwrap();
        let moves: Vec<(String, u32)> = raw
            .normalize(None)
            .moves
            .into_iter()
            .map(|m| (m.name, m.level_learned_at))
            .collect();
        assert_eq!(
            moves,
            vec![
                ("growl".to_string(), 1),
                ("scratch".to_string(), 1),
                ("ember".to_string(), 4),
            ]
        );
    }

    #[test]
    fn test_display_name_override_and_missing_sprites() {
        let raw: RawPokemon = serde_json::from_value(json!({
            "id": 10034,
            "name": "charizard-mega-x"
        }))
        .unwrap();
        let species = raw.normalize(Some("Charizard (Mega X)"));
        assert_eq!(species.name, "Charizard (Mega X)");
        assert_eq!(species.raw_name, "charizard-mega-x");
        assert!(species.types.is_empty());
        assert_eq!(species.images, SpeciesImages::default());
    }

    #[test]
    fn test_english_short_effect() {
        let raw: RawAbility = serde_json::from_value(json!({
            "effect_entries": [
                { "short_effect": "Erhöht Feuer.", "language": { "name": "de" } },
                { "short_effect": "Strengthens fire moves\nin a pinch.", "language": { "name": "en" } }
            ]
        }))
        .unwrap();
        assert_eq!(raw.english_short_effect(), "Strengthens fire moves in a pinch.");

        let empty: RawAbility = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.english_short_effect(), "");
    }

    #[test]
    fn test_flatten_branching_chain() {
        let raw: RawEvolutionChain = serde_json::from_value(json!({
            "chain": {
                "species": { "name": "oddish" },
                "evolution_details": [],
                "evolves_to": [{
                    "species": { "name": "gloom" },
                    "evolution_details": [{ "min_level": 21, "trigger": { "name": "level-up" } }],
                    "evolves_to": [
                        {
                            "species": { "name": "vileplume" },
                            "evolution_details": [{ "min_level": null, "trigger": { "name": "use-item" } }],
                            "evolves_to": []
                        },
                        {
                            "species": { "name": "bellossom" },
                            "evolution_details": [{ "trigger": { "name": "use-item" } }],
                            "evolves_to": []
                        }
                    ]
                }]
            }
        }))
        .unwrap();

        let stages = raw.flatten();
        let names: Vec<(&str, u32)> = stages.iter().map(|s| (s.name.as_str(), s.stage)).collect();
        assert_eq!(
            names,
            vec![("oddish", 1), ("gloom", 2), ("vileplume", 3), ("bellossom", 3)]
        );
        assert_eq!(stages[0].trigger, None);
        assert_eq!(stages[1].min_level, Some(21));
        assert_eq!(stages[2].trigger.as_deref(), Some("use-item"));
        assert_eq!(stages[1].label, "Gloom");
    }
}
