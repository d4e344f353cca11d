//! Static asset paths and type presentation data.

use crate::models::ImageStyle;

/// The eighteen types, in the order the type filter lists them.
pub const POKEMON_TYPES: [&str; 18] = [
    "fire", "water", "grass", "electric", "ice", "ground", "rock", "steel", "flying", "fighting",
    "bug", "dark", "psychic", "ghost", "normal", "poison", "fairy", "dragon",
];

/// Badge colour for a type; unknown types get a neutral grey.
pub fn type_color(pokemon_type: &str) -> &'static str {
    match pokemon_type {
        "normal" => "#828282",
        "fire" => "#e4613e",
        "water" => "#3099e1",
        "electric" => "#dfbc28",
        "grass" => "#439837",
        "ice" => "#47c8c8",
        "fighting" => "#e49021",
        "poison" => "#9354cb",
        "ground" => "#a4733c",
        "flying" => "#74aad0",
        "psychic" => "#e96c8c",
        "bug" => "#9f9f28",
        "rock" => "#a9a481",
        "ghost" => "#6f4570",
        "dragon" => "#576fbc",
        "dark" => "#4f4747",
        "steel" => "#74b0cb",
        "fairy" => "#e18ce1",
        _ => "#4b5563",
    }
}

pub fn type_icon_path(pokemon_type: &str) -> String {
    format!("/icons/{}.svg", pokemon_type)
}

pub fn style_icon_path(style: ImageStyle) -> String {
    format!("/{}-artwork.png", style.as_str())
}
