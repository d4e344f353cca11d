//! Display-name formatting for raw API slugs.

/// Raw names whose display form is not plain title case.
const LOCAL_NAMES: &[(&str, &str)] = &[
    ("mr-mime", "Mr. Mime"),
    ("mime-jr", "Mime Jr."),
    ("mr-rime", "Mr. Rime"),
    ("type-null", "Type: Null"),
    ("jangmo-o", "Jangmo-o"),
    ("hakamo-o", "Hakamo-o"),
    ("kommo-o", "Kommo-o"),
    ("porygon-z", "Porygon-Z"),
    ("ho-oh", "Ho-Oh"),
    ("wo-chien", "Wo-Chien"),
    ("chien-pao", "Chien-Pao"),
    ("ting-lu", "Ting-Lu"),
    ("chi-yu", "Chi-Yu"),
    ("urshifu-single-strike", "Urshifu (Single Strike)"),
    ("urshifu-rapid-strike", "Urshifu (Rapid Strike)"),
    ("zamazenta-crowned", "Zamazenta (Crowned)"),
    ("zacian-crowned", "Zacian (Crowned)"),
    ("giratina-origin", "Giratina (Origin)"),
    ("darmanitan-standard", "Darmanitan"),
    ("darmanitan-zen", "Darmanitan (Zen)"),
    ("farfetchd", "Farfetch’d"),
    ("sirfetchd", "Sirfetch’d"),
    ("nidoran-f", "Nidoran♀"),
    ("nidoran-m", "Nidoran♂"),
    ("flabebe", "Flabébé"),
];

/// Format a raw species name for display.
///
/// Irregular names come from a fixed table; everything else is split on `-`
/// with each part capitalized (`iron-treads` becomes `Iron Treads`).
pub fn format_pokemon_name(raw: &str) -> String {
    LOCAL_NAMES
        .iter()
        .find(|(name, _)| *name == raw)
        .map(|(_, display)| display.to_string())
        .unwrap_or_else(|| title_case(raw))
}

/// Format an ability slug (`solar-power`) as `Solar Power`.
pub fn format_ability_name(raw: &str) -> String {
    title_case(raw)
}

fn title_case(raw: &str) -> String {
    raw.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
