//! Builtin variant data, keyed by the species API's raw names.

use crate::models::FormSlot;

use super::FormVariant;

/// Species with a single mega or primal form: (raw name, form name, id, types).
pub(super) const MEGA_EVOLUTIONS: &[(&str, &str, u32, &[&str])] = &[
    // Kanto
    ("venusaur", "Mega", 10033, &["grass", "poison"]),
    ("blastoise", "Mega", 10036, &["water"]),
    ("beedrill", "Mega", 10090, &["bug", "poison"]),
    ("pidgeot", "Mega", 10073, &["normal", "flying"]),
    ("alakazam", "Mega", 10037, &["psychic"]),
    ("gengar", "Mega", 10038, &["ghost", "poison"]),
    ("kangaskhan", "Mega", 10039, &["normal"]),
    ("pinsir", "Mega", 10040, &["bug", "flying"]),
    ("gyarados", "Mega", 10041, &["water", "dark"]),
    ("aerodactyl", "Mega", 10042, &["rock", "flying"]),
    // Johto
    ("ampharos", "Mega", 10045, &["electric", "dragon"]),
    ("steelix", "Mega", 10072, &["steel", "ground"]),
    ("scizor", "Mega", 10046, &["bug", "steel"]),
    ("heracross", "Mega", 10047, &["bug", "fighting"]),
    ("houndoom", "Mega", 10048, &["dark", "fire"]),
    ("tyranitar", "Mega", 10049, &["rock", "dark"]),
    // Hoenn
    ("sceptile", "Mega", 10065, &["grass", "dragon"]),
    ("blaziken", "Mega", 10050, &["fire", "fighting"]),
    ("swampert", "Mega", 10064, &["water", "ground"]),
    ("gardevoir", "Mega", 10051, &["psychic", "fairy"]),
    ("sableye", "Mega", 10066, &["dark", "ghost"]),
    ("mawile", "Mega", 10052, &["steel", "fairy"]),
    ("aggron", "Mega", 10053, &["steel", "rock"]),
    ("medicham", "Mega", 10054, &["fighting", "psychic"]),
    ("manectric", "Mega", 10055, &["electric"]),
    ("sharpedo", "Mega", 10070, &["water", "dark"]),
    ("camerupt", "Mega", 10087, &["fire", "ground"]),
    ("altaria", "Mega", 10067, &["dragon", "fairy"]),
    ("banette", "Mega", 10056, &["ghost"]),
    ("absol", "Mega", 10057, &["dark"]),
    ("glalie", "Mega", 10074, &["ice"]),
    ("salamence", "Mega", 10089, &["dragon", "flying"]),
    ("metagross", "Mega", 10076, &["steel", "psychic"]),
    ("latias", "Mega", 10062, &["dragon", "psychic"]),
    ("latios", "Mega", 10063, &["dragon", "psychic"]),
    ("kyogre", "Primal", 10077, &["water"]),
    ("groudon", "Primal", 10078, &["ground", "fire"]),
    ("rayquaza", "Mega", 10079, &["dragon", "flying"]),
    // Sinnoh
    ("lopunny", "Mega", 10088, &["normal", "fighting"]),
    ("garchomp", "Mega", 10058, &["dragon", "ground"]),
    ("lucario", "Mega", 10059, &["fighting", "steel"]),
    ("abomasnow", "Mega", 10060, &["grass", "ice"]),
    ("gallade", "Mega", 10068, &["psychic", "fighting"]),
    // Unova
    ("audino", "Mega", 10069, &["normal", "fairy"]),
    // Kalos
    ("diancie", "Mega", 10075, &["rock", "fairy"]),
];

/// Species with a single regional form: (raw name, form name, id, types).
pub(super) const REGIONAL_FORMS: &[(&str, &str, u32, &[&str])] = &[
    // Alola
    ("rattata", "Alolan", 10091, &["dark", "normal"]),
    ("raticate", "Alolan", 10092, &["dark", "normal"]),
    ("raichu", "Alolan", 10100, &["electric", "psychic"]),
    ("sandshrew", "Alolan", 10101, &["ice", "steel"]),
    ("sandslash", "Alolan", 10102, &["ice", "steel"]),
    ("vulpix", "Alolan", 10103, &["ice"]),
    ("ninetales", "Alolan", 10104, &["ice", "fairy"]),
    ("diglett", "Alolan", 10105, &["ground", "steel"]),
    ("dugtrio", "Alolan", 10106, &["ground", "steel"]),
    ("persian", "Alolan", 10108, &["dark"]),
    ("geodude", "Alolan", 10109, &["rock", "electric"]),
    ("graveler", "Alolan", 10110, &["rock", "electric"]),
    ("golem", "Alolan", 10111, &["rock", "electric"]),
    ("grimer", "Alolan", 10112, &["poison", "dark"]),
    ("muk", "Alolan", 10113, &["poison", "dark"]),
    ("exeggutor", "Alolan", 10114, &["grass", "dragon"]),
    ("marowak", "Alolan", 10115, &["fire", "ghost"]),
    // Galar
    ("ponyta", "Galarian", 10162, &["psychic"]),
    ("rapidash", "Galarian", 10163, &["psychic", "fairy"]),
    ("slowpoke", "Galarian", 10164, &["psychic"]),
    ("farfetchd", "Galarian", 10166, &["fighting"]),
    ("weezing", "Galarian", 10167, &["poison", "fairy"]),
    ("mr-mime", "Galarian", 10168, &["ice", "psychic"]),
    ("articuno", "Galarian", 10169, &["psychic", "flying"]),
    ("zapdos", "Galarian", 10170, &["fighting", "flying"]),
    ("moltres", "Galarian", 10171, &["dark", "flying"]),
    ("slowking", "Galarian", 10172, &["poison", "psychic"]),
    ("corsola", "Galarian", 10173, &["ghost"]),
    ("zigzagoon", "Galarian", 10174, &["dark", "normal"]),
    ("linoone", "Galarian", 10175, &["dark", "normal"]),
    ("darumaka", "Galarian", 10176, &["ice"]),
    ("darmanitan-standard", "Galarian", 10177, &["ice"]),
    ("yamask", "Galarian", 10179, &["ground", "ghost"]),
    ("stunfisk", "Galarian", 10180, &["ground", "steel"]),
    // Hisui
    ("growlithe", "Hisuian", 10229, &["fire", "rock"]),
    ("arcanine", "Hisuian", 10230, &["fire", "rock"]),
    ("voltorb", "Hisuian", 10231, &["electric", "grass"]),
    ("electrode", "Hisuian", 10232, &["electric", "grass"]),
    ("typhlosion", "Hisuian", 10233, &["fire", "ghost"]),
    ("qwilfish", "Hisuian", 10234, &["dark", "poison"]),
    ("sneasel", "Hisuian", 10235, &["fighting", "poison"]),
    ("samurott", "Hisuian", 10236, &["water", "dark"]),
    ("lilligant", "Hisuian", 10237, &["grass", "fighting"]),
    ("zorua", "Hisuian", 10238, &["normal", "ghost"]),
    ("zoroark", "Hisuian", 10239, &["normal", "ghost"]),
    ("braviary", "Hisuian", 10240, &["psychic", "flying"]),
    ("sliggoo", "Hisuian", 10241, &["steel", "dragon"]),
    ("goodra", "Hisuian", 10242, &["steel", "dragon"]),
    ("avalugg", "Hisuian", 10243, &["ice", "rock"]),
    ("decidueye", "Hisuian", 10244, &["grass", "fighting"]),
    ("basculin-red-striped", "Hisuian White-Striped", 10247, &["water"]),
    // Paldea
    ("wooper", "Paldean", 10253, &["poison", "ground"]),
];

/// Species whose toggles do not fit the one-mega-or-one-regional shape.
pub(super) const MULTI_SLOT_FORMS: &[(&str, Option<&str>, &[FormVariant])] = &[
    (
        "charizard",
        None,
        &[
            FormVariant::new(FormSlot::Mega, "x", "Mega X", 10034, &["fire", "dragon"]),
            FormVariant::new(FormSlot::Mega, "y", "Mega Y", 10035, &["fire", "flying"]),
        ],
    ),
    (
        "mewtwo",
        None,
        &[
            FormVariant::new(FormSlot::Mega, "x", "Mega X", 10043, &["psychic", "fighting"]),
            FormVariant::new(FormSlot::Mega, "y", "Mega Y", 10044, &["psychic"]),
        ],
    ),
    (
        "slowbro",
        None,
        &[
            FormVariant::new(FormSlot::Mega, "mega", "Mega", 10071, &["water", "psychic"])
                .clearing(&[FormSlot::Regional]),
            FormVariant::new(FormSlot::Regional, "galar", "Galarian", 10165, &["poison", "psychic"])
                .clearing(&[FormSlot::Mega]),
        ],
    ),
    (
        "meowth",
        None,
        &[
            FormVariant::new(FormSlot::Regional, "alola", "Alolan", 10107, &["dark"]),
            FormVariant::new(FormSlot::Regional, "galar", "Galarian", 10161, &["steel"]),
        ],
    ),
    (
        "tauros",
        None,
        &[
            FormVariant::new(
                FormSlot::Regional,
                "combat",
                "Paldean Combat Breed",
                10250,
                &["fighting"],
            ),
            FormVariant::new(
                FormSlot::Regional,
                "blaze",
                "Paldean Blaze Breed",
                10251,
                &["fighting", "fire"],
            ),
            FormVariant::new(
                FormSlot::Regional,
                "aqua",
                "Paldean Aqua Breed",
                10252,
                &["fighting", "water"],
            ),
        ],
    ),
    (
        "dialga",
        None,
        &[FormVariant::new(FormSlot::Special, "origin", "Origin", 10245, &["steel", "dragon"])],
    ),
    (
        "palkia",
        None,
        &[FormVariant::new(FormSlot::Special, "origin", "Origin", 10246, &["water", "dragon"])],
    ),
    (
        "giratina-altered",
        Some("Giratina (Altered)"),
        &[
            FormVariant::new(FormSlot::Special, "origin", "Origin", 10007, &["ghost", "dragon"])
                .labelled("Giratina (Origin)"),
        ],
    ),
];

/// Cosmetic or permanent alternate forms listed in the detail panel, keyed by
/// the base part of the raw name.
pub(super) const ALTERNATE_FORMS: &[(&str, &[&str])] = &[
    ("unfezant", &["Male", "Female"]),
    ("frillish", &["Male", "Female"]),
    ("jellicent", &["Male", "Female"]),
    ("pyroar", &["Male", "Female"]),
    ("meowstic", &["Male", "Female"]),
    ("indeedee", &["Male", "Female"]),
    ("basculegion", &["Male", "Female"]),
    ("castform", &["Normal", "Sunny", "Rainy", "Snowy"]),
    ("deoxys", &["Normal", "Attack", "Defense", "Speed"]),
    ("burmy", &["Plant Cloak", "Sandy Cloak", "Trash Cloak"]),
    ("wormadam", &["Plant Cloak", "Sandy Cloak", "Trash Cloak"]),
    ("cherrim", &["Overcast", "Sunshine"]),
    ("shellos", &["West Sea", "East Sea"]),
    ("gastrodon", &["West Sea", "East Sea"]),
    ("rotom", &["Normal", "Heat", "Wash", "Frost", "Fan", "Mow"]),
    ("giratina", &["Altered", "Origin"]),
    ("shaymin", &["Land", "Sky"]),
    ("basculin", &["Red-Striped", "Blue-Striped", "White-Striped"]),
    ("darmanitan", &["Standard", "Zen Mode"]),
    ("tornadus", &["Incarnate", "Therian"]),
    ("thundurus", &["Incarnate", "Therian"]),
    ("landorus", &["Incarnate", "Therian"]),
    ("kyurem", &["Normal", "White", "Black"]),
    ("keldeo", &["Ordinary", "Resolute"]),
    ("meloetta", &["Aria", "Pirouette"]),
    ("greninja", &["Normal", "Ash-Greninja"]),
    ("zygarde", &["50%", "10%", "Complete"]),
    ("oricorio", &["Baile", "Pom-Pom", "Pa'u", "Sensu"]),
    ("lycanroc", &["Midday", "Midnight", "Dusk"]),
    ("wishiwashi", &["Solo", "School"]),
    ("minior", &["Meteor", "Core"]),
    ("mimikyu", &["Disguised", "Busted"]),
    ("toxtricity", &["Amped", "Low Key"]),
    ("eiscue", &["Ice Face", "Noice Face"]),
    ("morpeko", &["Full Belly", "Hangry"]),
    ("urshifu", &["Single Strike", "Rapid Strike"]),
    ("zarude", &["Normal", "Dada"]),
    ("enamorus", &["Incarnate", "Therian"]),
];
