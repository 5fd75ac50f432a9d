use crate::catalog::Catalogs;
use crate::populate::populate_set;
use crate::set::{Populated, PopulateOptions};
use schema::{
    Ability, Item, MoveCategory, MoveData, Nature, PokemonType, Species, StatKey, StatSpread,
};
use serde_json::{json, Map, Value};

/// Build the small fixture catalogs the tests resolve against. Entry
/// position doubles as the id, so integer tokens work.
pub fn test_catalogs() -> Catalogs {
    use PokemonType::*;

    let pokedex = vec![
        species(0, "", [0, 0, 0, 0, 0, 0], &[Normal], ""),
        species(1, "Bulbasaur", [45, 49, 49, 65, 65, 45], &[Grass, Poison], "Green"),
        species(2, "Typhlosion", [78, 84, 78, 109, 85, 100], &[Fire], "Yellow"),
        species(3, "Mew", [100, 100, 100, 100, 100, 100], &[Psychic], "Pink"),
        species(4, "Groudon", [100, 150, 140, 100, 90, 90], &[Ground], "Red"),
        species(5, "Shedinja", [1, 90, 45, 30, 30, 40], &[Bug, Ghost], "Brown"),
        species(6, "Unown", [48, 72, 48, 72, 48, 48], &[Psychic], "Black"),
        species(7, "Burmy", [40, 29, 45, 29, 45, 36], &[Bug], "Green"),
        species(8, "Wormadam", [60, 59, 85, 79, 105, 36], &[Bug, Grass], "Green"),
        species(9, "Shellos", [76, 48, 48, 57, 62, 34], &[Water], "Pink"),
        species(10, "Gastrodon", [111, 83, 68, 92, 82, 39], &[Water, Ground], "Pink"),
        species(11, "Deoxys", [50, 150, 50, 150, 50, 150], &[Psychic], "Red"),
        species(12, "Arceus", [120, 120, 120, 120, 120, 120], &[Normal], "White"),
        species(13, "Nidoran♂", [46, 57, 40, 40, 40, 50], &[Poison], "Purple"),
    ];

    let abilities = vec![
        ability(0, None),
        ability(1, Some("Pressure")),
        ability(2, Some("Static")),
        ability(3, Some("Multitype")),
        ability(4, Some("Wonder Guard")),
        ability(5, Some("Overgrow")),
        ability(6, Some("Blaze")),
    ];

    let items = vec![
        item(0, None),
        item(1, Some("Sitrus Berry")),
        item(2, Some("Flame Plate")),
        item(3, Some("Earth Plate")),
        item(4, Some("Splash Plate")),
        item(5, Some("Colbur Berry")),
        item(6, Some("Black Belt")),
        item(7, Some("Elixir")),
        item(8, Some("Leftovers")),
        // shares its name with the move of the same name
        item(9, Some("Metronome")),
    ];

    // one non-ball entry to exercise the category check
    let balls = vec![
        item(0, Some("Poké Ball")),
        item(1, Some("Master Ball")),
        item(2, Some("Ultra Ball")),
        item(3, Some("Great Ball")),
        item(4, Some("Safari Ball")),
        item(5, Some("Focus Band")),
    ];

    let moves = vec![
        move_data(0, "Pound", MoveCategory::Physical, Normal, 35, Some(40)),
        move_data(1, "Surf", MoveCategory::Special, Water, 15, Some(90)),
        move_data(2, "Aqua Jet", MoveCategory::Physical, Water, 20, Some(40)),
        move_data(3, "Rock Smash", MoveCategory::Physical, Fighting, 15, Some(40)),
        move_data(4, "Tackle", MoveCategory::Physical, Normal, 35, Some(40)),
        move_data(5, "Tickle", MoveCategory::Status, Normal, 20, None),
        move_data(6, "Hidden Power", MoveCategory::Special, Normal, 15, Some(60)),
        move_data(7, "Return", MoveCategory::Physical, Normal, 20, None),
        move_data(8, "Frustration", MoveCategory::Physical, Normal, 20, None),
        move_data(9, "Natural Gift", MoveCategory::Physical, Normal, 15, None),
        move_data(10, "Judgment", MoveCategory::Special, Normal, 10, Some(100)),
        move_data(11, "Splash", MoveCategory::Status, Normal, 40, None),
        move_data(12, "Metronome", MoveCategory::Status, Normal, 10, None),
    ];

    let natures = vec![
        nature(0, "Hardy", None, None),
        nature(1, "Timid", Some(StatKey::Spe), Some(StatKey::Atk)),
        nature(2, "Quiet", Some(StatKey::SpA), Some(StatKey::Spe)),
        nature(3, "Adamant", Some(StatKey::Atk), Some(StatKey::SpA)),
        nature(4, "Modest", Some(StatKey::SpA), Some(StatKey::Atk)),
    ];

    Catalogs::new(pokedex, abilities, items, balls, moves, natures)
}

/// A minimal valid raw record: level-100 Bulbasaur with a clean EV
/// spread. Tests tweak it from here.
pub fn base_doc() -> Map<String, Value> {
    doc(json!({
        "setname": "Standard",
        "species": "Bulbasaur",
        "nature": "Timid",
        "ivs": 31,
        "evs": {"hp": 4, "atk": 0, "def": 0, "spA": 252, "spD": 0, "spe": 252},
        "moves": ["Pound"],
    }))
}

/// Unwrap a `json!` mapping into the raw-record type.
pub fn doc(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("test doc must be a mapping, got {}", other),
    }
}

/// Populate against fresh fixture catalogs with default options,
/// panicking on validation errors.
pub fn populate_ok(raw: Map<String, Value>) -> Populated {
    match populate_set(&test_catalogs(), &raw, &PopulateOptions::default()) {
        Ok(populated) => populated,
        Err(err) => panic!("expected record to validate, got: {}", err),
    }
}

fn species(id: u16, name: &str, stats: [u16; 6], types: &[PokemonType], color: &str) -> Species {
    Species {
        id,
        name: name.to_owned(),
        basestats: StatSpread {
            hp: stats[0],
            atk: stats[1],
            def: stats[2],
            sp_a: stats[3],
            sp_d: stats[4],
            spe: stats[5],
        },
        types: types.to_vec(),
        color: color.to_owned(),
    }
}

fn ability(id: u16, name: Option<&str>) -> Ability {
    Ability {
        id,
        name: name.map(str::to_owned),
        description: String::new(),
    }
}

fn item(id: u16, name: Option<&str>) -> Item {
    Item {
        id,
        name: name.map(str::to_owned),
        description: String::new(),
    }
}

fn move_data(
    id: u16,
    name: &str,
    category: MoveCategory,
    move_type: PokemonType,
    pp: u32,
    power: Option<u32>,
) -> MoveData {
    MoveData {
        id,
        name: name.to_owned(),
        category,
        move_type,
        pp,
        pp_ups: 0,
        power,
        accuracy: Some(100),
        displayname: None,
    }
}

fn nature(id: u16, name: &str, increased: Option<StatKey>, decreased: Option<StatKey>) -> Nature {
    Nature {
        id,
        name: name.to_owned(),
        increased,
        decreased,
    }
}
