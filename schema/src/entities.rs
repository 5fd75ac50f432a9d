use serde::{Deserialize, Serialize};

use crate::pokemon_types::{MoveCategory, PokemonType};
use crate::stats::{StatKey, StatSpread};

/// One species entry of the pokedex catalog.
///
/// Entries are deep-copied into every validated set, so form adjustments
/// (base-stat swaps, type/color overrides) never touch the catalog copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: u16,
    pub name: String,
    pub basestats: StatSpread,
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub color: String,
}

/// An ability catalog entry. The entry at id 0 has no name and stands for
/// "no ability".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub id: u16,
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// An item catalog entry. Also used for the ball catalog. The entry at
/// id 0 has no name and stands for "no held item".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u16,
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// A move catalog entry, plus the per-set fields filled in during
/// validation (`pp_ups`, recomputed `pp`) and instantiation
/// (`displayname`, power/type fixups).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: u16,
    pub name: String,
    pub category: MoveCategory,
    #[serde(rename = "type")]
    pub move_type: PokemonType,
    pub pp: u32,
    #[serde(default)]
    pub pp_ups: u32,
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    #[serde(default)]
    pub displayname: Option<String>,
}

/// A nature catalog entry. Neutral natures carry no increased/decreased
/// stat keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nature {
    pub id: u16,
    pub name: String,
    pub increased: Option<StatKey>,
    pub decreased: Option<StatKey>,
}
