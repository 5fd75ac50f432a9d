use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Elemental type of a species or move.
///
/// `Unknown` is the placeholder type used by redacted instances; it never
/// appears in catalog data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
    #[serde(rename = "???")]
    #[strum(serialize = "???")]
    Unknown,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// Gender of a concrete Pokémon. "Genderless" is expressed as
/// `Option::<Gender>::None` wherever a gender slot may be empty.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Gender {
    #[serde(rename = "m")]
    #[strum(serialize = "m")]
    Male,
    #[serde(rename = "f")]
    #[strum(serialize = "f")]
    Female,
}
