use crate::errors::Advisory;
use schema::{Ability, Gender, Item, MoveData, Nature, Species, StatSpread};
use serde::{Deserialize, Serialize};

/// A fully validated set. Every slot field holds a non-empty list of
/// resolved catalog entities; the instantiation engine picks one entry
/// per slot.
///
/// All entities are owned copies: mutating a validated set never affects
/// catalog data or any other set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokeSet {
    pub setname: String,
    pub species: Species,
    pub ability: Vec<Ability>,
    pub item: Vec<Item>,
    pub ball: Vec<Item>,
    pub gender: Vec<Option<Gender>>,
    pub level: u8,
    pub nature: Nature,
    pub ivs: StatSpread,
    pub evs: StatSpread,
    pub moves: Vec<Vec<MoveData>>,
    pub stats: StatSpread,
    pub rarity: f64,
    pub happiness: u8,
    pub shiny: bool,
    pub biddable: bool,
    pub hidden: bool,
    pub form: u8,
    pub displayname: String,
    pub ingamename: String,
    pub tags: Vec<String>,
    pub combinations: Vec<Vec<Option<String>>>,
    pub separations: Vec<Vec<Option<String>>>,
}

/// A concrete instance drawn from a validated set: exactly one entity
/// per slot, constraint groups gone, move fixups applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonInstance {
    pub setname: String,
    pub species: Species,
    pub ability: Ability,
    pub item: Item,
    pub ball: Item,
    pub gender: Option<Gender>,
    pub level: u8,
    pub nature: Nature,
    pub ivs: StatSpread,
    pub evs: StatSpread,
    pub moves: Vec<MoveData>,
    pub stats: StatSpread,
    pub rarity: f64,
    pub happiness: u8,
    pub shiny: bool,
    pub biddable: bool,
    pub hidden: bool,
    pub form: u8,
    pub displayname: String,
    pub ingamename: String,
    pub tags: Vec<String>,
}

/// Output of a successful validation: the populated set plus the
/// advisories collected along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Populated {
    pub set: PokeSet,
    pub warnings: Vec<Advisory>,
}

/// Caller-supplied validation options.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopulateOptions {
    /// Downgrade EV range/total violations from errors to advisories.
    pub skip_ev_check: bool,
}
