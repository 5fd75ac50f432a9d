//! Redaction of instances drawn from hidden sets.
//!
//! A redacted instance keeps its shape but reveals nothing: every name
//! becomes the `???` placeholder, every numeric detail is blanked and
//! the move list collapses to a single placeholder entry.

use crate::set::PokemonInstance;
use schema::{Ability, Item, MoveCategory, MoveData, Nature, PokemonType, Species, StatSpread};

const REDACTED: &str = "???";

/// Strip all revealing information from an instance in place.
pub fn redact_instance(instance: &mut PokemonInstance) {
    instance.setname = REDACTED.to_owned();
    instance.species = Species {
        id: 0,
        name: REDACTED.to_owned(),
        basestats: StatSpread::default(),
        types: vec![PokemonType::Unknown],
        color: String::new(),
    };
    instance.ability = Ability {
        id: 0,
        name: None,
        description: String::new(),
    };
    instance.item = Item {
        id: 0,
        name: None,
        description: String::new(),
    };
    instance.ball = Item {
        id: 0,
        name: None,
        description: String::new(),
    };
    instance.gender = None;
    instance.level = 100;
    instance.nature = Nature {
        id: 0,
        name: REDACTED.to_owned(),
        increased: None,
        decreased: None,
    };
    instance.ivs = StatSpread::default();
    instance.evs = StatSpread::default();
    instance.stats = StatSpread::default();
    instance.moves = vec![MoveData {
        id: 0,
        name: REDACTED.to_owned(),
        category: MoveCategory::Status,
        move_type: PokemonType::Unknown,
        pp: 0,
        pp_ups: 0,
        power: None,
        accuracy: None,
        displayname: Some(REDACTED.to_owned()),
    }];
    instance.rarity = 1.0;
    instance.happiness = 0;
    instance.shiny = false;
    instance.biddable = true;
    instance.form = 0;
    instance.displayname = REDACTED.to_owned();
    instance.ingamename = REDACTED.to_owned();
    instance.tags.clear();
}
