//! Random set and instance generation, mainly for demos and load
//! testing. The generated raw record goes through the regular
//! validation pipeline, so whatever comes out is a legal set.

use crate::catalog::Catalogs;
use crate::errors::SetResult;
use crate::instantiate::{instantiate_set_with, DEFAULT_ATTEMPTS};
use crate::populate::populate_set;
use crate::set::{Populated, PokemonInstance, PopulateOptions};
use rand::seq::IndexedRandom;
use rand::Rng;
use schema::StatKey;
use serde_json::{json, Map, Value};

/// Build a random raw record and validate it into a set.
pub fn generate_random_set<R: Rng + ?Sized>(
    catalogs: &Catalogs,
    rng: &mut R,
) -> SetResult<Populated> {
    let mut doc: Map<String, Value> = Map::new();
    doc.insert("setname".to_owned(), json!("Standard"));
    doc.insert(
        "species".to_owned(),
        json!(rng.random_range(1..catalogs.pokedex.len().max(2))),
    );
    doc.insert("level".to_owned(), json!(rng.random_range(1..=100)));

    let abilities: Vec<&str> = catalogs
        .abilities
        .iter()
        .filter_map(|ability| ability.name.as_deref())
        .collect();
    if let Some(ability) = abilities.choose(rng) {
        doc.insert("ability".to_owned(), json!(ability));
    }

    let natures: Vec<&str> = catalogs
        .natures
        .iter()
        .map(|nature| nature.name.as_str())
        .collect();
    if let Some(nature) = natures.choose(rng) {
        doc.insert("nature".to_owned(), json!(nature));
    }

    let mut ivs: Map<String, Value> = Map::new();
    let mut evs: Map<String, Value> = Map::new();
    for key in StatKey::ALL {
        ivs.insert(key.to_string(), json!(rng.random_range(0..=31)));
        // multiples of 4 only, and low enough that six of them stay
        // under the total cap
        evs.insert(key.to_string(), json!(rng.random_range(0..=21) * 4));
    }
    doc.insert("ivs".to_owned(), Value::Object(ivs));
    doc.insert("evs".to_owned(), Value::Object(evs));

    let move_names: Vec<&str> = catalogs
        .moves
        .iter()
        .map(|move_data| move_data.name.as_str())
        .collect();
    let count = [4usize, 4, 4, 4, 4, 3, 2, 1, 1]
        .choose(rng)
        .copied()
        .unwrap_or(4)
        .min(move_names.len())
        .max(1);
    let moves: Vec<Value> = move_names
        .choose_multiple(rng, count)
        .map(|name| json!(name))
        .collect();
    doc.insert("moves".to_owned(), Value::Array(moves));

    if rng.random_bool(0.2) {
        doc.insert("shiny".to_owned(), json!(true));
    }

    if rng.random_bool(0.3) {
        let items: Vec<&str> = catalogs
            .items
            .iter()
            .filter_map(|item| item.name.as_deref())
            .collect();
        if let Some(item) = items.choose(rng) {
            doc.insert("item".to_owned(), json!(item));
        }
    }

    if rng.random_bool(0.8) {
        let gender = if rng.random_bool(0.5) { "m" } else { "f" };
        doc.insert("gender".to_owned(), json!(gender));
    }

    populate_set(catalogs, &doc, &PopulateOptions::default())
}

/// Generate a random set and draw one instance from it.
pub fn generate_random_instance<R: Rng + ?Sized>(
    catalogs: &Catalogs,
    rng: &mut R,
) -> SetResult<PokemonInstance> {
    let populated = generate_random_set(catalogs, rng)?;
    Ok(instantiate_set_with(&populated.set, rng, DEFAULT_ATTEMPTS))
}
