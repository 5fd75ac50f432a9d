//! Stochastic instantiation of validated sets.
//!
//! Every slot list of a [`PokeSet`] is sampled uniformly and
//! independently; draws violating a combination or separation group are
//! rejected and retried. The retry budget is generous enough that any
//! satisfiable constraint system resolves in practice.

use crate::constraints::satisfies_restrictions;
use crate::forms;
use crate::set::{PokeSet, PokemonInstance};
use rand::seq::IndexedRandom;
use rand::Rng;
use schema::{PokemonType, StatKey, StatSpread};

/// Retry budget for the rejection-sampling loop.
pub const DEFAULT_ATTEMPTS: u32 = 0x2329;

const HIDDEN_POWER_TYPES: [PokemonType; 16] = [
    PokemonType::Fighting,
    PokemonType::Flying,
    PokemonType::Poison,
    PokemonType::Ground,
    PokemonType::Rock,
    PokemonType::Bug,
    PokemonType::Ghost,
    PokemonType::Steel,
    PokemonType::Fire,
    PokemonType::Water,
    PokemonType::Grass,
    PokemonType::Electric,
    PokemonType::Psychic,
    PokemonType::Ice,
    PokemonType::Dragon,
    PokemonType::Dark,
];

/// Draw one concrete instance from a validated set using the thread-local
/// RNG and the default retry budget.
pub fn instantiate_set(set: &PokeSet) -> PokemonInstance {
    instantiate_set_with(set, &mut rand::rng(), DEFAULT_ATTEMPTS)
}

/// Draw one concrete instance with a caller-supplied RNG and retry
/// budget.
///
/// If no draw within the budget satisfies the constraint groups, the
/// last draw is returned anyway (with an error logged): an instance with
/// a violated preference beats no instance at all.
pub fn instantiate_set_with<R: Rng + ?Sized>(
    set: &PokeSet,
    rng: &mut R,
    attempts: u32,
) -> PokemonInstance {
    let attempts = attempts.max(1);
    let mut instance = sample_instance(set, rng);
    for _ in 1..attempts {
        if satisfies_restrictions(&instance, &set.combinations, &set.separations) {
            fix_moves(&mut instance);
            return instance;
        }
        instance = sample_instance(set, rng);
    }
    if !satisfies_restrictions(&instance, &set.combinations, &set.separations) {
        tracing::error!(
            attempts,
            setname = %set.setname,
            species = %set.species.name,
            "combinations/separations still unsatisfied after retry budget, \
             returning the last draw"
        );
    }
    fix_moves(&mut instance);
    instance
}

fn sample_instance<R: Rng + ?Sized>(set: &PokeSet, rng: &mut R) -> PokemonInstance {
    PokemonInstance {
        setname: set.setname.clone(),
        species: set.species.clone(),
        ability: pick(rng, &set.ability).clone(),
        item: pick(rng, &set.item).clone(),
        ball: pick(rng, &set.ball).clone(),
        gender: *pick(rng, &set.gender),
        level: set.level,
        nature: set.nature.clone(),
        ivs: set.ivs,
        evs: set.evs,
        moves: set
            .moves
            .iter()
            .map(|slot| pick(rng, slot).clone())
            .collect(),
        stats: set.stats,
        rarity: set.rarity,
        happiness: set.happiness,
        shiny: set.shiny,
        biddable: set.biddable,
        hidden: set.hidden,
        form: set.form,
        displayname: set.displayname.clone(),
        ingamename: set.ingamename.clone(),
        tags: set.tags.clone(),
    }
}

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, slot: &'a [T]) -> &'a T {
    slot.choose(rng).expect("slot lists are non-empty after validation")
}

/// Resolve the moves whose type, power or display name depend on the
/// drawn instance: Hidden Power, Return, Frustration, Natural Gift and
/// Judgment. Every other move just gets its name as display name.
pub fn fix_moves(instance: &mut PokemonInstance) {
    let item_name = instance.item.name.clone();
    let happiness = instance.happiness as u32;
    let ivs = instance.ivs;
    for move_data in &mut instance.moves {
        if move_data.displayname.is_none() {
            move_data.displayname = Some(move_data.name.clone());
        }
        match move_data.name.as_str() {
            "Hidden Power" => {
                let (hp_type, power) = hidden_power(&ivs);
                move_data.move_type = hp_type;
                move_data.power = Some(power);
                move_data.displayname = Some(format!("HP {} [{}]", hp_type, power));
            }
            "Return" => {
                let power = (happiness * 2 / 5).max(1);
                move_data.power = Some(power);
                move_data.displayname = Some(format!("Return [{}]", power));
            }
            "Frustration" => {
                let power = ((255 - happiness) * 2 / 5).max(1);
                move_data.power = Some(power);
                move_data.displayname = Some(format!("Frustration [{}]", power));
            }
            "Natural Gift" => {
                let (gift_type, power) = forms::natural_gift_effect(item_name.as_deref())
                    .unwrap_or((PokemonType::Normal, 0));
                move_data.move_type = gift_type;
                move_data.power = Some(power);
                move_data.displayname = Some(format!("NG {} [{}]", gift_type, power));
            }
            "Judgment" => {
                let judgment_type = forms::multitype_type(item_name.as_deref());
                move_data.move_type = judgment_type;
                move_data.displayname = Some(format!("Judgment {}", judgment_type));
            }
            _ => {}
        }
    }
}

/// Hidden Power's type and power from the IV low bits, using the
/// internal stat order (speed between def and spA).
fn hidden_power(ivs: &StatSpread) -> (PokemonType, u32) {
    let mut type_sum = 0u32;
    let mut power_sum = 0u32;
    for (bit, key) in StatKey::INTERNAL.into_iter().enumerate() {
        let iv = ivs.get(key) as u32;
        type_sum += (iv & 1) << bit;
        power_sum += ((iv >> 1) & 1) << bit;
    }
    let hp_type = HIDDEN_POWER_TYPES[(type_sum as usize * 15) / 63];
    let power = (power_sum * 40) / 63 + 30;
    (hp_type, power)
}
