use crate::constraints::satisfies_restrictions;
use crate::instantiate::instantiate_set_with;
use crate::set::PokemonInstance;
use crate::tests::common::{base_doc, populate_ok};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

/// An instance with exactly the moves Pound and Surf, no item and no
/// ability. Single-candidate slots, so the draw is deterministic.
fn fixed_instance() -> PokemonInstance {
    let mut raw = base_doc();
    raw.insert("moves".to_owned(), json!(["Pound", "Surf"]));
    let populated = populate_ok(raw);
    instantiate_set_with(&populated.set, &mut StdRng::seed_from_u64(1), 1)
}

fn group(members: &[Option<&str>]) -> Vec<Vec<Option<String>>> {
    vec![members.iter().map(|m| m.map(str::to_owned)).collect()]
}

#[test]
fn full_combination_is_satisfied() {
    let instance = fixed_instance();
    assert!(satisfies_restrictions(
        &instance,
        &group(&[Some("Pound"), Some("Surf")]),
        &[],
    ));
}

#[test]
fn partial_combination_is_violated() {
    let instance = fixed_instance();
    assert!(!satisfies_restrictions(
        &instance,
        &group(&[Some("Pound"), Some("Aqua Jet")]),
        &[],
    ));
}

#[test]
fn absent_combination_is_vacuously_satisfied() {
    let instance = fixed_instance();
    assert!(satisfies_restrictions(
        &instance,
        &group(&[Some("Aqua Jet"), Some("Rock Smash")]),
        &[],
    ));
}

#[test]
fn separation_allows_at_most_one() {
    let instance = fixed_instance();
    assert!(satisfies_restrictions(
        &instance,
        &[],
        &group(&[Some("Pound"), Some("Aqua Jet")]),
    ));
    assert!(!satisfies_restrictions(
        &instance,
        &[],
        &group(&[Some("Pound"), Some("Surf")]),
    ));
}

#[test]
fn groups_have_multiset_semantics() {
    let instance = fixed_instance();
    // only one Pound is carried, so demanding two fails...
    assert!(!satisfies_restrictions(
        &instance,
        &group(&[Some("Pound"), Some("Pound")]),
        &[],
    ));
    // ...while forbidding a second copy holds
    assert!(satisfies_restrictions(
        &instance,
        &[],
        &group(&[Some("Pound"), Some("Pound")]),
    ));
}

#[test]
fn null_matches_the_empty_item() {
    let instance = fixed_instance();
    assert!(satisfies_restrictions(
        &instance,
        &group(&[None, Some("Pound")]),
        &[],
    ));
    assert!(!satisfies_restrictions(
        &instance,
        &[],
        &group(&[None, Some("Pound")]),
    ));
}
