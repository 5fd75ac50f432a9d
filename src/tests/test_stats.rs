use crate::stats::{calculate_stat, compute_stats, recalculate_stats};
use crate::tests::common::{base_doc, populate_ok};
use pretty_assertions::assert_eq;
use schema::{Nature, StatKey, StatSpread};
use serde_json::json;

fn neutral() -> Nature {
    Nature {
        id: 0,
        name: "Hardy".to_owned(),
        increased: None,
        decreased: None,
    }
}

fn adamant() -> Nature {
    Nature {
        id: 3,
        name: "Adamant".to_owned(),
        increased: Some(StatKey::Atk),
        decreased: Some(StatKey::SpA),
    }
}

#[test]
fn hp_formula() {
    // base 100, 31 IVs, no EVs, level 50
    assert_eq!(calculate_stat(100, 0, 31, StatKey::Hp, &neutral(), 50), 175);
}

#[test]
fn nature_scales_in_tenths() {
    assert_eq!(calculate_stat(100, 0, 0, StatKey::Atk, &adamant(), 100), 225);
    assert_eq!(calculate_stat(100, 0, 0, StatKey::SpA, &adamant(), 100), 184);
    // HP is never touched by natures
    assert_eq!(calculate_stat(100, 0, 0, StatKey::Hp, &adamant(), 100), 310);
}

#[test]
fn neutral_nature_changes_nothing() {
    assert_eq!(calculate_stat(100, 0, 0, StatKey::Atk, &neutral(), 100), 205);
}

#[test]
fn evs_contribute_a_quarter() {
    let without = calculate_stat(80, 0, 0, StatKey::Spe, &neutral(), 100);
    let with = calculate_stat(80, 252, 0, StatKey::Spe, &neutral(), 100);
    assert_eq!(with - without, 63);
}

#[test]
fn compute_stats_covers_all_keys() {
    let base = StatSpread::broadcast(100);
    let ivs = StatSpread::broadcast(31);
    let evs = StatSpread::broadcast(84);
    let nature = adamant();
    let stats = compute_stats(&base, &ivs, &evs, &nature, 78);
    for key in StatKey::ALL {
        assert_eq!(
            stats.get(key),
            calculate_stat(100, 84, 31, key, &nature, 78)
        );
    }
}

#[test]
fn recalculation_follows_level_changes() {
    let mut set = populate_ok(base_doc()).set;
    assert_eq!(set.stats.hp, 232);
    set.level = 50;
    recalculate_stats(&mut set);
    assert_eq!(set.stats.hp, 121);
}

#[test]
fn shedinja_override_survives_recalculation() {
    let mut raw = base_doc();
    raw.insert("species".to_owned(), json!("Shedinja"));
    let mut set = populate_ok(raw).set;
    set.level = 50;
    recalculate_stats(&mut set);
    assert_eq!(set.stats.hp, 1);
}
