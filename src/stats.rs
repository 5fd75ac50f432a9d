use crate::forms;
use crate::set::PokeSet;
use schema::{Nature, StatKey, StatSpread};

/// Calculate the actual value of one stat.
///
/// `growth = 2*base + ev/4 + iv (+100 for HP)`,
/// `raw = 5 (10 for HP) + growth*level/100`, then the nature factor
/// scales by 1.1 or 0.9 in tenths, all in integer arithmetic.
pub fn calculate_stat(
    base: u16,
    ev: u16,
    iv: u16,
    key: StatKey,
    nature: &Nature,
    level: u8,
) -> u16 {
    let is_hp = key == StatKey::Hp;
    let growth =
        2 * base as u32 + (ev as u32 / 4) + iv as u32 + if is_hp { 100 } else { 0 };
    let raw = if is_hp { 10 } else { 5 } + (growth * level as u32) / 100;
    let nature_factor = if nature.increased == Some(key) && nature.decreased.is_some() {
        11
    } else if nature.decreased == Some(key) && nature.increased.is_some() {
        9
    } else {
        10
    };
    ((raw * nature_factor) / 10) as u16
}

/// Compute the full six-key stat map.
pub fn compute_stats(
    basestats: &StatSpread,
    ivs: &StatSpread,
    evs: &StatSpread,
    nature: &Nature,
    level: u8,
) -> StatSpread {
    let mut stats = StatSpread::default();
    for key in StatKey::ALL {
        stats.set(
            key,
            calculate_stat(
                basestats.get(key),
                evs.get(key),
                ivs.get(key),
                key,
                nature,
                level,
            ),
        );
    }
    stats
}

/// Re-run the formula after a set's base stats were changed (form
/// adjustments), including the per-species stat overrides.
pub fn recalculate_stats(set: &mut PokeSet) {
    set.stats = compute_stats(
        &set.species.basestats,
        &set.ivs,
        &set.evs,
        &set.nature,
        set.level,
    );
    forms::apply_stat_overrides(set);
}
