//! Constraint checking for instantiated sets.
//!
//! A combination group is all-or-nothing: either every member is
//! carried, or none of them is. A separation group allows at most one
//! member. Both are checked against the multiset of things an instance
//! actually carries, so a group naming the same thing twice demands (or
//! forbids) two copies.

use crate::set::PokemonInstance;

/// Whether a concrete instance satisfies every combination and
/// separation group.
pub fn satisfies_restrictions(
    instance: &PokemonInstance,
    combinations: &[Vec<Option<String>>],
    separations: &[Vec<Option<String>>],
) -> bool {
    let carried = carried_things(instance);

    for group in combinations {
        let present = count_present(&carried, group);
        // partial matches are the only violation; zero matches means
        // the group simply doesn't apply to this draw
        if present != 0 && present != group.len() {
            return false;
        }
    }

    for group in separations {
        if count_present(&carried, group) > 1 {
            return false;
        }
    }

    true
}

/// The multiset of names an instance carries: its moves, its item (null
/// for "no item") and its ability.
fn carried_things(instance: &PokemonInstance) -> Vec<Option<&str>> {
    let mut carried: Vec<Option<&str>> = instance
        .moves
        .iter()
        .map(|move_data| Some(move_data.name.as_str()))
        .collect();
    carried.push(instance.item.name.as_deref());
    carried.push(instance.ability.name.as_deref());
    carried
}

/// How many group members the instance carries, consuming each carried
/// thing at most once.
fn count_present(carried: &[Option<&str>], group: &[Option<String>]) -> usize {
    let mut available: Vec<Option<&str>> = carried.to_vec();
    let mut present = 0;
    for member in group {
        let wanted = member.as_deref();
        if let Some(position) = available.iter().position(|thing| *thing == wanted) {
            available.swap_remove(position);
            present += 1;
        }
    }
    present
}
