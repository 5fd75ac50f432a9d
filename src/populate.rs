//! Validation and enrichment of raw set records.
//!
//! [`populate_set`] takes one raw mapping (as parsed from YAML or JSON),
//! resolves every catalog reference, checks every schema rule, derives
//! the computed fields and returns a fully typed [`PokeSet`] together
//! with the advisories collected along the way. Validation is
//! all-or-nothing: the first fatal violation aborts with a [`SetError`].

use crate::catalog::{Catalog, Catalogs, EntryKind, NamedEntry};
use crate::errors::{Advisory, ReferenceError, SchemaError, SetResult};
use crate::forms;
use crate::resolver::{self, RefToken};
use crate::set::{PokeSet, Populated, PopulateOptions};
use crate::stats;
use crate::suppress::Suppression;
use regex::Regex;
use schema::{Gender, MoveData, Nature, StatKey, StatSpread};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

const REQUIRED_FIELDS: [&str; 6] = ["setname", "species", "nature", "ivs", "evs", "moves"];

const OPTIONAL_FIELDS: [&str; 17] = [
    "ability",
    "ball",
    "biddable",
    "combinations",
    "displayname",
    "form",
    "gender",
    "happiness",
    "hidden",
    "ingamename",
    "item",
    "level",
    "rarity",
    "separations",
    "shiny",
    "suppressions",
    "tags",
];

/// Constraint tokens are corrected much more conservatively than
/// catalog references: they only ever match against the handful of
/// things the set itself can carry.
const CONSTRAINT_SIMILARITY: f64 = 0.9;

/// Trailing PP annotation on a move name: `(+2)` raises the PP-Ups,
/// `(=40)` fixes the final PP, `(+2/=40)` does both.
static PP_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((?:\+(\d+)|=(\d+)|\+(\d+)/=(\d+))\)$").expect("valid regex"));

/// Nature given as an effect expression, e.g. `+spA -spe`.
static NATURE_EFFECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+(\w+)\s+-(\w+)$").expect("valid regex"));

/// Validate and enrich one raw set record against the catalogs.
pub fn populate_set(
    catalogs: &Catalogs,
    doc: &Map<String, Value>,
    options: &PopulateOptions,
) -> SetResult<Populated> {
    let mut warnings: Vec<Advisory> = Vec::new();

    // Field keys are matched lowercased; mixed-case keys still work but
    // earn an advisory.
    let mut fields: Map<String, Value> = Map::new();
    for (key, value) in doc {
        let lower = key.to_lowercase();
        if lower != *key {
            warnings.push(Advisory::NonLowercaseKey(key.clone()));
        }
        fields.insert(lower, value.clone());
    }

    let mut missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !fields.contains_key(**field))
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        missing.sort();
        return Err(SchemaError::MissingFields(missing).into());
    }

    let mut unknown: Vec<String> = fields
        .keys()
        .filter(|key| {
            !REQUIRED_FIELDS.contains(&key.as_str()) && !OPTIONAL_FIELDS.contains(&key.as_str())
        })
        .cloned()
        .collect();
    if !unknown.is_empty() {
        unknown.sort();
        return Err(SchemaError::UnknownFields(unknown).into());
    }

    let suppressions = parse_suppressions(fields.get("suppressions"))?;

    let setname = opt_string(&fields, "setname")?.ok_or_else(|| SchemaError::InvalidValue {
        field: "setname",
        reason: "must be a string".to_owned(),
    })?;
    let custom_displayname = opt_string(&fields, "displayname")?;

    let species_value = fields.get("species").expect("checked above");
    if species_value.is_null() {
        return Err(SchemaError::InvalidValue {
            field: "species",
            reason: "must not be null".to_owned(),
        }
        .into());
    }
    let species_token = ref_token("species", species_value)?;
    let species_resolved = catalogs.pokedex.resolve(&species_token)?;
    if !species_resolved.exact {
        warnings.push(Advisory::AutocorrectedName {
            kind: EntryKind::Species,
            given: species_token.to_string(),
            assumed: species_resolved.entity.name.clone(),
        });
    }
    let species = species_resolved.entity;

    let mut tags = parse_tags(fields.get("tags"))?;

    let shiny = bool_field(&fields, "shiny", false)?;

    let ingamename = match opt_string(&fields, "ingamename")? {
        Some(name) => {
            let length = name.chars().count();
            if !(1..=10).contains(&length) {
                return Err(SchemaError::InvalidValue {
                    field: "ingamename",
                    reason: format!("must be between 1 and 10 characters long: {}", name),
                }
                .into());
            }
            name
        }
        None => default_ingamename(&species.name, shiny),
    };

    let happiness = parse_happiness(fields.get("happiness"))?;

    let ability =
        resolve_slot_list(&catalogs.abilities, "ability", fields.get("ability"), &mut warnings)?;
    let item = resolve_slot_list(&catalogs.items, "item", fields.get("item"), &mut warnings)?;
    let default_ball = Value::String("Poké".to_owned());
    let ball = resolve_slot_list(
        &catalogs.balls,
        "ball",
        Some(fields.get("ball").unwrap_or(&default_ball)),
        &mut warnings,
    )?;

    let gender = parse_genders(fields.get("gender"))?;
    let level = parse_level(fields.get("level"))?;
    let nature = resolve_nature(&catalogs.natures, fields.get("nature").expect("checked above"), &mut warnings)?;

    let iv_values = parse_stats("ivs", fields.get("ivs").expect("checked above"))?;
    if iv_values.iter().any(|&(_, value)| !(0..=31).contains(&value)) {
        return Err(SchemaError::IvOutOfRange.into());
    }
    let mut ivs = StatSpread::default();
    for (key, value) in iv_values {
        ivs.set(key, value as u16);
    }

    let ev_values = parse_stats("evs", fields.get("evs").expect("checked above"))?;
    if ev_values.iter().any(|&(_, value)| value < 0) {
        return Err(SchemaError::EvNegative.into());
    }
    if !suppressions.contains(&Suppression::InvalidEv) {
        let sum: i64 = ev_values.iter().map(|&(_, value)| value).sum();
        let violation = if ev_values.iter().any(|&(_, value)| value > 252) {
            Some(SchemaError::EvOverCap)
        } else if sum > 510 {
            Some(SchemaError::EvSumExceeded(sum as u32))
        } else {
            None
        };
        if let Some(err) = violation {
            if options.skip_ev_check {
                warnings.push(Advisory::SoftenedEvCheck(err));
            } else {
                return Err(err.into());
            }
        }
    }
    if !suppressions.contains(&Suppression::WastedEv) {
        for &(key, value) in &ev_values {
            if value % 4 != 0 {
                warnings.push(Advisory::WastedEvs {
                    stat: key,
                    value: value as u16,
                });
            }
        }
    }
    let mut evs = StatSpread::default();
    for (key, value) in ev_values {
        evs.set(key, value.clamp(0, u16::MAX as i64) as u16);
    }

    let moves = parse_moves(
        &catalogs.moves,
        fields.get("moves").expect("checked above"),
        &suppressions,
        &mut warnings,
    )?;

    let rarity = parse_rarity(fields.get("rarity"))?;
    if rarity > 10.0 {
        warnings.push(Advisory::SurprisingRarity(rarity));
    }

    let biddable = bool_field(&fields, "biddable", !shiny)?;
    let hidden = bool_field(&fields, "hidden", shiny)?;
    if biddable && hidden {
        warnings.push(Advisory::BiddableAndHidden);
    }
    if !suppressions.contains(&Suppression::PublicShiny) {
        if shiny && biddable {
            warnings.push(Advisory::ShinyAndBiddable);
        }
        if shiny && !hidden {
            warnings.push(Advisory::ShinyNotHidden);
        }
    }

    let displayname = custom_displayname
        .clone()
        .unwrap_or_else(|| species.name.clone());

    let form = parse_form(fields.get("form"), &species.name)?;

    let mut set = PokeSet {
        setname,
        species,
        ability,
        item,
        ball,
        gender,
        level,
        nature,
        ivs,
        evs,
        moves,
        stats: StatSpread::default(),
        rarity,
        happiness,
        shiny,
        biddable,
        hidden,
        form,
        displayname,
        ingamename,
        tags: Vec::new(),
        combinations: Vec::new(),
        separations: Vec::new(),
    };

    forms::apply_form_adjustments(&mut set, custom_displayname.is_some())?;
    if set.shiny && custom_displayname.is_none() {
        set.displayname.push_str(" (Shiny)");
    }
    stats::recalculate_stats(&mut set);

    append_auto_tags(&mut tags, &set);
    tags.sort();
    tags.dedup();
    set.tags = tags;

    let universe = constraint_universe(&set);
    set.combinations =
        parse_constraint_groups("combinations", fields.get("combinations"), &universe, &mut warnings)?;
    set.separations =
        parse_constraint_groups("separations", fields.get("separations"), &universe, &mut warnings)?;

    Ok(Populated { set, warnings })
}

fn ref_token(field: &'static str, value: &Value) -> SetResult<RefToken> {
    match value {
        Value::Null => Ok(RefToken::Null),
        Value::Number(number) => number
            .as_u64()
            .map(|index| RefToken::Index(index as usize))
            .ok_or_else(|| {
                SchemaError::InvalidValue {
                    field,
                    reason: format!("must be a non-negative number or a name, not {}", number),
                }
                .into()
            }),
        Value::String(name) => Ok(RefToken::Name(name.clone())),
        other => Err(SchemaError::InvalidValue {
            field,
            reason: format!("must be a number, a name or null, not {}", other),
        }
        .into()),
    }
}

fn opt_string(fields: &Map<String, Value>, field: &'static str) -> SetResult<Option<String>> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) if !value.is_empty() => Ok(Some(value.clone())),
        Some(Value::String(_)) => Err(SchemaError::InvalidValue {
            field,
            reason: "must not be empty".to_owned(),
        }
        .into()),
        Some(other) => Err(SchemaError::InvalidValue {
            field,
            reason: format!("must be a string, not {}", other),
        }
        .into()),
    }
}

fn bool_field(fields: &Map<String, Value>, field: &'static str, default: bool) -> SetResult<bool> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(value)) => Ok(*value),
        Some(other) => Err(SchemaError::InvalidValue {
            field,
            reason: format!("must be a boolean, not {}", other),
        }
        .into()),
    }
}

fn parse_suppressions(value: Option<&Value>) -> SetResult<HashSet<Suppression>> {
    let raw: Vec<Value> = match value {
        None | Some(Value::Null) => return Ok(HashSet::new()),
        Some(Value::Array(items)) => items.clone(),
        Some(other) => vec![other.clone()],
    };
    let mut suppressions = HashSet::new();
    for item in &raw {
        let Value::String(name) = item else {
            return Err(SchemaError::UnknownSuppression(item.to_string()).into());
        };
        let suppression = Suppression::parse(name)
            .ok_or_else(|| SchemaError::UnknownSuppression(name.clone()))?;
        if !suppressions.insert(suppression) {
            return Err(SchemaError::DuplicateSuppression(name.clone()).into());
        }
    }
    Ok(suppressions)
}

fn parse_tags(value: Option<&Value>) -> SetResult<Vec<String>> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_owned).ok_or_else(|| {
                    SchemaError::InvalidValue {
                        field: "tags",
                        reason: format!("must be a list of strings, contains {}", item),
                    }
                    .into()
                })
            })
            .collect(),
        Some(other) => Err(SchemaError::InvalidValue {
            field: "tags",
            reason: format!("must be a list of strings, not {}", other),
        }
        .into()),
    }
}

fn default_ingamename(species_name: &str, shiny: bool) -> String {
    let upper = species_name.to_uppercase();
    if shiny {
        let mut name: String = upper.chars().take(8).collect();
        name.push_str("-S");
        name
    } else {
        upper.chars().take(10).collect()
    }
}

fn parse_happiness(value: Option<&Value>) -> SetResult<u8> {
    match value {
        None | Some(Value::Null) => Ok(255),
        Some(Value::Number(number)) => match number.as_i64() {
            Some(value) if (0..=255).contains(&value) => Ok(value as u8),
            _ => Err(SchemaError::InvalidHappiness(number.to_string()).into()),
        },
        Some(other) => Err(SchemaError::InvalidHappiness(other.to_string()).into()),
    }
}

fn parse_level(value: Option<&Value>) -> SetResult<u8> {
    match value {
        None | Some(Value::Null) => Ok(100),
        Some(Value::Number(number)) => {
            let level = number.as_i64().ok_or_else(|| SchemaError::InvalidValue {
                field: "level",
                reason: format!("must be a whole number, not {}", number),
            })?;
            if !(1..=100).contains(&level) {
                return Err(SchemaError::InvalidLevel(level).into());
            }
            Ok(level as u8)
        }
        Some(other) => Err(SchemaError::InvalidValue {
            field: "level",
            reason: format!("must be a number, not {}", other),
        }
        .into()),
    }
}

fn parse_rarity(value: Option<&Value>) -> SetResult<f64> {
    match value {
        None | Some(Value::Null) => Ok(1.0),
        Some(Value::Number(number)) => {
            let rarity = number.as_f64().ok_or(SchemaError::InvalidRarity)?;
            if rarity < 0.0 {
                return Err(SchemaError::InvalidRarity.into());
            }
            Ok(rarity)
        }
        Some(_) => Err(SchemaError::InvalidRarity.into()),
    }
}

fn parse_genders(value: Option<&Value>) -> SetResult<Vec<Option<Gender>>> {
    let raw: Vec<Value> = match value {
        None | Some(Value::Null) => return Ok(vec![None]),
        Some(Value::Array(items)) => {
            if items.is_empty() {
                return Err(SchemaError::EmptyList { field: "gender" }.into());
            }
            items.clone()
        }
        Some(other) => vec![other.clone()],
    };
    let mut genders: Vec<Option<Gender>> = Vec::with_capacity(raw.len());
    for item in &raw {
        let gender = match item {
            Value::Null => None,
            Value::String(value) if value == "m" => Some(Gender::Male),
            Value::String(value) if value == "f" => Some(Gender::Female),
            other => return Err(SchemaError::InvalidGender(other.to_string()).into()),
        };
        if genders.contains(&gender) {
            let shown = gender.map_or_else(|| "null".to_owned(), |g| g.to_string());
            return Err(SchemaError::DuplicateEntries {
                field: "gender",
                names: vec![shown],
            }
            .into());
        }
        genders.push(gender);
    }
    if genders.len() > 1 && genders.contains(&None) {
        return Err(SchemaError::MixedGenderless.into());
    }
    Ok(genders)
}

/// Resolve a scalar-or-list slot field into a list of catalog entities.
/// An absent field means "the null entry only".
fn resolve_slot_list<T: NamedEntry>(
    catalog: &Catalog<T>,
    field: &'static str,
    value: Option<&Value>,
    warnings: &mut Vec<Advisory>,
) -> SetResult<Vec<T>> {
    let raw: Vec<Value> = match value {
        None => vec![Value::Null],
        Some(Value::Array(items)) => {
            if items.is_empty() {
                return Err(SchemaError::EmptyList { field }.into());
            }
            items.clone()
        }
        Some(other) => vec![other.clone()],
    };
    let mut resolved: Vec<T> = Vec::with_capacity(raw.len());
    let mut seen: HashSet<u16> = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for item in &raw {
        let token = ref_token(field, item)?;
        let entry = catalog.resolve(&token)?;
        if !entry.exact {
            warnings.push(Advisory::AutocorrectedName {
                kind: catalog.kind(),
                given: token.to_string(),
                assumed: entry.entity.name().unwrap_or_default().to_owned(),
            });
        }
        if !seen.insert(entry.entity.id()) {
            duplicates.push(entry.entity.name().unwrap_or("null").to_owned());
        }
        resolved.push(entry.entity);
    }
    if !duplicates.is_empty() {
        return Err(SchemaError::DuplicateEntries {
            field,
            names: duplicates,
        }
        .into());
    }
    Ok(resolved)
}

fn resolve_nature(
    catalog: &Catalog<Nature>,
    value: &Value,
    warnings: &mut Vec<Advisory>,
) -> SetResult<Nature> {
    if let Value::String(expr) = value {
        if NATURE_EFFECT.is_match(expr.trim()) {
            return nature_by_effect(catalog, expr.trim());
        }
    }
    let token = ref_token("nature", value)?;
    let resolved = catalog.resolve(&token)?;
    if !resolved.exact {
        warnings.push(Advisory::AutocorrectedName {
            kind: EntryKind::Nature,
            given: token.to_string(),
            assumed: resolved.entity.name.clone(),
        });
    }
    Ok(resolved.entity)
}

fn nature_by_effect(catalog: &Catalog<Nature>, expr: &str) -> SetResult<Nature> {
    let captures = NATURE_EFFECT.captures(expr).ok_or_else(|| SchemaError::InvalidValue {
        field: "nature",
        reason: format!("effect expression must look like \"+spA -spe\", not {}", expr),
    })?;
    let increased: StatKey = captures[1].parse().map_err(|_| SchemaError::InvalidValue {
        field: "nature",
        reason: format!("unrecognized stat key: {}", &captures[1]),
    })?;
    let decreased: StatKey = captures[2].parse().map_err(|_| SchemaError::InvalidValue {
        field: "nature",
        reason: format!("unrecognized stat key: {}", &captures[2]),
    })?;
    if increased == decreased {
        return Err(SchemaError::InvalidValue {
            field: "nature",
            reason: "increased and decreased stat must differ".to_owned(),
        }
        .into());
    }
    catalog
        .iter()
        .find(|nature| nature.increased == Some(increased) && nature.decreased == Some(decreased))
        .cloned()
        .ok_or_else(|| {
            ReferenceError::Unknown {
                kind: EntryKind::Nature,
                token: expr.to_owned(),
            }
            .into()
        })
}

fn parse_stats(field: &'static str, value: &Value) -> SetResult<[(StatKey, i64); 6]> {
    match value {
        Value::Number(number) => {
            let broadcast = number
                .as_i64()
                .ok_or(SchemaError::InvalidStatValue { field })?;
            Ok(StatKey::ALL.map(|key| (key, broadcast)))
        }
        Value::Object(map) => {
            if map.len() != 6
                || StatKey::ALL
                    .iter()
                    .any(|key| !map.contains_key(&key.to_string()))
            {
                return Err(SchemaError::MissingStatKeys { field }.into());
            }
            let mut values = [(StatKey::Hp, 0i64); 6];
            for (slot, key) in values.iter_mut().zip(StatKey::ALL) {
                let value = map
                    .get(&key.to_string())
                    .and_then(Value::as_i64)
                    .ok_or(SchemaError::InvalidStatValue { field })?;
                *slot = (key, value);
            }
            Ok(values)
        }
        _ => Err(SchemaError::InvalidValue {
            field,
            reason: format!("must be a number or a stat map, not {}", value),
        }
        .into()),
    }
}

fn parse_moves(
    catalog: &Catalog<MoveData>,
    value: &Value,
    suppressions: &HashSet<Suppression>,
    warnings: &mut Vec<Advisory>,
) -> SetResult<Vec<Vec<MoveData>>> {
    let slots: Vec<Value> = match value {
        Value::Array(items) => items.clone(),
        other => vec![other.clone()],
    };
    if !(1..=4).contains(&slots.len()) {
        return Err(SchemaError::InvalidMoveCount(slots.len()).into());
    }

    let mut moves: Vec<Vec<MoveData>> = Vec::with_capacity(slots.len());
    for (slot_index, slot) in slots.iter().enumerate() {
        let candidates: Vec<Value> = match slot {
            Value::Array(items) => {
                if items.is_empty() {
                    return Err(SchemaError::EmptyMoveSlot(slot_index).into());
                }
                items.clone()
            }
            other => vec![other.clone()],
        };
        let mut resolved: Vec<MoveData> = Vec::with_capacity(candidates.len());
        let mut seen: HashSet<u16> = HashSet::new();
        let mut duplicates: Vec<String> = Vec::new();
        for candidate in &candidates {
            let (token, pp_ups, fixed_pp) = parse_move_token(candidate)?;
            let entry = catalog.resolve(&token)?;
            if !entry.exact {
                warnings.push(Advisory::AutocorrectedName {
                    kind: EntryKind::Move,
                    given: token.to_string(),
                    assumed: entry.entity.name.clone(),
                });
            }
            let mut move_data = entry.entity;
            move_data.pp_ups = pp_ups;
            // a fixed PP replaces the catalog base before the PP-up
            // scaling, which rounds half up as the game does
            let base_pp = fixed_pp.unwrap_or(move_data.pp);
            move_data.pp = (base_pp * (5 + pp_ups) + 2) / 5;
            if !seen.insert(move_data.id) {
                duplicates.push(move_data.name.clone());
            }
            resolved.push(move_data);
        }
        if !duplicates.is_empty() {
            return Err(SchemaError::DuplicateEntries {
                field: "move",
                names: duplicates,
            }
            .into());
        }
        moves.push(resolved);
    }

    if !suppressions.contains(&Suppression::DuplicateMoves) {
        let mut fixed_slots: HashSet<u16> = HashSet::new();
        for slot in &moves {
            if let [only] = slot.as_slice() {
                if !fixed_slots.insert(only.id) {
                    warnings.push(Advisory::GuaranteedDuplicateMove(only.name.clone()));
                }
            }
        }
    }

    Ok(moves)
}

fn parse_move_token(value: &Value) -> SetResult<(RefToken, u32, Option<u32>)> {
    let Value::String(name) = value else {
        return Ok((ref_token("moves", value)?, 0, None));
    };
    let Some(captures) = PP_ANNOTATION.captures(name) else {
        return Ok((RefToken::Name(name.clone()), 0, None));
    };
    let stripped = name[..captures.get(0).map_or(0, |m| m.start())]
        .trim_end()
        .to_owned();
    let pp_ups = captures
        .get(1)
        .or_else(|| captures.get(3))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0);
    let fixed_pp = captures
        .get(2)
        .or_else(|| captures.get(4))
        .and_then(|m| m.as_str().parse::<u32>().ok());
    Ok((RefToken::Name(stripped), pp_ups, fixed_pp))
}

fn parse_form(value: Option<&Value>, species_name: &str) -> SetResult<u8> {
    let form = match value {
        None | Some(Value::Null) => 0u8,
        Some(Value::Number(number)) => match number.as_u64() {
            Some(form) if form <= u8::MAX as u64 => form as u8,
            _ => {
                return Err(SchemaError::InvalidForm {
                    species: species_name.to_owned(),
                    form: number.to_string(),
                }
                .into())
            }
        },
        Some(Value::String(name)) => {
            forms::form_number(species_name, name).ok_or_else(|| SchemaError::InvalidForm {
                species: species_name.to_owned(),
                form: name.clone(),
            })?
        }
        Some(other) => {
            return Err(SchemaError::InvalidValue {
                field: "form",
                reason: format!("must be a number or a form name, not {}", other),
            }
            .into())
        }
    };
    if form != 0 && forms::form_name(species_name, form).is_none() {
        return Err(SchemaError::UnknownForm {
            species: species_name.to_owned(),
            form,
        }
        .into());
    }
    Ok(form)
}

fn append_auto_tags(tags: &mut Vec<String>, set: &PokeSet) {
    if set.biddable {
        tags.push("biddable".to_owned());
    }
    if set.hidden {
        tags.push("hidden".to_owned());
    }
    if set.shiny {
        tags.push("shiny".to_owned());
    }
    tags.push(format!("species+{}", set.species.id));
    tags.push(format!("species+{}", set.species.name));
    for species_type in &set.species.types {
        tags.push(format!("type+{}", species_type));
    }
    if !set.species.color.is_empty() {
        tags.push(format!("color+{}", set.species.color));
    }
    tags.push(format!("level+{}", set.level));
    tags.push(format!("form+{}", set.form));
    for ability in &set.ability {
        if let Some(name) = &ability.name {
            tags.push(format!("ability+{}", name));
        }
    }
    tags.push(format!("setname+{}", set.setname));
}

/// Everything a set can end up carrying, as constraint tokens see it:
/// move names (a move offered in several slots is still one token),
/// item candidates (null included) and ability candidates. A name
/// shared across kinds stays duplicated and is ambiguous.
fn constraint_universe(set: &PokeSet) -> Vec<Option<String>> {
    let mut universe: Vec<Option<String>> = Vec::new();
    let mut move_names: HashSet<&str> = HashSet::new();
    for slot in &set.moves {
        for move_data in slot {
            if move_names.insert(move_data.name.as_str()) {
                universe.push(Some(move_data.name.clone()));
            }
        }
    }
    for item in &set.item {
        universe.push(item.name.clone());
    }
    for ability in &set.ability {
        universe.push(ability.name.clone());
    }
    universe
}

fn parse_constraint_groups(
    field: &'static str,
    value: Option<&Value>,
    universe: &[Option<String>],
    warnings: &mut Vec<Advisory>,
) -> SetResult<Vec<Vec<Option<String>>>> {
    let groups_value = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(groups_value) => groups_value,
    };
    let Value::Array(groups_raw) = groups_value else {
        return Err(SchemaError::ConstraintShape {
            field,
            reason: "must be a list of lists.",
        }
        .into());
    };

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut has_null = false;
    for name in universe {
        match name {
            Some(name) => *counts.entry(name.as_str()).or_insert(0) += 1,
            None => has_null = true,
        }
    }

    let mut groups: Vec<Vec<Option<String>>> = Vec::with_capacity(groups_raw.len());
    let mut missing: Vec<String> = Vec::new();
    for group_raw in groups_raw {
        let Value::Array(tokens) = group_raw else {
            return Err(SchemaError::ConstraintShape {
                field,
                reason: "must be a list of lists.",
            }
            .into());
        };
        let mut group: Vec<Option<String>> = Vec::with_capacity(tokens.len());
        for token in tokens {
            match token {
                Value::Null => {
                    if has_null {
                        group.push(None);
                    } else {
                        missing.push("null".to_owned());
                    }
                }
                Value::String(name) => match counts.get(name.as_str()).copied().unwrap_or(0) {
                    1 => group.push(Some(name.clone())),
                    0 => {
                        match fuzzy_constraint_match(name, &counts) {
                            FuzzyMatch::One(assumed) => {
                                if resolver::is_difference_significant(name, &assumed) {
                                    warnings.push(Advisory::AutocorrectedConstraint {
                                        field,
                                        given: name.clone(),
                                        assumed: assumed.clone(),
                                    });
                                }
                                group.push(Some(assumed));
                            }
                            FuzzyMatch::Ambiguous => {
                                return Err(SchemaError::AmbiguousConstraint {
                                    field,
                                    token: name.clone(),
                                }
                                .into())
                            }
                            FuzzyMatch::None => missing.push(name.clone()),
                        }
                    }
                    _ => {
                        return Err(SchemaError::AmbiguousConstraint {
                            field,
                            token: name.clone(),
                        }
                        .into())
                    }
                },
                _ => {
                    return Err(SchemaError::ConstraintShape {
                        field,
                        reason: "items must be strings or null",
                    }
                    .into())
                }
            }
        }
        groups.push(group);
    }

    if !missing.is_empty() {
        missing.sort();
        missing.dedup();
        return Err(SchemaError::UnresolvedConstraint { field, missing }.into());
    }
    Ok(groups)
}

enum FuzzyMatch {
    One(String),
    Ambiguous,
    None,
}

fn fuzzy_constraint_match(token: &str, counts: &HashMap<&str, usize>) -> FuzzyMatch {
    let mut best_score = 0.0f64;
    let mut best: Vec<&str> = Vec::new();
    for &candidate in counts.keys() {
        let score = resolver::similarity(token, candidate);
        if score > best_score {
            best_score = score;
            best.clear();
        }
        if score >= best_score {
            best.push(candidate);
        }
    }
    if best_score < CONSTRAINT_SIMILARITY {
        return FuzzyMatch::None;
    }
    match best.as_slice() {
        [only] if counts[only] == 1 => FuzzyMatch::One((*only).to_owned()),
        _ => FuzzyMatch::Ambiguous,
    }
}
