use crate::errors::{SchemaError, SetResult};
use crate::set::PokeSet;
use schema::{PokemonType, StatSpread};

const DEOXYS_FORMS: [&str; 4] = ["Normal", "Attack", "Defense", "Speed"];
const UNOWN_FORMS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ!?";
const BURMY_WORMADAM_FORMS: [&str; 3] = ["Plant", "Sandy", "Trash"];
const SHELLOS_GASTRODON_FORMS: [&str; 2] = ["West", "East"];

const DEOXYS_BASESTATS: [StatSpread; 4] = [
    StatSpread { hp: 50, atk: 150, def: 50, sp_a: 150, sp_d: 50, spe: 150 },
    StatSpread { hp: 50, atk: 180, def: 20, sp_a: 180, sp_d: 20, spe: 150 },
    StatSpread { hp: 50, atk: 70, def: 160, sp_a: 70, sp_d: 160, spe: 90 },
    StatSpread { hp: 50, atk: 95, def: 90, sp_a: 95, sp_d: 90, spe: 180 },
];

const WORMADAM_BASESTATS: [StatSpread; 3] = [
    StatSpread { hp: 60, atk: 59, def: 85, sp_a: 79, sp_d: 105, spe: 36 },
    StatSpread { hp: 60, atk: 79, def: 105, sp_a: 59, sp_d: 85, spe: 36 },
    StatSpread { hp: 60, atk: 69, def: 95, sp_a: 69, sp_d: 95, spe: 36 },
];

const WORMADAM_TYPES: [PokemonType; 3] =
    [PokemonType::Grass, PokemonType::Ground, PokemonType::Steel];

/// The form names a species may take, ordered by form number. `None`
/// for species without forms or out-of-range numbers.
pub fn form_name(species: &str, form: u8) -> Option<String> {
    let form = form as usize;
    match species {
        "Deoxys" => DEOXYS_FORMS.get(form).map(|s| s.to_string()),
        "Unown" => UNOWN_FORMS.chars().nth(form).map(|c| c.to_string()),
        "Burmy" | "Wormadam" => BURMY_WORMADAM_FORMS.get(form).map(|s| s.to_string()),
        "Shellos" | "Gastrodon" => {
            SHELLOS_GASTRODON_FORMS.get(form).map(|s| s.to_string())
        }
        _ => None,
    }
}

/// Reverse lookup of a form name (case-insensitive on the first letter,
/// as form names are single title-cased words).
pub fn form_number(species: &str, formname: &str) -> Option<u8> {
    let formname = titlecase(formname);
    let position = match species {
        "Deoxys" => DEOXYS_FORMS.iter().position(|&n| n == formname),
        "Unown" => UNOWN_FORMS.chars().position(|c| c.to_string() == formname),
        "Burmy" | "Wormadam" => {
            BURMY_WORMADAM_FORMS.iter().position(|&n| n == formname)
        }
        "Shellos" | "Gastrodon" => {
            SHELLOS_GASTRODON_FORMS.iter().position(|&n| n == formname)
        }
        _ => None,
    };
    position.map(|p| p as u8)
}

fn titlecase(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
        None => String::new(),
    }
}

/// The type conferred by a held plate on a Multitype species (and on
/// the move Judgment). No plate, or any other item, means Normal.
pub fn multitype_type(item_name: Option<&str>) -> PokemonType {
    match item_name {
        Some("Meadow Plate") => PokemonType::Grass,
        Some("Flame Plate") => PokemonType::Fire,
        Some("Splash Plate") => PokemonType::Water,
        Some("Sky Plate") => PokemonType::Flying,
        Some("Insect Plate") => PokemonType::Bug,
        Some("Toxic Plate") => PokemonType::Poison,
        Some("Zap Plate") => PokemonType::Electric,
        Some("Mind Plate") => PokemonType::Psychic,
        Some("Stone Plate") => PokemonType::Rock,
        Some("Earth Plate") => PokemonType::Ground,
        Some("Dread Plate") => PokemonType::Dark,
        Some("Spooky Plate") => PokemonType::Ghost,
        Some("Iron Plate") => PokemonType::Steel,
        Some("Fist Plate") => PokemonType::Fighting,
        Some("Icicle Plate") => PokemonType::Ice,
        Some("Draco Plate") => PokemonType::Dragon,
        Some("Pixie Plate") => PokemonType::Fairy,
        _ => PokemonType::Normal,
    }
}

/// Display color associated with an elemental type, used when a
/// species' color follows its plate-derived type.
pub fn type_color(move_type: PokemonType) -> &'static str {
    match move_type {
        PokemonType::Normal => "White",
        PokemonType::Fire => "Red",
        PokemonType::Water => "Blue",
        PokemonType::Electric => "Yellow",
        PokemonType::Grass => "Green",
        PokemonType::Ice => "Blue",
        PokemonType::Fighting => "Brown",
        PokemonType::Poison => "Purple",
        PokemonType::Ground => "Brown",
        PokemonType::Flying => "Blue",
        PokemonType::Psychic => "Pink",
        PokemonType::Bug => "Green",
        PokemonType::Rock => "Brown",
        PokemonType::Ghost => "Purple",
        PokemonType::Dragon => "Purple",
        PokemonType::Dark => "Black",
        PokemonType::Steel => "Gray",
        PokemonType::Fairy => "Pink",
        PokemonType::Unknown => "White",
    }
}

/// Natural Gift type and power for a held berry. Non-berries (and no
/// item) have no effect.
pub fn natural_gift_effect(item_name: Option<&str>) -> Option<(PokemonType, u32)> {
    use PokemonType::*;
    let (move_type, power) = match item_name? {
        "Cheri Berry" => (Fire, 60),
        "Chesto Berry" => (Water, 60),
        "Pecha Berry" => (Electric, 60),
        "Rawst Berry" => (Grass, 60),
        "Aspear Berry" => (Ice, 60),
        "Leppa Berry" => (Fighting, 60),
        "Oran Berry" => (Poison, 60),
        "Persim Berry" => (Ground, 60),
        "Lum Berry" => (Flying, 60),
        "Sitrus Berry" => (Psychic, 60),
        "Figy Berry" => (Bug, 60),
        "Wiki Berry" => (Rock, 60),
        "Mago Berry" => (Ghost, 60),
        "Aguav Berry" => (Dragon, 60),
        "Iapapa Berry" => (Dark, 60),
        "Razz Berry" => (Steel, 60),
        "Bluk Berry" => (Fire, 60),
        "Nanab Berry" => (Water, 60),
        "Wepear Berry" => (Electric, 60),
        "Pinap Berry" => (Grass, 60),
        "Occa Berry" => (Fire, 60),
        "Passho Berry" => (Water, 60),
        "Wacan Berry" => (Electric, 60),
        "Rindo Berry" => (Grass, 60),
        "Yache Berry" => (Ice, 60),
        "Chople Berry" => (Fighting, 60),
        "Kebia Berry" => (Poison, 60),
        "Shuca Berry" => (Ground, 60),
        "Coba Berry" => (Flying, 60),
        "Payapa Berry" => (Psychic, 60),
        "Tanga Berry" => (Bug, 60),
        "Charti Berry" => (Rock, 60),
        "Kasib Berry" => (Ghost, 60),
        "Haban Berry" => (Dragon, 60),
        "Colbur Berry" => (Dark, 60),
        "Babiri Berry" => (Steel, 60),
        "Chilan Berry" => (Normal, 60),
        "Pomeg Berry" => (Ice, 70),
        "Kelpsy Berry" => (Fighting, 70),
        "Qualot Berry" => (Poison, 70),
        "Hondew Berry" => (Ground, 70),
        "Grepa Berry" => (Flying, 70),
        "Tamato Berry" => (Psychic, 70),
        "Cornn Berry" => (Bug, 70),
        "Magost Berry" => (Rock, 70),
        "Rabuta Berry" => (Ghost, 70),
        "Nomel Berry" => (Dragon, 70),
        "Spelon Berry" => (Dark, 70),
        "Pamtre Berry" => (Steel, 70),
        "Watmel Berry" => (Fire, 70),
        "Durin Berry" => (Water, 70),
        "Belue Berry" => (Electric, 70),
        "Liechi Berry" => (Grass, 80),
        "Ganlon Berry" => (Ice, 80),
        "Salac Berry" => (Fighting, 80),
        "Petaya Berry" => (Poison, 80),
        "Apicot Berry" => (Ground, 80),
        "Lansat Berry" => (Flying, 80),
        "Starf Berry" => (Psychic, 80),
        "Enigma Berry" => (Bug, 80),
        "Micle Berry" => (Rock, 80),
        "Custap Berry" => (Ghost, 80),
        "Jaboca Berry" => (Dragon, 80),
        "Rowap Berry" => (Dark, 80),
        _ => return None,
    };
    Some((move_type, power))
}

struct AdjustContext {
    custom_displayname: bool,
}

type AdjustFn = fn(&mut PokeSet, &AdjustContext) -> SetResult<()>;

/// Species-specific derived adjustments, dispatched by species name
/// after the generic form handling. Keeping these in one table keeps
/// the generic validation path free of hard-coded species.
const FORM_ADJUSTMENTS: &[(&str, AdjustFn)] = &[
    ("Deoxys", adjust_deoxys),
    ("Wormadam", adjust_wormadam),
    ("Burmy", adjust_burmy),
    ("Shellos", adjust_shellos_line),
    ("Gastrodon", adjust_shellos_line),
    ("Arceus", adjust_arceus),
];

/// Post-formula stat overrides, dispatched by species name.
const STAT_OVERRIDES: &[(&str, fn(&mut StatSpread))] = &[("Shedinja", fixed_one_hp)];

fn fixed_one_hp(stats: &mut StatSpread) {
    stats.hp = 1;
}

/// Apply the display-name form suffix and any species-specific
/// adjustment. Runs before the stat formula so base-stat swaps take
/// effect.
pub(crate) fn apply_form_adjustments(
    set: &mut PokeSet,
    custom_displayname: bool,
) -> SetResult<()> {
    if let Some(formname) = form_name(&set.species.name, set.form) {
        if !custom_displayname {
            set.displayname = format!("{} {}", set.species.name, formname);
        }
    }

    let ctx = AdjustContext { custom_displayname };
    if let Some((_, adjust)) = FORM_ADJUSTMENTS
        .iter()
        .find(|(name, _)| *name == set.species.name)
    {
        adjust(set, &ctx)?;
    }
    Ok(())
}

/// Apply per-species stat overrides after the formula ran.
pub(crate) fn apply_stat_overrides(set: &mut PokeSet) {
    if let Some((_, adjust)) = STAT_OVERRIDES
        .iter()
        .find(|(name, _)| *name == set.species.name)
    {
        adjust(&mut set.stats);
    }
}

fn adjust_deoxys(set: &mut PokeSet, _ctx: &AdjustContext) -> SetResult<()> {
    if let Some(basestats) = DEOXYS_BASESTATS.get(set.form as usize) {
        set.species.basestats = *basestats;
    }
    Ok(())
}

fn adjust_wormadam(set: &mut PokeSet, _ctx: &AdjustContext) -> SetResult<()> {
    let form = set.form as usize;
    if let Some(basestats) = WORMADAM_BASESTATS.get(form) {
        set.species.basestats = *basestats;
    }
    if let Some(&secondary) = WORMADAM_TYPES.get(form) {
        set.species.types = vec![PokemonType::Bug, secondary];
    }
    if let Some(&color) = ["Green", "Brown", "Pink"].get(form) {
        set.species.color = color.to_string();
    }
    Ok(())
}

fn adjust_burmy(set: &mut PokeSet, _ctx: &AdjustContext) -> SetResult<()> {
    if let Some(&color) = ["Green", "Brown", "Pink"].get(set.form as usize) {
        set.species.color = color.to_string();
    }
    Ok(())
}

fn adjust_shellos_line(set: &mut PokeSet, _ctx: &AdjustContext) -> SetResult<()> {
    if let Some(&color) = ["Pink", "Blue"].get(set.form as usize) {
        set.species.color = color.to_string();
    }
    Ok(())
}

/// Arceus' type and color follow the held plate, so the item slot must
/// not offer a choice.
fn adjust_arceus(set: &mut PokeSet, ctx: &AdjustContext) -> SetResult<()> {
    if set.item.len() > 1 {
        return Err(SchemaError::FixedItemRequired {
            species: set.species.name.clone(),
        }
        .into());
    }
    let plate = set.item.first().and_then(|item| item.name.as_deref());
    let arceus_type = multitype_type(plate);
    set.species.types = vec![arceus_type];
    set.species.color = type_color(arceus_type).to_string();
    if !ctx.custom_displayname {
        set.displayname = format!("{} {}", set.species.name, arceus_type);
    }
    Ok(())
}
