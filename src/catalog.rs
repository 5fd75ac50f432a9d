use schema::{Ability, Item, MoveData, Nature, Species};
use serde::de::DeserializeOwned;
use std::fmt;
use std::fs;
use std::path::Path;

/// Which reference domain a catalog (and thus a resolution error)
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Species,
    Ability,
    Item,
    Ball,
    Move,
    Nature,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryKind::Species => "species",
            EntryKind::Ability => "ability",
            EntryKind::Item => "item",
            EntryKind::Ball => "ball",
            EntryKind::Move => "move",
            EntryKind::Nature => "nature",
        };
        write!(f, "{}", name)
    }
}

/// A catalog entity that can be looked up by id and name.
///
/// `name` returns `None` for the null entry some catalogs carry at id 0
/// ("no ability", "no item").
pub trait NamedEntry: Clone {
    fn id(&self) -> u16;
    fn name(&self) -> Option<&str>;
}

impl NamedEntry for Species {
    fn id(&self) -> u16 {
        self.id
    }
    fn name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }
}

impl NamedEntry for Ability {
    fn id(&self) -> u16 {
        self.id
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl NamedEntry for Item {
    fn id(&self) -> u16 {
        self.id
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl NamedEntry for MoveData {
    fn id(&self) -> u16 {
        self.id
    }
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl NamedEntry for Nature {
    fn id(&self) -> u16 {
        self.id
    }
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// How a catalog's entry names are keyed for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    /// Match on the name as stored
    Plain,
    /// Match on a diacritic-folded, gender-glyph-mapped form
    /// (species names, so `nidoran-m` finds `Nidoran♂`)
    Normalized,
    /// Match on the name with a category suffix stripped
    /// (ball names are stored as "... Ball" but referenced without it)
    StripSuffix(&'static str),
}

/// An immutable, pre-loaded reference table for one domain.
///
/// Entries are frozen at construction; every lookup that hands an entry
/// to a record clones it first, so catalog data is never mutated by
/// record-local overrides.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    kind: EntryKind,
    style: NameStyle,
    entries: Vec<T>,
}

impl<T: NamedEntry> Catalog<T> {
    pub fn new(kind: EntryKind, style: NameStyle, entries: Vec<T>) -> Self {
        Catalog {
            kind,
            style,
            entries,
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn style(&self) -> NameStyle {
        self.style
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Positional lookup. Entry position doubles as the stable id for
    /// integer tokens in raw records.
    pub fn by_index(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

/// The bundle of catalogs the pipeline resolves against.
pub struct Catalogs {
    pub pokedex: Catalog<Species>,
    pub abilities: Catalog<Ability>,
    pub items: Catalog<Item>,
    pub balls: Catalog<Item>,
    pub moves: Catalog<MoveData>,
    pub natures: Catalog<Nature>,
}

impl Catalogs {
    pub fn new(
        pokedex: Vec<Species>,
        abilities: Vec<Ability>,
        items: Vec<Item>,
        balls: Vec<Item>,
        moves: Vec<MoveData>,
        natures: Vec<Nature>,
    ) -> Self {
        Catalogs {
            pokedex: Catalog::new(EntryKind::Species, NameStyle::Normalized, pokedex),
            abilities: Catalog::new(EntryKind::Ability, NameStyle::Plain, abilities),
            items: Catalog::new(EntryKind::Item, NameStyle::Plain, items),
            balls: Catalog::new(EntryKind::Ball, NameStyle::StripSuffix(" Ball"), balls),
            moves: Catalog::new(EntryKind::Move, NameStyle::Plain, moves),
            natures: Catalog::new(EntryKind::Nature, NameStyle::Plain, natures),
        }
    }

    /// Load all catalogs from RON files in the data directory.
    pub fn load(data_path: &Path) -> Result<Catalogs, Box<dyn std::error::Error>> {
        if !data_path.exists() {
            return Err(format!(
                "Catalog data directory not found: {}",
                data_path.display()
            )
            .into());
        }

        Ok(Catalogs::new(
            load_entries(data_path, "pokedex.ron")?,
            load_entries(data_path, "abilities.ron")?,
            load_entries(data_path, "items.ron")?,
            load_entries(data_path, "balls.ron")?,
            load_entries(data_path, "moves.ron")?,
            load_entries(data_path, "natures.ron")?,
        ))
    }
}

fn load_entries<T: DeserializeOwned>(
    data_path: &Path,
    file: &str,
) -> Result<Vec<T>, Box<dyn std::error::Error>> {
    let path = data_path.join(file);
    let content = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let entries: Vec<T> = ron::from_str(&content)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
    Ok(entries)
}
