use crate::catalog::EntryKind;
use schema::StatKey;
use std::fmt;

/// Main error type for the set validation pipeline.
///
/// Validation either fully succeeds or fails with one of these; no
/// partially populated set is ever returned.
#[derive(Debug, Clone, PartialEq)]
pub enum SetError {
    /// A raw reference could not be resolved against its catalog
    Reference(ReferenceError),
    /// A field violated the record schema
    Schema(SchemaError),
}

/// Errors from resolving a raw token (index, name or null) against a
/// catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceError {
    /// Integer token outside the catalog bounds
    InvalidIndex { kind: EntryKind, index: usize },
    /// No exact match and no fuzzy candidate scored high enough
    Unknown { kind: EntryKind, token: String },
    /// Several fuzzy candidates were equally plausible
    Ambiguous {
        kind: EntryKind,
        token: String,
        candidates: Vec<String>,
    },
    /// The resolved entry is not a member of the expected category
    /// (e.g. an item that is not a ball)
    NotInCategory { kind: EntryKind, name: String },
}

/// Errors from the record schema checks.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaError {
    MissingFields(Vec<String>),
    UnknownFields(Vec<String>),
    /// Catch-all for a field of the wrong type or with an invalid value
    InvalidValue {
        field: &'static str,
        reason: String,
    },
    EmptyList {
        field: &'static str,
    },
    EmptyMoveSlot(usize),
    DuplicateEntries {
        field: &'static str,
        names: Vec<String>,
    },
    InvalidGender(String),
    MixedGenderless,
    InvalidLevel(i64),
    InvalidHappiness(String),
    MissingStatKeys {
        field: &'static str,
    },
    InvalidStatValue {
        field: &'static str,
    },
    IvOutOfRange,
    EvNegative,
    EvOverCap,
    EvSumExceeded(u32),
    InvalidMoveCount(usize),
    InvalidRarity,
    InvalidForm {
        species: String,
        form: String,
    },
    UnknownForm {
        species: String,
        form: u8,
    },
    /// Species whose type derives from the held item must not offer an
    /// item choice
    FixedItemRequired {
        species: String,
    },
    UnknownSuppression(String),
    DuplicateSuppression(String),
    ConstraintShape {
        field: &'static str,
        reason: &'static str,
    },
    AmbiguousConstraint {
        field: &'static str,
        token: String,
    },
    UnresolvedConstraint {
        field: &'static str,
        missing: Vec<String>,
    },
}

/// Non-fatal advisories collected during validation. These never abort
/// processing; callers may surface or ignore them.
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    NonLowercaseKey(String),
    /// A fuzzy correction was accepted for a catalog reference
    AutocorrectedName {
        kind: EntryKind,
        given: String,
        assumed: String,
    },
    /// A fuzzy correction was accepted for a constraint-group token
    AutocorrectedConstraint {
        field: &'static str,
        given: String,
        assumed: String,
    },
    WastedEvs {
        stat: StatKey,
        value: u16,
    },
    /// An EV violation downgraded by the skip-ev-check flag
    SoftenedEvCheck(SchemaError),
    SurprisingRarity(f64),
    BiddableAndHidden,
    ShinyAndBiddable,
    ShinyNotHidden,
    /// The same move is the sole candidate of more than one slot
    GuaranteedDuplicateMove(String),
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetError::Reference(err) => write!(f, "{}", err),
            SetError::Schema(err) => write!(f, "{}", err),
        }
    }
}

impl fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceError::InvalidIndex { kind, index } => {
                write!(f, "Invalid {} number: {}", kind, index)
            }
            ReferenceError::Unknown { kind, token } => {
                write!(f, "Unrecognized {}: {}", kind, token)
            }
            ReferenceError::Ambiguous {
                kind,
                token,
                candidates,
            } => write!(
                f,
                "Unrecognized {}: {}, autocorrection was ambiguous: {}",
                kind,
                token,
                candidates.join(", ")
            ),
            ReferenceError::NotInCategory { kind, name } => {
                write!(f, "Invalid {}: {}", kind, name)
            }
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::MissingFields(fields) => write!(
                f,
                "pokeset is missing obligatory fields: {}",
                fields.join(", ")
            ),
            SchemaError::UnknownFields(fields) => write!(
                f,
                "pokeset has unrecognized fields: {}",
                fields.join(", ")
            ),
            SchemaError::InvalidValue { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            SchemaError::EmptyList { field } => {
                write!(f, "List of possible {} entries cannot be empty.", field)
            }
            SchemaError::EmptyMoveSlot(slot) => write!(
                f,
                "List of possible moves in slot {} cannot be empty.",
                slot + 1
            ),
            SchemaError::DuplicateEntries { field, names } => write!(
                f,
                "All {} entries supplied must be unique: {}",
                field,
                names.join(", ")
            ),
            SchemaError::InvalidGender(value) => write!(
                f,
                "gender can only be 'm', 'f' or not set (null), but not {}",
                value
            ),
            SchemaError::MixedGenderless => {
                write!(f, "non-gender cannot be mixed with m/f")
            }
            SchemaError::InvalidLevel(level) => write!(
                f,
                "level must be a number between 1 and 100, but is {}",
                level
            ),
            SchemaError::InvalidHappiness(value) => write!(
                f,
                "happiness must be a number between 0 and 255, not {}",
                value
            ),
            SchemaError::MissingStatKeys { field } => write!(
                f,
                "{} must contain the following keys: hp, atk, def, spA, spD, spe",
                field
            ),
            SchemaError::InvalidStatValue { field } => {
                write!(f, "Invalid value in {}", field)
            }
            SchemaError::IvOutOfRange => write!(f, "All IVs must be between 0 and 31."),
            SchemaError::EvNegative => write!(f, "All EVs must be >= 0."),
            SchemaError::EvOverCap => write!(f, "All EVs must be <= 252."),
            SchemaError::EvSumExceeded(sum) => write!(
                f,
                "Sum of EV must not be larger than 510, but is {}",
                sum
            ),
            SchemaError::InvalidMoveCount(count) => write!(
                f,
                "Pokémon must have between 1 and 4 moves, but has {}",
                count
            ),
            SchemaError::InvalidRarity => {
                write!(f, "rarity must be a number greater or equal to 0.0")
            }
            SchemaError::InvalidForm { species, form } => {
                write!(f, "Unrecognized form {} for species {}", form, species)
            }
            SchemaError::UnknownForm { species, form } => {
                write!(f, "Species {} has no form {}.", species, form)
            }
            SchemaError::FixedItemRequired { species } => {
                write!(f, "{} currently must have a fixed item", species)
            }
            SchemaError::UnknownSuppression(value) => {
                write!(f, "{} is not a recognized suppression.", value)
            }
            SchemaError::DuplicateSuppression(value) => {
                write!(f, "Suppression is specified twice: {}", value)
            }
            SchemaError::ConstraintShape { field, reason } => {
                write!(f, "{} {}", field, reason)
            }
            SchemaError::AmbiguousConstraint { field, token } => {
                write!(f, "Can't use {} in {}, as it is ambiguous.", token, field)
            }
            SchemaError::UnresolvedConstraint { field, missing } => write!(
                f,
                "All things referenced in {} must be present in set. Missing: {}",
                field,
                missing.join(", ")
            ),
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::NonLowercaseKey(key) => {
                write!(f, "Key should be all lowercase: {}", key)
            }
            Advisory::AutocorrectedName {
                kind,
                given,
                assumed,
            } => write!(
                f,
                "Didn't recognize {} {}, but assumed {}.",
                kind, given, assumed
            ),
            Advisory::AutocorrectedConstraint {
                field,
                given,
                assumed,
            } => write!(
                f,
                "Didn't recognize {} {}, but assumed {}.",
                field, given, assumed
            ),
            Advisory::WastedEvs { stat, value } => write!(
                f,
                "EV for {} is {}, which is not a multiple of 4 (wasted points)",
                stat, value
            ),
            Advisory::SoftenedEvCheck(err) => write!(f, "{}", err),
            Advisory::SurprisingRarity(rarity) => write!(
                f,
                "rarity is {}, which is surprisingly high. Note that 1.0 is the default \
                 and high values mean the Pokémon gets chosen more often.",
                rarity
            ),
            Advisory::BiddableAndHidden => write!(
                f,
                "Set is biddable, but also hidden, which doesn't make sense."
            ),
            Advisory::ShinyAndBiddable => write!(
                f,
                "Set is shiny, but also biddable, which means it can be used in token \
                 matches. Is this intended?"
            ),
            Advisory::ShinyNotHidden => write!(
                f,
                "Set is shiny, but not hidden, which means it is publicly visible. \
                 Is this intended?"
            ),
            Advisory::GuaranteedDuplicateMove(name) => write!(
                f,
                "Move {} is guaranteed to occupy multiple slots (possible stallmate \
                 due to PP-bug).",
                name
            ),
        }
    }
}

impl std::error::Error for SetError {}
impl std::error::Error for ReferenceError {}
impl std::error::Error for SchemaError {}

impl From<ReferenceError> for SetError {
    fn from(err: ReferenceError) -> Self {
        SetError::Reference(err)
    }
}

impl From<SchemaError> for SetError {
    fn from(err: SchemaError) -> Self {
        SetError::Schema(err)
    }
}

/// Result type alias for the validation pipeline.
pub type SetResult<T> = Result<T, SetError>;
