//! Pokémon Set Pipeline
//!
//! Validation, enrichment and stochastic instantiation of Pokémon set
//! records: raw mappings are resolved against reference catalogs with
//! fuzzy name correction, checked against the full record schema,
//! enriched with derived data (stats, tags, form adjustments), and
//! finally sampled into concrete Pokémon under combination/separation
//! constraints.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod catalog;
pub mod constraints;
pub mod errors;
pub mod forms;
pub mod instantiate;
pub mod populate;
pub mod random;
pub mod redact;
pub mod resolver;
pub mod set;
pub mod stats;
pub mod suppress;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pokeset` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export all core data definitions and static enums.
pub use schema::{
    Ability,
    Gender,
    Item,
    MoveCategory,
    MoveData,
    Nature,
    PokemonType,
    Species,
    StatKey,
    StatSpread,
};

// --- From this crate's modules (`src/`) ---

// Core pipeline operations.
pub use instantiate::{fix_moves, instantiate_set, instantiate_set_with, DEFAULT_ATTEMPTS};
pub use populate::populate_set;
pub use random::{generate_random_instance, generate_random_set};
pub use redact::redact_instance;
pub use stats::{calculate_stat, compute_stats, recalculate_stats};

// Core runtime types.
pub use catalog::{Catalog, Catalogs, EntryKind, NameStyle, NamedEntry};
pub use constraints::satisfies_restrictions;
pub use resolver::{RefToken, Resolved};
pub use set::{PokeSet, PokemonInstance, Populated, PopulateOptions};
pub use suppress::Suppression;

// Crate-specific error and result types.
pub use errors::{Advisory, ReferenceError, SchemaError, SetError, SetResult};
