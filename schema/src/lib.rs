// Pokeset Schema - Shared type definitions
// This crate contains the core enums and catalog entity structs that are
// shared between the pokeset pipeline crate and any tooling that works
// with serialized sets and instances.

// Re-export the main types
pub use entities::*;
pub use pokemon_types::*;
pub use stats::*;

pub mod entities;
pub mod pokemon_types;
pub mod stats;
