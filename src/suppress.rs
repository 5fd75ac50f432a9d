use std::fmt;

/// Advisory-suppression flags a set may declare in its `suppressions`
/// field. Each flag silences one class of warning for that set only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suppression {
    /// Silence the EV range/total checks entirely
    InvalidEv,
    /// Silence the non-multiple-of-4 EV warning
    WastedEv,
    /// Silence the guaranteed-duplicate-move warning
    DuplicateMoves,
    /// Silence the shiny-visibility warnings
    PublicShiny,
}

impl Suppression {
    pub fn parse(value: &str) -> Option<Suppression> {
        match value {
            "invalid-ev" => Some(Suppression::InvalidEv),
            "wasted-ev" => Some(Suppression::WastedEv),
            "duplicate-moves" => Some(Suppression::DuplicateMoves),
            "public-shiny" => Some(Suppression::PublicShiny),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Suppression::InvalidEv => "invalid-ev",
            Suppression::WastedEv => "wasted-ev",
            Suppression::DuplicateMoves => "duplicate-moves",
            Suppression::PublicShiny => "public-shiny",
        }
    }
}

impl fmt::Display for Suppression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
