use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The six stat keys, in the default presentation order.
///
/// Serialized names match the wire format of raw records and catalog data
/// (`hp`, `atk`, `def`, `spA`, `spD`, `spe`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum StatKey {
    #[serde(rename = "hp")]
    #[strum(serialize = "hp")]
    Hp,
    #[serde(rename = "atk")]
    #[strum(serialize = "atk")]
    Atk,
    #[serde(rename = "def")]
    #[strum(serialize = "def")]
    Def,
    #[serde(rename = "spA")]
    #[strum(serialize = "spA")]
    SpA,
    #[serde(rename = "spD")]
    #[strum(serialize = "spD")]
    SpD,
    #[serde(rename = "spe")]
    #[strum(serialize = "spe")]
    Spe,
}

impl StatKey {
    /// Default ordering for most representations.
    pub const ALL: [StatKey; 6] = [
        StatKey::Hp,
        StatKey::Atk,
        StatKey::Def,
        StatKey::SpA,
        StatKey::SpD,
        StatKey::Spe,
    ];

    /// Some internal representations have speed stuck in between
    /// (used by the Hidden Power bit layout).
    pub const INTERNAL: [StatKey; 6] = [
        StatKey::Hp,
        StatKey::Atk,
        StatKey::Def,
        StatKey::Spe,
        StatKey::SpA,
        StatKey::SpD,
    ];
}

/// A complete six-key stat map. Used for base stats, IVs, EVs and
/// computed stats alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSpread {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    #[serde(rename = "spA")]
    pub sp_a: u16,
    #[serde(rename = "spD")]
    pub sp_d: u16,
    pub spe: u16,
}

impl StatSpread {
    /// A spread with every key set to the same value.
    pub fn broadcast(value: u16) -> Self {
        StatSpread {
            hp: value,
            atk: value,
            def: value,
            sp_a: value,
            sp_d: value,
            spe: value,
        }
    }

    pub fn get(&self, key: StatKey) -> u16 {
        match key {
            StatKey::Hp => self.hp,
            StatKey::Atk => self.atk,
            StatKey::Def => self.def,
            StatKey::SpA => self.sp_a,
            StatKey::SpD => self.sp_d,
            StatKey::Spe => self.spe,
        }
    }

    pub fn set(&mut self, key: StatKey, value: u16) {
        match key {
            StatKey::Hp => self.hp = value,
            StatKey::Atk => self.atk = value,
            StatKey::Def => self.def = value,
            StatKey::SpA => self.sp_a = value,
            StatKey::SpD => self.sp_d = value,
            StatKey::Spe => self.spe = value,
        }
    }

    pub fn total(&self) -> u32 {
        StatKey::ALL
            .iter()
            .map(|&key| self.get(key) as u32)
            .sum()
    }
}
