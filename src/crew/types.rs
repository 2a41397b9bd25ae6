//! Gangster data structures.

use crate::actions::ActiveAction;
use crate::core::constants::MAX_STAT;
use serde::{Deserialize, Serialize};

/// Stat an action scales with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatType {
    Muscle,
    Brains,
    Charm,
}

impl StatType {
    pub const ALL: [StatType; 3] = [StatType::Muscle, StatType::Brains, StatType::Charm];

    pub fn name(&self) -> &'static str {
        match self {
            StatType::Muscle => "Muscle",
            StatType::Brains => "Brains",
            StatType::Charm => "Charm",
        }
    }
}

/// Stat block shared by crew members and recruit candidates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GangsterProfile {
    pub name: String,
    pub muscle: u32,
    pub brains: u32,
    pub charm: u32,
}

impl GangsterProfile {
    pub fn new(name: impl Into<String>, muscle: u32, brains: u32, charm: u32) -> Self {
        Self {
            name: name.into(),
            muscle: muscle.min(MAX_STAT),
            brains: brains.min(MAX_STAT),
            charm: charm.min(MAX_STAT),
        }
    }

    pub fn stat(&self, stat: StatType) -> u32 {
        match stat {
            StatType::Muscle => self.muscle,
            StatType::Brains => self.brains,
            StatType::Charm => self.charm,
        }
    }
}

/// A crew member on the table. `id` is also the uid of its card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gangster {
    pub id: u64,
    #[serde(flatten)]
    pub profile: GangsterProfile,
    /// The action currently in flight, if any
    #[serde(default)]
    pub active: Option<ActiveAction>,
}

impl Gangster {
    pub fn new(id: u64, profile: GangsterProfile) -> Self {
        Self {
            id,
            profile,
            active: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn stat(&self, stat: StatType) -> u32 {
        self.profile.stat(stat)
    }

    pub fn is_busy(&self) -> bool {
        self.active.is_some()
    }
}
