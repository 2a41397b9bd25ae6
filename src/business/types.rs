//! Business data structures and the per-type economy table.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessType {
    PawnShop,
    Bar,
    Laundromat,
    Casino,
}

impl BusinessType {
    pub const ALL: [BusinessType; 4] = [
        BusinessType::PawnShop,
        BusinessType::Bar,
        BusinessType::Laundromat,
        BusinessType::Casino,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BusinessType::PawnShop => "Pawn Shop",
            BusinessType::Bar => "Bar",
            BusinessType::Laundromat => "Laundromat",
            BusinessType::Casino => "Casino",
        }
    }

    /// Money needed to open one on a vacant lot
    pub fn build_cost(&self) -> u64 {
        match self {
            BusinessType::PawnShop => 100,
            BusinessType::Bar => 150,
            BusinessType::Laundromat => 250,
            BusinessType::Casino => 600,
        }
    }

    pub fn income_per_cycle(&self) -> u64 {
        match self {
            BusinessType::PawnShop => 8,
            BusinessType::Bar => 15,
            BusinessType::Laundromat => 20,
            BusinessType::Casino => 60,
        }
    }

    /// Heat change per income cycle. Laundromats wash a little heat away.
    pub fn heat_per_cycle(&self) -> i32 {
        match self {
            BusinessType::PawnShop => 1,
            BusinessType::Bar => 1,
            BusinessType::Laundromat => -1,
            BusinessType::Casino => 3,
        }
    }
}

/// An operating business. `id` is also the uid of its card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub id: u64,
    pub kind: BusinessType,
    /// Income waiting to be collected
    #[serde(default)]
    pub pending_income: u64,
    #[serde(default)]
    pub lifetime_income: u64,
}

impl Business {
    pub fn new(id: u64, kind: BusinessType) -> Self {
        Self {
            id,
            kind,
            pending_income: 0,
            lifetime_income: 0,
        }
    }

    /// The most this business holds before a collection is due
    pub fn pending_cap(&self, max_pending_cycles: u64) -> u64 {
        self.kind.income_per_cycle() * max_pending_cycles
    }
}
