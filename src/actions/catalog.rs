//! The action table and the drop recipes that pick an action for a card.

use super::types::{ActionDef, ActionId, Cost, EffectKind, Prerequisite};
use crate::cards::CardClass;
use crate::core::constants::RECRUIT_CANDIDATES;
use crate::crew::StatType;

pub const EXPLORE: ActionDef = ActionDef {
    id: ActionId::Explore,
    label: "Explore",
    stat: StatType::Brains,
    base_duration_ms: 3_000,
    target: CardClass::Deck,
    cost: Cost::Free,
    prerequisite: Prerequisite::DeckHasCards,
    effect: EffectKind::DrawCards,
};

pub const EXTORT: ActionDef = ActionDef {
    id: ActionId::Extort,
    label: "Shake down",
    stat: StatType::Muscle,
    base_duration_ms: 4_000,
    target: CardClass::Shop,
    cost: Cost::Free,
    prerequisite: Prerequisite::None,
    effect: EffectKind::Shakedown {
        base: 40,
        per_stat: 5,
        heat: 8,
    },
};

pub const RECRUIT: ActionDef = ActionDef {
    id: ActionId::Recruit,
    label: "Ask around",
    stat: StatType::Charm,
    base_duration_ms: 6_000,
    target: CardClass::Gangster,
    cost: Cost::Fixed(50),
    prerequisite: Prerequisite::CrewBelowMax,
    effect: EffectKind::OfferRecruits {
        count: RECRUIT_CANDIDATES,
    },
};

pub const BUILD_BUSINESS: ActionDef = ActionDef {
    id: ActionId::BuildBusiness,
    label: "Pull permits",
    stat: StatType::Brains,
    base_duration_ms: 8_000,
    target: CardClass::VacantLot,
    cost: Cost::Fixed(50),
    prerequisite: Prerequisite::LotUnclaimed,
    effect: EffectKind::OpenLotChoice,
};

pub const COLLECT: ActionDef = ActionDef {
    id: ActionId::Collect,
    label: "Collect",
    stat: StatType::Muscle,
    base_duration_ms: 2_000,
    target: CardClass::Business,
    cost: Cost::Free,
    prerequisite: Prerequisite::PendingIncome,
    effect: EffectKind::CollectIncome { heat: 2 },
};

pub const BRIBE: ActionDef = ActionDef {
    id: ActionId::Bribe,
    label: "Grease palms",
    stat: StatType::Charm,
    base_duration_ms: 3_000,
    target: CardClass::PoliceStation,
    cost: Cost::PerHeat {
        base: 20,
        per_point: 5,
    },
    prerequisite: Prerequisite::HeatAtLeast(1),
    effect: EffectKind::CoolHeat { amount: 25 },
};

pub const LAY_LOW: ActionDef = ActionDef {
    id: ActionId::LayLow,
    label: "Lay low",
    stat: StatType::Charm,
    base_duration_ms: 10_000,
    target: CardClass::Hideout,
    cost: Cost::Free,
    prerequisite: Prerequisite::HeatAtLeast(1),
    effect: EffectKind::CoolHeat { amount: 15 },
};

impl ActionId {
    pub fn def(&self) -> &'static ActionDef {
        match self {
            ActionId::Explore => &EXPLORE,
            ActionId::Extort => &EXTORT,
            ActionId::Recruit => &RECRUIT,
            ActionId::BuildBusiness => &BUILD_BUSINESS,
            ActionId::Collect => &COLLECT,
            ActionId::Bribe => &BRIBE,
            ActionId::LayLow => &LAY_LOW,
        }
    }

    pub fn label(&self) -> &'static str {
        self.def().label
    }
}

/// The action a gangster performs when dropped on a card of this class
pub fn recipe_for(class: CardClass) -> Option<ActionId> {
    ActionId::ALL.into_iter().find(|id| id.def().target == class)
}
