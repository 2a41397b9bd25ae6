//! Action definitions, in-flight task records and the rule contract.

use crate::cards::{CardClass, TableCard};
use crate::core::config::GameConfig;
use crate::core::error::{ActionError, ActionResult};
use crate::core::game_state::GameState;
use crate::core::tick::TickEvent;
use crate::crew::{Gangster, StatType};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionId {
    Explore,
    Extort,
    Recruit,
    BuildBusiness,
    Collect,
    Bribe,
    LayLow,
}

impl ActionId {
    pub const ALL: [ActionId; 7] = [
        ActionId::Explore,
        ActionId::Extort,
        ActionId::Recruit,
        ActionId::BuildBusiness,
        ActionId::Collect,
        ActionId::Bribe,
        ActionId::LayLow,
    ];
}

/// What an action charges when it starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cost {
    Free,
    Fixed(u64),
    /// `base + per_point * heat`, quoted at start time
    PerHeat { base: u64, per_point: u64 },
}

/// Condition on the game state for an action to start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prerequisite {
    None,
    /// The targeted deck card still has something to draw
    DeckHasCards,
    /// Room left in the crew
    CrewBelowMax,
    /// Nobody is already building on the targeted lot
    LotUnclaimed,
    /// The targeted business has income waiting
    PendingIncome,
    HeatAtLeast(u32),
}

/// What happens when the action's timer runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Draw one group from the targeted deck
    DrawCards,
    /// Squeeze the target for `base + per_stat * stat` and pick up heat
    Shakedown { base: u64, per_stat: u64, heat: u32 },
    /// Offer recruit candidates through a choice
    OfferRecruits { count: usize },
    /// Ask what to build on the targeted lot
    OpenLotChoice,
    /// Empty the targeted business's till
    CollectIncome { heat: u32 },
    CoolHeat { amount: u32 },
}

/// A declarative action. Stateless; what is running lives on the gangster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDef {
    pub id: ActionId,
    pub label: &'static str,
    pub stat: StatType,
    pub base_duration_ms: u64,
    pub target: CardClass,
    pub cost: Cost,
    pub prerequisite: Prerequisite,
    pub effect: EffectKind,
}

/// An action in flight on one gangster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveAction {
    pub task_id: u64,
    pub action: ActionId,
    pub target: u64,
    pub total_ms: u64,
    pub remaining_ms: u64,
}

impl ActiveAction {
    /// Fraction done in 0.0..=1.0, for the countdown ring
    pub fn progress(&self) -> f64 {
        if self.total_ms == 0 {
            return 1.0;
        }
        1.0 - self.remaining_ms as f64 / self.total_ms as f64
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.total_ms.saturating_sub(self.remaining_ms)
    }
}

/// Identifies one started action. Only the handle of the action currently
/// running on the actor can cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionHandle {
    pub actor: u64,
    pub task_id: u64,
}

/// What a successful start committed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionStarted {
    pub handle: ActionHandle,
    pub action: ActionId,
    pub duration_ms: u64,
    pub cost_paid: u64,
}

/// The contract every action kind fulfils.
///
/// `check_prerequisite`, `quote_cost` and `check_cost` never mutate; the
/// executor only calls `commit_cost` once all of them have passed.
pub trait ActionRule {
    fn id(&self) -> ActionId;

    fn check_prerequisite(
        &self,
        state: &GameState,
        config: &GameConfig,
        actor: &Gangster,
        target: &TableCard,
    ) -> ActionResult<()>;

    /// Price of starting the action right now
    fn quote_cost(&self, state: &GameState) -> u64;

    fn check_cost(&self, state: &GameState) -> ActionResult<u64> {
        let required = self.quote_cost(state);
        if state.money < required {
            return Err(ActionError::InsufficientFunds {
                required,
                available: state.money,
            });
        }
        Ok(required)
    }

    fn commit_cost(&self, state: &mut GameState, amount: u64, events: &mut Vec<TickEvent>) {
        state.spend(amount, events);
    }

    fn compute_duration(&self, actor: &Gangster, config: &GameConfig) -> u64;

    fn apply_effect<R: Rng>(
        &self,
        state: &mut GameState,
        config: &GameConfig,
        actor: u64,
        target: u64,
        rng: &mut R,
        events: &mut Vec<TickEvent>,
    ) -> ActionResult<()>;
}
