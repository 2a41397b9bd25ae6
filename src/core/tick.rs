//! The per-tick orchestration function.
//!
//! `advance()` moves the world forward by an arbitrary amount of game time:
//! in-flight actions, business income, heat decay and raids, then play time.
//! It returns a [`TickResult`] describing what happened so a presentation
//! layer can react without the game logic knowing anything about it.

use crate::actions::{advance_actions, ActionId};
use crate::business::{accrue_income, BusinessType};
use crate::cards::CardKind;
use crate::choices::ChoiceCategory;
use crate::core::config::GameConfig;
use crate::core::constants::TICK_INTERVAL_MS;
use crate::core::game_state::GameState;
use crate::heat::update_heat;
use rand::Rng;

/// A single thing that happened to the game state.
///
/// Events that a player would read carry a `message`.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    // ── Actors ──────────────────────────────────────────────────
    /// A gangster started an action and is busy until it completes.
    ActorBusy {
        actor: u64,
        action: ActionId,
        duration_ms: u64,
    },

    /// An action's timer ran out; its effect is applied right after.
    ActionCompleted {
        actor: u64,
        action: ActionId,
        message: String,
    },

    /// The action completed but its effect could no longer apply.
    ActionFizzled {
        actor: u64,
        action: ActionId,
        message: String,
    },

    ActionCancelled { actor: u64, action: ActionId },

    /// The gangster is free for a new action.
    ActorIdle { actor: u64 },

    // ── Resources ───────────────────────────────────────────────
    MoneyChanged { old: u64, new: u64 },

    HeatChanged { old: u32, new: u32 },

    // ── Cards ───────────────────────────────────────────────────
    /// A card landed on the table.
    CardSpawned {
        uid: u64,
        kind: CardKind,
        message: String,
    },

    /// A deck card has nothing left to draw.
    DeckExhausted { card: u64, message: String },

    // ── Choices ─────────────────────────────────────────────────
    /// A prompt was queued. `active` is false if it waits behind another.
    ChoiceOpened {
        choice_id: u64,
        category: ChoiceCategory,
        active: bool,
        message: String,
    },

    ChoiceResolved {
        choice_id: u64,
        category: ChoiceCategory,
        message: String,
    },

    /// A queued prompt became the active one of its category.
    ChoiceActivated {
        choice_id: u64,
        category: ChoiceCategory,
        message: String,
    },

    // ── Businesses and heat ─────────────────────────────────────
    BusinessOpened {
        business: u64,
        kind: BusinessType,
        message: String,
    },

    IncomeAccrued { business: u64, amount: u64 },

    PoliceRaid { money_lost: u64, message: String },

    /// Anything else worth telling the player.
    Notice { message: String },
}

impl TickEvent {
    /// The player-facing line for this event, if it has one
    pub fn message(&self) -> Option<&str> {
        match self {
            TickEvent::ActionCompleted { message, .. }
            | TickEvent::ActionFizzled { message, .. }
            | TickEvent::CardSpawned { message, .. }
            | TickEvent::DeckExhausted { message, .. }
            | TickEvent::ChoiceOpened { message, .. }
            | TickEvent::ChoiceResolved { message, .. }
            | TickEvent::ChoiceActivated { message, .. }
            | TickEvent::BusinessOpened { message, .. }
            | TickEvent::PoliceRaid { message, .. }
            | TickEvent::Notice { message } => Some(message),
            _ => None,
        }
    }
}

/// Result of advancing the game.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Events produced, in the order they happened.
    pub events: Vec<TickEvent>,
}

impl TickResult {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Advance the game by `elapsed_ms` of game time.
///
/// Order within one call: actions, income, heat, play time. Callers wanting
/// fine-grained timing (offline catch-up) call this repeatedly in small steps.
pub fn advance<R: Rng>(
    state: &mut GameState,
    config: &GameConfig,
    elapsed_ms: u64,
    rng: &mut R,
) -> TickResult {
    let mut result = TickResult::default();
    if elapsed_ms == 0 {
        return result;
    }

    // ── 1. In-flight actions ────────────────────────────────────
    advance_actions(state, config, elapsed_ms, rng, &mut result.events);

    // ── 2. Business income ──────────────────────────────────────
    accrue_income(state, config, elapsed_ms, &mut result.events);

    // ── 3. Heat decay and raids ─────────────────────────────────
    update_heat(state, config, elapsed_ms, rng, &mut result.events);

    // ── 4. Play time ────────────────────────────────────────────
    state.play_time_ms += elapsed_ms;

    result
}

/// Process one fixed 100ms game tick.
pub fn game_tick<R: Rng>(state: &mut GameState, config: &GameConfig, rng: &mut R) -> TickResult {
    advance(state, config, TICK_INTERVAL_MS, rng)
}
