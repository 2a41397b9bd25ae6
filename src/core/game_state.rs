use super::config::GameConfig;
use super::constants::{MAX_HEAT, SAVE_VERSION};
use super::error::{ActionError, ActionResult};
use super::tick::TickEvent;
use crate::business::Business;
use crate::cards::{CardClass, CardKind, TableCard};
use crate::choices::ChoiceQueue;
use crate::crew::{add_gangster, Gangster, GangsterProfile};
use crate::deck::{Deck, DeckId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Accumulators for the periodic systems, in milliseconds since their last firing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timers {
    pub business_ms: u64,
    pub heat_decay_ms: u64,
    pub raid_ms: u64,
}

/// Lifetime counters shown in the summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Totals {
    pub money_earned: u64,
    pub money_spent: u64,
    pub businesses_opened: u64,
    pub raids: u64,
    pub actions_completed: u64,
    pub cards_drawn: u64,
    pub gangsters_recruited: u64,
}

/// Everything the game knows about one operation.
///
/// Passed by reference to every rule and effect. Every field has a default so
/// a save missing keys still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub version: u32,
    pub money: u64,
    pub heat: u32,
    pub gangsters: Vec<Gangster>,
    pub businesses: Vec<Business>,
    /// Cards in play, in the order they landed on the table
    pub table: Vec<TableCard>,
    /// Draw state of each deck card that has been explored, keyed by card uid
    pub decks: BTreeMap<u64, Deck>,
    pub choices: ChoiceQueue,
    pub next_uid: u64,
    pub timers: Timers,
    pub totals: Totals,
    pub last_save_time: i64,
    pub play_time_ms: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            version: SAVE_VERSION,
            money: 0,
            heat: 0,
            gangsters: Vec::new(),
            businesses: Vec::new(),
            table: Vec::new(),
            decks: BTreeMap::new(),
            choices: ChoiceQueue::new(),
            next_uid: 1,
            timers: Timers::default(),
            totals: Totals::default(),
            last_save_time: 0,
            play_time_ms: 0,
        }
    }
}

impl GameState {
    /// A fresh game: one gangster, the neighborhood deck and a hideout
    pub fn new(current_time: i64) -> Self {
        Self::with_config(current_time, &GameConfig::default())
    }

    pub fn with_config(current_time: i64, config: &GameConfig) -> Self {
        let mut state = Self {
            money: config.starting_money,
            last_save_time: current_time,
            ..Self::default()
        };
        add_gangster(&mut state, GangsterProfile::new("Vinnie", 3, 1, 2));
        state.totals.gangsters_recruited = 0;
        state.place_card(CardKind::Deck(DeckId::Neighborhood));
        state.place_card(CardKind::Hideout);
        state
    }

    /// Hand out the next id for a card, task or choice
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_uid;
        self.next_uid += 1;
        id
    }

    /// Put a new card on the table and return its uid
    pub fn place_card(&mut self, kind: CardKind) -> u64 {
        let uid = self.next_id();
        self.table.push(TableCard { uid, kind });
        uid
    }

    pub fn card(&self, uid: u64) -> Option<&TableCard> {
        self.table.iter().find(|c| c.uid == uid)
    }

    pub fn card_mut(&mut self, uid: u64) -> Option<&mut TableCard> {
        self.table.iter_mut().find(|c| c.uid == uid)
    }

    pub fn card_class(&self, uid: u64) -> ActionResult<CardClass> {
        self.card(uid)
            .map(|c| c.kind.class())
            .ok_or(ActionError::UnknownCard(uid))
    }

    pub fn earn(&mut self, amount: u64, events: &mut Vec<TickEvent>) {
        if amount == 0 {
            return;
        }
        let old = self.money;
        self.money = self.money.saturating_add(amount);
        self.totals.money_earned += amount;
        events.push(TickEvent::MoneyChanged {
            old,
            new: self.money,
        });
    }

    /// Debit money. Callers check the balance first; this never goes below zero.
    pub fn spend(&mut self, amount: u64, events: &mut Vec<TickEvent>) {
        let amount = amount.min(self.money);
        if amount == 0 {
            return;
        }
        let old = self.money;
        self.money -= amount;
        self.totals.money_spent += amount;
        events.push(TickEvent::MoneyChanged {
            old,
            new: self.money,
        });
    }

    /// Repair a freshly loaded state: clamp heat and make sure new ids can't
    /// collide with anything already saved.
    pub fn normalize(&mut self) {
        self.version = SAVE_VERSION;
        self.heat = self.heat.min(MAX_HEAT);

        let used = self
            .table
            .iter()
            .map(|c| c.uid)
            .chain(self.gangsters.iter().map(|g| g.id))
            .chain(
                self.gangsters
                    .iter()
                    .filter_map(|g| g.active.as_ref().map(|a| a.task_id)),
            )
            .chain(self.choices.ids())
            .chain(self.decks.keys().copied())
            .max()
            .unwrap_or(0);
        self.next_uid = self.next_uid.max(used + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::STARTING_MONEY;

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(1_700_000_000);
        assert_eq!(state.money, STARTING_MONEY);
        assert_eq!(state.gangsters.len(), 1);
        assert_eq!(state.gangsters[0].name(), "Vinnie");
        let kinds: Vec<CardKind> = state.table.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                CardKind::Gangster,
                CardKind::Deck(DeckId::Neighborhood),
                CardKind::Hideout
            ]
        );
        assert_eq!(state.gangsters[0].id, state.table[0].uid);
        assert_eq!(state.last_save_time, 1_700_000_000);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut state = GameState::new(0);
        let a = state.next_id();
        let b = state.place_card(CardKind::Shop);
        assert!(b > a);
        assert!(state.table.iter().all(|c| c.uid < state.next_uid));
    }

    #[test]
    fn test_spend_emits_money_change() {
        let mut state = GameState::new(0);
        let mut events = Vec::new();
        state.spend(30, &mut events);
        assert_eq!(state.money, STARTING_MONEY - 30);
        assert_eq!(state.totals.money_spent, 30);
        assert_eq!(
            events,
            vec![TickEvent::MoneyChanged {
                old: STARTING_MONEY,
                new: STARTING_MONEY - 30
            }]
        );
        events.clear();
        state.spend(0, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_normalize_bumps_next_uid() {
        let mut state = GameState::new(0);
        state.table.push(TableCard {
            uid: 500,
            kind: CardKind::Shop,
        });
        state.heat = 400;
        state.next_uid = 2;
        state.normalize();
        assert_eq!(state.next_uid, 501);
        assert_eq!(state.heat, MAX_HEAT);
    }

    #[test]
    fn test_unknown_card_class() {
        let state = GameState::new(0);
        assert_eq!(state.card_class(999), Err(ActionError::UnknownCard(999)));
    }
}
