//! Opening businesses, accruing and collecting income.

use super::types::{Business, BusinessType};
use crate::cards::{CardClass, CardKind};
use crate::core::config::GameConfig;
use crate::core::error::{ActionError, ActionResult};
use crate::core::game_state::GameState;
use crate::core::tick::TickEvent;
use crate::heat::{add_heat, cool_heat};

pub fn find_business(state: &GameState, id: u64) -> Option<&Business> {
    state.businesses.iter().find(|b| b.id == id)
}

/// Check whether a business of this type could open on the lot right now.
/// Pure: returns the build cost without touching the state.
pub fn check_open_business(
    state: &GameState,
    lot_uid: u64,
    kind: BusinessType,
) -> ActionResult<u64> {
    let class = state.card_class(lot_uid)?;
    if class != CardClass::VacantLot {
        return Err(ActionError::PrerequisiteFailed("that lot is already taken"));
    }
    let cost = kind.build_cost();
    if state.money < cost {
        return Err(ActionError::InsufficientFunds {
            required: cost,
            available: state.money,
        });
    }
    Ok(cost)
}

/// Open a business on a vacant lot. The lot card becomes the business card
/// and keeps its uid.
pub fn open_business(
    state: &mut GameState,
    lot_uid: u64,
    kind: BusinessType,
    events: &mut Vec<TickEvent>,
) -> ActionResult<u64> {
    let cost = check_open_business(state, lot_uid, kind)?;
    state.spend(cost, events);
    if let Some(card) = state.card_mut(lot_uid) {
        card.kind = CardKind::Business;
    }
    state.businesses.push(Business::new(lot_uid, kind));
    state.totals.businesses_opened += 1;
    tracing::info!("Opened {} on lot {} for ${}", kind.name(), lot_uid, cost);
    events.push(TickEvent::BusinessOpened {
        business: lot_uid,
        kind,
        message: format!("A new {} opens its doors.", kind.name()),
    });
    Ok(lot_uid)
}

/// Move a business's pending income into cash. Returns the amount collected.
pub fn collect_income(state: &mut GameState, business_id: u64, events: &mut Vec<TickEvent>) -> u64 {
    let amount = match state.businesses.iter_mut().find(|b| b.id == business_id) {
        Some(business) => std::mem::take(&mut business.pending_income),
        None => return 0,
    };
    state.earn(amount, events);
    amount
}

/// Run every complete income cycle in `elapsed_ms`.
pub fn accrue_income(
    state: &mut GameState,
    config: &GameConfig,
    elapsed_ms: u64,
    events: &mut Vec<TickEvent>,
) {
    if config.business_cycle_ms == 0 {
        return;
    }
    state.timers.business_ms += elapsed_ms;
    while state.timers.business_ms >= config.business_cycle_ms {
        state.timers.business_ms -= config.business_cycle_ms;
        run_income_cycle(state, config, events);
    }
}

fn run_income_cycle(state: &mut GameState, config: &GameConfig, events: &mut Vec<TickEvent>) {
    let mut heat_delta = 0i32;
    for business in state.businesses.iter_mut() {
        let cap = business.pending_cap(config.max_pending_cycles);
        let room = cap.saturating_sub(business.pending_income);
        let amount = business.kind.income_per_cycle().min(room);
        if amount > 0 {
            business.pending_income += amount;
            business.lifetime_income += amount;
            events.push(TickEvent::IncomeAccrued {
                business: business.id,
                amount,
            });
        }
        heat_delta += business.kind.heat_per_cycle();
    }
    if heat_delta > 0 {
        add_heat(state, heat_delta as u32, events);
    } else if heat_delta < 0 {
        cool_heat(state, heat_delta.unsigned_abs(), events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_lot() -> (GameState, u64) {
        let mut state = GameState::new(0);
        let lot = state.place_card(CardKind::VacantLot);
        (state, lot)
    }

    #[test]
    fn test_open_business_converts_lot() {
        let (mut state, lot) = state_with_lot();
        state.money = 200;
        let mut events = Vec::new();
        let id = open_business(&mut state, lot, BusinessType::Bar, &mut events).unwrap();
        assert_eq!(id, lot);
        assert_eq!(state.money, 50);
        assert_eq!(state.card(lot).map(|c| c.kind), Some(CardKind::Business));
        assert_eq!(find_business(&state, lot).map(|b| b.kind), Some(BusinessType::Bar));
    }

    #[test]
    fn test_open_business_insufficient_funds_unchanged() {
        let (mut state, lot) = state_with_lot();
        state.money = 10;
        let before = state.clone();
        let result = open_business(&mut state, lot, BusinessType::Casino, &mut Vec::new());
        assert_eq!(
            result,
            Err(ActionError::InsufficientFunds {
                required: 600,
                available: 10
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_cannot_build_twice_on_lot() {
        let (mut state, lot) = state_with_lot();
        state.money = 1000;
        open_business(&mut state, lot, BusinessType::PawnShop, &mut Vec::new()).unwrap();
        let result = open_business(&mut state, lot, BusinessType::PawnShop, &mut Vec::new());
        assert!(matches!(result, Err(ActionError::PrerequisiteFailed(_))));
        assert_eq!(state.businesses.len(), 1);
    }

    #[test]
    fn test_income_caps_at_pending_limit() {
        let (mut state, lot) = state_with_lot();
        state.money = 1000;
        open_business(&mut state, lot, BusinessType::Bar, &mut Vec::new()).unwrap();
        let config = GameConfig::default();
        let mut events = Vec::new();
        accrue_income(
            &mut state,
            &config,
            config.business_cycle_ms * (config.max_pending_cycles + 5),
            &mut events,
        );
        let business = find_business(&state, lot).unwrap();
        assert_eq!(
            business.pending_income,
            BusinessType::Bar.income_per_cycle() * config.max_pending_cycles
        );
    }

    #[test]
    fn test_laundromat_cools_heat() {
        let (mut state, lot) = state_with_lot();
        state.money = 1000;
        state.heat = 10;
        open_business(&mut state, lot, BusinessType::Laundromat, &mut Vec::new()).unwrap();
        let config = GameConfig::default();
        accrue_income(&mut state, &config, config.business_cycle_ms * 2, &mut Vec::new());
        assert_eq!(state.heat, 8);
    }

    #[test]
    fn test_collect_moves_pending_to_money() {
        let (mut state, lot) = state_with_lot();
        state.money = 150;
        open_business(&mut state, lot, BusinessType::Bar, &mut Vec::new()).unwrap();
        state.businesses[0].pending_income = 45;
        let collected = collect_income(&mut state, lot, &mut Vec::new());
        assert_eq!(collected, 45);
        assert_eq!(state.money, 45);
        assert_eq!(state.businesses[0].pending_income, 0);
    }
}
