//! Starting, advancing and cancelling actions on gangsters.
//!
//! A gangster is either idle or running exactly one [`ActiveAction`]. Starting
//! validates everything first and commits (cost, busy slot) only when every
//! check has passed. The effect runs once, from [`advance_actions`], after the
//! full duration has elapsed.

use super::catalog::recipe_for;
use super::types::{ActionHandle, ActionId, ActionRule, ActionStarted, ActiveAction};
use crate::core::config::GameConfig;
use crate::core::error::{ActionError, ActionResult};
use crate::core::game_state::GameState;
use crate::core::tick::TickEvent;
use crate::crew::{find_gangster, find_gangster_mut};
use rand::Rng;

/// Quote of what starting an action would cost and how long it would take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionQuote {
    pub cost: u64,
    pub duration_ms: u64,
}

/// Every check `start_action` makes, without committing anything
pub fn check_action(
    state: &GameState,
    config: &GameConfig,
    actor: u64,
    action: ActionId,
    target: u64,
) -> ActionResult<ActionQuote> {
    let rule = action.def();
    let gangster = find_gangster(state, actor).ok_or(ActionError::UnknownActor(actor))?;
    if gangster.is_busy() {
        return Err(ActionError::ActorBusy {
            actor,
            name: gangster.name().to_string(),
        });
    }

    if target == actor {
        return Err(ActionError::PrerequisiteFailed("needs someone else"));
    }
    let card = state.card(target).ok_or(ActionError::UnknownCard(target))?;
    let class = card.kind.class();
    if class != rule.target {
        return Err(ActionError::InvalidTarget {
            action,
            target: class,
        });
    }
    if gangster.stat(rule.stat) == 0 {
        return Err(ActionError::MissingStat(rule.stat));
    }

    rule.check_prerequisite(state, config, gangster, card)?;
    let cost = rule.check_cost(state)?;
    Ok(ActionQuote {
        cost,
        duration_ms: rule.compute_duration(gangster, config),
    })
}

/// Start `action` on `actor` against the `target` card.
///
/// Fails without side effects if the actor is busy, the target is wrong, the
/// prerequisite fails or the cost can't be paid.
pub fn start_action(
    state: &mut GameState,
    config: &GameConfig,
    actor: u64,
    action: ActionId,
    target: u64,
    events: &mut Vec<TickEvent>,
) -> ActionResult<ActionStarted> {
    let quote = check_action(state, config, actor, action, target)?;

    let task_id = state.next_id();
    action.def().commit_cost(state, quote.cost, events);
    let gangster = find_gangster_mut(state, actor).ok_or(ActionError::UnknownActor(actor))?;
    gangster.active = Some(ActiveAction {
        task_id,
        action,
        target,
        total_ms: quote.duration_ms,
        remaining_ms: quote.duration_ms,
    });

    tracing::debug!(
        "{} starts {:?} on card {} ({}ms, ${})",
        gangster.name(),
        action,
        target,
        quote.duration_ms,
        quote.cost
    );
    events.push(TickEvent::ActorBusy {
        actor,
        action,
        duration_ms: quote.duration_ms,
    });

    Ok(ActionStarted {
        handle: ActionHandle { actor, task_id },
        action,
        duration_ms: quote.duration_ms,
        cost_paid: quote.cost,
    })
}

/// Start whatever action the target card's recipe calls for
pub fn drop_on_card(
    state: &mut GameState,
    config: &GameConfig,
    actor: u64,
    target: u64,
    events: &mut Vec<TickEvent>,
) -> ActionResult<ActionStarted> {
    let class = state.card_class(target)?;
    let action = recipe_for(class).ok_or(ActionError::NoRecipe(class))?;
    start_action(state, config, actor, action, target, events)
}

/// Actions the actor could start against the target right now
pub fn eligible_actions(
    state: &GameState,
    config: &GameConfig,
    actor: u64,
    target: u64,
) -> Vec<ActionId> {
    ActionId::ALL
        .into_iter()
        .filter(|action| check_action(state, config, actor, *action, target).is_ok())
        .collect()
}

/// Stop a running action. The effect never runs and the cost is not refunded.
pub fn cancel_action(
    state: &mut GameState,
    handle: ActionHandle,
    events: &mut Vec<TickEvent>,
) -> ActionResult<ActiveAction> {
    let gangster =
        find_gangster_mut(state, handle.actor).ok_or(ActionError::UnknownActor(handle.actor))?;
    match &gangster.active {
        Some(active) if active.task_id == handle.task_id => {}
        _ => return Err(ActionError::StaleHandle),
    }
    let cancelled = gangster.active.take().ok_or(ActionError::StaleHandle)?;
    tracing::debug!("{} drops {:?}", gangster.name(), cancelled.action);
    events.push(TickEvent::ActionCancelled {
        actor: handle.actor,
        action: cancelled.action,
    });
    events.push(TickEvent::ActorIdle {
        actor: handle.actor,
    });
    Ok(cancelled)
}

/// Count every running action down by `elapsed_ms` and apply the effects of
/// those that reach zero, in crew order.
///
/// A finished gangster is idle again before its effect runs. An effect that
/// can no longer apply (say the deck ran dry in the meantime) fizzles and
/// changes nothing.
pub fn advance_actions<R: Rng>(
    state: &mut GameState,
    config: &GameConfig,
    elapsed_ms: u64,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) {
    let mut finished = Vec::new();
    for gangster in state.gangsters.iter_mut() {
        let done = match gangster.active.as_mut() {
            Some(active) => {
                active.remaining_ms = active.remaining_ms.saturating_sub(elapsed_ms);
                active.remaining_ms == 0
            }
            None => false,
        };
        if done {
            if let Some(active) = gangster.active.take() {
                finished.push((gangster.id, active));
            }
        }
    }

    for (actor, active) in finished {
        let rule = active.action.def();
        events.push(TickEvent::ActionCompleted {
            actor,
            action: active.action,
            message: format!("{} is done.", rule.label),
        });
        match rule.apply_effect(state, config, actor, active.target, rng, events) {
            Ok(()) => {
                state.totals.actions_completed += 1;
                tracing::debug!("{:?} by {} completed", active.action, actor);
            }
            Err(e) => {
                tracing::debug!("{:?} by {} fizzled: {}", active.action, actor, e);
                events.push(TickEvent::ActionFizzled {
                    actor,
                    action: active.action,
                    message: e.to_string(),
                });
            }
        }
        events.push(TickEvent::ActorIdle { actor });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn boss(state: &GameState) -> u64 {
        state.gangsters[0].id
    }

    #[test]
    fn test_unknown_actor() {
        let mut state = GameState::new(0);
        let shop = state.place_card(CardKind::Shop);
        let result = start_action(
            &mut state,
            &GameConfig::default(),
            9999,
            ActionId::Extort,
            shop,
            &mut Vec::new(),
        );
        assert_eq!(result, Err(ActionError::UnknownActor(9999)));
    }

    #[test]
    fn test_wrong_target_class() {
        let mut state = GameState::new(0);
        let shop = state.place_card(CardKind::Shop);
        let actor = boss(&state);
        let before = state.clone();
        let result = start_action(
            &mut state,
            &GameConfig::default(),
            actor,
            ActionId::LayLow,
            shop,
            &mut Vec::new(),
        );
        assert!(matches!(result, Err(ActionError::InvalidTarget { .. })));
        assert_eq!(state, before);
    }

    #[test]
    fn test_zero_stat_is_missing() {
        let mut state = GameState::new(0);
        let shop = state.place_card(CardKind::Shop);
        let actor = boss(&state);
        state.gangsters[0].profile.muscle = 0;
        let result = check_action(&state, &GameConfig::default(), actor, ActionId::Extort, shop);
        assert_eq!(
            result,
            Err(ActionError::MissingStat(crate::crew::StatType::Muscle))
        );
    }

    #[test]
    fn test_eligible_actions_for_shop() {
        let mut state = GameState::new(0);
        let shop = state.place_card(CardKind::Shop);
        let actor = boss(&state);
        assert_eq!(
            eligible_actions(&state, &GameConfig::default(), actor, shop),
            vec![ActionId::Extort]
        );
    }

    #[test]
    fn test_drop_on_self_rejected() {
        let mut state = GameState::new(0);
        let actor = boss(&state);
        let result = drop_on_card(
            &mut state,
            &GameConfig::default(),
            actor,
            actor,
            &mut Vec::new(),
        );
        assert!(matches!(result, Err(ActionError::PrerequisiteFailed(_))));
    }

    #[test]
    fn test_cancel_with_stale_handle() {
        let mut state = GameState::new(0);
        let config = GameConfig::default();
        let shop = state.place_card(CardKind::Shop);
        let actor = boss(&state);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut events = Vec::new();

        let first = start_action(&mut state, &config, actor, ActionId::Extort, shop, &mut events)
            .unwrap();
        advance_actions(&mut state, &config, first.duration_ms, &mut rng, &mut events);
        let second = start_action(&mut state, &config, actor, ActionId::Extort, shop, &mut events)
            .unwrap();

        assert_eq!(
            cancel_action(&mut state, first.handle, &mut events),
            Err(ActionError::StaleHandle)
        );
        assert!(state.gangsters[0].is_busy());
        assert!(cancel_action(&mut state, second.handle, &mut events).is_ok());
        assert!(!state.gangsters[0].is_busy());
    }
}
