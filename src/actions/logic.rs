//! Rule evaluation for the data-driven action table.

use super::types::{ActionDef, ActionId, ActionRule, Cost, EffectKind, Prerequisite};
use crate::business::{collect_income, find_business};
use crate::cards::{CardClass, TableCard};
use crate::choices::{open_business_choice, open_recruit_choice};
use crate::core::config::GameConfig;
use crate::core::error::{ActionError, ActionResult};
use crate::core::game_state::GameState;
use crate::core::tick::TickEvent;
use crate::crew::{find_gangster, generate_candidates, Gangster};
use crate::deck::{card_has_more, draw_from_card};
use crate::heat::{add_heat, cool_heat};
use rand::Rng;

/// Scale a base duration by a stat: `base / (1 + stat * per_point)`, never
/// below `config.min_action_duration_ms`.
pub fn scaled_duration(base_ms: u64, stat: u32, config: &GameConfig) -> u64 {
    let speed = 1.0 + stat as f64 * config.stat_speed_per_point.max(0.0);
    let scaled = (base_ms as f64 / speed).round() as u64;
    scaled.max(config.min_action_duration_ms)
}

/// Whether a lot already has a build under way or awaiting a decision
fn lot_claimed(state: &GameState, lot_uid: u64) -> bool {
    let building = state.gangsters.iter().any(|g| {
        g.active
            .as_ref()
            .is_some_and(|a| a.action == ActionId::BuildBusiness && a.target == lot_uid)
    });
    building || state.choices.has_source(lot_uid)
}

impl ActionRule for ActionDef {
    fn id(&self) -> ActionId {
        self.id
    }

    fn check_prerequisite(
        &self,
        state: &GameState,
        config: &GameConfig,
        _actor: &Gangster,
        target: &TableCard,
    ) -> ActionResult<()> {
        match self.prerequisite {
            Prerequisite::None => Ok(()),
            Prerequisite::DeckHasCards => {
                if card_has_more(state, target.uid)? {
                    Ok(())
                } else {
                    Err(ActionError::DeckExhausted(target.uid))
                }
            }
            Prerequisite::CrewBelowMax => {
                if state.gangsters.len() < config.max_crew {
                    Ok(())
                } else {
                    Err(ActionError::CrewFull {
                        max: config.max_crew,
                    })
                }
            }
            Prerequisite::LotUnclaimed => {
                if lot_claimed(state, target.uid) {
                    Err(ActionError::PrerequisiteFailed("someone is already on it"))
                } else {
                    Ok(())
                }
            }
            Prerequisite::PendingIncome => match find_business(state, target.uid) {
                Some(business) if business.pending_income > 0 => Ok(()),
                Some(_) => Err(ActionError::PrerequisiteFailed("the till is empty")),
                None => Err(ActionError::UnknownCard(target.uid)),
            },
            Prerequisite::HeatAtLeast(min) => {
                if state.heat >= min {
                    Ok(())
                } else {
                    Err(ActionError::PrerequisiteFailed("the cops aren't looking"))
                }
            }
        }
    }

    fn quote_cost(&self, state: &GameState) -> u64 {
        match self.cost {
            Cost::Free => 0,
            Cost::Fixed(amount) => amount,
            Cost::PerHeat { base, per_point } => base + per_point * state.heat as u64,
        }
    }

    fn compute_duration(&self, actor: &Gangster, config: &GameConfig) -> u64 {
        scaled_duration(self.base_duration_ms, actor.stat(self.stat), config)
    }

    fn apply_effect<R: Rng>(
        &self,
        state: &mut GameState,
        config: &GameConfig,
        actor: u64,
        target: u64,
        rng: &mut R,
        events: &mut Vec<TickEvent>,
    ) -> ActionResult<()> {
        match self.effect {
            EffectKind::DrawCards => {
                draw_from_card(state, config, target, rng, events)?;
            }
            EffectKind::Shakedown {
                base,
                per_stat,
                heat,
            } => {
                let stat = find_gangster(state, actor)
                    .map(|g| g.stat(self.stat))
                    .ok_or(ActionError::UnknownActor(actor))?;
                state.earn(base + per_stat * stat as u64, events);
                add_heat(state, heat, events);
            }
            EffectKind::OfferRecruits { count } => {
                let candidates = generate_candidates(count, rng);
                open_recruit_choice(state, candidates, events);
            }
            EffectKind::OpenLotChoice => {
                if state.card_class(target)? != CardClass::VacantLot {
                    return Err(ActionError::PrerequisiteFailed("that lot is already taken"));
                }
                open_business_choice(state, target, events);
            }
            EffectKind::CollectIncome { heat } => {
                if find_business(state, target).is_none() {
                    return Err(ActionError::UnknownCard(target));
                }
                let collected = collect_income(state, target, events);
                if collected > 0 {
                    add_heat(state, heat, events);
                }
            }
            EffectKind::CoolHeat { amount } => {
                cool_heat(state, amount, events);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MIN_ACTION_DURATION_MS;

    #[test]
    fn test_duration_unscaled_at_zero_stat() {
        assert_eq!(scaled_duration(1000, 0, &GameConfig::default()), 1000);
    }

    #[test]
    fn test_stat_ten_doubles_speed() {
        assert_eq!(scaled_duration(1000, 10, &GameConfig::default()), 500);
    }

    #[test]
    fn test_duration_floor() {
        let config = GameConfig::default();
        assert_eq!(scaled_duration(300, 10, &config), MIN_ACTION_DURATION_MS);
        assert_eq!(scaled_duration(0, 0, &config), MIN_ACTION_DURATION_MS);
    }

    #[test]
    fn test_higher_stat_is_faster() {
        let config = GameConfig::default();
        let durations: Vec<u64> = (0..=10)
            .map(|stat| scaled_duration(8000, stat, &config))
            .collect();
        assert!(durations.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_bribe_cost_scales_with_heat() {
        let mut state = GameState::new(0);
        state.heat = 0;
        assert_eq!(ActionId::Bribe.def().quote_cost(&state), 20);
        state.heat = 30;
        assert_eq!(ActionId::Bribe.def().quote_cost(&state), 170);
    }

    #[test]
    fn test_check_cost_is_pure() {
        let mut state = GameState::new(0);
        state.money = 10;
        let before = state.clone();
        let result = ActionId::Recruit.def().check_cost(&state);
        assert_eq!(
            result,
            Err(ActionError::InsufficientFunds {
                required: 50,
                available: 10
            })
        );
        assert_eq!(state, before);
    }
}
