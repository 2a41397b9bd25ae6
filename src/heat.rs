//! Police heat: gain, cooling, passive decay and raids.

use crate::core::config::GameConfig;
use crate::core::constants::MAX_HEAT;
use crate::core::game_state::GameState;
use crate::core::tick::TickEvent;
use rand::Rng;

/// Raise heat, capped at [`MAX_HEAT`]
pub fn add_heat(state: &mut GameState, amount: u32, events: &mut Vec<TickEvent>) {
    set_heat(state, state.heat.saturating_add(amount).min(MAX_HEAT), events);
}

/// Lower heat, never below zero
pub fn cool_heat(state: &mut GameState, amount: u32, events: &mut Vec<TickEvent>) {
    set_heat(state, state.heat.saturating_sub(amount), events);
}

fn set_heat(state: &mut GameState, new: u32, events: &mut Vec<TickEvent>) {
    let old = state.heat;
    if old != new {
        state.heat = new;
        events.push(TickEvent::HeatChanged { old, new });
    }
}

/// Chance of a raid on one check. Zero at or below the threshold, rising
/// linearly to 100% at [`MAX_HEAT`].
pub fn raid_chance(heat: u32, threshold: u32) -> f64 {
    if heat <= threshold || threshold >= MAX_HEAT {
        return 0.0;
    }
    (heat - threshold) as f64 / (MAX_HEAT - threshold) as f64
}

/// Passive cooling and raid rolls for `elapsed_ms` of game time.
pub fn update_heat<R: Rng>(
    state: &mut GameState,
    config: &GameConfig,
    elapsed_ms: u64,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) {
    if config.heat_decay_interval_ms > 0 {
        state.timers.heat_decay_ms += elapsed_ms;
        while state.timers.heat_decay_ms >= config.heat_decay_interval_ms {
            state.timers.heat_decay_ms -= config.heat_decay_interval_ms;
            cool_heat(state, config.heat_decay_amount, events);
        }
    }

    if config.raid_check_interval_ms > 0 {
        state.timers.raid_ms += elapsed_ms;
        while state.timers.raid_ms >= config.raid_check_interval_ms {
            state.timers.raid_ms -= config.raid_check_interval_ms;
            let chance = raid_chance(state.heat, config.raid_heat_threshold);
            if chance > 0.0 && rng.gen::<f64>() < chance {
                police_raid(state, config, events);
            }
        }
    }
}

/// Confiscate part of the cash and knock heat down to the floor
pub fn police_raid(state: &mut GameState, config: &GameConfig, events: &mut Vec<TickEvent>) {
    let percent = u128::from(config.raid_money_loss_percent.min(100));
    let lost = (u128::from(state.money) * percent / 100) as u64;
    state.spend(lost, events);
    if state.heat > config.raid_heat_floor {
        let floor = config.raid_heat_floor;
        set_heat(state, floor, events);
    }
    state.totals.raids += 1;
    tracing::info!("Police raid: ${} confiscated", lost);
    events.push(TickEvent::PoliceRaid {
        money_lost: lost,
        message: format!("The cops kick in the door! ${} confiscated.", lost),
    });
}
