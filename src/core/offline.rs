//! Offline progression.
//!
//! Time spent away is replayed through [`advance`] in one-second steps, so
//! actions that were in flight at save time finish and businesses keep
//! earning. Replay is capped by `GameConfig::max_offline_seconds`.

use super::config::GameConfig;
use super::constants::OFFLINE_STEP_MS;
use super::game_state::GameState;
use super::tick::{advance, TickEvent};
use chrono::Utc;
use rand::Rng;

/// Report of offline progression results
#[derive(Debug, Default, Clone)]
pub struct OfflineReport {
    /// Wall time since the last save
    pub elapsed_seconds: i64,
    /// Portion of it actually replayed
    pub simulated_seconds: i64,
    pub money_before: u64,
    pub money_after: u64,
    pub actions_completed: u64,
    pub raids: u64,
    pub events: Vec<TickEvent>,
}

/// Replay the time between `state.last_save_time` and `current_time`.
pub fn catch_up<R: Rng>(
    state: &mut GameState,
    config: &GameConfig,
    current_time: i64,
    rng: &mut R,
) -> OfflineReport {
    let elapsed_seconds = current_time - state.last_save_time;
    if elapsed_seconds <= 0 {
        return OfflineReport::default();
    }

    let simulated_seconds = elapsed_seconds.min(config.max_offline_seconds.max(0));
    let money_before = state.money;
    let actions_before = state.totals.actions_completed;
    let raids_before = state.totals.raids;

    let mut remaining_ms = simulated_seconds as u64 * 1000;
    let mut events = Vec::new();
    while remaining_ms > 0 {
        let step = remaining_ms.min(OFFLINE_STEP_MS);
        events.extend(advance(state, config, step, rng).events);
        remaining_ms -= step;
    }
    state.last_save_time = current_time;

    tracing::info!(
        "Offline for {}s, replayed {}s",
        elapsed_seconds,
        simulated_seconds
    );

    OfflineReport {
        elapsed_seconds,
        simulated_seconds,
        money_before,
        money_after: state.money,
        actions_completed: state.totals.actions_completed - actions_before,
        raids: state.totals.raids - raids_before,
        events,
    }
}

/// Processes offline progression up to now.
pub fn process_offline_progression<R: Rng>(
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut R,
) -> OfflineReport {
    catch_up(state, config, Utc::now().timestamp(), rng)
}
