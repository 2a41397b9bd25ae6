//! Core game state, configuration and the tick loop.

pub mod config;
pub mod constants;
pub mod error;
pub mod game_state;
pub mod offline;
pub mod tick;

pub use config::GameConfig;
pub use error::{ActionError, ActionResult};
pub use game_state::{GameState, Timers, Totals};
pub use offline::{catch_up, process_offline_progression, OfflineReport};
pub use tick::{advance, game_tick, TickEvent, TickResult};
