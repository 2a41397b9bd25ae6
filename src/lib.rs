//! Gangster - card-driven idle crime management
//!
//! The headless game model: decks, timed actions, choice prompts, crew,
//! businesses and heat, advanced by a fixed game tick.

pub mod actions;
pub mod business;
pub mod cards;
pub mod choices;
pub mod core;
pub mod crew;
pub mod deck;
pub mod heat;
pub mod save;

pub use crate::core::{GameConfig, GameState, TickEvent};
