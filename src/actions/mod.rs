//! Timed actions: the action table, the rule contract and the executor.

pub mod catalog;
pub mod executor;
pub mod logic;
pub mod types;

pub use catalog::recipe_for;
pub use executor::*;
pub use logic::scaled_duration;
pub use types::*;
