//! Precondition failures for actions, draws and choices.
//!
//! None of these are fatal. Every operation that returns one has left the
//! game state untouched.

use crate::actions::ActionId;
use crate::cards::CardClass;
use crate::choices::ChoiceCategory;
use crate::crew::StatType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("{name} is busy")]
    ActorBusy { actor: u64, name: String },

    #[error("no gangster with id {0}")]
    UnknownActor(u64),

    #[error("no card with id {0} on the table")]
    UnknownCard(u64),

    #[error("{action:?} can't target a {target:?} card")]
    InvalidTarget { action: ActionId, target: CardClass },

    #[error("nothing happens when a gangster is dropped on a {0:?} card")]
    NoRecipe(CardClass),

    #[error("needs some {0:?}")]
    MissingStat(StatType),

    #[error("{0}")]
    PrerequisiteFailed(&'static str),

    #[error("not enough money: need ${required}, have ${available}")]
    InsufficientFunds { required: u64, available: u64 },

    #[error("deck {0} has nothing left to draw")]
    DeckExhausted(u64),

    #[error("crew is full ({max} gangsters)")]
    CrewFull { max: usize },

    #[error("no {0:?} choice is waiting")]
    NoActiveChoice(ChoiceCategory),

    #[error("option {index} is not one of the {available} offered")]
    InvalidChoiceOption { index: usize, available: usize },

    #[error("unknown card content '{0}'")]
    UnknownContent(String),

    #[error("the action for this handle is no longer running")]
    StaleHandle,
}

/// Result type for game-state operations.
pub type ActionResult<T> = Result<T, ActionError>;
