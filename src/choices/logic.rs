//! Opening and resolving prompts against the game state.

use super::types::{ChoiceCategory, ChoiceOption, PendingChoice};
use crate::business::{check_open_business, open_business, BusinessType};
use crate::core::config::GameConfig;
use crate::core::error::{ActionError, ActionResult};
use crate::core::game_state::GameState;
use crate::core::tick::TickEvent;
use crate::crew::{add_gangster, GangsterProfile};

fn open_choice(
    state: &mut GameState,
    category: ChoiceCategory,
    prompt: String,
    options: Vec<ChoiceOption>,
    source: Option<u64>,
    events: &mut Vec<TickEvent>,
) -> u64 {
    let id = state.next_id();
    let active = state.choices.push(PendingChoice {
        id,
        category,
        prompt: prompt.clone(),
        options,
        source,
    });
    events.push(TickEvent::ChoiceOpened {
        choice_id: id,
        category,
        active,
        message: prompt,
    });
    id
}

/// Ask which business to open on a lot
pub fn open_business_choice(
    state: &mut GameState,
    lot_uid: u64,
    events: &mut Vec<TickEvent>,
) -> u64 {
    let options = BusinessType::ALL
        .iter()
        .map(|kind| ChoiceOption::Business(*kind))
        .collect();
    open_choice(
        state,
        ChoiceCategory::BusinessType,
        "What goes on the lot?".to_string(),
        options,
        Some(lot_uid),
        events,
    )
}

/// Ask which of the candidates joins the crew
pub fn open_recruit_choice(
    state: &mut GameState,
    candidates: Vec<GangsterProfile>,
    events: &mut Vec<TickEvent>,
) -> u64 {
    let options = candidates.into_iter().map(ChoiceOption::Recruit).collect();
    open_choice(
        state,
        ChoiceCategory::Recruit,
        "Who do you bring in?".to_string(),
        options,
        None,
        events,
    )
}

/// Checks that an option could be applied, without changing anything
fn check_option(
    state: &GameState,
    config: &GameConfig,
    choice: &PendingChoice,
    option: &ChoiceOption,
) -> ActionResult<()> {
    match option {
        ChoiceOption::Business(kind) => {
            let lot = choice
                .source
                .ok_or(ActionError::PrerequisiteFailed("no lot to build on"))?;
            check_open_business(state, lot, *kind).map(|_| ())
        }
        ChoiceOption::Recruit(_) => {
            if state.gangsters.len() >= config.max_crew {
                Err(ActionError::CrewFull {
                    max: config.max_crew,
                })
            } else {
                Ok(())
            }
        }
    }
}

/// Apply option `index` of the active prompt in `category`.
///
/// On failure the prompt stays active and nothing changes. On success the
/// next queued prompt of the same category becomes active.
pub fn resolve_choice(
    state: &mut GameState,
    config: &GameConfig,
    category: ChoiceCategory,
    index: usize,
    events: &mut Vec<TickEvent>,
) -> ActionResult<ChoiceOption> {
    let choice = state
        .choices
        .active(category)
        .ok_or(ActionError::NoActiveChoice(category))?;
    let option = choice
        .options
        .get(index)
        .cloned()
        .ok_or(ActionError::InvalidChoiceOption {
            index,
            available: choice.options.len(),
        })?;
    check_option(state, config, choice, &option)?;
    let source = choice.source;

    let message = match &option {
        ChoiceOption::Business(kind) => {
            // The lot was checked above
            let lot = source.ok_or(ActionError::PrerequisiteFailed("no lot to build on"))?;
            open_business(state, lot, *kind, events)?;
            format!("Building a {}.", kind.name())
        }
        ChoiceOption::Recruit(profile) => {
            let uid = add_gangster(state, profile.clone());
            let message = format!("{} joins the crew.", profile.name);
            events.push(TickEvent::CardSpawned {
                uid,
                kind: crate::cards::CardKind::Gangster,
                message: message.clone(),
            });
            message
        }
    };

    finish_active(state, category, message, events);
    Ok(option)
}

/// Drop the active prompt without applying anything
pub fn dismiss_choice(
    state: &mut GameState,
    category: ChoiceCategory,
    events: &mut Vec<TickEvent>,
) -> ActionResult<PendingChoice> {
    finish_active(state, category, "Never mind.".to_string(), events)
        .ok_or(ActionError::NoActiveChoice(category))
}

fn finish_active(
    state: &mut GameState,
    category: ChoiceCategory,
    message: String,
    events: &mut Vec<TickEvent>,
) -> Option<PendingChoice> {
    let done = state.choices.pop_active(category)?;
    tracing::info!("Resolved {:?} choice {}", category, done.id);
    events.push(TickEvent::ChoiceResolved {
        choice_id: done.id,
        category,
        message,
    });
    if let Some(next) = state.choices.active(category) {
        events.push(TickEvent::ChoiceActivated {
            choice_id: next.id,
            category,
            message: next.prompt.clone(),
        });
    }
    Some(done)
}
