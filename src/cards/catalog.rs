//! Content ids that decks hand out, and what each one puts into play.

use super::types::CardKind;
use crate::core::config::GameConfig;
use crate::core::error::{ActionError, ActionResult};
use crate::core::game_state::GameState;
use crate::core::tick::TickEvent;
use crate::crew::{add_gangster, generate_candidate};
use crate::deck::DeckId;
use crate::heat::add_heat;
use rand::Rng;

/// Everything a deck may contain
pub const CONTENT_IDS: [&str; 11] = [
    "shop",
    "vacant_lot",
    "hideout",
    "police_station",
    "drifter",
    "cash_small",
    "cash_large",
    "tip_off",
    "deck_downtown",
    "deck_docks",
    "deck_neighborhood",
];

/// What one drawn id resolves to before anything is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    Card(CardKind),
    Drifter,
    Cash(u64),
    TipOff(u32),
}

pub fn lookup_content(id: &str) -> Option<Content> {
    let content = match id {
        "shop" => Content::Card(CardKind::Shop),
        "vacant_lot" => Content::Card(CardKind::VacantLot),
        "hideout" => Content::Card(CardKind::Hideout),
        "police_station" => Content::Card(CardKind::PoliceStation),
        "deck_neighborhood" => Content::Card(CardKind::Deck(DeckId::Neighborhood)),
        "deck_downtown" => Content::Card(CardKind::Deck(DeckId::Downtown)),
        "deck_docks" => Content::Card(CardKind::Deck(DeckId::Docks)),
        "drifter" => Content::Drifter,
        "cash_small" => Content::Cash(25),
        "cash_large" => Content::Cash(100),
        "tip_off" => Content::TipOff(10),
        _ => return None,
    };
    Some(content)
}

/// Put one drawn id into play
pub fn spawn_content<R: Rng>(
    state: &mut GameState,
    config: &GameConfig,
    id: &str,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) -> ActionResult<()> {
    let content = lookup_content(id).ok_or_else(|| ActionError::UnknownContent(id.to_string()))?;
    match content {
        Content::Card(kind) => {
            let uid = state.place_card(kind);
            events.push(TickEvent::CardSpawned {
                uid,
                kind,
                message: format!("A {} turns up.", kind.title()),
            });
        }
        Content::Drifter => {
            if state.gangsters.len() >= config.max_crew {
                events.push(TickEvent::Notice {
                    message: "A drifter wanders by, but the crew is full.".to_string(),
                });
            } else {
                let profile = generate_candidate(rng);
                let message = format!("{} offers to join up.", profile.name);
                let uid = add_gangster(state, profile);
                events.push(TickEvent::CardSpawned {
                    uid,
                    kind: CardKind::Gangster,
                    message,
                });
            }
        }
        Content::Cash(amount) => {
            state.earn(amount, events);
        }
        Content::TipOff(amount) => {
            add_heat(state, amount, events);
        }
    }
    Ok(())
}
