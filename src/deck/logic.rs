//! Deck definitions and drawing from deck cards on the table.

use super::types::{Deck, DeckEntry};
use crate::actions::ActionId;
use crate::cards::{spawn_content, CardKind};
use crate::core::config::GameConfig;
use crate::core::error::{ActionError, ActionResult};
use crate::core::game_state::GameState;
use crate::core::tick::TickEvent;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Deck cards available in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckId {
    Neighborhood,
    Downtown,
    Docks,
}

/// Static contents of a deck. Each entry is a list of ids; one id is a
/// single draw, more than one is a group.
pub struct DeckDefinition {
    pub start: &'static [&'static [&'static str]],
    pub pool: &'static [&'static [&'static str]],
    pub end: &'static [&'static [&'static str]],
}

const NEIGHBORHOOD: DeckDefinition = DeckDefinition {
    start: &[&["shop"], &["vacant_lot", "hideout"]],
    pool: &[
        &["cash_small"],
        &["shop"],
        &["drifter"],
        &["cash_small"],
        &["tip_off"],
        &["vacant_lot"],
    ],
    end: &[&["police_station"], &["deck_downtown"]],
};

const DOWNTOWN: DeckDefinition = DeckDefinition {
    start: &[&["shop", "shop"]],
    pool: &[
        &["cash_large"],
        &["vacant_lot"],
        &["drifter"],
        &["tip_off"],
        &["tip_off"],
        &["cash_small"],
        &["vacant_lot"],
    ],
    end: &[&["deck_docks"]],
};

const DOCKS: DeckDefinition = DeckDefinition {
    start: &[&["hideout"]],
    pool: &[
        &["cash_large"],
        &["cash_large"],
        &["drifter"],
        &["tip_off"],
        &["vacant_lot", "tip_off"],
    ],
    end: &[&["police_station"]],
};

impl DeckId {
    pub const ALL: [DeckId; 3] = [DeckId::Neighborhood, DeckId::Downtown, DeckId::Docks];

    pub fn name(&self) -> &'static str {
        match self {
            DeckId::Neighborhood => "The Neighborhood",
            DeckId::Downtown => "Downtown",
            DeckId::Docks => "The Docks",
        }
    }

    pub fn definition(&self) -> &'static DeckDefinition {
        match self {
            DeckId::Neighborhood => &NEIGHBORHOOD,
            DeckId::Downtown => &DOWNTOWN,
            DeckId::Docks => &DOCKS,
        }
    }
}

fn entries(defs: &[&[&str]]) -> Vec<DeckEntry> {
    defs.iter()
        .map(|ids| match ids {
            [single] => DeckEntry::single(*single),
            _ => DeckEntry::group(ids.iter().copied()),
        })
        .collect()
}

impl DeckDefinition {
    /// Builds a fresh, shuffled deck from this definition
    pub fn build<R: Rng>(&self, rng: &mut R) -> Deck {
        Deck::new(
            entries(self.start),
            entries(self.pool),
            entries(self.end),
            rng,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.pool.is_empty() && self.end.is_empty()
    }
}

/// Which deck a table card draws from, if it is a deck card
pub fn deck_id_of(state: &GameState, card_uid: u64) -> ActionResult<Option<DeckId>> {
    let card = state
        .card(card_uid)
        .ok_or(ActionError::UnknownCard(card_uid))?;
    Ok(match card.kind {
        CardKind::Deck(id) => Some(id),
        _ => None,
    })
}

/// Whether drawing from this deck card would yield anything.
/// A deck that has never been drawn from is as full as its definition.
pub fn card_has_more(state: &GameState, card_uid: u64) -> ActionResult<bool> {
    match state.decks.get(&card_uid) {
        Some(deck) => Ok(deck.has_more()),
        None => Ok(deck_id_of(state, card_uid)?
            .map(|id| !id.definition().is_empty())
            .unwrap_or(false)),
    }
}

/// Draws the next group from a deck card and puts every id into play.
///
/// The card's deck is created from its definition the first time it is drawn
/// from and persists from then on. Returns the drawn ids.
pub fn draw_from_card<R: Rng>(
    state: &mut GameState,
    config: &GameConfig,
    card_uid: u64,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) -> ActionResult<Vec<String>> {
    let deck_id = match deck_id_of(state, card_uid)? {
        Some(id) => id,
        None => {
            return Err(ActionError::InvalidTarget {
                action: ActionId::Explore,
                target: state.card_class(card_uid)?,
            })
        }
    };

    if !card_has_more(state, card_uid)? {
        return Err(ActionError::DeckExhausted(card_uid));
    }

    let deck = state
        .decks
        .entry(card_uid)
        .or_insert_with(|| deck_id.definition().build(rng));
    let drawn = deck.draw().ok_or(ActionError::DeckExhausted(card_uid))?;
    let exhausted = !deck.has_more();

    tracing::debug!("Drew {:?} from {} ({})", drawn, deck_id.name(), card_uid);
    state.totals.cards_drawn += drawn.len() as u64;

    for id in &drawn {
        if let Err(e) = spawn_content(state, config, id, rng, events) {
            tracing::warn!("Skipping card from {}: {}", deck_id.name(), e);
        }
    }

    if exhausted {
        events.push(TickEvent::DeckExhausted {
            card: card_uid,
            message: format!("{} has nothing more to offer.", deck_id.name()),
        });
    }

    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_definitions_use_known_content() {
        for deck in DeckId::ALL {
            let def = deck.definition();
            for ids in def.start.iter().chain(def.pool).chain(def.end) {
                for id in *ids {
                    assert!(
                        crate::cards::lookup_content(id).is_some(),
                        "{} in {:?}",
                        id,
                        deck
                    );
                }
            }
        }
    }

    #[test]
    fn test_single_id_entries_are_singles() {
        let built = entries(&[&["a"], &["b", "c"]]);
        assert_eq!(built[0], DeckEntry::single("a"));
        assert_eq!(built[1], DeckEntry::group(["b", "c"]));
    }

    #[test]
    fn test_deck_created_on_first_draw() {
        let mut state = GameState::new(0);
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let card = state.place_card(CardKind::Deck(DeckId::Docks));
        assert!(!state.decks.contains_key(&card));

        let mut events = Vec::new();
        let drawn = draw_from_card(&mut state, &config, card, &mut rng, &mut events).unwrap();
        assert_eq!(drawn, vec!["hideout".to_string()]);
        assert!(state.decks.contains_key(&card));
        assert!(events
            .iter()
            .any(|e| matches!(e, TickEvent::CardSpawned { kind: CardKind::Hideout, .. })));
    }

    #[test]
    fn test_exhausted_deck_is_error() {
        let mut state = GameState::new(0);
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let card = state.place_card(CardKind::Deck(DeckId::Docks));
        let total = {
            let def = DeckId::Docks.definition();
            def.start.len() + def.pool.len() + def.end.len()
        };

        let mut events = Vec::new();
        for _ in 0..total {
            draw_from_card(&mut state, &config, card, &mut rng, &mut events).unwrap();
        }
        assert!(events
            .iter()
            .any(|e| matches!(e, TickEvent::DeckExhausted { .. })));
        assert_eq!(card_has_more(&state, card), Ok(false));

        let before = state.clone();
        let result = draw_from_card(&mut state, &config, card, &mut rng, &mut events);
        assert_eq!(result, Err(ActionError::DeckExhausted(card)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_non_deck_card_rejected() {
        let mut state = GameState::new(0);
        let shop = state.place_card(CardKind::Shop);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let result = draw_from_card(
            &mut state,
            &GameConfig::default(),
            shop,
            &mut rng,
            &mut Vec::new(),
        );
        assert!(matches!(result, Err(ActionError::InvalidTarget { .. })));
    }
}
