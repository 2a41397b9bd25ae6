use crate::deck::DeckId;
use serde::{Deserialize, Serialize};

/// What a card on the table represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Gangster,
    Business,
    Deck(DeckId),
    Shop,
    VacantLot,
    PoliceStation,
    Hideout,
}

/// Card kinds grouped the way actions target them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardClass {
    Gangster,
    Business,
    Deck,
    Shop,
    VacantLot,
    PoliceStation,
    Hideout,
}

impl CardKind {
    pub fn class(&self) -> CardClass {
        match self {
            CardKind::Gangster => CardClass::Gangster,
            CardKind::Business => CardClass::Business,
            CardKind::Deck(_) => CardClass::Deck,
            CardKind::Shop => CardClass::Shop,
            CardKind::VacantLot => CardClass::VacantLot,
            CardKind::PoliceStation => CardClass::PoliceStation,
            CardKind::Hideout => CardClass::Hideout,
        }
    }

    /// Display name for the card face
    pub fn title(&self) -> &'static str {
        match self {
            CardKind::Gangster => "Gangster",
            CardKind::Business => "Business",
            CardKind::Deck(deck) => deck.name(),
            CardKind::Shop => "Corner Shop",
            CardKind::VacantLot => "Vacant Lot",
            CardKind::PoliceStation => "Police Station",
            CardKind::Hideout => "Hideout",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCard {
    pub uid: u64,
    pub kind: CardKind,
}
