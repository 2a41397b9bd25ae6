//! Segmented draw queue.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One slot in a deck: a single content id, or ids that are always drawn together.
///
/// Serialized untagged, so a persisted segment reads `["shop", ["lot", "hideout"]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeckEntry {
    Single(String),
    Group(Vec<String>),
}

impl DeckEntry {
    pub fn single(id: impl Into<String>) -> Self {
        DeckEntry::Single(id.into())
    }

    pub fn group<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DeckEntry::Group(ids.into_iter().map(Into::into).collect())
    }

    /// A group with no ids, which only a hand-edited save can contain
    pub fn is_empty(&self) -> bool {
        matches!(self, DeckEntry::Group(ids) if ids.is_empty())
    }

    pub fn into_ids(self) -> Vec<String> {
        match self {
            DeckEntry::Single(id) => vec![id],
            DeckEntry::Group(ids) => ids,
        }
    }
}

impl From<&str> for DeckEntry {
    fn from(id: &str) -> Self {
        DeckEntry::Single(id.to_string())
    }
}

/// Draws every `start` entry in order, then `middle` in an order shuffled once
/// at construction, then every `end` entry in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    start: VecDeque<DeckEntry>,
    #[serde(default)]
    middle: VecDeque<DeckEntry>,
    #[serde(default)]
    end: VecDeque<DeckEntry>,
}

impl Deck {
    /// Builds a deck, shuffling `pool` into the middle segment.
    pub fn new<R: Rng>(
        start: Vec<DeckEntry>,
        pool: Vec<DeckEntry>,
        end: Vec<DeckEntry>,
        rng: &mut R,
    ) -> Self {
        let mut middle = pool;
        middle.shuffle(rng);
        Self::from_segments(start, middle, end)
    }

    /// Restores a deck in the given order. The middle is not reshuffled and
    /// empty groups are dropped.
    pub fn from_segments(
        start: Vec<DeckEntry>,
        middle: Vec<DeckEntry>,
        end: Vec<DeckEntry>,
    ) -> Self {
        let keep = |segment: Vec<DeckEntry>| -> VecDeque<DeckEntry> {
            segment.into_iter().filter(|e| !e.is_empty()).collect()
        };
        Self {
            start: keep(start),
            middle: keep(middle),
            end: keep(end),
        }
    }

    /// Removes and returns the ids of the next entry, or `None` once every
    /// segment is exhausted. Never returns an empty list.
    pub fn draw(&mut self) -> Option<Vec<String>> {
        loop {
            let entry = self
                .start
                .pop_front()
                .or_else(|| self.middle.pop_front())
                .or_else(|| self.end.pop_front())?;
            if !entry.is_empty() {
                return Some(entry.into_ids());
            }
        }
    }

    pub fn has_more(&self) -> bool {
        self.remaining() > 0
    }

    /// Entries left to draw (a group counts once)
    pub fn remaining(&self) -> usize {
        self.start
            .iter()
            .chain(&self.middle)
            .chain(&self.end)
            .filter(|e| !e.is_empty())
            .count()
    }

    pub fn start(&self) -> &VecDeque<DeckEntry> {
        &self.start
    }

    pub fn middle(&self) -> &VecDeque<DeckEntry> {
        &self.middle
    }

    pub fn end(&self) -> &VecDeque<DeckEntry> {
        &self.end
    }
}
