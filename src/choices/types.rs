//! Prompts opened by action effects, serialized per category.

use crate::business::BusinessType;
use crate::crew::GangsterProfile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoiceCategory {
    /// Pick what to build on a vacant lot
    BusinessType,
    /// Pick one of the offered recruits
    Recruit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceOption {
    Business(BusinessType),
    Recruit(GangsterProfile),
}

impl ChoiceOption {
    pub fn label(&self) -> String {
        match self {
            ChoiceOption::Business(kind) => format!("{} (${})", kind.name(), kind.build_cost()),
            ChoiceOption::Recruit(profile) => format!(
                "{} (M{} B{} C{})",
                profile.name, profile.muscle, profile.brains, profile.charm
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingChoice {
    pub id: u64,
    pub category: ChoiceCategory,
    pub prompt: String,
    pub options: Vec<ChoiceOption>,
    /// Card the choice applies to (the lot being built on)
    #[serde(default)]
    pub source: Option<u64>,
}

/// Pending prompts in arrival order.
///
/// The oldest prompt of each category is the active one; the rest of that
/// category wait behind it. Categories do not block each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceQueue {
    pending: Vec<PendingChoice>,
}

impl ChoiceQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a prompt. Returns true if it is immediately the active one.
    pub fn push(&mut self, choice: PendingChoice) -> bool {
        let becomes_active = self.active(choice.category).is_none();
        self.pending.push(choice);
        becomes_active
    }

    pub fn active(&self, category: ChoiceCategory) -> Option<&PendingChoice> {
        self.pending.iter().find(|c| c.category == category)
    }

    /// Remove and return the active prompt of a category
    pub fn pop_active(&mut self, category: ChoiceCategory) -> Option<PendingChoice> {
        let index = self.pending.iter().position(|c| c.category == category)?;
        Some(self.pending.remove(index))
    }

    /// Prompts waiting behind the active one
    pub fn queued_len(&self, category: ChoiceCategory) -> usize {
        self.pending
            .iter()
            .filter(|c| c.category == category)
            .count()
            .saturating_sub(1)
    }

    /// The active prompt of every category that has one
    pub fn active_choices(&self) -> Vec<&PendingChoice> {
        let mut seen = Vec::new();
        let mut active = Vec::new();
        for choice in &self.pending {
            if !seen.contains(&choice.category) {
                seen.push(choice.category);
                active.push(choice);
            }
        }
        active
    }

    /// Whether any prompt, active or queued, concerns this card
    pub fn has_source(&self, uid: u64) -> bool {
        self.pending.iter().any(|c| c.source == Some(uid))
    }

    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.pending.iter().map(|c| c.id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(id: u64, category: ChoiceCategory) -> PendingChoice {
        PendingChoice {
            id,
            category,
            prompt: String::new(),
            options: vec![ChoiceOption::Business(BusinessType::Bar)],
            source: None,
        }
    }

    #[test]
    fn test_first_push_is_active() {
        let mut queue = ChoiceQueue::new();
        assert!(queue.push(choice(1, ChoiceCategory::BusinessType)));
        assert!(!queue.push(choice(2, ChoiceCategory::BusinessType)));
        assert_eq!(queue.active(ChoiceCategory::BusinessType).map(|c| c.id), Some(1));
        assert_eq!(queue.queued_len(ChoiceCategory::BusinessType), 1);
    }

    #[test]
    fn test_fifo_drain() {
        let mut queue = ChoiceQueue::new();
        for id in 1..=3 {
            queue.push(choice(id, ChoiceCategory::Recruit));
        }
        let drained: Vec<u64> = std::iter::from_fn(|| queue.pop_active(ChoiceCategory::Recruit))
            .map(|c| c.id)
            .collect();
        assert_eq!(drained, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_categories_independent() {
        let mut queue = ChoiceQueue::new();
        queue.push(choice(1, ChoiceCategory::BusinessType));
        assert!(queue.push(choice(2, ChoiceCategory::Recruit)));
        let active: Vec<u64> = queue.active_choices().iter().map(|c| c.id).collect();
        assert_eq!(active, vec![1, 2]);
        assert_eq!(queue.queued_len(ChoiceCategory::Recruit), 0);
    }
}
