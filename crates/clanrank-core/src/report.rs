//! Engine output: the scored item list and rank summary.
//!
//! Plain data for consumers to render; no presentation logic lives here.

use crate::catalog::{Category, ItemKey};
use crate::rank::RankSummary;

/// One evaluated rank item.
#[derive(Debug, Clone)]
pub struct ScoredItem {
    pub key: ItemKey,
    pub name: &'static str,
    pub category: Category,
    pub max_points: u32,
    pub earned_points: u32,
    pub completed: bool,
}

/// The finished report for one player evaluation.
#[derive(Debug, Clone)]
pub struct ScoreReport {
    /// Every catalog item in catalog order (grouped by category).
    pub items: Vec<ScoredItem>,
    /// Sum of `earned_points` over all items.
    pub total_points: u32,
    pub summary: RankSummary,
}

impl ScoreReport {
    /// Items belonging to one category, in catalog order.
    pub fn items_in(&self, category: Category) -> impl Iterator<Item = &ScoredItem> {
        self.items.iter().filter(move |i| i.category == category)
    }

    /// Looks up a single item by key.
    #[must_use]
    pub fn item(&self, key: ItemKey) -> Option<&ScoredItem> {
        self.items.iter().find(|i| i.key == key)
    }
}
