//! Card Filters
//!
//! Case-insensitive title search and category selection.

use crate::card::{CampaignCard, FilterTarget};

/// Dropdown value that disables category filtering
pub const ALL_CATEGORIES: &str = "all";

/// Whether `title` contains `term`, ignoring case.
///
/// An empty term matches every title.
pub fn title_matches(title: &str, term: &str) -> bool {
    title.to_lowercase().contains(&term.to_lowercase())
}

/// Whether a card in `category` is shown for the dropdown value `selected`.
pub fn category_matches(category: &str, selected: &str) -> bool {
    let selected = selected.to_lowercase();
    selected == ALL_CATEGORIES || category.to_lowercase() == selected
}

/// A single filter event
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardFilter {
    /// Text typed into the search box
    Search(String),

    /// Value picked in the category dropdown
    Category(String),
}

impl CardFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self::Search(term.into())
    }

    pub fn category(value: impl Into<String>) -> Self {
        Self::Category(value.into())
    }

    /// Check one card against this filter
    pub fn matches(&self, card: &CampaignCard) -> bool {
        match self {
            Self::Search(term) => title_matches(&card.title, term),
            Self::Category(selected) => category_matches(&card.category, selected),
        }
    }

    /// Visibility of every card under this filter, in order
    pub fn visibility(&self, cards: &[CampaignCard]) -> Vec<bool> {
        cards.iter().map(|card| self.matches(card)).collect()
    }

    /// Show or hide every target.
    ///
    /// Targets missing the attribute this filter reads are left untouched.
    pub fn apply<T: FilterTarget>(&self, targets: &mut [T]) -> FilterSummary {
        let mut summary = FilterSummary::default();

        for target in targets.iter_mut() {
            let visible = match self {
                Self::Search(term) => target.title().map(|title| title_matches(&title, term)),
                Self::Category(selected) => target
                    .category()
                    .map(|category| category_matches(&category, selected)),
            };

            match visible {
                Some(true) => {
                    target.set_visible(true);
                    summary.shown += 1;
                }
                Some(false) => {
                    target.set_visible(false);
                    summary.hidden += 1;
                }
                None => summary.skipped += 1,
            }
        }

        tracing::debug!(
            filter = ?self,
            shown = summary.shown,
            hidden = summary.hidden,
            skipped = summary.skipped,
            "Applied campaign filter"
        );

        summary
    }
}

/// Counts from one filter pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub shown: usize,
    pub hidden: usize,
    /// Cards without the title or category the filter needed
    pub skipped: usize,
}
