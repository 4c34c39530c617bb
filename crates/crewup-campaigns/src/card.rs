//! Campaign Cards

use serde::{Deserialize, Serialize};

/// A campaign card as rendered by the page template
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignCard {
    /// Text of the card's `.campaign-title` element
    pub title: String,

    /// Value of the card's `data-category` attribute
    pub category: String,

    /// Whether the card is currently displayed
    #[serde(default = "default_visible")]
    pub visible: bool,
}

const fn default_visible() -> bool {
    true
}

impl CampaignCard {
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            visible: true,
        }
    }
}

/// Something the filter can show or hide.
///
/// `None` from an accessor means the node or attribute is missing from the
/// page; the filter leaves such a card alone.
pub trait FilterTarget {
    fn title(&self) -> Option<String>;

    fn category(&self) -> Option<String>;

    fn set_visible(&mut self, visible: bool);
}

impl FilterTarget for CampaignCard {
    fn title(&self) -> Option<String> {
        Some(self.title.clone())
    }

    fn category(&self) -> Option<String> {
        Some(self.category.clone())
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
