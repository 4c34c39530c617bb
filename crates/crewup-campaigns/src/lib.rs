//! # crewup-campaigns
//!
//! Client-side filtering for the campaign list page.
//!
//! The page template renders every campaign as a card up front. Filtering
//! never fetches anything: each input event re-evaluates the visibility of the
//! whole card set from scratch.
//!
//! ```text
//! ┌──────────────┐   input    ┌─────────────────────┐
//! │  .search-box │──────────▶│ CardFilter::Search  │──┐
//! └──────────────┘            └─────────────────────┘  │   show / hide
//! ┌──────────────────┐ change ┌─────────────────────┐  ├──▶ .campaign-card
//! │ .filter-dropdown │──────▶│ CardFilter::Category│──┘
//! └──────────────────┘        └─────────────────────┘
//! ```
//!
//! The two filters are independent. A search event ignores the dropdown and a
//! dropdown change ignores the search box.
//!
//! ## Usage
//!
//! ```rust
//! use crewup_campaigns::{CampaignCard, CardFilter};
//!
//! let cards = vec![
//!     CampaignCard::new("Short Film Crew", "film"),
//!     CampaignCard::new("Podcast Editor", "audio"),
//! ];
//!
//! assert_eq!(CardFilter::search("film").visibility(&cards), vec![true, false]);
//! assert_eq!(CardFilter::category("AUDIO").visibility(&cards), vec![false, true]);
//! ```

mod card;
mod filter;

pub use card::{CampaignCard, FilterTarget};
pub use filter::{ALL_CATEGORIES, CardFilter, FilterSummary, category_matches, title_matches};
