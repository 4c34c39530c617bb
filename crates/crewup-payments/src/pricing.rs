//! Pricing Display
//!
//! Switches the figures on the pricing page between monthly and yearly
//! billing. All amounts are whole dollars; no floating point.

use crate::plan::BillingCycle;

/// Discount applied to twelve months when billed yearly
pub const YEARLY_DISCOUNT_PERCENT: u64 = 50;

/// Displayed values that are not amounts and are never rewritten
pub const NON_NUMERIC_LABELS: [&str; 2] = ["Free", "Custom Pricing"];

/// Twelve months with the yearly discount applied
const YEARLY_MULTIPLIER: u64 = 12 * (100 - YEARLY_DISCOUNT_PERCENT) / 100;

/// Yearly price for a monthly price, rounded down
pub const fn yearly_price(monthly: u64) -> u64 {
    monthly.saturating_mul(YEARLY_MULTIPLIER)
}

/// A price as displayed on the page
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayedPrice {
    /// A whole-dollar amount such as `$99`
    Amount(u64),

    /// Text left as-is: `Free`, `Custom Pricing`, or anything unparseable
    Label(String),
}

impl DisplayedPrice {
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if NON_NUMERIC_LABELS.contains(&text) {
            return Self::Label(text.to_string());
        }

        let stripped = text.replacen('$', "", 1);
        let stripped = stripped.trim_start();
        let digits_end = stripped
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(stripped.len());

        stripped[..digits_end]
            .parse()
            .map_or_else(|_| Self::Label(text.to_string()), Self::Amount)
    }
}

/// Text to show for a price element, `None` to leave it untouched.
///
/// `base_text` is the element's monthly text as rendered by the template.
pub fn display_price(base_text: &str, cycle: BillingCycle) -> Option<String> {
    match DisplayedPrice::parse(base_text) {
        DisplayedPrice::Label(_) => None,
        DisplayedPrice::Amount(_) if cycle == BillingCycle::Monthly => {
            Some(base_text.trim().to_string())
        }
        DisplayedPrice::Amount(monthly) => Some(format!("${}", yearly_price(monthly))),
    }
}

/// A price element on the page
pub trait PriceLabel {
    fn text(&self) -> String;

    fn set_text(&mut self, text: &str);

    /// Monthly text saved on the element by an earlier capture
    fn stored_base(&self) -> Option<String> {
        None
    }

    fn store_base(&mut self, _text: &str) {}
}

/// The element's monthly text, saving it on first sight
fn base_text<P: PriceLabel>(price: &mut P) -> String {
    if let Some(base) = price.stored_base() {
        return base;
    }
    let text = price.text();
    price.store_base(&text);
    text
}

impl PriceLabel for String {
    fn text(&self) -> String {
        self.clone()
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(self);
    }
}

/// Keeps each price element's monthly figure so the toggle can go back and
/// forth without compounding the discount.
///
/// Elements that can store their base text keep it across captures, so a
/// second display bound to the same page still sees the monthly figures.
#[derive(Clone, Debug, Default)]
pub struct PricingDisplay {
    base_texts: Vec<String>,
}

impl PricingDisplay {
    /// Remember the monthly text of every element
    pub fn capture<P: PriceLabel>(prices: &mut [P]) -> Self {
        Self {
            base_texts: prices.iter_mut().map(base_text).collect(),
        }
    }

    /// Rewrite every element for `cycle`; returns how many were changed.
    ///
    /// Elements beyond the captured set are captured on first sight.
    pub fn update<P: PriceLabel>(&mut self, prices: &mut [P], cycle: BillingCycle) -> usize {
        let mut updated = 0;

        for (index, price) in prices.iter_mut().enumerate() {
            if index >= self.base_texts.len() {
                self.base_texts.push(base_text(price));
            }

            if let Some(text) = display_price(&self.base_texts[index], cycle) {
                price.set_text(&text);
                updated += 1;
            }
        }

        tracing::debug!(cycle = %cycle, updated, "Updated pricing display");
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yearly_price() {
        assert_eq!(yearly_price(99), 594);
        assert_eq!(yearly_price(0), 0);
        assert_eq!(yearly_price(u64::MAX / 6), u64::MAX / 6 * 6);
        assert_eq!(yearly_price(u64::MAX / 6 + 1), u64::MAX);
        assert_eq!(yearly_price(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_parse() {
        assert_eq!(DisplayedPrice::parse("$99"), DisplayedPrice::Amount(99));
        assert_eq!(DisplayedPrice::parse("  $49/mo "), DisplayedPrice::Amount(49));
        assert_eq!(DisplayedPrice::parse("15"), DisplayedPrice::Amount(15));
        assert_eq!(DisplayedPrice::parse(" Free "), DisplayedPrice::Label("Free".into()));
        assert_eq!(
            DisplayedPrice::parse("Custom Pricing"),
            DisplayedPrice::Label("Custom Pricing".into())
        );
        assert_eq!(DisplayedPrice::parse("TBD"), DisplayedPrice::Label("TBD".into()));
    }

    #[test]
    fn test_display_price() {
        assert_eq!(display_price("$99", BillingCycle::Yearly), Some("$594".into()));
        assert_eq!(display_price("$99", BillingCycle::Monthly), Some("$99".into()));
        assert_eq!(display_price("Free", BillingCycle::Yearly), None);
        assert_eq!(display_price("Custom Pricing", BillingCycle::Yearly), None);
    }

    #[test]
    fn test_toggle_back_and_forth() {
        let mut prices = vec!["$99".to_string(), "Free".to_string(), "$20".to_string()];
        let mut display = PricingDisplay::capture(&mut prices);

        assert_eq!(display.update(&mut prices, BillingCycle::Yearly), 2);
        assert_eq!(prices, vec!["$594", "Free", "$120"]);

        // Toggling again must not discount the discounted figure
        display.update(&mut prices, BillingCycle::Yearly);
        assert_eq!(prices, vec!["$594", "Free", "$120"]);

        display.update(&mut prices, BillingCycle::Monthly);
        assert_eq!(prices, vec!["$99", "Free", "$20"]);
    }

    #[test]
    fn test_late_elements_are_captured() {
        let mut display = PricingDisplay::default();
        let mut prices = vec!["$10".to_string()];
        display.update(&mut prices, BillingCycle::Yearly);
        assert_eq!(prices, vec!["$60"]);
    }

    /// Price that keeps its base text the way a DOM element does
    struct TaggedPrice {
        text: String,
        base: Option<String>,
    }

    impl TaggedPrice {
        fn new(text: &str) -> Self {
            Self { text: text.into(), base: None }
        }
    }

    impl PriceLabel for TaggedPrice {
        fn text(&self) -> String {
            self.text.clone()
        }

        fn set_text(&mut self, text: &str) {
            text.clone_into(&mut self.text);
        }

        fn stored_base(&self) -> Option<String> {
            self.base.clone()
        }

        fn store_base(&mut self, text: &str) {
            self.base = Some(text.to_string());
        }
    }

    fn texts(prices: &[TaggedPrice]) -> Vec<String> {
        prices.iter().map(PriceLabel::text).collect()
    }

    #[test]
    fn test_second_capture_keeps_monthly_base() {
        let mut prices = vec![TaggedPrice::new("$99"), TaggedPrice::new("Free")];
        let mut first = PricingDisplay::capture(&mut prices);
        first.update(&mut prices, BillingCycle::Yearly);
        assert_eq!(texts(&prices), vec!["$594", "Free"]);

        // Bound again while the page shows yearly figures
        let mut second = PricingDisplay::capture(&mut prices);
        second.update(&mut prices, BillingCycle::Yearly);
        assert_eq!(texts(&prices), vec!["$594", "Free"]);

        second.update(&mut prices, BillingCycle::Monthly);
        assert_eq!(texts(&prices), vec!["$99", "Free"]);
        first.update(&mut prices, BillingCycle::Monthly);
        assert_eq!(texts(&prices), vec!["$99", "Free"]);
    }
}
