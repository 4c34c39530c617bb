//! Pricing Toggle Binding

use crewup_payments::{BillingCycle, PricingDisplay};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, HtmlInputElement};

use crate::dom::{DomPrice, query_all};

pub const DEFAULT_TOGGLE_ID: &str = "billing-toggle";
pub const DEFAULT_PRICE_SELECTOR: &str = ".monthly-price";

fn toggle(document: &Document, toggle_id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(toggle_id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
}

/// Cycle selected by the toggle checkbox; monthly if it's missing
pub fn billing_cycle(document: &Document, toggle_id: &str) -> BillingCycle {
    BillingCycle::from_toggle(toggle(document, toggle_id).map(|input| input.checked()))
}

/// Toggle attribute marking that a change listener is already attached
const BOUND_KEY: &str = "pricingBound";

/// Rewrite the prices now and on every toggle change.
///
/// Binding the same toggle again only refreshes the prices. Returns `false`
/// when the page has no toggle.
pub fn bind_pricing_display(
    document: &Document,
    toggle_id: &str,
    price_selector: &str,
) -> Result<bool, JsValue> {
    let Some(input) = toggle(document, toggle_id) else {
        return Ok(false);
    };

    let mut prices: Vec<DomPrice> = query_all(document, price_selector)?
        .into_iter()
        .map(DomPrice::new)
        .collect();
    let mut display = PricingDisplay::capture(&mut prices);
    display.update(&mut prices, BillingCycle::from_toggle(Some(input.checked())));

    if input.dataset().get(BOUND_KEY).is_some() {
        tracing::debug!(toggle_id, "Pricing toggle already bound");
        return Ok(true);
    }
    input.dataset().set(BOUND_KEY, "true")?;

    let checkbox = input.clone();
    let on_change = Closure::<dyn FnMut()>::new(move || {
        let cycle = BillingCycle::from_toggle(Some(checkbox.checked()));
        display.update(&mut prices, cycle);
    });
    input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();

    tracing::debug!(toggle_id, price_selector, "Pricing toggle bound");
    Ok(true)
}
