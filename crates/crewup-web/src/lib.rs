//! CrewUp Page Scripts
//!
//! WASM module loaded by the server-rendered templates. On start it binds to
//! whatever is already on the page:
//!
//! - the campaign list's search box and category dropdown,
//! - the pricing page's billing toggle,
//! - plan checkout and contact-sales buttons.
//!
//! Nothing is rendered here; the markup belongs to the templates.

mod checkout;
mod dom;
mod filter;
mod pricing;

pub use checkout::CrewUpCheckout;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Ok(());
    };

    filter::bind_campaign_filter(&document)?;
    pricing::bind_pricing_display(
        &document,
        pricing::DEFAULT_TOGGLE_ID,
        pricing::DEFAULT_PRICE_SELECTOR,
    )?;

    let initiator = Rc::new(checkout::build_initiator(checkout::config_from_page(&document))?);
    let buttons = checkout::bind_checkout_buttons(&document, &initiator)?;

    tracing::info!(checkout_buttons = buttons, "Page scripts initialized");
    Ok(())
}
