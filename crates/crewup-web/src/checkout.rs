//! Checkout Buttons
//!
//! Exposes the checkout initiator to page scripts as `CrewUpCheckout` and
//! wires up `.checkout-button` elements declared in the template:
//!
//! ```html
//! <button class="checkout-button" data-plan="pro">Upgrade</button>
//! <button class="checkout-button" data-plan="pro" data-billing-cycle="yearly">Go yearly</button>
//! <button class="contact-sales-button">Talk to sales</button>
//! ```
//!
//! A button without `data-billing-cycle` follows the `#billing-toggle` state.

use std::rc::Rc;

use crewup_payments::{
    BillingCycle, ButtonControl, CheckoutConfig, CheckoutError, CheckoutInitiator,
    CheckoutOutcome, ReqwestTransport,
};
use js_sys::Promise;
use wasm_bindgen::{JsCast, closure::Closure, prelude::*};
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys::{Document, Event, HtmlElement, Window};

use crate::dom::{DocumentAuth, DomButton, DomPage, query_all};
use crate::pricing::{self, DEFAULT_PRICE_SELECTOR, DEFAULT_TOGGLE_ID};

pub const CHECKOUT_BUTTON_SELECTOR: &str = ".checkout-button";
pub const CONTACT_SALES_SELECTOR: &str = ".contact-sales-button";

/// `<body>` attribute holding a JSON [`CheckoutConfig`]
pub const CONFIG_ATTRIBUTE: &str = "data-checkout-config";

fn js_error(error: &CheckoutError) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// Configuration from the body's `data-checkout-config`, or defaults
pub fn config_from_page(document: &Document) -> CheckoutConfig {
    let Some(json) = document
        .body()
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE))
    else {
        return CheckoutConfig::default();
    };

    CheckoutConfig::from_json(&json).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Ignoring invalid checkout config");
        CheckoutConfig::default()
    })
}

/// Initiator backed by the live page
pub fn build_initiator(config: CheckoutConfig) -> Result<CheckoutInitiator, JsValue> {
    let window = window()?;
    let origin = config
        .origin
        .clone()
        .or_else(|| window.location().origin().ok());

    let transport = origin.map_or_else(ReqwestTransport::new, |origin| ReqwestTransport::with_origin(origin));

    Ok(CheckoutInitiator::new(
        config,
        Rc::new(transport),
        Rc::new(DomPage::new(window.clone())),
        Rc::new(DocumentAuth::new(window)),
    ))
}

const fn outcome_label(outcome: &CheckoutOutcome) -> &'static str {
    match outcome {
        CheckoutOutcome::LoginRedirect { .. } => "login_redirect",
        CheckoutOutcome::Redirected { .. } => "redirected",
        CheckoutOutcome::Failed(_) => "failed",
    }
}

async fn run_checkout(
    initiator: Rc<CheckoutInitiator>,
    plan_type: String,
    billing_cycle: String,
    button: Option<HtmlElement>,
) -> CheckoutOutcome {
    let button = button.map(DomButton::new);
    initiator
        .initiate_checkout(
            &plan_type,
            &billing_cycle,
            button.as_ref().map(|b| b as &dyn ButtonControl),
        )
        .await
}

/// Wire every checkout and contact-sales button on the page
pub fn bind_checkout_buttons(
    document: &Document,
    initiator: &Rc<CheckoutInitiator>,
) -> Result<usize, JsValue> {
    let buttons = query_all(document, CHECKOUT_BUTTON_SELECTOR)?;
    let count = buttons.len();

    for element in buttons {
        let initiator = initiator.clone();
        let doc = document.clone();
        let button = element.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();

            let plan_type = button.dataset().get("plan").unwrap_or_default();
            let billing_cycle = button
                .dataset()
                .get("billingCycle")
                .unwrap_or_else(|| pricing::billing_cycle(&doc, DEFAULT_TOGGLE_ID).to_string());

            let initiator = initiator.clone();
            let button = button.clone();
            spawn_local(async move {
                run_checkout(initiator, plan_type, billing_cycle, Some(button)).await;
            });
        });
        element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    for element in query_all(document, CONTACT_SALES_SELECTOR)? {
        let initiator = initiator.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            initiator.contact_enterprise();
        });
        element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    tracing::debug!(count, "Checkout buttons bound");
    Ok(count)
}

/// Checkout handler for page scripts
#[wasm_bindgen]
pub struct CrewUpCheckout {
    initiator: Rc<CheckoutInitiator>,
}

#[wasm_bindgen]
impl CrewUpCheckout {
    /// `config` is an optional JSON string (`loginUrl`, `checkoutEndpoint`,
    /// `origin`); without it the page's `data-checkout-config` is used.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<CrewUpCheckout, JsValue> {
        let config = match config {
            Some(json) => CheckoutConfig::from_json(&json).map_err(|e| js_error(&e))?,
            None => window()?
                .document()
                .map(|document| config_from_page(&document))
                .unwrap_or_default(),
        };

        Ok(Self {
            initiator: Rc::new(build_initiator(config)?),
        })
    }

    /// Start a checkout; resolves to `redirected`, `login_redirect` or
    /// `failed` once the outcome is known.
    #[wasm_bindgen(js_name = handlePayment)]
    pub fn handle_payment(
        &self,
        plan_type: String,
        billing_cycle: Option<String>,
        button: Option<HtmlElement>,
    ) -> Promise {
        let initiator = self.initiator.clone();
        let billing_cycle = billing_cycle.unwrap_or_else(|| BillingCycle::default().to_string());

        future_to_promise(async move {
            let outcome = run_checkout(initiator, plan_type, billing_cycle, button).await;
            Ok(JsValue::from_str(outcome_label(&outcome)))
        })
    }

    #[wasm_bindgen(js_name = contactEnterprise)]
    pub fn contact_enterprise(&self) {
        self.initiator.contact_enterprise();
    }

    /// `yearly` if the toggle is checked, else `monthly`
    #[wasm_bindgen(js_name = getBillingCycle)]
    pub fn get_billing_cycle(toggle_id: Option<String>) -> Result<String, JsValue> {
        let document = window()?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let toggle_id = toggle_id.as_deref().unwrap_or(DEFAULT_TOGGLE_ID);
        Ok(pricing::billing_cycle(&document, toggle_id).to_string())
    }

    #[wasm_bindgen(js_name = updatePricingDisplay)]
    pub fn update_pricing_display(
        toggle_id: Option<String>,
        price_selector: Option<String>,
    ) -> Result<bool, JsValue> {
        let document = window()?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        pricing::bind_pricing_display(
            &document,
            toggle_id.as_deref().unwrap_or(DEFAULT_TOGGLE_ID),
            price_selector.as_deref().unwrap_or(DEFAULT_PRICE_SELECTOR),
        )
    }
}
