//! DOM Adapters
//!
//! `web_sys` implementations of the accessor traits from the library crates.

use crewup_campaigns::FilterTarget;
use crewup_payments::{AuthIndicator, ButtonControl, Page, PriceLabel};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlButtonElement, HtmlDocument, HtmlElement, Window};

/// Body class set by the template for signed-in users
pub const AUTHENTICATED_BODY_CLASS: &str = "user-authenticated";

/// Global flag some templates set instead
pub const AUTHENTICATED_GLOBAL: &str = "userAuthenticated";

/// Attribute marking a signed-in page anywhere in the document
pub const AUTHENTICATED_SELECTOR: &str = "[data-user-authenticated]";

/// Every element matching `selector` that is an `HtmlElement`
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// The browser window as a [`Page`]
pub struct DomPage {
    window: Window,
}

impl DomPage {
    pub const fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Page for DomPage {
    fn location(&self) -> String {
        let location = self.window.location();
        format!(
            "{}{}",
            location.pathname().unwrap_or_default(),
            location.search().unwrap_or_default()
        )
    }

    fn navigate(&self, url: &str) {
        if let Err(e) = self.window.location().set_href(url) {
            tracing::error!(url, error = ?e, "Navigation failed");
        }
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            tracing::warn!(error = ?e, "Alert failed");
        }
    }

    fn cookies(&self) -> String {
        self.window
            .document()
            .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
            .and_then(|document| document.cookie().ok())
            .unwrap_or_default()
    }
}

/// Reads the template's signed-in markers
pub struct DocumentAuth {
    window: Window,
}

impl DocumentAuth {
    pub const fn new(window: Window) -> Self {
        Self { window }
    }

    fn global_flag(&self) -> bool {
        // Only a literal `true` counts
        js_sys::Reflect::get(&self.window, &JsValue::from_str(AUTHENTICATED_GLOBAL))
            .ok()
            .and_then(|value| value.as_bool())
            .unwrap_or(false)
    }
}

impl AuthIndicator for DocumentAuth {
    fn is_authenticated(&self) -> bool {
        let Some(document) = self.window.document() else {
            return false;
        };

        let body_marked = document
            .body()
            .is_some_and(|body| body.class_list().contains(AUTHENTICATED_BODY_CLASS));

        body_marked
            || self.global_flag()
            || document
                .query_selector(AUTHENTICATED_SELECTOR)
                .ok()
                .flatten()
                .is_some()
    }
}

/// A plan button; remembers its label in `data-original-text`
pub struct DomButton(HtmlElement);

impl DomButton {
    pub const fn new(element: HtmlElement) -> Self {
        Self(element)
    }
}

impl ButtonControl for DomButton {
    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
            return;
        }

        let result = if disabled {
            self.0.set_attribute("disabled", "")
        } else {
            self.0.remove_attribute("disabled")
        };
        if let Err(e) = result {
            tracing::warn!(disabled, error = ?e, "Could not toggle button");
        }
    }

    fn original_text(&self) -> Option<String> {
        self.0.dataset().get("originalText")
    }

    fn remember_text(&self, text: &str) {
        if let Err(e) = self.0.dataset().set("originalText", text) {
            tracing::warn!(error = ?e, "Could not save button label");
        }
    }
}

/// A `.campaign-card` element
pub struct DomCard(HtmlElement);

impl DomCard {
    pub const fn new(element: HtmlElement) -> Self {
        Self(element)
    }
}

impl FilterTarget for DomCard {
    fn title(&self) -> Option<String> {
        self.0
            .query_selector(".campaign-title")
            .ok()
            .flatten()
            .and_then(|title| title.text_content())
    }

    fn category(&self) -> Option<String> {
        self.0.get_attribute("data-category")
    }

    fn set_visible(&mut self, visible: bool) {
        let style = self.0.style();
        let result = if visible {
            style.remove_property("display").map(drop)
        } else {
            style.set_property("display", "none")
        };
        if let Err(e) = result {
            tracing::warn!(visible, error = ?e, "Could not change card visibility");
        }
    }
}

/// A price element on the pricing page; keeps its monthly text in
/// `data-monthly-price`
pub struct DomPrice(HtmlElement);

impl DomPrice {
    pub const fn new(element: HtmlElement) -> Self {
        Self(element)
    }
}

impl PriceLabel for DomPrice {
    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn stored_base(&self) -> Option<String> {
        self.0.dataset().get("monthlyPrice")
    }

    fn store_base(&mut self, text: &str) {
        if let Err(e) = self.0.dataset().set("monthlyPrice", text) {
            tracing::warn!(error = ?e, "Could not save monthly price");
        }
    }
}
