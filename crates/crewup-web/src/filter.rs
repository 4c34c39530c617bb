//! Campaign List Filter Binding

use crewup_campaigns::CardFilter;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Event, HtmlInputElement, HtmlSelectElement};

use crate::dom::{DomCard, query_all};

pub const SEARCH_BOX_SELECTOR: &str = ".search-box";
pub const CATEGORY_DROPDOWN_SELECTOR: &str = ".filter-dropdown";
pub const CARD_SELECTOR: &str = ".campaign-card";

fn apply(document: &Document, filter: &CardFilter) {
    match query_all(document, CARD_SELECTOR) {
        Ok(elements) => {
            let mut cards: Vec<DomCard> = elements.into_iter().map(DomCard::new).collect();
            filter.apply(&mut cards);
        }
        Err(e) => tracing::warn!(error = ?e, "Could not query campaign cards"),
    }
}

/// Hook the search box and category dropdown up to the card list.
///
/// Either control may be missing from the page; it is then skipped.
pub fn bind_campaign_filter(document: &Document) -> Result<(), JsValue> {
    if let Some(search_box) = document.query_selector(SEARCH_BOX_SELECTOR)? {
        let doc = document.clone();
        let on_input = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(input) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            apply(&doc, &CardFilter::search(input.value()));
        });
        search_box.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
        on_input.forget();
    } else {
        tracing::debug!("No search box on page");
    }

    if let Some(dropdown) = document.query_selector(CATEGORY_DROPDOWN_SELECTOR)? {
        let doc = document.clone();
        let on_change = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(select) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            apply(&doc, &CardFilter::category(select.value()));
        });
        dropdown.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        on_change.forget();
    } else {
        tracing::debug!("No category dropdown on page");
    }

    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::dom::test_support::{display, element, fire, mount};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const PAGE: &str = r#"
        <input class="search-box" type="text">
        <select class="filter-dropdown">
            <option value="all">All</option>
            <option value="film">Film</option>
            <option value="music">Music</option>
        </select>
        <div class="campaign-card" id="film" data-category="Film">
            <h3 class="campaign-title">Short Film Crew</h3>
        </div>
        <div class="campaign-card" id="music" data-category="music">
            <h3 class="campaign-title">Jazz Quartet Album</h3>
        </div>
        <div class="campaign-card" id="untitled"></div>
    "#;

    #[wasm_bindgen_test]
    fn test_search_and_dropdown_events() {
        let container = mount(PAGE);
        bind_campaign_filter(&crate::dom::test_support::document()).unwrap();

        let search: HtmlInputElement = element(&container, ".search-box").unchecked_into();
        search.set_value("FILM");
        fire(&search, "input");
        assert_eq!(display(&element(&container, "#film")), "");
        assert_eq!(display(&element(&container, "#music")), "none");
        // No title, left alone
        assert_eq!(display(&element(&container, "#untitled")), "");

        let dropdown: HtmlSelectElement = element(&container, ".filter-dropdown").unchecked_into();
        dropdown.set_value("music");
        fire(&dropdown, "change");
        assert_eq!(display(&element(&container, "#film")), "none");
        assert_eq!(display(&element(&container, "#music")), "");

        dropdown.set_value("all");
        fire(&dropdown, "change");
        assert_eq!(display(&element(&container, "#film")), "");
        assert_eq!(display(&element(&container, "#music")), "");

        container.remove();
    }

    #[wasm_bindgen_test]
    fn test_missing_controls_are_skipped() {
        let container = mount(r#"<div class="campaign-card"></div>"#);
        assert!(bind_campaign_filter(&crate::dom::test_support::document()).is_ok());
        container.remove();
    }
}
