//! Checkout Hooks
//!
//! Loading, success and error callbacks. The defaults reproduce the stock
//! behavior: a "Processing..." button while waiting, a log line on success,
//! and an alert plus button reset on failure.

use crate::checkout::CheckoutSession;
use crate::error::CheckoutError;
use crate::page::Page;
use crate::plan::{BillingCycle, PlanType};

/// Label shown on the triggering button while the request is in flight
pub const LOADING_LABEL: &str = "Processing...";

/// Label restored after an error when the original label is unknown
pub const RETRY_LABEL: &str = "Try Again";

/// The button that started a checkout
pub trait ButtonControl {
    fn text(&self) -> String;

    fn set_text(&self, text: &str);

    fn set_disabled(&self, disabled: bool);

    /// Label saved by [`show_loading`]
    fn original_text(&self) -> Option<String>;

    fn remember_text(&self, text: &str);
}

/// Put a button into its loading state
pub fn show_loading(button: &dyn ButtonControl) {
    button.remember_text(&button.text());
    button.set_text(LOADING_LABEL);
    button.set_disabled(true);
}

/// Restore a button's saved label, or `fallback` if none was saved
pub fn restore_button(button: &dyn ButtonControl, fallback: &str) {
    let text = button.original_text().unwrap_or_else(|| fallback.to_string());
    button.set_text(&text);
    button.set_disabled(false);
}

/// Alert text for a failed checkout
pub fn error_alert_message(error: &CheckoutError) -> String {
    format!(
        "Payment error: {}\n\nPlease try again or contact support if the problem persists.",
        error.user_message()
    )
}

/// Callbacks around a checkout attempt
pub trait CheckoutHooks {
    fn on_loading(&self, loading: bool, button: Option<&dyn ButtonControl>) {
        let Some(button) = button else { return };
        if loading {
            show_loading(button);
        } else {
            let current = button.text();
            restore_button(button, &current);
        }
    }

    fn on_success(&self, session: &CheckoutSession, plan: PlanType, cycle: BillingCycle) {
        tracing::info!(
            plan = %plan,
            cycle = %cycle,
            session_id = ?session.session_id,
            "Payment session created"
        );
    }

    fn on_error(&self, page: &dyn Page, error: &CheckoutError, button: Option<&dyn ButtonControl>) {
        page.alert(&error_alert_message(error));
        if let Some(button) = button {
            restore_button(button, RETRY_LABEL);
        }
    }
}

/// Stock hooks
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultHooks;

impl CheckoutHooks for DefaultHooks {}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;

    use super::ButtonControl;

    /// In-memory button
    #[derive(Debug, Default)]
    pub struct MemoryButton {
        pub text: RefCell<String>,
        pub disabled: RefCell<bool>,
        pub original: RefCell<Option<String>>,
    }

    impl MemoryButton {
        pub fn labelled(text: &str) -> Self {
            Self {
                text: RefCell::new(text.to_string()),
                ..Default::default()
            }
        }

        pub fn label(&self) -> String {
            self.text.borrow().clone()
        }

        pub fn is_disabled(&self) -> bool {
            *self.disabled.borrow()
        }
    }

    impl ButtonControl for MemoryButton {
        fn text(&self) -> String {
            self.text.borrow().clone()
        }

        fn set_text(&self, text: &str) {
            *self.text.borrow_mut() = text.to_string();
        }

        fn set_disabled(&self, disabled: bool) {
            *self.disabled.borrow_mut() = disabled;
        }

        fn original_text(&self) -> Option<String> {
            self.original.borrow().clone()
        }

        fn remember_text(&self, text: &str) {
            *self.original.borrow_mut() = Some(text.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::MemoryButton;
    use super::*;

    #[test]
    fn test_loading_round_trip() {
        let button = MemoryButton::labelled("Upgrade to Pro");
        let hooks = DefaultHooks;

        hooks.on_loading(true, Some(&button));
        assert_eq!(button.label(), LOADING_LABEL);
        assert!(button.is_disabled());

        hooks.on_loading(false, Some(&button));
        assert_eq!(button.label(), "Upgrade to Pro");
        assert!(!button.is_disabled());
    }

    #[test]
    fn test_restore_without_saved_label() {
        let button = MemoryButton::labelled("Processing...");
        *button.disabled.borrow_mut() = true;

        restore_button(&button, RETRY_LABEL);
        assert_eq!(button.label(), RETRY_LABEL);
        assert!(!button.is_disabled());
    }

    #[test]
    fn test_error_alert_message() {
        assert_eq!(
            error_alert_message(&CheckoutError::MissingCheckoutUrl),
            "Payment error: No checkout URL received from server\n\n\
             Please try again or contact support if the problem persists."
        );
    }

    #[test]
    fn test_hooks_without_button() {
        DefaultHooks.on_loading(true, None);
        DefaultHooks.on_loading(false, None);
    }
}
