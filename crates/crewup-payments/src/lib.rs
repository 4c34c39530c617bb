//! # crewup-payments
//!
//! Client side of the CrewUp plan purchase flow.
//!
//! ## Stripe Checkout (Hosted)
//!
//! The server owns the Stripe integration. The browser only asks it for a
//! checkout session and follows the returned URL:
//!
//! ```text
//! ┌─────────────┐  GET create-checkout/  ┌─────────────┐
//! │  Pricing    │──────────────────────▶│   Server    │
//! │  page       │◀──────────────────────│             │
//! └─────────────┘   { checkout_url }     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────────┐     ┌─────────────┐
//! │  Stripe Hosted  │────▶│  /payment/  │
//! │  Checkout Page  │     │  success/   │
//! └─────────────────┘     └─────────────┘
//! ```
//!
//! Signed-out users, and any 401/403 from the server, are sent to the login
//! page with a `next` parameter pointing back at the current page.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use crewup_payments::{CheckoutConfig, CheckoutInitiator, ReqwestTransport, StaticAuth};
//!
//! let initiator = CheckoutInitiator::new(
//!     CheckoutConfig::default(),
//!     Rc::new(ReqwestTransport::with_origin("https://crewup.io")),
//!     page,
//!     Rc::new(StaticAuth(true)),
//! );
//!
//! // Navigates to the hosted checkout page on success
//! let outcome = initiator.initiate_checkout("pro", "yearly", Some(&button)).await;
//! ```
//!
//! The pricing page helpers in [`pricing`] are pure and independent of the
//! initiator.

mod checkout;
mod config;
mod csrf;
mod error;
mod hooks;
mod page;
mod plan;
pub mod pricing;
mod transport;

pub use checkout::{
    CheckoutInitiator, CheckoutOutcome, CheckoutSession, ENTERPRISE_CONTACT_MESSAGE,
    parse_checkout_response,
};
pub use config::CheckoutConfig;
pub use csrf::{CSRF_COOKIE_NAME, CSRF_HEADER_NAME, csrf_token, parse_cookie_value};
pub use error::{CheckoutError, Result};
pub use hooks::{
    ButtonControl, CheckoutHooks, DefaultHooks, LOADING_LABEL, RETRY_LABEL, error_alert_message,
    restore_button, show_loading,
};
pub use page::{AuthIndicator, Page, StaticAuth, login_redirect_url};
pub use plan::{BillingCycle, PlanType};
pub use pricing::{DisplayedPrice, PriceLabel, PricingDisplay, display_price, yearly_price};
pub use transport::{CheckoutTransport, ReqwestTransport, TransportResponse};
