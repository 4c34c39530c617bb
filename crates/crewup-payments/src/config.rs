//! Initiator Configuration

use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, Result};
use crate::plan::{BillingCycle, PlanType};

/// Checkout initiator configuration.
///
/// Field names follow the page's JavaScript (`loginUrl`, `checkoutEndpoint`)
/// so the same object can be passed from a template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckoutConfig {
    /// Login page; receives `?next=` with the page to come back to
    pub login_url: String,

    /// Prefix of the checkout-session route, with trailing slash
    pub checkout_endpoint: String,

    /// Scheme and host used to resolve relative URLs (e.g. `https://crewup.io`)
    pub origin: Option<String>,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            login_url: "/auth/login/".into(),
            checkout_endpoint: "/payment/create-checkout/".into(),
            origin: None,
        }
    }
}

impl CheckoutConfig {
    /// Parse from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CheckoutError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.login_url.trim().is_empty() {
            return Err(CheckoutError::Config("loginUrl must not be empty".into()));
        }
        if self.checkout_endpoint.trim().is_empty() {
            return Err(CheckoutError::Config("checkoutEndpoint must not be empty".into()));
        }
        Ok(())
    }

    /// Checkout-session URL for a selection
    pub fn checkout_url(&self, plan: PlanType, cycle: BillingCycle) -> String {
        format!("{}{plan}/{cycle}/", self.checkout_endpoint)
    }
}
