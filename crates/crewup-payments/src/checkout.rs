//! Hosted Checkout Initiation
//!
//! Asks the server for a Stripe Checkout session and sends the browser to it.
//!
//! ```text
//! Idle ──▶ Loading ──┬──▶ LoginRedirect   (not signed in, 401, 403)
//!                    ├──▶ Redirected      (checkout_url received)
//!                    └──▶ Failed          (everything else)
//! ```
//!
//! Each call ends in exactly one outcome. Nothing is retried.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::rc::Rc;

use crate::config::CheckoutConfig;
use crate::csrf;
use crate::error::{CheckoutError, Result};
use crate::hooks::{ButtonControl, CheckoutHooks, DefaultHooks};
use crate::page::{self, AuthIndicator, Page};
use crate::plan::{BillingCycle, PlanType};
use crate::transport::{CheckoutTransport, TransportResponse};

/// Shown when someone picks the Enterprise plan
pub const ENTERPRISE_CONTACT_MESSAGE: &str =
    "Please contact our sales team for Enterprise pricing and custom solutions.";

/// Checkout session returned by the server
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Hosted checkout page to redirect to
    pub checkout_url: String,

    /// Stripe session ID
    #[serde(default)]
    pub session_id: Option<String>,

    /// Any other fields the server sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// How a checkout attempt ended
#[derive(Clone, Debug, PartialEq)]
pub enum CheckoutOutcome {
    /// Sent to the login page
    LoginRedirect { url: String },

    /// Sent to the hosted checkout page
    Redirected { session: CheckoutSession },

    /// Reported through the error hook
    Failed(CheckoutError),
}

impl CheckoutOutcome {
    pub const fn is_redirected(&self) -> bool {
        matches!(self, Self::Redirected { .. })
    }

    pub const fn error(&self) -> Option<&CheckoutError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Interpret the checkout endpoint's response.
///
/// `AuthRequired` means the caller should send the user to log in.
pub fn parse_checkout_response(response: &TransportResponse) -> Result<CheckoutSession> {
    let data: Value = serde_json::from_str(&response.body).unwrap_or(Value::Null);
    let server_error = data
        .get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty());

    if !response.is_success() {
        if matches!(response.status, 401 | 403) {
            return Err(CheckoutError::AuthRequired);
        }

        let message = server_error.map_or_else(
            || format!("HTTP {}: {}", response.status, response.reason),
            str::to_string,
        );
        return Err(CheckoutError::Http {
            status: response.status,
            message,
        });
    }

    if let Some(message) = server_error {
        return Err(CheckoutError::Rejected(message.to_string()));
    }

    let has_url = data
        .get("checkout_url")
        .and_then(Value::as_str)
        .is_some_and(|url| !url.is_empty());
    if !has_url {
        return Err(CheckoutError::MissingCheckoutUrl);
    }

    serde_json::from_value(data).map_err(|_| CheckoutError::MissingCheckoutUrl)
}

/// Starts hosted checkouts for the plan buttons on a page
pub struct CheckoutInitiator {
    config: CheckoutConfig,
    transport: Rc<dyn CheckoutTransport>,
    page: Rc<dyn Page>,
    auth: Rc<dyn AuthIndicator>,
    hooks: Rc<dyn CheckoutHooks>,
}

impl CheckoutInitiator {
    /// Create an initiator with the default hooks
    pub fn new(
        config: CheckoutConfig,
        transport: Rc<dyn CheckoutTransport>,
        page: Rc<dyn Page>,
        auth: Rc<dyn AuthIndicator>,
    ) -> Self {
        tracing::debug!(
            login_url = %config.login_url,
            checkout_endpoint = %config.checkout_endpoint,
            "Checkout initiator created"
        );

        Self {
            config,
            transport,
            page,
            auth,
            hooks: Rc::new(DefaultHooks),
        }
    }

    /// Replace the default hooks
    #[must_use]
    pub fn with_hooks(mut self, hooks: Rc<dyn CheckoutHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub const fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    /// Check a plan/cycle pair coming from the page
    pub fn validate_selection(plan_type: &str, billing_cycle: &str) -> Result<(PlanType, BillingCycle)> {
        Ok((plan_type.parse::<PlanType>()?, billing_cycle.parse::<BillingCycle>()?))
    }

    /// Start a checkout for string inputs from the page.
    ///
    /// An invalid selection fails before any request is made.
    pub async fn initiate_checkout(
        &self,
        plan_type: &str,
        billing_cycle: &str,
        button: Option<&dyn ButtonControl>,
    ) -> CheckoutOutcome {
        self.hooks.on_loading(true, button);

        match Self::validate_selection(plan_type, billing_cycle) {
            Ok((plan, cycle)) => self.proceed(plan, cycle, button).await,
            Err(error) => {
                tracing::warn!(plan_type, billing_cycle, "Rejected checkout selection");
                self.fail(error, button)
            }
        }
    }

    /// Start a checkout for a validated selection
    pub async fn checkout(
        &self,
        plan: PlanType,
        cycle: BillingCycle,
        button: Option<&dyn ButtonControl>,
    ) -> CheckoutOutcome {
        self.hooks.on_loading(true, button);
        self.proceed(plan, cycle, button).await
    }

    async fn proceed(
        &self,
        plan: PlanType,
        cycle: BillingCycle,
        button: Option<&dyn ButtonControl>,
    ) -> CheckoutOutcome {
        if !self.auth.is_authenticated() {
            tracing::info!(plan = %plan, "Not signed in, redirecting to login");
            return self.redirect_to_login();
        }

        match self.create_checkout_session(plan, cycle).await {
            Ok(session) => {
                self.hooks.on_success(&session, plan, cycle);
                tracing::info!(url = %session.checkout_url, "Redirecting to hosted checkout");
                self.page.navigate(&session.checkout_url);
                CheckoutOutcome::Redirected { session }
            }
            Err(CheckoutError::AuthRequired) => {
                tracing::info!(plan = %plan, "Checkout endpoint requires login");
                self.redirect_to_login()
            }
            Err(error) => self.fail(error, button),
        }
    }

    /// Request a checkout session without touching the UI
    pub async fn create_checkout_session(
        &self,
        plan: PlanType,
        cycle: BillingCycle,
    ) -> Result<CheckoutSession> {
        let url = self.config.checkout_url(plan, cycle);
        let token = self.csrf_token();

        if token.is_none() {
            tracing::debug!("No CSRF cookie present");
        }

        let response = self.transport.get(&url, token.as_deref()).await?;
        parse_checkout_response(&response)
    }

    /// CSRF token from the page's cookies
    pub fn csrf_token(&self) -> Option<String> {
        csrf::csrf_token(&self.page.cookies())
    }

    /// Login URL returning to the current page
    pub fn login_redirect_url(&self) -> String {
        page::login_redirect_url(&self.config.login_url, &self.page.location())
    }

    /// Send the browser to the login page
    pub fn redirect_to_login(&self) -> CheckoutOutcome {
        let url = self.login_redirect_url();
        self.page.navigate(&url);
        CheckoutOutcome::LoginRedirect { url }
    }

    /// Point Enterprise prospects at sales
    pub fn contact_enterprise(&self) {
        self.page.alert(ENTERPRISE_CONTACT_MESSAGE);
    }

    fn fail(&self, error: CheckoutError, button: Option<&dyn ButtonControl>) -> CheckoutOutcome {
        if error.is_retryable() {
            tracing::warn!(error = %error, "Payment error");
        } else {
            tracing::error!(error = ?error, "Payment error");
        }
        self.hooks.on_error(self.page.as_ref(), &error, button);
        CheckoutOutcome::Failed(error)
    }
}
