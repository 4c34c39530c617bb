//! Plans and Billing Cycles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CheckoutError;

/// Subscription plan tiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Basic,
    Pro,
    Enterprise,
}

impl PlanType {
    pub const ALL: [Self; 3] = [Self::Basic, Self::Pro, Self::Enterprise];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }

    /// Price charged by the checkout endpoint, in cents.
    ///
    /// `None` for plans without a card price (Basic is free, Enterprise goes
    /// through sales).
    pub const fn price_cents(self, cycle: BillingCycle) -> Option<u64> {
        match (self, cycle) {
            (Self::Pro, BillingCycle::Monthly) => Some(9900),
            (Self::Pro, BillingCycle::Yearly) => Some(59400), // 50% off twelve months
            (Self::Basic | Self::Enterprise, _) => None,
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|plan| plan.as_str() == s)
            .ok_or_else(CheckoutError::invalid_plan)
    }
}

/// Billing period
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Cycle selected by the pricing page toggle.
    ///
    /// `checked` is `None` when the toggle isn't on the page.
    pub const fn from_toggle(checked: Option<bool>) -> Self {
        match checked {
            Some(true) => Self::Yearly,
            _ => Self::Monthly,
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingCycle {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(CheckoutError::invalid_cycle()),
        }
    }
}
