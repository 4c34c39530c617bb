//! Checkout Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Everything that can end a checkout attempt.
///
/// The `Display` text of each variant is what the user sees in the default
/// error alert.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Plan type or billing cycle outside the known set
    #[error("{0}")]
    InvalidSelection(String),

    /// Not signed in; handled by redirecting to the login page
    #[error("Authentication required")]
    AuthRequired,

    /// Non-success HTTP status from the checkout endpoint
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Success status, but the server reported an `error`
    #[error("{0}")]
    Rejected(String),

    /// Success status without a `checkout_url`
    #[error("No checkout URL received from server")]
    MissingCheckoutUrl,

    /// The request itself failed
    #[error("{0}")]
    Network(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CheckoutError {
    pub fn invalid_plan() -> Self {
        Self::InvalidSelection("Invalid plan type selected".into())
    }

    pub fn invalid_cycle() -> Self {
        Self::InvalidSelection("Invalid billing cycle selected".into())
    }

    /// Check if a fresh attempt might succeed.
    ///
    /// Nothing retries automatically; this only shapes the log level.
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            "An error occurred during payment processing".into()
        } else {
            message
        }
    }
}

impl From<reqwest::Error> for CheckoutError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_shows_server_message() {
        let err = CheckoutError::Http {
            status: 400,
            message: "Card declined".into(),
        };
        assert_eq!(err.user_message(), "Card declined");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_retryable() {
        assert!(CheckoutError::Network("Failed to fetch".into()).is_retryable());
        assert!(
            CheckoutError::Http {
                status: 502,
                message: "HTTP 502: Bad Gateway".into()
            }
            .is_retryable()
        );
        assert!(!CheckoutError::MissingCheckoutUrl.is_retryable());
    }

    #[test]
    fn test_empty_message_falls_back() {
        assert_eq!(
            CheckoutError::Rejected(String::new()).user_message(),
            "An error occurred during payment processing"
        );
    }
}
