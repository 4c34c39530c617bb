//! Checkout Transport
//!
//! One GET to the checkout-session route. Abstracted so the initiator can be
//! driven without a browser or a server.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::csrf::CSRF_HEADER_NAME;
use crate::error::Result;

/// Raw response from the checkout endpoint
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,

    /// Reason phrase for `status`, e.g. `Internal Server Error`
    pub reason: String,

    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or_default()
                .to_string(),
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Strategy trait for issuing the checkout request
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CheckoutTransport {
    /// GET `url`, sending `csrf_token` in the CSRF header when present
    async fn get(&self, url: &str, csrf_token: Option<&str>) -> Result<TransportResponse>;
}

/// `reqwest`-backed transport; uses `fetch` on wasm32
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    origin: Option<String>,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative URLs against `origin`
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            origin: Some(origin.into()),
        }
    }

    pub const fn with_client(client: reqwest::Client, origin: Option<String>) -> Self {
        Self { client, origin }
    }

    fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        match &self.origin {
            Some(origin) => format!("{}{url}", origin.trim_end_matches('/')),
            None => url.to_string(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CheckoutTransport for ReqwestTransport {
    async fn get(&self, url: &str, csrf_token: Option<&str>) -> Result<TransportResponse> {
        let url = self.resolve(url);

        let mut request = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = csrf_token {
            request = request.header(CSRF_HEADER_NAME, token);
        }

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_same_origin();

        let response = request.send().await?;
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text().await?;

        tracing::debug!(url = %url, status = status.as_u16(), "Checkout endpoint responded");

        Ok(TransportResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::Path,
        http::{HeaderMap, StatusCode},
        routing::get,
    };

    async fn spawn_server() -> String {
        async fn create_checkout(
            Path((plan, cycle)): Path<(String, String)>,
            headers: HeaderMap,
        ) -> (StatusCode, Json<serde_json::Value>) {
            let token = headers
                .get("x-csrftoken")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "checkout_url": format!("https://pay.example/{plan}-{cycle}"),
                    "csrf_seen": token,
                })),
            )
        }

        let app = Router::new()
            .route("/payment/create-checkout/{plan}/{cycle}/", get(create_checkout))
            .route(
                "/broken/",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}")
    }

    #[test]
    fn test_resolve() {
        let transport = ReqwestTransport::with_origin("https://crewup.io/");
        assert_eq!(transport.resolve("/a/"), "https://crewup.io/a/");
        assert_eq!(transport.resolve("https://other.io/b/"), "https://other.io/b/");
        assert_eq!(ReqwestTransport::new().resolve("/a/"), "/a/");
    }

    #[test]
    fn test_response_reason() {
        let response = TransportResponse::new(500, "");
        assert_eq!(response.reason, "Internal Server Error");
        assert!(!response.is_success());
        assert!(TransportResponse::new(204, "").is_success());
    }

    #[tokio::test]
    async fn test_sends_csrf_header() {
        let origin = spawn_server().await;
        let transport = ReqwestTransport::with_origin(origin);

        let response = transport
            .get("/payment/create-checkout/pro/yearly/", Some("tok123"))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["checkout_url"], "https://pay.example/pro-yearly");
        assert_eq!(body["csrf_seen"], "tok123");
    }

    #[tokio::test]
    async fn test_error_status_is_not_a_transport_error() {
        let origin = spawn_server().await;
        let transport = ReqwestTransport::with_origin(origin);

        let response = transport.get("/broken/", None).await.unwrap();
        assert_eq!(response.status, 500);
        assert_eq!(response.reason, "Internal Server Error");
        assert_eq!(response.body, "boom");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let transport = ReqwestTransport::new();
        let result = transport.get("/relative/without/origin/", None).await;
        assert!(matches!(result, Err(crate::CheckoutError::Network(_))));
    }
}
