//! Payment Gateway
//!
//! The proxy's only outbound dependency. `PaystackClient` talks to the real
//! API; `MockGateway` stands in for it in tests.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::checkout::InitializeTransaction;
use crate::error::{PaymentError, Result};

pub const PAYSTACK_BASE_URL: &str = "https://api.paystack.co";

/// Transaction-initialization provider (Strategy pattern)
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Initialize a transaction and return the provider's JSON as-is
    async fn initialize_transaction(
        &self,
        request: &InitializeTransaction,
    ) -> Result<serde_json::Value>;

    /// Provider name
    fn name(&self) -> &str;
}

/// Paystack client holding the server-side secret
pub struct PaystackClient {
    http: reqwest::Client,
    secret_key: String,
    base_url: String,
}

impl PaystackClient {
    /// Create a new Paystack client
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self::with_base_url(secret_key, PAYSTACK_BASE_URL)
    }

    /// Point at a different API host (sandbox proxies, local fakes)
    pub fn with_base_url(secret_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: secret_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("PAYSTACK_SECRET_KEY")
            .map_err(|_| PaymentError::Config("PAYSTACK_SECRET_KEY not set".into()))?;
        if secret_key.trim().is_empty() {
            return Err(PaymentError::Config("PAYSTACK_SECRET_KEY is empty".into()));
        }

        let base_url =
            std::env::var("PAYSTACK_BASE_URL").unwrap_or_else(|_| PAYSTACK_BASE_URL.into());

        Ok(Self::with_base_url(secret_key, base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn initialize_url(&self) -> String {
        format!("{}/transaction/initialize", self.base_url)
    }
}

#[async_trait]
impl PaymentGateway for PaystackClient {
    async fn initialize_transaction(
        &self,
        request: &InitializeTransaction,
    ) -> Result<serde_json::Value> {
        tracing::debug!(email = %request.email, amount = request.amount, "Initializing Paystack transaction");

        let response = self
            .http
            .post(self.initialize_url())
            .header(AUTHORIZATION, format!("Bearer {}", self.secret_key))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        if !status.is_success() {
            let body = match serde_json::from_str(&text) {
                Ok(json) => json,
                Err(_) => serde_json::Value::String(text),
            };
            return Err(PaymentError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&text).map_err(|e| PaymentError::InvalidResponse(e.to_string()))
    }

    fn name(&self) -> &str {
        "Paystack"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_url() {
        let client = PaystackClient::with_base_url("sk_test_x", "http://localhost:9999/");
        assert_eq!(client.base_url(), "http://localhost:9999");
        assert_eq!(
            client.initialize_url(),
            "http://localhost:9999/transaction/initialize"
        );
        assert_eq!(client.name(), "Paystack");
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_network_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let client = PaystackClient::with_base_url("sk_test_x", "http://127.0.0.1:9");
        let request = InitializeTransaction {
            email: "ada@example.com".into(),
            amount: 2_500_000,
            callback_url: "http://localhost/payment-success".into(),
        };

        let err = client.initialize_transaction(&request).await.unwrap_err();
        assert!(matches!(err, PaymentError::Network(_)));
    }
}
