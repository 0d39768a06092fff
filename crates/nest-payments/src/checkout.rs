//! Checkout Types
//!
//! Paystack's transaction-initialization contract, as seen by the proxy.

use serde::{Deserialize, Serialize};

/// One-time access fee in naira
pub const ACCESS_FEE_NAIRA: i64 = 25_000;

/// Access fee in kobo, the unit Paystack charges in
pub const ACCESS_FEE_KOBO: i64 = ACCESS_FEE_NAIRA * 100;

/// Route Paystack redirects back to after payment
pub const CALLBACK_PATH: &str = "/payment-success";

/// Body of `POST /api/create-checkout-session`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub email: String,

    /// Amount in kobo
    pub amount: i64,
}

impl CheckoutRequest {
    /// Checkout for the standard access fee
    pub fn access_fee(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            amount: ACCESS_FEE_KOBO,
        }
    }
}

/// Body sent to Paystack's `/transaction/initialize`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializeTransaction {
    pub email: String,

    /// Amount in kobo
    pub amount: i64,

    pub callback_url: String,
}

impl InitializeTransaction {
    /// Forward a checkout request, returning the payer to `frontend_url`
    pub fn from_checkout(request: CheckoutRequest, frontend_url: &str) -> Self {
        Self {
            email: request.email,
            amount: request.amount,
            callback_url: callback_url(frontend_url),
        }
    }
}

/// `{frontend}/payment-success`, tolerant of a trailing slash
pub fn callback_url(frontend_url: &str) -> String {
    format!("{}{CALLBACK_PATH}", frontend_url.trim_end_matches('/'))
}

/// Typed view of Paystack's initialization response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializeResponse {
    pub status: bool,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub data: Option<AuthorizationData>,
}

/// Where to send the payer next
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationData {
    pub authorization_url: String,
    pub access_code: String,
    pub reference: String,
}

impl InitializeResponse {
    /// Hosted payment page URL, if initialization succeeded
    pub fn authorization_url(&self) -> Option<&str> {
        if !self.status {
            return None;
        }
        self.data.as_ref().map(|d| d.authorization_url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_in_kobo() {
        assert_eq!(ACCESS_FEE_KOBO, 2_500_000);
        assert_eq!(CheckoutRequest::access_fee("a@b.co").amount, ACCESS_FEE_KOBO);
    }

    #[test]
    fn test_callback_url() {
        assert_eq!(callback_url("https://diasporanest.com.ng"), "https://diasporanest.com.ng/payment-success");
        assert_eq!(callback_url("http://localhost:5173/"), "http://localhost:5173/payment-success");
    }

    #[test]
    fn test_initialize_body_shape() {
        let body = InitializeTransaction::from_checkout(
            CheckoutRequest::access_fee("ada@example.com"),
            "https://diasporanest.com.ng",
        );
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "ada@example.com",
                "amount": 2_500_000,
                "callback_url": "https://diasporanest.com.ng/payment-success",
            })
        );
    }

    #[test]
    fn test_authorization_url() {
        let json = r#"{
            "status": true,
            "message": "Authorization URL created",
            "data": {
                "authorization_url": "https://checkout.paystack.com/abc",
                "access_code": "abc",
                "reference": "DN_1_2"
            }
        }"#;
        let response: InitializeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.authorization_url(), Some("https://checkout.paystack.com/abc"));

        let failed: InitializeResponse =
            serde_json::from_str(r#"{"status": false, "message": "Invalid key"}"#).unwrap();
        assert_eq!(failed.authorization_url(), None);
    }
}
