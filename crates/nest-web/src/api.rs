//! API Client

use nest_payments::{CheckoutRequest, InitializeResponse};

const FALLBACK_ERROR: &str = "Payment initialization failed. Please try again.";

/// Backend origin: `NEST_API_URL` at build time, else the page's own origin
fn api_base() -> String {
    if let Some(base) = option_env!("NEST_API_URL") {
        return base.trim_end_matches('/').to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3001".into())
}

/// Start a checkout through the proxy; returns the hosted payment page URL
pub async fn create_checkout_session(email: &str) -> Result<String, String> {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/create-checkout-session", api_base()))
        .json(&CheckoutRequest::access_fee(email))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        let data: InitializeResponse = response.json().await.map_err(|e| e.to_string())?;
        match data.authorization_url() {
            Some(url) => Ok(url.to_string()),
            None if !data.message.is_empty() => Err(data.message),
            None => Err(FALLBACK_ERROR.into()),
        }
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(error_message(&data))
    }
}

/// Best human-readable message from a proxy error body
fn error_message(data: &serde_json::Value) -> String {
    let error = &data["error"];
    error["message"]
        .as_str()
        .or_else(|| error.as_str())
        .unwrap_or(FALLBACK_ERROR)
        .to_string()
}
