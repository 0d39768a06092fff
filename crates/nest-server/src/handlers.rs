//! HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use nest_core::{CityFilter, FilterOutcome, PriceRange, Property, PropertyFilter};
use nest_payments::{CheckoutRequest, InitializeTransaction};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub payments_configured: bool,
    pub properties: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Message, or the payment provider's own error payload
    pub error: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorResponse {
    fn coded(error: impl Into<String>, code: &str) -> Self {
        Self {
            error: serde_json::Value::String(error.into()),
            code: Some(code.into()),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Default, Deserialize)]
pub struct PropertyQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

impl PropertyQuery {
    fn into_filter(self) -> Result<PropertyFilter, nest_core::NestError> {
        let price = match self.price.as_deref() {
            Some(raw) => raw.parse::<PriceRange>()?,
            None => PriceRange::All,
        };

        Ok(PropertyFilter::new()
            .with_search(self.search.unwrap_or_default())
            .with_city(CityFilter::from_value(self.city.as_deref().unwrap_or_default()))
            .with_price(price))
    }
}

#[derive(Debug, Serialize)]
pub struct PropertyListResponse {
    pub count: usize,
    pub summary: String,
    pub properties: Vec<Property>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        payments_configured: state.gateway.is_some(),
        properties: state.catalog.len(),
    })
}

/// Checkout proxy: initialize a transaction with the server-held secret.
///
/// The provider's JSON comes back unchanged on success. On failure the
/// provider's error payload is wrapped as `{"error": ...}` with a 500.
pub async fn create_checkout_session(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let gateway = state.gateway.as_ref().ok_or_else(|| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::coded("Payments not configured", "PAYMENTS_DISABLED")),
        )
    })?;

    let request = InitializeTransaction::from_checkout(payload, &state.config.frontend_url);

    tracing::info!(
        gateway = gateway.name(),
        callback_url = %request.callback_url,
        amount = request.amount,
        "Creating checkout session"
    );

    let response = gateway.initialize_transaction(&request).await.map_err(|e| {
        tracing::error!(error = %e, retryable = e.is_retryable(), "Payment provider error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.payload(),
                code: None,
            }),
        )
    })?;

    Ok(Json(response))
}

/// Filtered listing of the built-in catalog
pub async fn list_properties(
    State(state): State<AppState>,
    Query(query): Query<PropertyQuery>,
) -> Result<Json<PropertyListResponse>, ApiError> {
    let filter = query.into_filter().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::coded(e.to_string(), "INVALID_FILTER")),
        )
    })?;

    let properties: Vec<Property> = filter
        .apply(state.catalog.properties())
        .into_iter()
        .cloned()
        .collect();
    let outcome = FilterOutcome::new(properties.len());

    Ok(Json(PropertyListResponse {
        count: outcome.count,
        summary: outcome.summary(),
        properties,
    }))
}

/// Single listing by id
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Property>, ApiError> {
    state.catalog.get(&id).cloned().map(Json).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::coded(format!("Property '{id}' not found"), "NOT_FOUND")),
        )
    })
}
