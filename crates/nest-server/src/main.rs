//! DiasporaNest HTTP Server
//!
//! Axum-based server for the DiasporaNest client. It proxies checkout
//! initialization to Paystack so the secret key stays server-side, exposes
//! the built-in listings as JSON, and serves the WASM bundle.

mod config;
mod handlers;
mod state;

use std::sync::Arc;

use axum::{routing::{get, post}, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nest_core::Catalog;
use nest_payments::{PaymentGateway, PaystackClient};

use crate::config::ServerConfig;
use crate::handlers::{create_checkout_session, get_property, health_check, list_properties};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    let catalog = Catalog::builtin()?;
    tracing::info!("Loaded {} verified listings", catalog.len());

    // Initialize payments
    let gateway: Option<Arc<dyn PaymentGateway>> = match PaystackClient::from_env() {
        Ok(client) => {
            tracing::info!(base_url = client.base_url(), "✓ Paystack configured");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!("⚠ {} - payments disabled", e);
            tracing::warn!("  Set PAYSTACK_SECRET_KEY in .env");
            None
        }
    };

    let addr = config.bind_addr();
    let frontend_url = config.frontend_url.clone();

    let state = AppState {
        catalog: Arc::new(catalog),
        gateway,
        config: Arc::new(config),
    };

    let app = app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🏠 DiasporaNest server running on http://{}", addr);
    tracing::info!("   Payment callbacks return to {}", frontend_url);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                       - Health check");
    tracing::info!("  POST /api/create-checkout-session  - Initialize Paystack checkout");
    tracing::info!("  GET  /api/properties               - Filtered listings");
    tracing::info!("  GET  /api/properties/{{id}}          - Single listing");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router: API routes, then the SPA bundle for everything else
fn app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Client-side routes (/dashboard, /payment-success, ...) fall through to index.html
    let static_dir = state.config.static_dir.clone();
    let spa = ServeDir::new(&static_dir).not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // Health & info
        .route("/health", get(health_check))

        // Listings
        .route("/api/properties", get(list_properties))
        .route("/api/properties/{id}", get(get_property))

        // Payments
        .route("/api/create-checkout-session", post(create_checkout_session))

        // Static files (WASM frontend)
        .fallback_service(spa)

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
