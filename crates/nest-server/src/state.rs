//! Application State

use std::sync::Arc;

use nest_core::Catalog;
use nest_payments::PaymentGateway;

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Built-in property listings
    pub catalog: Arc<Catalog>,

    /// Payment provider (optional - None if not configured)
    pub gateway: Option<Arc<dyn PaymentGateway>>,

    pub config: Arc<ServerConfig>,
}
