//! Mock Gateway
//!
//! Scripted provider for tests and offline demos.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::gateway::PaymentGateway;
use crate::checkout::InitializeTransaction;
use crate::error::{PaymentError, Result};

enum Script {
    Succeed(serde_json::Value),
    Reject { status: u16, body: serde_json::Value },
    Unreachable,
}

/// Gateway that replays a fixed outcome and records what it was sent
pub struct MockGateway {
    script: Script,
    requests: Mutex<Vec<InitializeTransaction>>,
}

impl MockGateway {
    /// Always answer 2xx with `body`
    pub fn succeeding(body: serde_json::Value) -> Self {
        Self::scripted(Script::Succeed(body))
    }

    /// Always answer `status` with `body`
    pub fn rejecting(status: u16, body: serde_json::Value) -> Self {
        Self::scripted(Script::Reject { status, body })
    }

    /// Always fail as if the network were down
    pub fn unreachable() -> Self {
        Self::scripted(Script::Unreachable)
    }

    fn scripted(script: Script) -> Self {
        Self {
            script,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far
    pub async fn requests(&self) -> Vec<InitializeTransaction> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn initialize_transaction(
        &self,
        request: &InitializeTransaction,
    ) -> Result<serde_json::Value> {
        self.requests.lock().await.push(request.clone());

        match &self.script {
            Script::Succeed(body) => Ok(body.clone()),
            Script::Reject { status, body } => Err(PaymentError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            Script::Unreachable => Err(PaymentError::Network("connection refused".into())),
        }
    }

    fn name(&self) -> &str {
        "Mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> InitializeTransaction {
        InitializeTransaction {
            email: "ada@example.com".into(),
            amount: 2_500_000,
            callback_url: "http://localhost/payment-success".into(),
        }
    }

    #[tokio::test]
    async fn test_records_requests() {
        let gateway = MockGateway::succeeding(serde_json::json!({"status": true}));
        let body = gateway.initialize_transaction(&request()).await.unwrap();

        assert_eq!(body, serde_json::json!({"status": true}));
        assert_eq!(gateway.requests().await, vec![request()]);
    }

    #[tokio::test]
    async fn test_rejection() {
        let gateway = MockGateway::rejecting(400, serde_json::json!({"message": "bad"}));
        let err = gateway.initialize_transaction(&request()).await.unwrap_err();
        assert!(matches!(err, PaymentError::Upstream { status: 400, .. }));
    }
}
