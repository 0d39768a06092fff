//! Access Gate
//!
//! Paid access is a record in client-side storage. The dashboard renders only
//! while that record is complete and younger than 24 hours. The record is
//! plain client state: anyone with developer tools can write one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{NestError, Result};

/// Storage key holding the serialized `AccessRecord`
pub const ACCESS_KEY: &str = "diaspora_nest_access";

/// How long a payment grants access, in milliseconds
pub const ACCESS_DURATION_MS: i64 = 24 * 60 * 60 * 1000;

/// Proof-of-payment record kept in client storage
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRecord {
    pub paid: bool,

    /// Milliseconds since the Unix epoch when payment completed
    pub timestamp: i64,

    /// Payment provider reference
    pub reference: String,

    /// Email the payment was made with
    pub email: String,
}

impl AccessRecord {
    /// A paid record stamped at `now`
    pub fn new(reference: impl Into<String>, email: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            paid: true,
            timestamp: now.timestamp_millis(),
            reference: reference.into(),
            email: email.into(),
        }
    }

    /// When access lapses
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp.saturating_add(ACCESS_DURATION_MS))
    }

    /// Whether every field carries a usable value
    pub fn is_complete(&self) -> bool {
        self.paid && self.timestamp != 0 && !self.reference.is_empty() && !self.email.is_empty()
    }

    /// Whether the 24-hour window has closed at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis().saturating_sub(self.timestamp) >= ACCESS_DURATION_MS
    }
}

/// Stored shape before validation; every field may be absent
#[derive(Debug, Default, Deserialize)]
struct StoredRecord {
    #[serde(default)]
    paid: Option<bool>,
    #[serde(default)]
    timestamp: Option<i64>,
    #[serde(default)]
    reference: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

impl StoredRecord {
    fn into_record(self) -> Option<AccessRecord> {
        let record = AccessRecord {
            paid: self.paid?,
            timestamp: self.timestamp?,
            reference: self.reference?,
            email: self.email?,
        };
        record.is_complete().then_some(record)
    }
}

/// Synchronous key-value storage (browser `localStorage` in the client)
pub trait AccessStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;
}

/// In-process storage (for tests and non-browser hosts)
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> NestError {
        NestError::Storage("memory storage lock poisoned".into())
    }
}

impl AccessStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.read().map_err(|_| Self::poisoned())?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.write().map_err(|_| Self::poisoned())?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.write().map_err(|_| Self::poisoned())?;
        items.remove(key);
        Ok(())
    }
}

/// Decides whether the gated dashboard may render
pub struct AccessGate<S: AccessStorage> {
    storage: S,
}

impl<S: AccessStorage> AccessGate<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn has_valid_access(&self) -> bool {
        self.has_valid_access_at(Utc::now())
    }

    /// Check the stored record against `now`.
    ///
    /// Incomplete, malformed and expired records are removed. Storage
    /// failures count as "no access".
    pub fn has_valid_access_at(&self, now: DateTime<Utc>) -> bool {
        let stored = match self.storage.get_item(ACCESS_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                tracing::debug!("No access data found");
                return false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read access data");
                return false;
            }
        };

        let record = match serde_json::from_str::<StoredRecord>(&stored) {
            Ok(raw) => raw.into_record(),
            Err(e) => {
                tracing::warn!(error = %e, "Malformed access data");
                None
            }
        };

        let Some(record) = record else {
            tracing::info!("Invalid access data structure");
            self.clear();
            return false;
        };

        if record.is_expired_at(now) {
            tracing::info!(reference = %record.reference, "Access has expired");
            self.clear();
            return false;
        }

        true
    }

    /// Record a completed payment
    pub fn grant(&self, reference: &str, email: &str) -> Result<AccessRecord> {
        self.grant_at(reference, email, Utc::now())
    }

    pub fn grant_at(&self, reference: &str, email: &str, now: DateTime<Utc>) -> Result<AccessRecord> {
        let record = AccessRecord::new(reference, email, now);
        let json = serde_json::to_string(&record)?;
        self.storage.set_item(ACCESS_KEY, &json)?;

        tracing::info!(reference = %record.reference, "Granted dashboard access");
        Ok(record)
    }

    /// Drop any stored record (logout)
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove_item(ACCESS_KEY) {
            tracing::warn!(error = %e, "Failed to clear access data");
        }
    }

    /// The stored record as-is, without expiry checks
    pub fn info(&self) -> Option<AccessRecord> {
        let stored = self.storage.get_item(ACCESS_KEY).ok().flatten()?;
        match serde_json::from_str(&stored) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, "Error getting access info");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn gate() -> AccessGate<MemoryStorage> {
        AccessGate::new(MemoryStorage::new())
    }

    fn store(gate: &AccessGate<MemoryStorage>, json: &str) {
        gate.storage().set_item(ACCESS_KEY, json).unwrap();
    }

    fn stored(gate: &AccessGate<MemoryStorage>) -> Option<String> {
        gate.storage().get_item(ACCESS_KEY).unwrap()
    }

    #[test]
    fn test_no_record() {
        assert!(!gate().has_valid_access());
    }

    #[test]
    fn test_fresh_record_grants_access() {
        let gate = gate();
        let now = Utc::now();
        gate.grant_at("DN_1_2", "ada@example.com", now).unwrap();

        assert!(gate.has_valid_access_at(now));
        assert!(stored(&gate).is_some());
    }

    #[test]
    fn test_expired_record_denied_and_cleared() {
        let gate = gate();
        let now = Utc::now();
        gate.grant_at("DN_1_2", "ada@example.com", now - Duration::hours(25))
            .unwrap();

        assert!(!gate.has_valid_access_at(now));
        assert!(stored(&gate).is_none());
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let gate = gate();
        let now = Utc::now();
        let paid_at = now - Duration::milliseconds(ACCESS_DURATION_MS);
        gate.grant_at("DN_1_2", "ada@example.com", paid_at).unwrap();

        assert!(!gate.has_valid_access_at(now));
    }

    #[test]
    fn test_just_inside_window() {
        let gate = gate();
        let now = Utc::now();
        let paid_at = now - Duration::milliseconds(ACCESS_DURATION_MS - 1);
        gate.grant_at("DN_1_2", "ada@example.com", paid_at).unwrap();

        assert!(gate.has_valid_access_at(now));
    }

    #[test]
    fn test_missing_fields_denied() {
        let now = Utc::now().timestamp_millis();
        let cases = [
            format!(r#"{{"timestamp": {now}, "reference": "r", "email": "e@x.io"}}"#),
            r#"{"paid": true, "reference": "r", "email": "e@x.io"}"#.to_string(),
            format!(r#"{{"paid": true, "timestamp": {now}, "email": "e@x.io"}}"#),
            format!(r#"{{"paid": true, "timestamp": {now}, "reference": "r"}}"#),
            format!(r#"{{"paid": false, "timestamp": {now}, "reference": "r", "email": "e@x.io"}}"#),
            format!(r#"{{"paid": true, "timestamp": {now}, "reference": "", "email": "e@x.io"}}"#),
            format!(r#"{{"paid": true, "timestamp": {now}, "reference": "r", "email": ""}}"#),
            r#"{"paid": true, "timestamp": 0, "reference": "r", "email": "e@x.io"}"#.to_string(),
        ];

        for json in cases {
            let gate = gate();
            store(&gate, &json);
            assert!(!gate.has_valid_access(), "accepted {json}");
            assert!(stored(&gate).is_none(), "kept {json}");
        }
    }

    #[test]
    fn test_malformed_json_denied() {
        let gate = gate();
        store(&gate, "{paid: yes");
        assert!(!gate.has_valid_access());
        assert!(gate.info().is_none());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let gate = gate();
        let now = Utc::now().timestamp_millis();
        store(
            &gate,
            &format!(
                r#"{{"paid": true, "timestamp": {now}, "reference": "r", "transaction": "42", "email": "e@x.io"}}"#
            ),
        );
        assert!(gate.has_valid_access());
    }

    #[test]
    fn test_clear() {
        let gate = gate();
        gate.grant("DN_1_2", "ada@example.com").unwrap();
        gate.clear();
        assert!(!gate.has_valid_access());
    }

    #[test]
    fn test_info_and_expiry() {
        let gate = gate();
        let now = Utc::now();
        let record = gate.grant_at("DN_1_2", "ada@example.com", now).unwrap();

        assert_eq!(gate.info(), Some(record.clone()));
        let expires = record.expires_at().unwrap();
        assert_eq!(
            expires.timestamp_millis() - now.timestamp_millis(),
            ACCESS_DURATION_MS
        );
    }

    /// Storage whose every call fails, like a browser with storage disabled
    struct FailingStorage;

    impl AccessStorage for FailingStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(NestError::Storage("access denied".into()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(NestError::Storage("quota exceeded".into()))
        }

        fn remove_item(&self, _key: &str) -> Result<()> {
            Err(NestError::Storage("access denied".into()))
        }
    }

    #[test]
    fn test_storage_failures_mean_no_access() {
        let gate = AccessGate::new(FailingStorage);

        assert!(!gate.has_valid_access());
        assert!(matches!(
            gate.grant("DN_1_2", "ada@example.com"),
            Err(NestError::Storage(_))
        ));
        gate.clear();
        assert!(gate.info().is_none());
    }

    #[test]
    fn test_record_wire_format() {
        let record = AccessRecord {
            paid: true,
            timestamp: 1_700_000_000_000,
            reference: "DN_1".into(),
            email: "e@x.io".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "paid": true,
                "timestamp": 1_700_000_000_000_i64,
                "reference": "DN_1",
                "email": "e@x.io",
            })
        );
    }
}
