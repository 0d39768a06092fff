//! Browser storage adapters

use nest_core::{AccessGate, AccessStorage, NestError};
use web_sys::Storage;

/// Session-storage key for the email entered before checkout
pub const PAYMENT_EMAIL_KEY: &str = "payment_email";

#[derive(Clone, Copy, Debug)]
enum Area {
    Local,
    Session,
}

/// `AccessStorage` over the browser's Web Storage
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    area: Area,
}

impl BrowserStorage {
    /// `window.localStorage`; survives restarts
    pub fn local() -> Self {
        Self { area: Area::Local }
    }

    /// `window.sessionStorage`; scoped to the tab
    pub fn session() -> Self {
        Self { area: Area::Session }
    }

    fn storage(&self) -> nest_core::Result<Storage> {
        let window = web_sys::window().ok_or_else(|| NestError::Storage("no window".into()))?;
        let storage = match self.area {
            Area::Local => window.local_storage(),
            Area::Session => window.session_storage(),
        };
        storage
            .map_err(js_error)?
            .ok_or_else(|| NestError::Storage("storage unavailable".into()))
    }
}

fn js_error(value: wasm_bindgen::JsValue) -> NestError {
    NestError::Storage(format!("{value:?}"))
}

impl AccessStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> nest_core::Result<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> nest_core::Result<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> nest_core::Result<()> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}

/// Gate backed by `localStorage`
pub fn access_gate() -> AccessGate<BrowserStorage> {
    AccessGate::new(BrowserStorage::local())
}

/// Remember the payer's email across the hosted-checkout round trip
pub fn stash_payment_email(email: &str) -> nest_core::Result<()> {
    BrowserStorage::session().set_item(PAYMENT_EMAIL_KEY, email)
}

/// Take the stashed email, removing it; empty if none was stashed
pub fn take_payment_email() -> String {
    let session = BrowserStorage::session();
    let email = session.get_item(PAYMENT_EMAIL_KEY).ok().flatten().unwrap_or_default();
    if let Err(e) = session.remove_item(PAYMENT_EMAIL_KEY) {
        leptos::logging::warn!("Failed to clear payment email: {e}");
    }
    email
}
