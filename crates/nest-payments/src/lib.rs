//! # nest-payments
//!
//! Checkout plumbing for the one-time DiasporaNest access fee.
//!
//! ## Checkout proxy flow
//!
//! ```text
//! ┌─────────┐ {email, amount} ┌─────────────┐ Bearer sk_… ┌──────────────┐
//! │ Browser │───────────────▶│ nest-server  │───────────▶│   Paystack   │
//! │         │◀───────────────│ (proxy)      │◀───────────│ /transaction │
//! └─────────┘  provider JSON  └─────────────┘             │ /initialize  │
//!      │                                                  └──────────────┘
//!      │ redirect to data.authorization_url
//!      ▼
//!  Paystack hosted page ──▶ {FRONTEND_URL}/payment-success?reference=…
//! ```
//!
//! The secret key never leaves the server. The browser only sees the
//! provider's initialization response.
//!
//! The `gateway` feature (on by default) pulls in the HTTP client. The WASM
//! client disables it and uses only the shared types and validators.

mod callback;
mod checkout;
mod email;
mod error;
#[cfg(feature = "gateway")]
mod gateway;
#[cfg(feature = "gateway")]
mod mock;

pub use callback::reference_from_query;
pub use checkout::{
    callback_url, AuthorizationData, CheckoutRequest, InitializeResponse, InitializeTransaction,
    ACCESS_FEE_KOBO, ACCESS_FEE_NAIRA, CALLBACK_PATH,
};
pub use email::{validate_email, EmailError};
pub use error::{PaymentError, Result};
#[cfg(feature = "gateway")]
pub use gateway::{PaymentGateway, PaystackClient, PAYSTACK_BASE_URL};
#[cfg(feature = "gateway")]
pub use mock::MockGateway;
