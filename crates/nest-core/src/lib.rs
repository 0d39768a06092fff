//! # nest-core
//!
//! The property directory behind DiasporaNest: a curated, build-time catalog
//! of verified listings, the dashboard's search and filter predicates, and the
//! client-side access gate that decides whether the dashboard may render.
//!
//! ## Access flow
//!
//! ```text
//! ┌──────────┐   pay    ┌──────────────┐  callback  ┌─────────────────┐
//! │ Landing  │────────▶│ Paystack page │──────────▶│ /payment-success │
//! └──────────┘         └──────────────┘            └────────┬────────┘
//!                                                           │ grant()
//!                                                           ▼
//!                        has_valid_access()        ┌─────────────────┐
//!                     ◀────────────────────────────│   AccessRecord   │
//!        /dashboard                                 │ (local storage) │
//!                                                   └─────────────────┘
//! ```
//!
//! The record lives in browser storage and expires 24 hours after payment.
//! Nothing on the server checks it.

pub mod access;
pub mod carousel;
pub mod catalog;
pub mod contact;
pub mod content;
pub mod error;
pub mod filter;
pub mod format;
pub mod model;
pub mod view;

pub use access::{AccessGate, AccessRecord, AccessStorage, MemoryStorage, ACCESS_KEY};
pub use carousel::ImageCarousel;
pub use catalog::Catalog;
pub use error::{NestError, Result};
pub use filter::{CityFilter, FilterOutcome, PriceRange, PropertyFilter};
pub use model::{AgentContact, Coordinates, Property};
pub use view::ViewMode;
