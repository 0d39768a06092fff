//! UI Components

mod email_dialog;
mod map_view;
mod payment_button;
mod property_card;

pub use email_dialog::EmailDialog;
pub use map_view::MapView;
pub use payment_button::{ButtonVariant, PaymentButton};
pub use property_card::PropertyCard;
