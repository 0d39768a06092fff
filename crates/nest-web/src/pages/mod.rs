//! Page Components

mod dashboard;
mod landing;
mod legal;
mod payment_success;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use legal::{PrivacyPolicyPage, RefundPolicyPage, TermsOfServicePage};
pub use payment_success::PaymentSuccessPage;
