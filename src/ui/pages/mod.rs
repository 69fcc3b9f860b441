//! Application pages module
//!
//! One component per route:
//! - Home (hero sequence, capabilities, partners)
//! - Pricing, Solutions, AI
//! - Login
//! - Privacy, Terms, Cookies
//! - 404 fallback

mod ai;
mod home;
mod legal;
mod login;
mod not_found;
mod pricing;
mod solutions;

pub use ai::AiPage;
pub use home::HomePage;
pub use legal::{CookiesPage, PrivacyPage, TermsPage};
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;
pub use solutions::SolutionsPage;
