//! Static display records rendered by the pages.
//!
//! Every table here is defined once as a `static` and never mutated. Pages
//! only hold selection state over these tables (see [`crate::core::selection`]).

mod ai;
mod home;
mod legal;
mod nav;
mod pricing;
mod solutions;

pub use ai::AI_CAPABILITIES;
pub use home::{CAPABILITY_CARDS, CAPABILITY_COLUMNS, HERO_TITLE_LINES, MARQUEE_LOGOS, TOOLS};
pub use legal::{COOKIE_CATEGORIES, LAST_UPDATED, PRIVACY_SECTIONS, TERMS_SECTIONS};
pub use nav::{NAV_ITEMS, NavItem};
pub use pricing::{PRICING_FAQS, PRICING_PLANS};
pub use solutions::SOLUTIONS;

/// Product name as shown in titles and copy
pub const SITE_NAME: &str = "MyLabelDesk";

/// Public origin used for canonical links and social cards
pub const SITE_URL: &str = "https://www.mylabeldesk.com";

/// Default page description
pub const SITE_DESCRIPTION: &str = "MyLabelDesk is the operating system for modern record labels, connecting catalog, royalties, projects and marketing into one powerful workspace.";

/// Price of a plan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanPrice {
    /// Whole dollars per month
    Monthly(u32),
    /// Negotiated with sales
    Custom,
}

/// A subscription plan shown on the pricing page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingPlan {
    /// Anchor id within `/pricing`
    pub id: &'static str,
    pub name: &'static str,
    pub price: PlanPrice,
    /// Billing period label shown next to the price, empty for custom plans
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub highlighted: bool,
}

/// Question and answer pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A platform module shown on the solutions page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Anchor id within `/solutions`
    pub id: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

/// One AI capability card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AiCapability {
    pub title: &'static str,
    pub description: &'static str,
}

/// A tab of AI capabilities
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AiCapabilityGroup {
    /// Anchor id within `/ai`
    pub id: &'static str,
    pub category: &'static str,
    pub items: &'static [AiCapability],
}

/// A navigation link with its target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Route path with an optional `#anchor`
    pub href: &'static str,
}

/// A titled column of links inside a mega-menu panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavColumn {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

/// Mega-menu panel attached to a top-level navigation item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavMenuSection {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub columns: &'static [NavColumn],
    pub cta: NavLink,
}

/// Card shown next to the home page capability list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapabilityCard {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Titled paragraph of a legal page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalSection {
    pub title: &'static str,
    pub content: &'static str,
}

/// Cookie category on the cookie policy page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CookieCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}
