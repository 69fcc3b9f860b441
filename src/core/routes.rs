//! Client-side routes and the anchors addressable within them

use derive_more::Display;

use crate::core::content::{AI_CAPABILITIES, PRICING_PLANS, SOLUTIONS};

/// Every page of the site
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum SiteRoute {
    #[display("/")]
    Home,
    #[display("/pricing")]
    Pricing,
    #[display("/solutions")]
    Solutions,
    #[display("/ai")]
    Ai,
    #[display("/login")]
    Login,
    #[display("/privacy")]
    Privacy,
    #[display("/terms")]
    Terms,
    #[display("/cookies")]
    Cookies,
}

impl SiteRoute {
    pub const ALL: [SiteRoute; 8] = [
        SiteRoute::Home,
        SiteRoute::Pricing,
        SiteRoute::Solutions,
        SiteRoute::Ai,
        SiteRoute::Login,
        SiteRoute::Privacy,
        SiteRoute::Terms,
        SiteRoute::Cookies,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            SiteRoute::Home => "/",
            SiteRoute::Pricing => "/pricing",
            SiteRoute::Solutions => "/solutions",
            SiteRoute::Ai => "/ai",
            SiteRoute::Login => "/login",
            SiteRoute::Privacy => "/privacy",
            SiteRoute::Terms => "/terms",
            SiteRoute::Cookies => "/cookies",
        }
    }

    /// Path without the leading slash, as a router segment
    pub fn segment(&self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Match a pathname, ignoring a trailing slash
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Element ids that a `#fragment` may target on this page
    pub fn anchors(&self) -> Vec<&'static str> {
        match self {
            SiteRoute::Pricing => PRICING_PLANS.iter().map(|plan| plan.id).collect(),
            SiteRoute::Solutions => SOLUTIONS.iter().map(|solution| solution.id).collect(),
            SiteRoute::Ai => AI_CAPABILITIES.iter().map(|group| group.id).collect(),
            _ => Vec::new(),
        }
    }
}

/// A parsed in-site link
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    pub route: SiteRoute,
    pub anchor: Option<&'static str>,
}

impl Target {
    /// Whether the browser location points here. A target without an
    /// anchor matches its route whatever the fragment.
    pub fn is_current(&self, pathname: &str, hash: &str) -> bool {
        if SiteRoute::from_path(pathname) != Some(self.route) {
            return false;
        }
        self.anchor
            .is_none_or(|anchor| hash.trim_start_matches('#') == anchor)
    }
}

/// Resolve an href such as `/pricing#growth`.
///
/// Returns `None` when the path is not a site route or the fragment is not
/// an anchor of that route.
pub fn resolve(href: &'static str) -> Option<Target> {
    let (path, fragment) = match href.split_once('#') {
        Some((path, fragment)) => (path, Some(fragment)),
        None => (href, None),
    };
    let route = SiteRoute::from_path(path)?;
    match fragment {
        None => Some(Target {
            route,
            anchor: None,
        }),
        Some(anchor) if route.anchors().contains(&anchor) => Some(Target {
            route,
            anchor: Some(anchor),
        }),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_known_routes() {
        for route in SiteRoute::ALL {
            assert_eq!(SiteRoute::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_from_path_trailing_slash() {
        assert_eq!(SiteRoute::from_path("/pricing/"), Some(SiteRoute::Pricing));
        assert_eq!(SiteRoute::from_path(""), Some(SiteRoute::Home));
        assert_eq!(SiteRoute::from_path("/dashboard"), None);
    }

    #[test]
    fn test_display_matches_path() {
        for route in SiteRoute::ALL {
            assert_eq!(route.to_string(), route.path());
        }
    }

    #[test]
    fn test_pricing_anchors() {
        assert_eq!(
            SiteRoute::Pricing.anchors(),
            vec!["starter", "growth", "enterprise"]
        );
        assert!(SiteRoute::Home.anchors().is_empty());
    }

    #[test]
    fn test_resolve() {
        let target = resolve("/solutions#contracts").unwrap();
        assert_eq!(target.route, SiteRoute::Solutions);
        assert_eq!(target.anchor, Some("contracts"));

        let target = resolve("/login").unwrap();
        assert_eq!(target.route, SiteRoute::Login);
        assert!(target.anchor.is_none());

        assert!(resolve("/solutions#quality").is_none());
        assert!(resolve("/blog").is_none());
    }

    #[test]
    fn test_segments() {
        assert_eq!(SiteRoute::Home.segment(), "");
        assert_eq!(SiteRoute::Cookies.segment(), "cookies");
        for route in SiteRoute::ALL {
            assert_eq!(format!("/{}", route.segment()), route.path());
        }
    }

    #[test]
    fn test_target_is_current() {
        let pricing = resolve("/pricing").unwrap();
        assert!(pricing.is_current("/pricing", ""));
        assert!(pricing.is_current("/pricing/", "#growth"));
        assert!(!pricing.is_current("/solutions", ""));

        let contracts = resolve("/solutions#contracts").unwrap();
        assert!(contracts.is_current("/solutions", "#contracts"));
        assert!(!contracts.is_current("/solutions", "#ar"));
        assert!(!contracts.is_current("/solutions", ""));
    }
}
