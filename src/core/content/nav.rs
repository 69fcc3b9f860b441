use derive_more::Display;

use super::{NavColumn, NavLink, NavMenuSection};
use crate::core::routes::SiteRoute;

/// Top-level navigation entries, in header order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum NavItem {
    #[display("SOLUTIONS")]
    Solutions,
    #[display("PRICING")]
    Pricing,
    #[display("AI")]
    Ai,
    #[display("LOGIN/SIGNUP")]
    Login,
}

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem::Solutions,
    NavItem::Pricing,
    NavItem::Ai,
    NavItem::Login,
];

impl NavItem {
    pub fn route(&self) -> SiteRoute {
        match self {
            NavItem::Solutions => SiteRoute::Solutions,
            NavItem::Pricing => SiteRoute::Pricing,
            NavItem::Ai => SiteRoute::Ai,
            NavItem::Login => SiteRoute::Login,
        }
    }

    pub fn href(&self) -> &'static str {
        self.route().path()
    }

    /// Mega-menu panel revealed while hovering this item
    pub fn menu(&self) -> &'static NavMenuSection {
        match self {
            NavItem::Solutions => &SOLUTIONS_MENU,
            NavItem::Pricing => &PRICING_MENU,
            NavItem::Ai => &AI_MENU,
            NavItem::Login => &LOGIN_MENU,
        }
    }
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href }
}

static SOLUTIONS_MENU: NavMenuSection = NavMenuSection {
    eyebrow: "Platform",
    title: "Built for modern record labels",
    description: "Unify A&R, release planning, contracts, assets, and distribution in one intelligent operating system.",
    columns: &[
        NavColumn {
            title: "Core operations",
            links: &[
                link("A&R workspace", "/solutions#ar"),
                link("Release planning", "/solutions#releases"),
                link("Task orchestration", "/solutions#tasks"),
                link("Contributor management", "/solutions#contributors"),
            ],
        },
        NavColumn {
            title: "Creative + delivery",
            links: &[
                link("Metadata control", "/solutions#metadata"),
                link("Asset collection", "/solutions#assets"),
                link("Distribution setup", "/solutions#distribution"),
                link("Quality checks", "/solutions#metadata"),
            ],
        },
        NavColumn {
            title: "Business layer",
            links: &[
                link("Contract automation", "/solutions#contracts"),
                link("Rights management", "/solutions#catalog"),
                link("Catalog lifecycle", "/solutions#catalog"),
                link("Performance tracking", "/solutions#catalog"),
            ],
        },
    ],
    cta: link("Explore all solutions", "/solutions"),
};

static PRICING_MENU: NavMenuSection = NavMenuSection {
    eyebrow: "Plans",
    title: "Scale from boutique to enterprise",
    description: "Choose a plan based on team size and workflow complexity, then grow into advanced automation over time.",
    columns: &[
        NavColumn {
            title: "Starter",
            links: &[
                link("For small teams", "/pricing#starter"),
                link("Essentials included", "/pricing#starter"),
                link("Fast onboarding", "/pricing#starter"),
                link("Email support", "/pricing#starter"),
            ],
        },
        NavColumn {
            title: "Growth",
            links: &[
                link("Advanced workflows", "/pricing#growth"),
                link("Role permissions", "/pricing#growth"),
                link("Automated reminders", "/pricing#growth"),
                link("Priority support", "/pricing#growth"),
            ],
        },
        NavColumn {
            title: "Enterprise",
            links: &[
                link("Custom integrations", "/pricing#enterprise"),
                link("Dedicated success lead", "/pricing#enterprise"),
                link("Security reviews", "/pricing#enterprise"),
                link("SLA coverage", "/pricing#enterprise"),
            ],
        },
    ],
    cta: link("Compare plans", "/pricing"),
};

static AI_MENU: NavMenuSection = NavMenuSection {
    eyebrow: "Intelligence",
    title: "AI copilots for every label workflow",
    description: "Accelerate decisions with AI that understands projects, deadlines, catalogs, and release readiness.",
    columns: &[
        NavColumn {
            title: "Creative support",
            links: &[
                link("Track triage", "/ai#creative"),
                link("Opportunity scoring", "/ai#creative"),
                link("Artist insights", "/ai#creative"),
                link("Campaign ideas", "/ai#creative"),
            ],
        },
        NavColumn {
            title: "Operations support",
            links: &[
                link("Metadata suggestions", "/ai#operations"),
                link("Release risk alerts", "/ai#operations"),
                link("Timeline optimization", "/ai#operations"),
                link("Smart task routing", "/ai#operations"),
            ],
        },
        NavColumn {
            title: "Executive support",
            links: &[
                link("Weekly intelligence briefs", "/ai#executive"),
                link("Portfolio summaries", "/ai#executive"),
                link("Forecast snapshots", "/ai#executive"),
                link("Trend monitoring", "/ai#executive"),
            ],
        },
    ],
    cta: link("See AI capabilities", "/ai"),
};

static LOGIN_MENU: NavMenuSection = NavMenuSection {
    eyebrow: "Access",
    title: "Secure access for every role",
    description: "Invite your team, assign permissions, and start collaborating with secure workspace access in minutes.",
    columns: &[
        NavColumn {
            title: "Get started",
            links: &[
                link("Create workspace", "/login"),
                link("Invite collaborators", "/login"),
                link("Set profile preferences", "/login"),
                link("Connect your tools", "/login"),
            ],
        },
        NavColumn {
            title: "Security",
            links: &[
                link("Two-factor authentication", "/login"),
                link("Session controls", "/login"),
                link("Role-based access", "/login"),
                link("Audit history", "/login"),
            ],
        },
        NavColumn {
            title: "Support",
            links: &[
                link("Live onboarding", "/login"),
                link("Knowledge center", "/login"),
                link("Customer success", "/login"),
                link("Contact sales", "/login"),
            ],
        },
    ],
    cta: link("Login or create account", "/login"),
};
