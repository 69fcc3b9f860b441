use super::CapabilityCard;

/// Lines of the landing headline, each paired with a growing pill
pub static HERO_TITLE_LINES: &[&str] = &["THE OPERATING", "SYSTEM", "FOR RECORD", "LABELS"];

/// Partner placeholders scrolling in the marquee strip
pub static MARQUEE_LOGOS: &[&str] = &["Logo 1", "Logo 2", "Logo 3", "Logo 4", "Logo 5"];

/// Disconnected tools that collapse into the logo during the hero sequence
pub static TOOLS: &[&str] = &[
    "Email",
    "Sheets",
    "Drive",
    "WhatsApp",
    "Slack",
    "Calendar",
    "Royalties",
    "Tasks",
    "CRM",
    "Accounting",
    "Promo",
    "Contracts",
    "Placeholder 1",
    "Placeholder 2",
    "Placeholder 3",
    "Placeholder 4",
];

pub static CAPABILITY_COLUMNS: &[&[&str]] = &[
    &[
        "A&R workflow",
        "Project workspace",
        "Digital signing",
        "Asset collection",
        "Artist & contributors",
    ],
    &[
        "Track & artist rating",
        "Metadata & credits",
        "AI assistant",
        "Distribution prep",
        "Deadline tracking",
        "Streaming insights",
    ],
    &[
        "Signing progression",
        "Contract automation",
        "Release management",
        "Catalog management",
        "Task management",
    ],
];

pub static CAPABILITY_CARDS: &[CapabilityCard] = &[
    CapabilityCard {
        title: "Workflow timeline",
        subtitle: "Plan releases, owners, and deadlines in one flow.",
    },
    CapabilityCard {
        title: "Artist pulse",
        subtitle: "Track momentum, ratings, and top opportunities.",
    },
    CapabilityCard {
        title: "Metadata cockpit",
        subtitle: "Centralize credits, splits, and delivery requirements.",
    },
    CapabilityCard {
        title: "Distribution board",
        subtitle: "Prepare release packages and lock launch checkpoints.",
    },
    CapabilityCard {
        title: "Catalog control",
        subtitle: "Manage rights, contracts, and long-tail performance.",
    },
];
