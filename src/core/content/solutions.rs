use super::Solution;

pub static SOLUTIONS: &[Solution] = &[
    Solution {
        id: "ar",
        category: "Discovery",
        title: "A&R Workspace",
        description: "Scout, evaluate, and sign talent from one unified pipeline.",
        features: &[
            "Artist scouting pipeline",
            "Demo review queue",
            "Opportunity scoring",
            "Digital deal memos",
        ],
    },
    Solution {
        id: "releases",
        category: "Planning",
        title: "Release Planning",
        description: "Orchestrate every milestone from recording to launch day.",
        features: &[
            "Timeline builder",
            "Milestone tracking",
            "Team assignments",
            "Deadline alerts",
        ],
    },
    Solution {
        id: "tasks",
        category: "Operations",
        title: "Task Orchestration",
        description: "Assign, track, and automate tasks across your entire team.",
        features: &[
            "Kanban & list views",
            "Auto-assignments",
            "Priority levels",
            "Progress dashboards",
        ],
    },
    Solution {
        id: "contributors",
        category: "People",
        title: "Contributor Management",
        description: "Centralize every artist, writer, producer, and collaborator.",
        features: &[
            "Unified profiles",
            "Credit tracking",
            "Split management",
            "Contact directory",
        ],
    },
    Solution {
        id: "metadata",
        category: "Data",
        title: "Metadata Control",
        description: "Ensure every track ships with complete, accurate metadata.",
        features: &[
            "ISRC generation",
            "Credit validation",
            "Format compliance",
            "Bulk editing",
        ],
    },
    Solution {
        id: "assets",
        category: "Creative",
        title: "Asset Collection",
        description: "Collect artwork, stems, masters, and promo materials in one vault.",
        features: &[
            "Upload portal",
            "Version control",
            "Approval flows",
            "Format conversion",
        ],
    },
    Solution {
        id: "distribution",
        category: "Delivery",
        title: "Distribution Setup",
        description: "Prepare delivery packages and launch across all platforms.",
        features: &[
            "DSP formatting",
            "Pre-save campaigns",
            "Territory settings",
            "Launch checklists",
        ],
    },
    Solution {
        id: "contracts",
        category: "Legal",
        title: "Contract Automation",
        description: "Generate, send, and track contracts with built-in templates.",
        features: &[
            "Template library",
            "E-signatures",
            "Renewal alerts",
            "Clause management",
        ],
    },
    Solution {
        id: "catalog",
        category: "Catalog",
        title: "Catalog Lifecycle",
        description: "Manage rights, royalties, and long-tail performance over time.",
        features: &[
            "Rights tracking",
            "Royalty calculations",
            "Performance analytics",
            "Re-release workflows",
        ],
    },
];
