use super::{AiCapability, AiCapabilityGroup};

pub static AI_CAPABILITIES: &[AiCapabilityGroup] = &[
    AiCapabilityGroup {
        id: "creative",
        category: "Creative Support",
        items: &[
            AiCapability {
                title: "Track Triage",
                description: "AI listens and categorizes incoming demos by genre, energy, and potential.",
            },
            AiCapability {
                title: "Opportunity Scoring",
                description: "Surface the highest-potential signings based on streaming data and market trends.",
            },
            AiCapability {
                title: "Artist Insights",
                description: "Automated briefs on an artist's trajectory, audience, and growth potential.",
            },
            AiCapability {
                title: "Campaign Ideas",
                description: "Generate release marketing strategies based on genre, audience, and timing.",
            },
        ],
    },
    AiCapabilityGroup {
        id: "operations",
        category: "Operations",
        items: &[
            AiCapability {
                title: "Metadata Suggestions",
                description: "Auto-fill credits, ISRC codes, and contributor data from your catalog history.",
            },
            AiCapability {
                title: "Release Risk Alerts",
                description: "Flag missing assets, incomplete metadata, or tight deadlines before they become blockers.",
            },
            AiCapability {
                title: "Timeline Optimization",
                description: "Suggest ideal release dates based on market activity and historical performance.",
            },
            AiCapability {
                title: "Smart Task Routing",
                description: "Auto-assign tasks to the right team member based on workload and expertise.",
            },
        ],
    },
    AiCapabilityGroup {
        id: "executive",
        category: "Executive Intelligence",
        items: &[
            AiCapability {
                title: "Weekly Briefs",
                description: "Automated summaries of label activity, releases, and key metrics delivered weekly.",
            },
            AiCapability {
                title: "Portfolio Summaries",
                description: "Bird's-eye performance view across your entire catalog and artist roster.",
            },
            AiCapability {
                title: "Forecast Snapshots",
                description: "Revenue and streaming projections based on release pipeline and historical data.",
            },
            AiCapability {
                title: "Trend Monitoring",
                description: "Track emerging genres, sounds, and market shifts relevant to your catalog.",
            },
        ],
    },
];
