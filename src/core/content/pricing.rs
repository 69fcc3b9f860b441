use super::{Faq, PlanPrice, PricingPlan};

pub static PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        id: "starter",
        name: "Starter",
        price: PlanPrice::Monthly(49),
        period: "/ month",
        description: "For independent labels getting started.",
        features: &[
            "Up to 5 team members",
            "Core A&R workflow",
            "Release planning",
            "Asset collection",
            "Metadata management",
            "Email support",
        ],
        cta: "Start free trial",
        highlighted: false,
    },
    PricingPlan {
        id: "growth",
        name: "Growth",
        price: PlanPrice::Monthly(149),
        period: "/ month",
        description: "For labels scaling their operations.",
        features: &[
            "Up to 25 team members",
            "Everything in Starter",
            "Contract automation",
            "Advanced permissions",
            "Distribution prep",
            "AI assistant",
            "Automated reminders",
            "Priority support",
        ],
        cta: "Start free trial",
        highlighted: true,
    },
    PricingPlan {
        id: "enterprise",
        name: "Enterprise",
        price: PlanPrice::Custom,
        period: "",
        description: "For major labels and label groups.",
        features: &[
            "Unlimited team members",
            "Everything in Growth",
            "Custom integrations",
            "Dedicated success lead",
            "Security & compliance",
            "SLA coverage",
            "Custom onboarding",
            "API access",
        ],
        cta: "Contact sales",
        highlighted: false,
    },
];

pub static PRICING_FAQS: &[Faq] = &[
    Faq {
        question: "Can I switch plans later?",
        answer: "Yes. Upgrade or downgrade anytime from your workspace settings. Changes take effect at your next billing cycle.",
    },
    Faq {
        question: "Is there a free trial?",
        answer: "Every plan comes with a 14-day free trial. No credit card required to start.",
    },
    Faq {
        question: "What payment methods do you accept?",
        answer: "We accept all major credit cards and can arrange invoicing for Enterprise customers.",
    },
    Faq {
        question: "Can I add more team members?",
        answer: "Additional seats can be purchased on Starter and Growth plans. Enterprise plans include unlimited members.",
    },
];
