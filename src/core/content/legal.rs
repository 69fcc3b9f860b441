use super::{CookieCategory, LegalSection};

/// Shown under every legal page heading
pub const LAST_UPDATED: &str = "February 2026";

pub static PRIVACY_SECTIONS: &[LegalSection] = &[
    LegalSection {
        title: "Information we collect",
        content: "We collect information you provide directly, such as your name, email address, label name, and payment details when you create an account or subscribe to a plan. We also collect usage data to improve the platform experience.",
    },
    LegalSection {
        title: "How we use your information",
        content: "Your information is used to operate and improve MyLabelDesk, communicate with you about your account, provide customer support, and send relevant updates about platform features and changes.",
    },
    LegalSection {
        title: "Data sharing",
        content: "We do not sell your personal data. We may share information with service providers who help us operate the platform, and when required by law or to protect our rights.",
    },
    LegalSection {
        title: "Data security",
        content: "We implement industry-standard security measures including encryption in transit and at rest, regular security audits, and access controls to protect your data.",
    },
    LegalSection {
        title: "Your rights",
        content: "You have the right to access, correct, or delete your personal data. You can also request data portability or object to certain processing activities. Contact us to exercise these rights.",
    },
    LegalSection {
        title: "Contact",
        content: "For privacy-related questions, contact us at privacy@mylabeldesk.com or through your workspace settings.",
    },
];

pub static TERMS_SECTIONS: &[LegalSection] = &[
    LegalSection {
        title: "Acceptance of terms",
        content: "By accessing or using MyLabelDesk, you agree to be bound by these Terms of Service. If you do not agree, you may not use the platform.",
    },
    LegalSection {
        title: "Account responsibilities",
        content: "You are responsible for maintaining the security of your account credentials and for all activity under your workspace. Notify us immediately of any unauthorized access.",
    },
    LegalSection {
        title: "Acceptable use",
        content: "You agree to use MyLabelDesk only for lawful purposes related to record label management. You may not use the platform to infringe on intellectual property rights or distribute harmful content.",
    },
    LegalSection {
        title: "Subscription & billing",
        content: "Paid plans are billed on a recurring basis. You may cancel at any time, and cancellation takes effect at the end of the current billing period. Refunds are handled on a case-by-case basis.",
    },
    LegalSection {
        title: "Intellectual property",
        content: "You retain ownership of all content you upload to MyLabelDesk. We retain ownership of the platform, its design, code, and branding. You grant us a limited license to host and display your content within the platform.",
    },
    LegalSection {
        title: "Limitation of liability",
        content: "MyLabelDesk is provided \"as is.\" We are not liable for any indirect, incidental, or consequential damages arising from your use of the platform.",
    },
    LegalSection {
        title: "Changes to terms",
        content: "We may update these terms from time to time. We will notify you of material changes via email or in-app notification. Continued use after changes constitutes acceptance.",
    },
];

pub static COOKIE_CATEGORIES: &[CookieCategory] = &[
    CookieCategory {
        title: "Essential cookies",
        description: "Required for the platform to function. These handle authentication, security, and session management. They cannot be disabled.",
        examples: &["Session tokens", "CSRF protection", "Load balancing"],
    },
    CookieCategory {
        title: "Analytics cookies",
        description: "Help us understand how you use MyLabelDesk so we can improve the experience. All data is anonymized.",
        examples: &["Page views", "Feature usage", "Error tracking"],
    },
    CookieCategory {
        title: "Preference cookies",
        description: "Remember your settings and preferences, such as language, timezone, and display options.",
        examples: &["Theme preference", "Language settings", "Dashboard layout"],
    },
];
