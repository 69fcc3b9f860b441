//! Per-page head metadata

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use serde::Serialize;

use crate::core::content::{SITE_DESCRIPTION, SITE_NAME, SITE_URL};

const KEYWORDS: &str = "MyLabelDesk, record label software, label management platform, royalty accounting, music catalog management, music business tools";

/// Title, description, Open Graph, Twitter card and canonical link
#[component]
pub fn PageMeta(
    /// Page title, without the site suffix
    title: &'static str,
    /// Meta description
    #[prop(default = SITE_DESCRIPTION)]
    description: &'static str,
    /// Route path used for the canonical URL
    path: &'static str,
) -> impl IntoView {
    let full_title = page_title(title);
    let url = canonical_url(path);

    view! {
        <Title text=full_title.clone() />

        <Meta name="description" content=description />
        <Meta name="keywords" content=KEYWORDS />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:site_name" content=SITE_NAME />
        <Meta property="og:url" content=url.clone() />
        <Meta property="og:title" content=full_title.clone() />
        <Meta property="og:description" content=description />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=full_title />
        <Meta name="twitter:description" content=description />

        <Link rel="canonical" href=url />
    }
}

/// `SoftwareApplication` structured data for the home page
#[component]
pub fn StructuredData() -> impl IntoView {
    view! { <script type="application/ld+json" inner_html=software_application_ld()></script> }
}

fn page_title(title: &str) -> String {
    format!("{title} | {SITE_NAME}")
}

fn canonical_url(path: &str) -> String {
    match path {
        "/" => SITE_URL.to_string(),
        _ => format!("{SITE_URL}{path}"),
    }
}

#[derive(Serialize)]
struct SoftwareApplication {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(rename = "applicationCategory")]
    category: &'static str,
    #[serde(rename = "operatingSystem")]
    operating_system: &'static str,
    description: &'static str,
    url: &'static str,
    #[serde(rename = "featureList")]
    features: &'static [&'static str],
}

fn software_application_ld() -> String {
    let data = SoftwareApplication {
        context: "https://schema.org",
        kind: "SoftwareApplication",
        name: SITE_NAME,
        category: "BusinessApplication",
        operating_system: "Web",
        description: SITE_DESCRIPTION,
        url: SITE_URL,
        features: &[
            "A&R workflow",
            "Release planning",
            "Contract automation",
            "Metadata and credits",
            "Distribution preparation",
            "AI assistant",
        ],
    };
    // A struct of plain strings always serializes
    serde_json::to_string(&data).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title() {
        assert_eq!(page_title("Pricing"), "Pricing | MyLabelDesk");
    }

    #[test]
    fn test_canonical_url() {
        assert_eq!(canonical_url("/"), "https://www.mylabeldesk.com");
        assert_eq!(canonical_url("/ai"), "https://www.mylabeldesk.com/ai");
    }

    #[test]
    fn test_structured_data() {
        let value: serde_json::Value = serde_json::from_str(&software_application_ld()).unwrap();
        assert_eq!(value["@type"], "SoftwareApplication");
        assert_eq!(value["name"], "MyLabelDesk");
        assert_eq!(value["url"], SITE_URL);
        assert!(value["featureList"].as_array().unwrap().len() > 3);
    }
}
