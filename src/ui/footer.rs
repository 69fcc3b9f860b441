use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{NavLink, SITE_NAME};

static LEGAL_LINKS: &[NavLink] = &[
    NavLink {
        label: "Privacy",
        href: "/privacy",
    },
    NavLink {
        label: "Terms",
        href: "/terms",
    },
    NavLink {
        label: "Cookies",
        href: "/cookies",
    },
];

fn copyright(year: i32) -> String {
    format!("© {year} {SITE_NAME}. All rights reserved.")
}

/// Footer component
#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="mx-auto mt-8 flex max-w-6xl flex-col items-start justify-between gap-4 border-t border-[#e2e8f0] pt-6 text-[13px] text-[#64748b] sm:mt-12 sm:flex-row sm:gap-5 sm:pt-8 sm:text-[14px]">
            <p>{copyright(year)}</p>
            <div class="flex flex-wrap gap-4">
                {LEGAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <A href=link.href attr:class="text-[#64748b] transition-colors hover:text-[#0a0e27]">
                                {link.label}
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolve;

    #[test]
    fn test_copyright() {
        assert_eq!(copyright(2026), "© 2026 MyLabelDesk. All rights reserved.");
    }

    #[test]
    fn test_legal_links_resolve() {
        for link in LEGAL_LINKS {
            assert!(resolve(link.href).is_some(), "{}", link.href);
        }
    }
}
