//! Privacy policy, terms of service and cookie policy

use leptos::prelude::*;

use crate::core::content::{
    COOKIE_CATEGORIES, CookieCategory, LAST_UPDATED, LegalSection, PRIVACY_SECTIONS, TERMS_SECTIONS,
};
use crate::ui::common::PageIntro;
use crate::ui::footer::Footer;
use crate::ui::seo::PageMeta;

const COOKIES_INTRO: &str = "MyLabelDesk uses cookies to provide, secure, and improve the platform. This policy explains what cookies we use and why.";

const MANAGING_COOKIES: &str = "You can control cookies through your browser settings. Note that disabling essential cookies may affect platform functionality. For analytics and preference cookies, you can update your settings at any time from your workspace preferences.";

fn entry_delay(index: usize, base_ms: usize, step_ms: usize) -> String {
    format!("animation-delay: {}ms;", base_ms + index * step_ms)
}

/// Shared frame of the three legal pages
#[component]
fn LegalLayout(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-[#0a0e27] text-[#0a0e27]">
            <PageIntro eyebrow="Legal" title=title centered=false>
                <p class="mld-fade-up mt-4 text-[15px] text-[#94a3b8]">
                    {format!("Last updated: {LAST_UPDATED}")}
                </p>
            </PageIntro>

            <section class="bg-white px-4 pb-24 sm:px-8 lg:px-12">
                <div class="mx-auto max-w-3xl pt-8">{children()}</div>
                <Footer />
            </section>
        </div>
    }
}

#[component]
fn SectionList(sections: &'static [LegalSection]) -> impl IntoView {
    view! {
        <div class="space-y-12">
            {sections
                .iter()
                .enumerate()
                .map(|(index, section)| {
                    view! {
                        <div class="mld-fade-up" style=entry_delay(index, 100, 60)>
                            <h2 class="text-[20px] font-black text-[#0a0e27] sm:text-[24px]">
                                {section.title}
                            </h2>
                            <p class="mt-3 text-[15px] leading-relaxed text-[#64748b] sm:text-[16px]">
                                {section.content}
                            </p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <PageMeta
            title="Privacy Policy"
            description="How MyLabelDesk collects, uses and protects the information of labels and their teams."
            path="/privacy"
        />
        <LegalLayout title="Privacy Policy">
            <SectionList sections=PRIVACY_SECTIONS />
        </LegalLayout>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <PageMeta
            title="Terms of Service"
            description="The terms that govern access to and use of the MyLabelDesk platform."
            path="/terms"
        />
        <LegalLayout title="Terms of Service">
            <SectionList sections=TERMS_SECTIONS />
        </LegalLayout>
    }
}

#[component]
pub fn CookiesPage() -> impl IntoView {
    view! {
        <PageMeta
            title="Cookie Policy"
            description="What cookies MyLabelDesk uses and why, and how to manage them."
            path="/cookies"
        />
        <LegalLayout title="Cookie Policy">
            <p
                class="mld-fade-up text-[15px] leading-relaxed text-[#64748b] sm:text-[16px]"
                style="animation-delay: 100ms;"
            >
                {COOKIES_INTRO}
            </p>

            <div class="mt-14 space-y-10">
                {COOKIE_CATEGORIES
                    .iter()
                    .enumerate()
                    .map(|(index, category)| view! { <CookieCard category=category index=index /> })
                    .collect_view()}
            </div>

            <div class="mld-fade-up mt-14" style="animation-delay: 500ms;">
                <h2 class="text-[20px] font-black text-[#0a0e27] sm:text-[24px]">"Managing cookies"</h2>
                <p class="mt-3 text-[15px] leading-relaxed text-[#64748b] sm:text-[16px]">
                    {MANAGING_COOKIES}
                </p>
            </div>
        </LegalLayout>
    }
}

#[component]
fn CookieCard(category: &'static CookieCategory, index: usize) -> impl IntoView {
    view! {
        <div class="mld-fade-up rounded-[24px] border border-[#e2e8f0] p-8" style=entry_delay(index, 150, 80)>
            <h2 class="text-[20px] font-black text-[#0a0e27]">{category.title}</h2>
            <p class="mt-3 text-[15px] leading-relaxed text-[#64748b]">{category.description}</p>
            <div class="mt-5 flex flex-wrap gap-2">
                {category
                    .examples
                    .iter()
                    .map(|example| {
                        view! {
                            <span class="rounded-full bg-[#f1f5f9] px-4 py-1.5 text-[13px] font-semibold text-[#475569]">
                                {*example}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_delay_steps() {
        assert_eq!(entry_delay(0, 100, 60), "animation-delay: 100ms;");
        assert_eq!(entry_delay(3, 150, 80), "animation-delay: 390ms;");
    }
}
