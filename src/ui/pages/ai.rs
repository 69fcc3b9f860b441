use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::core::content::{AI_CAPABILITIES, AiCapability};
use crate::core::selection::TabSelection;
use crate::ui::common::{PillTabs, TabItem, TabPanel};
use crate::ui::footer::Footer;
use crate::ui::seo::PageMeta;

/// Peak heights of the hero pulse bars, in percent of the strip
const PULSE_PEAKS: [u32; 5] = [62, 84, 48, 90, 71];

const DASHBOARD_STATS: [&str; 3] = ["Active releases", "Risk alerts", "Tasks auto-routed"];

fn pulse_style(index: usize, peak: u32) -> String {
    format!(
        "--pulse-peak: {peak}%; animation-duration: {}ms; animation-delay: {}ms;",
        1200 + index * 200,
        index * 150,
    )
}

#[component]
pub fn AiPage() -> impl IntoView {
    let selection = RwSignal::new(TabSelection::default());
    let hash = use_location().hash;

    // `/ai#operations` opens on that tab
    Effect::new(move |_| {
        let hash = hash.get();
        if !hash.is_empty() {
            selection.try_set(TabSelection::from_anchor(AI_CAPABILITIES, &hash));
        }
    });

    let tabs: Vec<TabItem> = AI_CAPABILITIES
        .iter()
        .map(|group| TabItem::new(group.id, group.category))
        .collect();
    let active = Signal::derive(move || {
        selection
            .get()
            .current(AI_CAPABILITIES)
            .map(|group| group.id)
            .unwrap_or_default()
    });
    let on_change = Callback::new(move |id: &'static str| {
        if let Some(index) = AI_CAPABILITIES.iter().position(|group| group.id == id) {
            selection.try_update(|selection| selection.select(index, AI_CAPABILITIES.len()));
        }
    });

    view! {
        <PageMeta
            title="AI"
            description="AI that understands your projects, deadlines, catalog, and release readiness. Accelerate decisions across every label workflow."
            path="/ai"
        />

        <div class="min-h-screen bg-[#0a0e27] text-[#0a0e27]">
            <AiHero />

            <section class="bg-white px-4 py-24 sm:px-8 lg:px-12">
                <div class="mx-auto max-w-6xl">
                    <PillTabs tabs=tabs active=active on_change=on_change class="justify-center" />

                    {AI_CAPABILITIES
                        .iter()
                        .map(|group| {
                            view! {
                                <TabPanel
                                    tab_id=group.id
                                    active=active
                                    class="mt-16 grid scroll-mt-32 gap-6 sm:grid-cols-2"
                                >
                                    {group
                                        .items
                                        .iter()
                                        .enumerate()
                                        .map(|(index, item)| view! { <CapabilityCard item=item index=index /> })
                                        .collect_view()}
                                </TabPanel>
                            }
                        })
                        .collect_view()}

                    <DashboardPreview />

                    <div class="mt-20 text-center">
                        <A
                            href="/login"
                            attr:class="inline-flex items-center rounded-full bg-[#0000d8] px-10 py-5 text-[14px] font-bold uppercase tracking-[0.2em] text-white transition-all hover:bg-[#1d4ed8]"
                        >
                            "Try AI features"
                        </A>
                    </div>
                </div>
                <Footer />
            </section>
        </div>
    }
}

#[component]
fn AiHero() -> impl IntoView {
    view! {
        <section class="relative overflow-hidden bg-gradient-to-b from-[#0a0e27] via-[#020617] to-[#0a0e27] pb-20 pt-6">
            <div class="pointer-events-none absolute left-1/2 top-1/3 h-[500px] w-[500px] -translate-x-1/2 -translate-y-1/2 rounded-full bg-[#0000d8]/20 blur-[120px]"></div>

            <div class="relative z-10 mx-auto max-w-6xl px-4 sm:px-8 lg:px-12">
                <div class="pt-28 text-center sm:pt-36">
                    <p class="mld-fade-up text-[14px] font-semibold uppercase tracking-[0.25em] text-[#93c5fd]">
                        "AI Intelligence"
                    </p>
                    <h1
                        class="mld-fade-up mt-4 text-[36px] font-black leading-[1.04] tracking-tight text-white sm:text-[56px] md:text-[72px] lg:text-[88px]"
                        style="animation-delay: 100ms;"
                    >
                        "Your label's "
                        <span class="bg-gradient-to-r from-[#93c5fd] to-[#0000d8] bg-clip-text text-transparent">
                            "AI copilot."
                        </span>
                    </h1>
                    <p
                        class="mld-fade-up mx-auto mt-6 max-w-2xl text-[17px] leading-relaxed text-[#bfdbfe] sm:text-[20px]"
                        style="animation-delay: 200ms;"
                    >
                        "AI that understands your projects, deadlines, catalog, and release readiness, accelerating decisions across every workflow."
                    </p>
                </div>

                <div
                    class="mld-fade-in mx-auto mt-16 flex h-32 max-w-md items-center justify-center gap-2 sm:h-40"
                    style="animation-delay: 500ms;"
                    aria-hidden="true"
                >
                    {PULSE_PEAKS
                        .iter()
                        .enumerate()
                        .map(|(index, peak)| {
                            view! {
                                <div
                                    class="mld-pulse w-2 rounded-full bg-gradient-to-t from-[#0000d8] to-[#93c5fd] sm:w-3"
                                    style=pulse_style(index, *peak)
                                ></div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CapabilityCard(item: &'static AiCapability, index: usize) -> impl IntoView {
    view! {
        <div
            class="mld-fade-up group relative overflow-hidden rounded-[24px] border border-[#e2e8f0] bg-white p-8 transition-all hover:border-[#0000d8]/30 hover:shadow-[0_20px_60px_rgba(0,0,216,0.1)]"
            style=format!("animation-delay: {}ms;", index * 80)
        >
            <div class="flex h-10 w-10 items-center justify-center rounded-xl bg-[#0000d8]/10">
                <div class="h-3 w-3 rounded-full bg-[#0000d8]"></div>
            </div>
            <h3 class="mt-5 text-[20px] font-black text-[#0a0e27]">{item.title}</h3>
            <p class="mt-2 text-[15px] leading-relaxed text-[#64748b]">{item.description}</p>
            <div class="pointer-events-none absolute -bottom-16 -right-16 h-32 w-32 rounded-full bg-[#0000d8]/5 transition-all group-hover:bg-[#0000d8]/10"></div>
        </div>
    }
}

#[component]
fn DashboardPreview() -> impl IntoView {
    view! {
        <div class="mld-fade-up relative mt-24 overflow-hidden rounded-[32px] bg-gradient-to-b from-[#020617] to-[#0a0e27] p-10 shadow-[0_40px_90px_rgba(0,0,0,0.4)] sm:p-16">
            <div class="pointer-events-none absolute -top-20 left-1/2 h-64 w-64 -translate-x-1/2 rounded-full bg-[#0000d8]/20 blur-[100px]"></div>
            <div class="relative z-10 text-center">
                <p class="text-[14px] font-semibold uppercase tracking-[0.25em] text-[#93c5fd]">
                    "AI Dashboard Preview"
                </p>
                <h2 class="mt-4 text-[28px] font-black text-white sm:text-[36px]">
                    "Intelligence at your fingertips"
                </h2>
                <div class="mx-auto mt-10 grid max-w-3xl grid-cols-3 gap-6">
                    {DASHBOARD_STATS
                        .iter()
                        .map(|label| {
                            view! {
                                <div class="rounded-2xl border border-[#1e293b] bg-[#020617]/60 p-6">
                                    <div class="text-[32px] font-black text-[#0000d8]">"—"</div>
                                    <p class="mt-2 text-[13px] uppercase tracking-[0.16em] text-[#bfdbfe]">
                                        {*label}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_bars_stay_in_range() {
        for peak in PULSE_PEAKS {
            assert!((40..=90).contains(&peak));
        }
    }

    #[test]
    fn test_pulse_style_staggers() {
        let style = pulse_style(2, 48);
        assert!(style.contains("--pulse-peak: 48%;"));
        assert!(style.contains("animation-duration: 1600ms;"));
        assert!(style.contains("animation-delay: 300ms;"));
    }
}
