//! Landing page
//!
//! - Hero title with growing pills and the partner logo marquee
//! - Tools grid that explodes, collapses and reveals the logo
//! - Capability columns driving two detail cards
//! - Partner cards and footer

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{
    CAPABILITY_CARDS, CAPABILITY_COLUMNS, HERO_TITLE_LINES, MARQUEE_LOGOS, TOOLS,
};
use crate::core::selection::CapabilitySelector;
use crate::ui::footer::Footer;
use crate::ui::hero::ToolsReveal;
use crate::ui::marquee::LogoMarquee;
use crate::ui::seo::{PageMeta, StructuredData};

/// Delay between hero title lines, in milliseconds
const TITLE_STAGGER_MS: usize = 180;

/// The marquee pill appears once the title lines and pills have grown
const MARQUEE_DELAY_MS: u32 = 2100;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageMeta title="The operating system for record labels" path="/" />
        <StructuredData />

        <div class="min-h-screen bg-[#0a0e27] text-[#0a0e27]">
            <section class="bg-white pb-14 pt-8 text-[#0a0e27] shadow-[0_40px_120px_rgba(10,14,39,0.45)] sm:pt-10">
                <div class="mx-auto flex max-w-6xl flex-col gap-6 px-4 sm:px-8 lg:px-12">
                    <div class="pt-24">
                        <HeroTitle />

                        <div
                            class="mld-fade-up mt-8 overflow-hidden rounded-full bg-[#e5e7eb] px-10 py-6 shadow-[0_18px_40px_rgba(0,0,216,0.18)]"
                            style=format!("animation-delay: {MARQUEE_DELAY_MS}ms;")
                        >
                            <LogoMarquee logos=MARQUEE_LOGOS />
                        </div>
                    </div>
                </div>
            </section>

            <main class="mx-auto flex max-w-6xl flex-col gap-24 px-4 pb-20 pt-8 sm:px-8 lg:px-12 lg:pt-10">
                <ToolsSection />
                <CapabilitiesSection />
                <Footer />
            </main>
        </div>
    }
}

#[component]
fn HeroTitle() -> impl IntoView {
    view! {
        <div class="space-y-3 text-left">
            {HERO_TITLE_LINES
                .iter()
                .enumerate()
                .map(|(index, line)| {
                    let delay = format!("animation-delay: {}ms;", index * TITLE_STAGGER_MS);
                    let line_delay = delay.clone();
                    view! {
                        <div class="mld-title-line flex items-center gap-6 lg:justify-between" style=line_delay>
                            // Pill that grows from the left on load
                            <div
                                class="mld-pill-grow hidden h-14 origin-left rounded-full bg-gradient-to-r from-[#0a0e27] to-[#0000d8] lg:block lg:flex-1"
                                style=delay
                            ></div>
                            <p class="shrink-0 text-[40px] font-black leading-[1.04] tracking-tight text-[#0000d8] sm:text-[56px] lg:text-[78px]">
                                {*line}
                            </p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ToolsSection() -> impl IntoView {
    view! {
        <section class="-mx-4 space-y-10 bg-[#0a0e27] px-4 pb-6 pt-14 text-[#f8fafc] sm:-mx-8 sm:px-8 lg:-mx-12 lg:px-12">
            <div class="mx-auto max-w-6xl space-y-4">
                <h2 class="text-[36px] font-black leading-[1.05] sm:text-[52px] lg:text-[72px]">
                    "Record labels are working in a handful of "
                    <span class="text-[#0000d8]">"separate tools."</span>
                </h2>
                <p class="max-w-2xl text-[15px] leading-relaxed text-[#e5e7eb] sm:text-[17px]">
                    "Tools that were never built for labels."
                </p>
            </div>

            <div class="mx-auto mt-6 flex max-w-4xl items-center justify-center">
                <ToolsReveal tools=TOOLS />
            </div>

            <div class="mx-auto mt-4 max-w-4xl text-center">
                <h2 class="text-[30px] font-black leading-[1.08] sm:text-[42px] lg:text-[56px]">
                    "We recreated and connected all these tools into one "
                    <span class="text-[#0000d8]">"powerful platform."</span>
                </h2>
            </div>
        </section>
    }
}

#[component]
fn CapabilitiesSection() -> impl IntoView {
    let selector = RwSignal::new(CapabilitySelector::new(CAPABILITY_COLUMNS, CAPABILITY_CARDS));
    let selected = Memo::new(move |_| selector.get().selected());

    view! {
        <section class="relative left-1/2 w-screen -translate-x-1/2 bg-white px-4 py-20 text-[#0a0e27] sm:px-8 lg:px-12">
            <div class="mx-auto max-w-6xl space-y-16">
                <div class="grid gap-10 text-[13px] font-semibold uppercase tracking-[0.18em] text-[#0000d8] sm:grid-cols-3 sm:text-[12px] lg:text-[13px]">
                    {CAPABILITY_COLUMNS
                        .iter()
                        .enumerate()
                        .map(|(column_index, column)| {
                            let align = match column_index {
                                1 => "space-y-2 text-center",
                                2 => "space-y-2 text-right",
                                _ => "space-y-2",
                            };
                            view! {
                                <ul class=align>
                                    {column
                                        .iter()
                                        .map(|&capability| {
                                            view! { <CapabilityButton capability=capability selector=selector /> }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                        })
                        .collect_view()}
                </div>

                // Keyed on the selection so each change replays the sweep-in
                {move || {
                    let capability = selected.get();
                    let current = selector.get_untracked();
                    let primary = current.primary_card();
                    let secondary = current.secondary_card();
                    view! {
                        <div class="mt-4 flex flex-col items-start gap-8 md:flex-row">
                            <div class="relative h-64 w-full flex-1 overflow-hidden rounded-[32px] md:flex-[1.6]">
                                <div class="mld-sweep-left absolute inset-0 rounded-[32px] bg-gradient-to-b from-[#020617] via-[#020617] to-[#0000d8]/40 p-6 shadow-[0_40px_90px_rgba(0,0,0,0.45)]">
                                    <div class="absolute -top-14 left-10 h-40 w-40 rounded-full bg-[#0000d8]/40 blur-2xl"></div>
                                    <div class="relative z-10 flex h-full flex-col justify-end">
                                        <p class="text-[11px] uppercase tracking-[0.18em] text-[#93c5fd]">
                                            {capability}
                                        </p>
                                        <h3 class="mt-2 text-[24px] font-black text-white">
                                            {primary.map(|card| card.title)}
                                        </h3>
                                        <p class="mt-2 max-w-md text-[13px] text-[#dbeafe]">
                                            {primary.map(|card| card.subtitle)}
                                        </p>
                                    </div>
                                </div>
                            </div>
                            <div class="relative h-64 w-full flex-1 overflow-hidden rounded-[32px] md:flex-[1]">
                                <div class="mld-sweep-right absolute inset-0 rounded-[32px] bg-gradient-to-b from-[#020617] via-[#0000d8]/40 to-[#020617] p-6 shadow-[0_40px_90px_rgba(0,0,0,0.45)]">
                                    <div class="absolute -bottom-16 right-8 h-44 w-44 rounded-full bg-[#3b82f6]/30 blur-2xl"></div>
                                    <div class="relative z-10 flex h-full flex-col justify-end">
                                        <p class="text-[11px] uppercase tracking-[0.18em] text-[#bfdbfe]">
                                            "Connected module"
                                        </p>
                                        <h3 class="mt-2 text-[22px] font-black text-white">
                                            {secondary.map(|card| card.title)}
                                        </h3>
                                        <p class="mt-2 text-[13px] text-[#dbeafe]">
                                            {secondary.map(|card| card.subtitle)}
                                        </p>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                }}

                <PartnersSection />
            </div>
        </section>
    }
}

#[component]
fn CapabilityButton(capability: &'static str, selector: RwSignal<CapabilitySelector>) -> impl IntoView {
    let is_active = Signal::derive(move || selector.get().is_selected(capability));

    view! {
        <li>
            <button
                type="button"
                class=move || {
                    if is_active.get() {
                        "inline-flex items-center gap-2 border-b py-0.5 transition-all duration-300 border-[#0000d8] text-[#0000d8]"
                    } else {
                        "inline-flex items-center gap-2 border-b border-transparent py-0.5 transition-all duration-300 text-[#0000d8]/70 hover:text-[#0000d8]"
                    }
                }
                aria-pressed=move || is_active.get().to_string()
                on:click=move |_| {
                    selector.try_maybe_update(|selector| (selector.select(capability), ()));
                }
            >
                <span
                    class="h-1.5 w-1.5 rounded-full bg-[#0000d8] transition-all"
                    class=("opacity-100", move || is_active.get())
                    class=("opacity-0", move || !is_active.get())
                ></span>
                {capability}
            </button>
        </li>
    }
}

const PARTNER_CARD: &str = "h-56 flex-1 rounded-[32px] bg-gradient-to-b from-[#020617] via-[#0000d8]/40 to-[#020617] shadow-[0_40px_80px_rgba(0,0,0,0.45)]";

#[component]
fn PartnersSection() -> impl IntoView {
    view! {
        <div class="space-y-10 pt-8 text-center">
            <h2 class="text-[34px] font-black uppercase leading-[1.06] tracking-[0.26em] text-[#0000d8] sm:text-[42px] lg:text-[52px]">
                "Our partners"
            </h2>

            <div class="space-y-6">
                <div class="flex flex-col gap-6 sm:flex-row">
                    <div class=PARTNER_CARD></div>
                    <div class=PARTNER_CARD></div>
                    <div class=PARTNER_CARD></div>
                </div>

                <div class="flex flex-col gap-6 sm:flex-row">
                    <div class=PARTNER_CARD></div>
                    <div class=PARTNER_CARD></div>
                    <div class="flex flex-col gap-6 self-stretch sm:w-56">
                        <A
                            href="/login"
                            attr:class="flex h-56 items-center justify-center rounded-[32px] bg-gradient-to-b from-[#0000d8] via-[#1d4ed8] to-[#0000d8] text-center text-[13px] font-semibold uppercase tracking-[0.22em] text-white"
                        >
                            "Become partner today"
                        </A>
                    </div>
                </div>
            </div>
        </div>
    }
}
