use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{SOLUTIONS, Solution};
use crate::core::selection::{CategoryFilter, categories};
use crate::ui::common::{PageIntro, PillTabs, TabItem};
use crate::ui::footer::Footer;
use crate::ui::seo::PageMeta;

/// Pill id standing for "no filter"
const ALL: &str = "all";

/// Delay between cards of the filtered grid, in milliseconds
const CARD_STAGGER_MS: usize = 60;

#[component]
pub fn SolutionsPage() -> impl IntoView {
    let filter = RwSignal::new(CategoryFilter::default());

    let tabs: Vec<TabItem> = std::iter::once(TabItem::new(ALL, "All"))
        .chain(categories(SOLUTIONS).into_iter().map(|category| TabItem::new(category, category)))
        .collect();
    let active = Signal::derive(move || filter.get().selected().unwrap_or(ALL));
    let on_change = Callback::new(move |id: &'static str| {
        let category = (id != ALL).then_some(id);
        filter.try_update(|filter| filter.select(category));
    });

    view! {
        <PageMeta
            title="Solutions"
            description="From scouting artists to shipping releases, MyLabelDesk replaces the patchwork of tools with one connected operating system."
            path="/solutions"
        />

        <div class="min-h-screen bg-[#0a0e27] text-[#0a0e27]">
            <PageIntro
                eyebrow="Platform"
                title="Every tool a label needs."
                accent="One platform."
                lead="From scouting artists to shipping releases, MyLabelDesk replaces the patchwork of tools with one connected operating system."
                centered=false
            />

            <section class="bg-white px-4 pb-24 sm:px-8 lg:px-12">
                <div class="mx-auto max-w-6xl">
                    <PillTabs tabs=tabs active=active on_change=on_change class="pb-12 pt-4" />

                    // Rebuilt on every filter change so the cards stagger in again
                    {move || {
                        let visible = filter.get().apply(SOLUTIONS);
                        view! {
                            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                                {visible
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, solution)| {
                                        view! { <SolutionCard solution=solution index=index /> }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    }}

                    <div class="mld-fade-up mt-20 flex flex-col items-center gap-6 rounded-[32px] bg-gradient-to-b from-[#020617] to-[#0000d8]/60 px-8 py-16 text-center shadow-[0_40px_90px_rgba(0,0,0,0.4)]">
                        <h2 class="text-[28px] font-black text-white sm:text-[40px]">
                            "Ready to unify your label?"
                        </h2>
                        <p class="max-w-lg text-[16px] text-[#bfdbfe] sm:text-[18px]">
                            "See how MyLabelDesk connects every workflow into one powerful platform."
                        </p>
                        <A
                            href="/login"
                            attr:class="mt-2 inline-flex items-center rounded-full bg-white px-8 py-4 text-[14px] font-bold uppercase tracking-[0.2em] text-[#0000d8] transition-all hover:bg-[#f1f5f9]"
                        >
                            "Get started"
                        </A>
                    </div>
                </div>
                <Footer />
            </section>
        </div>
    }
}

#[component]
fn SolutionCard(solution: &'static Solution, index: usize) -> impl IntoView {
    view! {
        <div
            id=solution.id
            class="mld-fade-up group relative overflow-hidden rounded-[24px] border border-[#e2e8f0] bg-white p-8 transition-all duration-300 hover:border-[#0000d8]/30 hover:shadow-[0_20px_60px_rgba(0,0,216,0.12)]"
            style=format!("animation-delay: {}ms;", index * CARD_STAGGER_MS)
        >
            <p class="text-[12px] font-semibold uppercase tracking-[0.2em] text-[#0000d8]/60">
                {solution.category}
            </p>
            <h3 class="mt-3 text-[22px] font-black text-[#0a0e27]">{solution.title}</h3>
            <p class="mt-2 text-[15px] leading-relaxed text-[#64748b]">{solution.description}</p>
            <ul class="mt-5 space-y-2">
                {solution
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="flex items-center gap-2.5 text-[14px] text-[#475569]">
                                <span class="h-1.5 w-1.5 shrink-0 rounded-full bg-[#0000d8]"></span>
                                {*feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="pointer-events-none absolute -bottom-20 -right-20 h-40 w-40 rounded-full bg-[#0000d8]/5 transition-all duration-500 group-hover:bg-[#0000d8]/10"></div>
        </div>
    }
}
