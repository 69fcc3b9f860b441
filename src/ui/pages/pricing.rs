use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{PRICING_FAQS, PRICING_PLANS, PricingPlan};
use crate::core::selection::{Accordion, BillingPeriod, price_label};
use crate::ui::common::PageIntro;
use crate::ui::footer::Footer;
use crate::ui::seo::PageMeta;

#[component]
pub fn PricingPage() -> impl IntoView {
    let period = RwSignal::new(BillingPeriod::Monthly);

    view! {
        <PageMeta
            title="Pricing"
            description="Simple, transparent pricing for record labels. Start small, scale as you grow. Every plan includes a 14-day free trial."
            path="/pricing"
        />

        <div class="min-h-screen bg-[#0a0e27] text-[#0a0e27]">
            <PageIntro
                eyebrow="Pricing"
                title="Simple, transparent"
                accent="pricing."
                lead="Start small, scale as you grow. Every plan includes a 14-day free trial."
            >
                <BillingToggle period=period />
            </PageIntro>

            <section class="bg-white px-4 pb-24 sm:px-8 lg:px-12">
                <div class="mx-auto max-w-6xl">
                    <div class="grid gap-8 pt-4 sm:grid-cols-2 lg:grid-cols-3">
                        {PRICING_PLANS
                            .iter()
                            .enumerate()
                            .map(|(index, plan)| view! { <PricingCard plan=plan index=index period=period /> })
                            .collect_view()}
                    </div>

                    <FaqSection />
                </div>
                <Footer />
            </section>
        </div>
    }
}

#[component]
fn BillingToggle(period: RwSignal<BillingPeriod>) -> impl IntoView {
    let is_annual = move || period.get().is_annual();
    let label_class = move |active: bool| {
        if active {
            "text-[14px] font-semibold text-[#0a0e27]"
        } else {
            "text-[14px] font-semibold text-[#94a3b8]"
        }
    };

    view! {
        <div class="mld-fade-up mt-10 flex items-center justify-center gap-4">
            <span class=move || label_class(!is_annual())>"Monthly"</span>
            <button
                type="button"
                class="relative h-8 w-14 rounded-full bg-[#e2e8f0] transition-colors"
                role="switch"
                aria-label="Toggle annual billing"
                aria-checked=move || is_annual().to_string()
                on:click=move |_| {
                    period.try_update(|period| *period = period.toggle());
                }
            >
                <div
                    class="absolute top-1 h-6 w-6 rounded-full bg-[#0000d8] transition-transform duration-200"
                    style=move || {
                        format!("left: 0; transform: translateX({}px);", if is_annual() { 24 } else { 2 })
                    }
                ></div>
            </button>
            <span class=move || label_class(is_annual())>
                "Annual " <span class="text-[#0000d8]">"(-20%)"</span>
            </span>
        </div>
    }
}

/// Pricing card component
#[component]
fn PricingCard(
    plan: &'static PricingPlan,
    index: usize,
    period: RwSignal<BillingPeriod>,
) -> impl IntoView {
    let highlighted = plan.highlighted;
    let card_class = if highlighted {
        "mld-fade-up relative overflow-hidden rounded-[28px] p-8 transition-all sm:p-10 border-2 border-[#0000d8] bg-gradient-to-b from-[#020617] to-[#0a0e27] text-white shadow-[0_30px_80px_rgba(0,0,216,0.25)]"
    } else {
        "mld-fade-up relative overflow-hidden rounded-[28px] p-8 transition-all sm:p-10 border border-[#e2e8f0] bg-white"
    };
    let (name_class, price_class, muted_class, feature_class, check_class, cta_class) = if highlighted {
        (
            "text-[13px] font-semibold uppercase tracking-[0.2em] text-[#93c5fd]",
            "text-[48px] font-black leading-none text-white",
            "text-[#bfdbfe]",
            "flex items-center gap-3 text-[14px] text-[#e2e8f0]",
            "h-4 w-4 shrink-0 text-[#93c5fd]",
            "mt-10 block w-full rounded-full py-4 text-center text-[14px] font-bold uppercase tracking-[0.18em] transition-all bg-white text-[#0000d8] hover:bg-[#f1f5f9]",
        )
    } else {
        (
            "text-[13px] font-semibold uppercase tracking-[0.2em] text-[#0000d8]",
            "text-[48px] font-black leading-none text-[#0a0e27]",
            "text-[#64748b]",
            "flex items-center gap-3 text-[14px] text-[#475569]",
            "h-4 w-4 shrink-0 text-[#0000d8]",
            "mt-10 block w-full rounded-full py-4 text-center text-[14px] font-bold uppercase tracking-[0.18em] transition-all bg-[#0000d8] text-white hover:bg-[#1d4ed8]",
        )
    };

    view! {
        <div
            id=plan.id
            class=card_class
            style=format!("animation-delay: {}ms;", 100 + index * 100)
        >
            {highlighted.then(|| view! {
                <div class="pointer-events-none absolute -top-20 right-0 h-48 w-48 rounded-full bg-[#0000d8]/30 blur-3xl"></div>
            })}
            <p class=name_class>{plan.name}</p>
            <div class="mt-4 flex items-baseline gap-1">
                <span class=price_class>{move || price_label(plan, period.get())}</span>
                {(!plan.period.is_empty()).then(|| view! {
                    <span class=format!("text-[16px] {muted_class}")>{plan.period}</span>
                })}
            </div>
            <p class=format!("mt-3 text-[15px] {muted_class}")>{plan.description}</p>

            <ul class="mt-8 space-y-3">
                {plan
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class=feature_class>
                                <svg class=check_class viewBox="0 0 16 16" fill="none">
                                    <path d="M3 8.5l3.5 3.5L13 4" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
                                </svg>
                                {*feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <A href="/login" attr:class=cta_class>
                {plan.cta}
            </A>
        </div>
    }
}

/// FAQ section component
#[component]
fn FaqSection() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::default());

    view! {
        <div class="mx-auto mt-24 max-w-3xl">
            <h2 class="text-center text-[28px] font-black text-[#0a0e27] sm:text-[36px]">
                "Frequently asked questions"
            </h2>
            <div class="mt-12 space-y-4">
                {PRICING_FAQS
                    .iter()
                    .enumerate()
                    .map(|(index, faq)| {
                        view! {
                            <FaqItem
                                index=index
                                question=faq.question
                                answer=faq.answer
                                accordion=accordion
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// FAQ accordion item component
#[component]
fn FaqItem(
    index: usize,
    question: &'static str,
    answer: &'static str,
    accordion: RwSignal<Accordion>,
) -> impl IntoView {
    let is_open = Signal::derive(move || accordion.get().is_open(index));

    view! {
        <div class="overflow-hidden rounded-2xl border border-[#e2e8f0] transition-all">
            <button
                type="button"
                class="flex w-full items-center justify-between px-6 py-5 text-left text-[16px] font-semibold text-[#0a0e27]"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| {
                    accordion.try_update(|accordion| accordion.toggle(index));
                }
            >
                {question}
                <svg
                    class="h-5 w-5 shrink-0 text-[#0000d8] transition-transform duration-200"
                    class=("rotate-45", move || is_open.get())
                    viewBox="0 0 20 20"
                    fill="none"
                >
                    <path d="M10 4v12M4 10h12" stroke="currentColor" stroke-width="2" stroke-linecap="round" />
                </svg>
            </button>
            <div
                class="overflow-hidden transition-all duration-300"
                class:max-h-0=move || !is_open.get()
                class:opacity-0=move || !is_open.get()
                class:max-h-96=move || is_open.get()
                class:opacity-100=move || is_open.get()
            >
                <p class="px-6 pb-5 text-[15px] leading-relaxed text-[#64748b]">{answer}</p>
            </div>
        </div>
    }
}
