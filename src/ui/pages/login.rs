//! Login and sign-up form
//!
//! Presentational only: the submit and Google buttons do nothing.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::selection::AuthMode;
use crate::ui::common::FormField;
use crate::ui::seo::PageMeta;

const MODES: [AuthMode; 2] = [AuthMode::Login, AuthMode::SignUp];

#[component]
pub fn LoginPage() -> impl IntoView {
    let mode = RwSignal::new(AuthMode::default());

    view! {
        <PageMeta
            title="Login"
            description="Sign in to your MyLabelDesk workspace, or start a 14-day free trial."
            path="/login"
        />

        <div class="flex min-h-screen flex-col bg-[#0a0e27] lg:flex-row">
            <BrandPanel />

            <div class="flex flex-1 items-center justify-center px-6 py-32 lg:py-12">
                <div class="w-full max-w-md">
                    <div class="mld-fade-up mb-10 lg:hidden">
                        <A href="/" attr:class="text-[14px] font-black uppercase tracking-[0.3em] text-white">
                            "MYLABELDESK"
                        </A>
                    </div>

                    <div class="mld-fade-up flex gap-1 rounded-full bg-[#1e293b] p-1" role="tablist">
                        {MODES
                            .into_iter()
                            .map(|option| {
                                let is_active = move || mode.get() == option;
                                view! {
                                    <button
                                        type="button"
                                        role="tab"
                                        aria-selected=move || is_active().to_string()
                                        class=move || {
                                            if is_active() {
                                                "flex-1 rounded-full py-3 text-[13px] font-semibold uppercase tracking-[0.18em] transition-all bg-[#0000d8] text-white"
                                            } else {
                                                "flex-1 rounded-full py-3 text-[13px] font-semibold uppercase tracking-[0.18em] transition-all text-[#94a3b8]"
                                            }
                                        }
                                        on:click=move |_| {
                                            mode.try_set(option);
                                        }
                                    >
                                        {option.to_string()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <h1 class="mld-fade-up mt-10 text-[28px] font-black text-white sm:text-[32px]">
                        {move || mode.get().heading()}
                    </h1>
                    <p class="mld-fade-up mt-2 text-[15px] text-[#94a3b8]">
                        {move || mode.get().subtitle()}
                    </p>

                    <form class="mld-fade-up mt-8 space-y-4" on:submit=|ev| ev.prevent_default()>
                        <Show when=move || mode.get().asks_label_name()>
                            <FormField id="label-name" label="Label name" placeholder="Your label" />
                        </Show>
                        <FormField
                            id="email"
                            label="Email"
                            input_type="email"
                            placeholder="you@label.com"
                            autocomplete="email"
                        />
                        <FormField
                            id="password"
                            label="Password"
                            input_type="password"
                            placeholder="••••••••"
                            autocomplete="current-password"
                        />
                        <button
                            type="submit"
                            class="mt-4 w-full rounded-full bg-[#0000d8] py-4 text-[14px] font-bold uppercase tracking-[0.18em] text-white transition-all hover:bg-[#1d4ed8]"
                        >
                            {move || mode.get().submit_label()}
                        </button>
                    </form>

                    <div class="mld-fade-up mt-6 flex items-center gap-4">
                        <div class="h-px flex-1 bg-[#1e293b]"></div>
                        <span class="text-[12px] uppercase tracking-[0.14em] text-[#475569]">"or"</span>
                        <div class="h-px flex-1 bg-[#1e293b]"></div>
                    </div>

                    <button
                        type="button"
                        class="mld-fade-up mt-6 flex w-full items-center justify-center gap-3 rounded-full border border-[#1e293b] py-4 text-[14px] font-semibold text-white transition-all hover:border-[#475569]"
                    >
                        <GoogleMark />
                        "Continue with Google"
                    </button>

                    <div class="mld-fade-up mt-10 flex justify-center gap-6 text-[13px] text-[#475569] lg:hidden">
                        <A href="/privacy" attr:class="transition-colors hover:text-[#bfdbfe]">"Privacy"</A>
                        <A href="/terms" attr:class="transition-colors hover:text-[#bfdbfe]">"Terms"</A>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Left-hand branding column, desktop only
#[component]
fn BrandPanel() -> impl IntoView {
    view! {
        <div class="relative hidden flex-1 flex-col justify-between overflow-hidden p-12 lg:flex xl:p-16">
            <div class="pointer-events-none absolute -bottom-32 -left-32 h-80 w-80 rounded-full bg-[#0000d8]/30 blur-[100px]"></div>
            <div class="pointer-events-none absolute right-10 top-1/3 h-48 w-48 rounded-full bg-[#1d4ed8]/20 blur-[80px]"></div>

            <div class="relative z-10 pt-24">
                <A href="/" attr:class="text-[14px] font-black uppercase tracking-[0.3em] text-white">
                    "MYLABELDESK"
                </A>
            </div>

            <div class="relative z-10 space-y-6">
                <h2 class="text-[36px] font-black leading-[1.08] text-white xl:text-[48px]">
                    "The operating system for " <span class="text-[#93c5fd]">"record labels."</span>
                </h2>
                <p class="max-w-md text-[17px] leading-relaxed text-[#bfdbfe]">
                    "Join hundreds of labels managing their entire workflow from one connected platform."
                </p>
            </div>

            <div class="relative z-10 flex items-center gap-6 text-[13px] text-[#64748b]">
                <A href="/privacy" attr:class="transition-colors hover:text-[#bfdbfe]">"Privacy"</A>
                <A href="/terms" attr:class="transition-colors hover:text-[#bfdbfe]">"Terms"</A>
            </div>
        </div>
    }
}

#[component]
fn GoogleMark() -> impl IntoView {
    view! {
        <svg class="h-5 w-5" viewBox="0 0 24 24" aria-hidden="true">
            <path fill="#4285F4" d="M22.56 12.25c0-.78-.07-1.53-.2-2.25H12v4.26h5.92a5.06 5.06 0 01-2.2 3.32v2.77h3.57c2.08-1.92 3.28-4.74 3.28-8.1z" />
            <path fill="#34A853" d="M12 23c2.97 0 5.46-.98 7.28-2.66l-3.57-2.77c-.98.66-2.23 1.06-3.71 1.06-2.86 0-5.29-1.93-6.16-4.53H2.18v2.84C3.99 20.53 7.7 23 12 23z" />
            <path fill="#FBBC05" d="M5.84 14.09c-.22-.66-.35-1.36-.35-2.09s.13-1.43.35-2.09V7.07H2.18C1.43 8.55 1 10.22 1 12s.43 3.45 1.18 4.93l2.85-2.22.81-.62z" />
            <path fill="#EA4335" d="M12 5.38c1.62 0 3.06.56 4.21 1.64l3.15-3.15C17.45 2.09 14.97 1 12 1 7.7 1 3.99 3.47 2.18 7.07l3.66 2.84c.87-2.6 3.3-4.53 6.16-4.53z" />
        </svg>
    }
}
