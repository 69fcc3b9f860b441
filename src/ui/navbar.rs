//! Site header with hover mega-menus and the full-screen mobile menu

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::core::content::{NAV_ITEMS, NavItem, NavLink, NavMenuSection};
use crate::core::{NavState, resolve};
use crate::ui::dom::set_body_scroll_locked;

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::Closed);
    let pathname = use_location().pathname;

    // Any navigation closes whatever is open
    Effect::new(move |_| {
        pathname.track();
        nav.try_update(|state| *state = state.close());
    });

    Effect::new(move |_| {
        set_body_scroll_locked(nav.get().locks_scroll());
    });
    on_cleanup(|| set_body_scroll_locked(false));

    let close = move || {
        nav.try_update(|state| *state = state.close());
    };

    view! {
        <Show when=move || nav.get().is_mobile_open()>
            <MobileMenu on_close=Callback::new(move |_| close()) />
        </Show>

        <div
            class="fixed left-1/2 top-5 z-50 w-[calc(100%-2rem)] max-w-6xl -translate-x-1/2 sm:w-[calc(100%-4rem)] lg:w-[calc(100%-6rem)]"
            on:mouseleave=move |_| {
                nav.try_update(|state| *state = state.leave());
            }
        >
            <header class="flex items-center justify-between gap-5 rounded-full bg-[#0a0e27] px-5 py-4 text-[14px] font-semibold uppercase tracking-[0.2em] text-[#f8fafc] sm:px-12 sm:py-6 sm:text-[15px]">
                <A href="/" attr:class="flex items-center gap-2">
                    <span class="text-[12px] font-black tracking-[0.3em] sm:text-[14px]">
                        "MYLABELDESK"
                    </span>
                </A>

                <button
                    type="button"
                    class="flex h-8 w-8 flex-col items-center justify-center gap-[5px] sm:hidden"
                    aria-label="Open menu"
                    aria-expanded=move || nav.get().is_mobile_open().to_string()
                    on:click=move |_| {
                        nav.try_update(|state| *state = state.open_mobile());
                    }
                >
                    <span class="block h-[2px] w-5 bg-white"></span>
                    <span class="block h-[2px] w-5 bg-white"></span>
                    <span class="block h-[2px] w-5 bg-white"></span>
                </button>

                <nav class="hidden items-center gap-7 text-[14px] tracking-[0.18em] sm:flex">
                    {NAV_ITEMS
                        .iter()
                        .map(|&item| view! { <DesktopNavLink item=item nav=nav /> })
                        .collect_view()}
                </nav>
            </header>

            {move || {
                nav.get()
                    .active_menu()
                    .map(|menu| view! { <MegaMenu menu=menu on_navigate=Callback::new(move |_| close()) /> })
            }}
        </div>
    }
}

/// Whether `href` points at the current location
fn use_is_current(href: &'static str) -> Signal<bool> {
    let location = use_location();
    let (pathname, hash) = (location.pathname, location.hash);
    let target = resolve(href);
    Signal::derive(move || {
        target.is_some_and(|target| target.is_current(&pathname.get(), &hash.get()))
    })
}

#[component]
fn DesktopNavLink(item: NavItem, nav: RwSignal<NavState>) -> impl IntoView {
    let is_hovered = Signal::derive(move || nav.get().active_item() == Some(item));
    let is_current = use_is_current(item.href());

    view! {
        <span
            class="relative"
            on:mouseenter=move |_| {
                nav.try_update(|state| *state = state.hover(item));
            }
        >
            <A
                href=item.href()
                attr:class=move || {
                    if is_hovered.get() || is_current.get() {
                        "transition-colors text-[#818cf8]"
                    } else {
                        "transition-colors hover:text-[#6366f1]"
                    }
                }
            >
                {item.to_string()}
            </A>
            <span
                class="absolute -bottom-1 left-0 h-px bg-[#818cf8] transition-all duration-300"
                class=("w-full", move || is_hovered.get())
                class=("opacity-100", move || is_hovered.get())
                class=("w-0", move || !is_hovered.get())
                class=("opacity-0", move || !is_hovered.get())
            ></span>
        </span>
    }
}

#[component]
fn MegaMenu(menu: &'static NavMenuSection, on_navigate: Callback<()>) -> impl IntoView {
    view! {
        <div class="mt-3 hidden sm:block mld-menu-enter">
            <div class="relative overflow-hidden rounded-[32px] border border-[#1e2a7a] bg-[#0a0e27] p-10 shadow-[0_35px_90px_rgba(2,6,23,0.65)]">
                <div class="pointer-events-none absolute -top-20 left-10 h-52 w-52 rounded-full bg-[#0000d8]/35 blur-3xl"></div>
                <div class="pointer-events-none absolute -bottom-16 right-10 h-56 w-56 rounded-full bg-[#1d4ed8]/30 blur-3xl"></div>

                <div class="relative z-10 grid grid-cols-[1.1fr_1.9fr] gap-12">
                    <div class="space-y-5">
                        <p class="text-[14px] font-semibold uppercase tracking-[0.25em] text-[#93c5fd]">
                            {menu.eyebrow}
                        </p>
                        <h3 class="text-[36px] font-black leading-[1.06] tracking-tight text-white">
                            {menu.title}
                        </h3>
                        <p class="max-w-md text-[17px] normal-case leading-relaxed tracking-normal text-[#bfdbfe]">
                            {menu.description}
                        </p>
                        <A
                            href=menu.cta.href
                            attr:class="mt-3 inline-flex items-center rounded-full bg-[#0000d8] px-6 py-3 text-[14px] font-semibold uppercase tracking-[0.2em] text-white transition-all hover:bg-[#1d4ed8]"
                            on:click=move |_| on_navigate.run(())
                        >
                            {menu.cta.label}
                        </A>
                    </div>

                    <div class="grid grid-cols-3 gap-8">
                        {menu
                            .columns
                            .iter()
                            .map(|column| {
                                view! {
                                    <div class="rounded-2xl border border-[#1e293b] bg-[#020617]/50 p-5">
                                        <p class="text-[14px] font-semibold uppercase tracking-[0.22em] text-[#7dd3fc]">
                                            {column.title}
                                        </p>
                                        <ul class="mt-4 space-y-3">
                                            {column
                                                .links
                                                .iter()
                                                .map(|&link| {
                                                    view! {
                                                        <li>
                                                            <MenuLink link=link on_navigate=on_navigate />
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MenuLink(link: NavLink, on_navigate: Callback<()>) -> impl IntoView {
    let is_current = use_is_current(link.href);

    view! {
        <A
            href=link.href
            attr:class=move || {
                if is_current.get() {
                    "text-left text-[15px] normal-case tracking-normal transition-colors text-[#93c5fd]"
                } else {
                    "text-left text-[15px] normal-case tracking-normal transition-colors text-[#e2e8f0] hover:text-[#93c5fd]"
                }
            }
            on:click=move |_| on_navigate.run(())
        >
            {link.label}
        </A>
    }
}

#[component]
fn MobileMenu(on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-[60] flex flex-col items-center justify-center bg-[#0a0e27] sm:hidden mld-fade-in">
            <button
                type="button"
                class="absolute right-6 top-8 flex h-8 w-8 items-center justify-center"
                aria-label="Close menu"
                on:click=move |_| on_close.run(())
            >
                <svg width="18" height="18" viewBox="0 0 18 18" fill="none" stroke="white" stroke-width="2" stroke-linecap="round">
                    <path d="M1 1l16 16M17 1L1 17" />
                </svg>
            </button>

            <nav class="flex flex-col items-center gap-8">
                {NAV_ITEMS
                    .iter()
                    .enumerate()
                    .map(|(index, &item)| {
                        let is_current = use_is_current(item.href());
                        view! {
                            <div
                                class="mld-fade-up"
                                style=format!("animation-delay: {}ms;", index * 80)
                            >
                                <A
                                    href=item.href()
                                    on:click=move |_| on_close.run(())
                                    attr:class=move || {
                                        if is_current.get() {
                                            "text-[20px] font-bold uppercase tracking-[0.25em] transition-colors hover:text-[#818cf8] text-[#818cf8]"
                                        } else {
                                            "text-[20px] font-bold uppercase tracking-[0.25em] transition-colors hover:text-[#818cf8] text-white"
                                        }
                                    }
                                >
                                    {item.to_string()}
                                </A>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
