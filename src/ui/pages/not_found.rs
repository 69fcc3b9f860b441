//! 404 page for anything outside the site routes

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::seo::PageMeta;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Let the server answer with a real 404 status
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <PageMeta
            title="Page not found"
            description="The page you're looking for doesn't exist or has been moved."
            path="/404"
        />

        <div class="flex min-h-screen flex-col items-center justify-center bg-[#0a0e27] px-4 text-center">
            <p class="mld-fade-up text-[14px] font-semibold uppercase tracking-[0.25em] text-[#93c5fd]">
                "Error 404"
            </p>
            <h1 class="mld-fade-up mt-4 text-[48px] font-black leading-[1.04] text-white sm:text-[72px]">
                "Page not " <span class="text-[#0000d8]">"found."</span>
            </h1>
            <p class="mld-fade-up mx-auto mt-6 max-w-md text-[17px] leading-relaxed text-[#bfdbfe]">
                "The page you're looking for doesn't exist or has been moved."
            </p>
            <div class="mld-fade-up mt-10 flex flex-col items-center gap-4 sm:flex-row">
                <A
                    href="/"
                    attr:class="inline-flex items-center rounded-full bg-[#0000d8] px-8 py-4 text-[14px] font-bold uppercase tracking-[0.2em] text-white transition-all hover:bg-[#1d4ed8]"
                >
                    "Go home"
                </A>
                <A
                    href="/solutions"
                    attr:class="inline-flex items-center rounded-full border border-[#1e293b] px-8 py-4 text-[14px] font-bold uppercase tracking-[0.2em] text-white transition-all hover:border-[#475569]"
                >
                    "Explore solutions"
                </A>
            </div>
        </div>
    }
}
