use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::core::SiteRoute;
use crate::ui::{
    AiPage, CookiesPage, HomePage, LoginPage, Navbar, NotFoundPage, PricingPage, PrivacyPage,
    SolutionsPage, TermsPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-[#0a0e27] antialiased">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/mylabeldesk.css"/>

        <Router>
            // Closes its menus on every navigation
            <Navbar />
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=StaticSegment(SiteRoute::Home.segment()) view=HomePage />
                <Route path=StaticSegment(SiteRoute::Pricing.segment()) view=PricingPage />
                <Route path=StaticSegment(SiteRoute::Solutions.segment()) view=SolutionsPage />
                <Route path=StaticSegment(SiteRoute::Ai.segment()) view=AiPage />
                <Route path=StaticSegment(SiteRoute::Login.segment()) view=LoginPage />
                <Route path=StaticSegment(SiteRoute::Privacy.segment()) view=PrivacyPage />
                <Route path=StaticSegment(SiteRoute::Terms.segment()) view=TermsPage />
                <Route path=StaticSegment(SiteRoute::Cookies.segment()) view=CookiesPage />
            </Routes>
        </Router>
    }
}
