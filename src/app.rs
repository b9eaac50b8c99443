use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::SitePage;
use crate::ui::settings::use_site_settings;
use crate::ui::{
    PageMeta, SettingsScript, SiteFooter, SiteHeader, TransitionStage, provide_reveal_context,
    provide_site_settings,
};

/// Document shell; the server provides [`crate::core::SiteSettings`] as context
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let settings = use_site_settings();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/icons/bot.svg"/>
                <SettingsScript settings=settings/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-background text-foreground antialiased">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_site_settings();
    provide_reveal_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/mooj_tech.css"/>

        <Router>
            <div class="flex flex-col min-h-screen">
                <SiteHeader/>
                <main class="flex-grow">
                    // Pages are drawn by the stage so outgoing views can animate out;
                    // the routes only manage the document head
                    <TransitionStage/>
                    <Routes fallback=|| view! { <PageMeta page=SitePage::NotFound/> }>
                        <Route path=path!("/") view=|| view! { <PageMeta page=SitePage::Home/> }/>
                        <Route path=path!("/features") view=|| view! { <PageMeta page=SitePage::Features/> }/>
                        <Route path=path!("/how-it-works") view=|| view! { <PageMeta page=SitePage::HowItWorks/> }/>
                        <Route path=path!("/about") view=|| view! { <PageMeta page=SitePage::About/> }/>
                        <Route path=path!("/contact") view=|| view! { <PageMeta page=SitePage::Contact/> }/>
                    </Routes>
                </main>
                <SiteFooter/>
            </div>
        </Router>
    }
}
