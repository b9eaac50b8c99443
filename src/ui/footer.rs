//! Site footer: brand, social links, link columns and copyright

use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::FOOTER_COLUMNS;
use crate::ui::icon::{Icon, icons};

const SOCIAL_LINKS: [(&str, &str); 3] = [
    (icons::TWITTER, "#"),
    (icons::LINKEDIN, "#"),
    (icons::GITHUB, "#"),
];

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="bg-secondary border-t border-border">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 lg:grid-cols-12 gap-8">
                    <div class="lg:col-span-4">
                        <A href="/" attr:class="flex items-center space-x-2 text-2xl font-bold text-foreground mb-4">
                            <Icon name=icons::BOT class="w-8 h-8 text-accent-blue"/>
                            <span>"Mooj-Tech"</span>
                        </A>
                        <p class="text-muted-foreground text-sm max-w-xs">
                            "AI-powered logistics & supply chain intelligence platform."
                        </p>
                        <div class="flex space-x-4 mt-6">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|(icon, href)| view! {
                                    <a
                                        href=*href
                                        class="text-muted-foreground hover:text-foreground transition-colors duration-300"
                                        aria-label=*icon
                                    >
                                        <Icon name=*icon class="w-5 h-5"/>
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="lg:col-span-8 grid grid-cols-2 md:grid-cols-3 gap-8">
                        {FOOTER_COLUMNS
                            .iter()
                            .map(|column| view! {
                                <div>
                                    <h3 class="text-sm font-semibold text-foreground tracking-wider uppercase">
                                        {column.title}
                                    </h3>
                                    <ul class="mt-4 space-y-3">
                                        {column
                                            .links
                                            .iter()
                                            .map(|link| view! {
                                                <li>
                                                    <a
                                                        href=link.href
                                                        class="text-base text-muted-foreground hover:text-foreground transition-colors duration-300"
                                                        aria-disabled=link.is_placeholder().then_some("true")
                                                    >
                                                        {link.name}
                                                    </a>
                                                </li>
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="mt-12 pt-8 border-t border-border text-center text-sm text-muted-foreground">
                    <p>{format!("© {} Mooj-Tech.com. All rights reserved.", year)}</p>
                </div>
            </div>
        </footer>
    }
}
