//! Feature grid, headline stats and the dashboard preview

use leptos::prelude::*;

use crate::core::{DASHBOARD_PREVIEW_URL, FEATURE_GRID, STATS};
use crate::ui::icon::Icon;
use crate::ui::reveal::AnimatedSection;
use crate::ui::settings::use_motion_timings;

use super::PageIntro;

#[component]
pub fn FeaturesPage() -> impl IntoView {
    let timings = use_motion_timings();

    view! {
        <div class="pt-24">
            <PageIntro
                title="AI-Powered Supply Chain Intelligence"
                subtitle="Explore the full suite of tools designed to give you unparalleled visibility and control over your logistics network."
            />

            <div class="py-24">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {FEATURE_GRID
                            .iter()
                            .map(|feature| view! {
                                <AnimatedSection
                                    delay_ms=feature.reveal_delay(&timings)
                                    class="bg-background glowing-border card-lift rounded-lg p-6"
                                >
                                    <div class="flex items-center justify-center h-12 w-12 rounded-md bg-secondary mb-4">
                                        <Icon name=feature.icon class=format!("w-6 h-6 {}", feature.accent.text_class())/>
                                    </div>
                                    <h3 class="text-lg font-bold text-foreground">{feature.title}</h3>
                                    <p class="mt-2 text-sm text-muted-foreground">{feature.body}</p>
                                </AnimatedSection>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <AnimatedSection class="py-24 bg-secondary">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="grid md:grid-cols-3 gap-8 text-center">
                        {STATS
                            .iter()
                            .map(|stat| view! {
                                <div>
                                    <p class="text-5xl font-bold text-accent-blue">{stat.value}</p>
                                    <p class="mt-2 text-lg text-muted-foreground">{stat.label}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="py-24">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold text-foreground">"Your Central Command Center"</h2>
                    <p class="mt-4 text-lg text-muted-foreground max-w-3xl mx-auto">
                        "Combine all data streams into one intuitive, powerful dashboard. See the full picture, \
                         from global risk maps to individual shipment details."
                    </p>
                    <div class="mt-12 p-4 bg-secondary rounded-lg shadow-2xl glowing-border">
                        <img src=DASHBOARD_PREVIEW_URL alt="Mooj-Tech Dashboard" class="rounded-md mx-auto"/>
                    </div>
                </div>
            </AnimatedSection>
        </div>
    }
}
