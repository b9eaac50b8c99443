//! Four-step walkthrough and the mock live risk feed

use leptos::prelude::*;

use crate::core::{RISK_FEED_LENGTH, STEPS};
use crate::core::mock_data::{page_rng, risk_feed};
use crate::ui::icon::Icon;
use crate::ui::reveal::AnimatedSection;
use crate::ui::settings::use_motion_timings;

use super::PageIntro;

const PAGE_SEED: u64 = 0x5354_4550;

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    let timings = use_motion_timings();

    view! {
        <div class="pt-24">
            <PageIntro
                title="How Mooj-Tech Predicts Supply Chain Risks"
                subtitle="From raw data to actionable insights in four simple steps. Our platform is designed for seamless integration and immediate value."
            />

            <div class="py-24">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="relative">
                        <div
                            class="hidden lg:block absolute top-1/2 left-0 w-full h-0.5 bg-border -translate-y-1/2"
                            aria-hidden="true"
                        ></div>
                        <div class="relative grid lg:grid-cols-4 gap-12">
                            {STEPS
                                .iter()
                                .enumerate()
                                .map(|(index, step)| view! {
                                    <AnimatedSection delay_ms=step.reveal_delay(&timings) class="text-center">
                                        <div class="relative flex justify-center items-center mb-6">
                                            <div class="h-24 w-24 rounded-full bg-secondary flex items-center justify-center glowing-border">
                                                <Icon name=step.icon class=format!("w-10 h-10 {}", step.accent.text_class())/>
                                            </div>
                                            <span class="absolute -top-2 -right-2 flex items-center justify-center h-8 w-8 rounded-full bg-primary text-background font-bold">
                                                {index + 1}
                                            </span>
                                        </div>
                                        <h3 class="text-xl font-bold text-foreground">{step.title}</h3>
                                        <p class="mt-2 text-muted-foreground">{step.body}</p>
                                    </AnimatedSection>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>

            <AnimatedSection class="py-24 bg-secondary">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="grid lg:grid-cols-2 gap-12 items-center">
                        <div>
                            <h2 class="text-3xl md:text-4xl font-bold text-foreground">"See It in Action"</h2>
                            <p class="mt-4 text-lg text-muted-foreground">
                                "Our real-time feed provides instant updates on route risk scores, allowing your \
                                 team to react immediately to changing conditions. This is just a glimpse of the \
                                 data you'll have at your fingertips."
                            </p>
                        </div>
                        <RiskFeed/>
                    </div>
                </div>
            </AnimatedSection>
        </div>
    }
}

/// Static snapshot of route risk scores styled as a live feed
#[component]
fn RiskFeed() -> impl IntoView {
    let mut rng = page_rng(PAGE_SEED);
    let updates = risk_feed(&mut rng, RISK_FEED_LENGTH);

    view! {
        <div class="bg-background rounded-lg p-6 shadow-2xl glowing-border">
            <div class="flex justify-between items-center mb-4">
                <h3 class="font-bold text-lg text-foreground">"Live Risk Feed"</h3>
                <div class="flex items-center space-x-2">
                    <span class="h-3 w-3 bg-green-500 rounded-full animate-pulse"></span>
                    <span class="text-sm text-green-500">"Connected"</span>
                </div>
            </div>
            <ul class="space-y-3">
                {updates
                    .into_iter()
                    .map(|update| {
                        let class = format!("font-bold {}", update.severity_class());
                        view! {
                            <li class="flex justify-between items-center bg-secondary p-3 rounded-md text-sm">
                                <span class="text-muted-foreground">
                                    "Risk score for "
                                    <span class="font-semibold text-foreground">{update.route}</span>
                                    " updated to "
                                    <span class=class>{format!("{:.1}/10", update.score)}</span>
                                </span>
                                <span class="text-xs text-muted-foreground/50">"Just now"</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
