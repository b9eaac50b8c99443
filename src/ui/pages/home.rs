//! Landing page: hero, partners, feature preview, value proposition,
//! testimonials and a closing call to action

use leptos::prelude::*;

use crate::core::mock_data::{page_rng, partner_names, testimonials};
use crate::core::{
    ButtonAction, ButtonSize, ButtonVariant, DASHBOARD_PREVIEW_URL, HOME_FEATURES, SitePage,
    VALUE_POINTS,
};
use crate::ui::common::AnimatedButton;
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::AnimatedSection;

const PAGE_SEED: u64 = 0x4d4f_4f4a;

/// Hero lines enter one after another once the page mounts
const HERO_DELAYS_MS: [f64; 3] = [200.0, 400.0, 600.0];

#[component]
pub fn HomePage() -> impl IntoView {
    let mut rng = page_rng(PAGE_SEED);
    let partners = partner_names(&mut rng, 6);
    let testimonials = testimonials(&mut rng, 3);

    view! {
        <div>
            // Hero
            <div class="relative pt-32 pb-20 lg:pt-48 lg:pb-32 overflow-hidden">
                <div class="absolute inset-0 animated-gradient-bg"></div>
                <div class="absolute inset-0 opacity-10 hero-pattern"></div>

                <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative">
                    <div class="max-w-3xl mx-auto text-center">
                        <AnimatedSection on_mount=true delay_ms=HERO_DELAYS_MS[0]>
                            <h1 class="text-4xl md:text-6xl font-bold text-foreground tracking-tighter">
                                "Predict & Mitigate Supply Chain Risks with AI"
                            </h1>
                        </AnimatedSection>
                        <AnimatedSection on_mount=true delay_ms=HERO_DELAYS_MS[1]>
                            <p class="mt-6 text-lg md:text-xl text-muted-foreground max-w-2xl mx-auto">
                                "Visualize global shipping data and proactively manage disruptions."
                            </p>
                        </AnimatedSection>
                        <AnimatedSection
                            on_mount=true
                            delay_ms=HERO_DELAYS_MS[2]
                            class="mt-10 flex flex-col sm:flex-row items-center justify-center gap-4"
                        >
                            <AnimatedButton action=ButtonAction::Navigate("#") size=ButtonSize::Large>
                                "View Dashboard"
                            </AnimatedButton>
                            <AnimatedButton
                                action=ButtonAction::Navigate(SitePage::Contact.path())
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Large
                            >
                                "Request Demo"
                            </AnimatedButton>
                        </AnimatedSection>
                    </div>
                </div>
            </div>

            // Partners
            <AnimatedSection class="py-16 bg-background">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <h3 class="text-center text-sm font-semibold text-muted-foreground tracking-wider uppercase">
                        "Trusted by leading logistics companies"
                    </h3>
                    <div class="mt-8 grid grid-cols-2 sm:grid-cols-3 md:grid-cols-6 gap-8 items-center">
                        {partners
                            .into_iter()
                            .map(|name| view! {
                                <div class="flex justify-center">
                                    <span class="text-muted-foreground font-medium text-lg text-center">{name}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </AnimatedSection>

            // Feature preview
            <AnimatedSection class="py-24">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center max-w-2xl mx-auto">
                        <h2 class="text-3xl md:text-4xl font-bold text-foreground">
                            "Supply Chain Intelligence at Scale"
                        </h2>
                        <p class="mt-4 text-lg text-muted-foreground">
                            "Unlock predictive insights and gain full control over your logistics network."
                        </p>
                    </div>
                    <div class="mt-16 grid md:grid-cols-3 gap-8">
                        {HOME_FEATURES
                            .iter()
                            .map(|feature| view! {
                                <div class="bg-background glowing-border card-lift rounded-lg p-8 text-center">
                                    <div class="flex justify-center items-center h-16 w-16 rounded-full bg-secondary mx-auto mb-6">
                                        <Icon name=feature.icon class=format!("w-8 h-8 {}", feature.accent.text_class())/>
                                    </div>
                                    <h3 class="text-xl font-bold text-foreground">{feature.title}</h3>
                                    <p class="mt-2 text-muted-foreground">{feature.body}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </AnimatedSection>

            // Value proposition
            <AnimatedSection class="py-24 bg-secondary">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="grid lg:grid-cols-2 gap-12 items-center">
                        <div>
                            <h2 class="text-3xl md:text-4xl font-bold text-foreground">"From Reactive to Proactive"</h2>
                            <p class="mt-4 text-lg text-muted-foreground">
                                "Stop fighting fires. Mooj-Tech gives you the foresight to prevent them. Our platform \
                                 analyzes millions of data points to provide a clear, actionable view of your supply \
                                 chain health."
                            </p>
                            <ul class="mt-8 space-y-4 text-muted-foreground">
                                {VALUE_POINTS
                                    .iter()
                                    .map(|point| view! {
                                        <li class="flex items-start">
                                            <Icon name=point.icon class="w-6 h-6 text-accent-blue mr-3 mt-1 flex-shrink-0"/>
                                            <span>{point.body}</span>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div class="bg-background p-4 rounded-lg shadow-2xl glowing-border card-grow">
                            <img src=DASHBOARD_PREVIEW_URL alt="Data Visualization Mock" class="rounded-md"/>
                        </div>
                    </div>
                </div>
            </AnimatedSection>

            // Testimonials
            <AnimatedSection class="py-24">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center max-w-2xl mx-auto">
                        <h2 class="text-3xl md:text-4xl font-bold text-foreground">
                            "Why Operations Leaders Love Mooj-Tech"
                        </h2>
                    </div>
                    <div class="mt-16 grid md:grid-cols-3 gap-8">
                        {testimonials
                            .into_iter()
                            .map(|t| view! {
                                <div class="bg-background glowing-border card-lift rounded-lg p-8 flex flex-col">
                                    <Icon name=icons::QUOTE class="w-6 h-6 text-accent-purple mb-4"/>
                                    <p class="text-muted-foreground flex-grow">{format!("\"{}\"", t.quote)}</p>
                                    <div class="mt-6 flex items-center">
                                        <img src=t.avatar_url alt=t.name.clone() class="w-12 h-12 rounded-full mr-4"/>
                                        <div>
                                            <p class="font-bold text-foreground">{t.name}</p>
                                            <p class="text-sm text-muted-foreground">
                                                {format!("{}, {}", t.title, t.company)}
                                            </p>
                                        </div>
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </AnimatedSection>

            // Call to action
            <AnimatedSection class="py-24 bg-secondary">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold text-foreground">
                        "Ready to Revolutionize Your Supply Chain?"
                    </h2>
                    <p class="mt-4 text-lg text-muted-foreground max-w-2xl mx-auto">
                        "Get a personalized demo and see how Mooj-Tech can bring predictability and resilience \
                         to your operations."
                    </p>
                    <div class="mt-8">
                        <AnimatedButton
                            action=ButtonAction::Navigate(SitePage::Contact.path())
                            size=ButtonSize::Large
                        >
                            "Request Enterprise Demo"
                            <Icon name=icons::ARROW_RIGHT class="w-5 h-5 ml-2"/>
                        </AnimatedButton>
                    </div>
                </div>
            </AnimatedSection>
        </div>
    }
}
