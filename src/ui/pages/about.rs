//! Mission, story, values and the team

use leptos::prelude::*;

use crate::core::mock_data::{page_rng, team_members};
use crate::core::{ButtonAction, ButtonVariant, SitePage, TEAM_PHOTO_URL, VALUES, stagger_delay};
use crate::ui::common::AnimatedButton;
use crate::ui::icon::Icon;
use crate::ui::reveal::AnimatedSection;
use crate::ui::settings::use_motion_timings;

use super::PageIntro;

const PAGE_SEED: u64 = 0x5445_414d;
const TEAM_SIZE: usize = 4;

#[component]
pub fn AboutPage() -> impl IntoView {
    let timings = use_motion_timings();
    let mut rng = page_rng(PAGE_SEED);
    let team = team_members(&mut rng, TEAM_SIZE);

    view! {
        <div class="pt-24">
            <PageIntro
                title="Our Mission: Strengthen Global Supply Chains with AI"
                subtitle="We are a team of technologists, data scientists, and logistics experts dedicated to building a more resilient and predictable future for global trade."
            />

            <AnimatedSection class="py-24">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="grid lg:grid-cols-2 gap-16 items-center">
                        <div>
                            <h2 class="text-3xl font-bold text-foreground">"Forged in Logistics, Powered by AI"</h2>
                            <p class="mt-4 text-muted-foreground">
                                "Mooj-Tech was born from firsthand experience with the chaos of modern supply chains. \
                                 Our founders, veterans of both the logistics and tech industries, saw an opportunity \
                                 to replace guesswork with data-driven certainty."
                            </p>
                            <p class="mt-4 text-muted-foreground">
                                "We started with a simple question: What if we could see disruptions before they \
                                 happen? Today, our platform answers that question for companies around the world, \
                                 turning complex data into a clear competitive advantage."
                            </p>
                        </div>
                        <div>
                            <img src=TEAM_PHOTO_URL alt="Team working" class="rounded-lg shadow-2xl"/>
                        </div>
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="py-24 bg-secondary">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center max-w-2xl mx-auto">
                        <h2 class="text-3xl md:text-4xl font-bold text-foreground">"Our Core Values"</h2>
                    </div>
                    <div class="mt-16 grid md:grid-cols-3 gap-8">
                        {VALUES
                            .iter()
                            .map(|value| view! {
                                <div class="text-center">
                                    <div class="flex justify-center items-center h-16 w-16 rounded-full bg-background mx-auto mb-6 glowing-border">
                                        <Icon name=value.icon class=format!("w-8 h-8 {}", value.accent.text_class())/>
                                    </div>
                                    <h3 class="text-xl font-bold text-foreground">{value.title}</h3>
                                    <p class="mt-2 text-muted-foreground">{value.body}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </AnimatedSection>

            <div class="py-24">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <AnimatedSection class="text-center max-w-2xl mx-auto">
                        <h2 class="text-3xl md:text-4xl font-bold text-foreground">"Meet the Innovators"</h2>
                    </AnimatedSection>
                    <div class="mt-16 grid sm:grid-cols-2 lg:grid-cols-4 gap-8">
                        {team
                            .into_iter()
                            .enumerate()
                            .map(|(index, member)| view! {
                                <AnimatedSection delay_ms=stagger_delay(index, &timings) class="text-center">
                                    <img
                                        src=member.avatar_url
                                        alt=member.name.clone()
                                        class="w-32 h-32 rounded-full mx-auto mb-4 shadow-lg"
                                    />
                                    <h3 class="text-lg font-bold text-foreground">{member.name}</h3>
                                    <p class="text-accent-blue">{member.title}</p>
                                </AnimatedSection>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <AnimatedSection class="py-24 bg-secondary">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold text-foreground">"Join Our Mission"</h2>
                    <p class="mt-4 text-lg text-muted-foreground max-w-2xl mx-auto">
                        "We're looking for partners and clients who share our vision for a smarter, more \
                         resilient global supply chain."
                    </p>
                    <div class="mt-8 flex flex-col sm:flex-row items-center justify-center gap-4">
                        <AnimatedButton action=ButtonAction::Navigate("#") variant=ButtonVariant::Secondary>
                            "Join as a Partner"
                        </AnimatedButton>
                        <AnimatedButton action=ButtonAction::Navigate(SitePage::Contact.path())>
                            "Request Enterprise Demo"
                        </AnimatedButton>
                    </div>
                </div>
            </AnimatedSection>
        </div>
    }
}
