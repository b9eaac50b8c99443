use leptos::prelude::*;

use crate::core::{ButtonAction, SitePage};
use crate::ui::common::AnimatedButton;
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::AnimatedSection;

/// Shown for any path outside the site map
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="pt-24">
            <AnimatedSection on_mount=true class="py-32 text-center">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <Icon name=icons::COMPASS class="w-16 h-16 text-accent-purple mx-auto mb-6"/>
                    <h1 class="text-4xl md:text-5xl font-bold text-foreground">"Page not found"</h1>
                    <p class="mt-4 text-lg text-muted-foreground max-w-xl mx-auto">
                        "This route isn't on our map. Head back and pick up the trail from the homepage."
                    </p>
                    <div class="mt-8">
                        <AnimatedButton action=ButtonAction::Navigate(SitePage::Home.path())>
                            "Back to Home"
                        </AnimatedButton>
                    </div>
                </div>
            </AnimatedSection>
        </div>
    }
}
