//! Site pages
//!
//! The transition stage renders pages by [`SitePage`]; the router only
//! decides which one is current.

mod about;
mod contact;
mod features;
mod home;
mod how_it_works;
mod not_found;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use features::FeaturesPage;
pub use home::HomePage;
pub use how_it_works::HowItWorksPage;
pub use not_found::NotFoundPage;

use leptos::prelude::*;

use crate::core::SitePage;
use crate::ui::reveal::AnimatedSection;

pub fn render_page(page: SitePage) -> AnyView {
    match page {
        SitePage::Home => view! { <HomePage/> }.into_any(),
        SitePage::Features => view! { <FeaturesPage/> }.into_any(),
        SitePage::HowItWorks => view! { <HowItWorksPage/> }.into_any(),
        SitePage::About => view! { <AboutPage/> }.into_any(),
        SitePage::Contact => view! { <ContactPage/> }.into_any(),
        SitePage::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}

/// Title band at the top of every inner page
#[component]
fn PageIntro(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <AnimatedSection class="py-16 text-center bg-secondary">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <h1 class="text-4xl md:text-5xl font-bold text-foreground">{title}</h1>
                <p class="mt-4 text-lg text-muted-foreground max-w-3xl mx-auto">{subtitle}</p>
            </div>
        </AnimatedSection>
    }
}
