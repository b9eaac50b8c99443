//! Contact form, channel cards and the assistant teaser

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::core::{
    ButtonAction, ButtonSize, ButtonVariant, CONTACT_CHANNELS, ContactField, ContactFormState,
    ContactSubmitter, MockSubmitter, SubmissionStatus,
};
use crate::ui::common::{AnimatedButton, FieldError, FormField, TextAreaField};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::AnimatedSection;
use crate::ui::settings::use_motion_timings;

use super::PageIntro;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="pt-24">
            <PageIntro
                title="Let’s Build the Future of Logistics Together"
                subtitle="Whether you're requesting a demo, exploring an enterprise partnership, or need support, we're here to help."
            />

            <AnimatedSection class="py-24">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="grid lg:grid-cols-12 gap-12">
                        <div class="lg:col-span-7 bg-secondary rounded-lg p-8">
                            <h2 class="text-2xl font-bold text-foreground mb-6">"Send us a Message"</h2>
                            <ContactForm/>
                        </div>

                        <div class="lg:col-span-5 space-y-8">
                            {CONTACT_CHANNELS
                                .iter()
                                .map(|channel| view! {
                                    <div class="bg-secondary rounded-lg p-6">
                                        <h3 class="text-xl font-bold text-foreground">{channel.title}</h3>
                                        <p class="text-muted-foreground mt-2">{channel.body}</p>
                                        <a href="#" class="text-accent-blue font-semibold mt-4 inline-flex items-center">
                                            {channel.link_label}
                                            <Icon name=icons::ARROW_RIGHT class="w-4 h-4 ml-1"/>
                                        </a>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="py-24 bg-secondary">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <Icon name=icons::BOT class="w-16 h-16 text-accent-blue mx-auto mb-4"/>
                    <h2 class="text-3xl font-bold text-foreground">"Have a Quick Question?"</h2>
                    <p class="mt-2 text-lg text-muted-foreground">
                        "Our AI assistant is available 24/7 to help with common inquiries."
                    </p>
                    <div class="mt-6">
                        <AnimatedButton
                            action=ButtonAction::Handler(Callback::new(|_| {
                                leptos::logging::log!("Assistant chat requested");
                            }))
                            variant=ButtonVariant::Secondary
                        >
                            "Chat with AI Assistant"
                        </AnimatedButton>
                    </div>
                </div>
            </AnimatedSection>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let submit_delay_ms = use_motion_timings().submit_delay_ms;
    let state = RwSignal::new(ContactFormState::new());
    let error = RwSignal::new(None::<String>);

    let value_of = move |field: ContactField| {
        Signal::derive(move || state.with(|s| s.form().get(field).to_string()))
    };
    let edit = move |field: ContactField| {
        Callback::new(move |value: String| {
            error.set(None);
            state.update(|s| s.edit(field, value));
        })
    };
    let sending = Signal::derive(move || state.with(|s| s.status().is_sending()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let payload = match state.try_update(|s| s.begin_submit()) {
            Some(Ok(payload)) => payload,
            Some(Err(err)) => {
                error.set(Some(err.to_string()));
                return;
            }
            None => return,
        };
        error.set(None);

        leptos::task::spawn_local(async move {
            let outcome = MockSubmitter::new(submit_delay_ms).submit(payload).await;
            match &outcome {
                Ok(()) => leptos::logging::log!("Contact form submitted"),
                Err(err) => leptos::logging::warn!("Contact form submission failed: {}", err),
            }
            // The page may have been navigated away from while sending
            state.try_update(|s| s.finish(outcome));
        });
    };

    let failure = Signal::derive(move || {
        state.with(|s| match s.status() {
            SubmissionStatus::Failed(reason) => Some(reason.clone()),
            _ => None,
        })
    });

    view! {
        <form on:submit=on_submit class="space-y-6" novalidate=true>
            <div class="grid sm:grid-cols-2 gap-6">
                <FormField
                    label="Name"
                    placeholder=ContactField::Name.placeholder()
                    value=value_of(ContactField::Name)
                    on_input=edit(ContactField::Name)
                    disabled=sending
                />
                <FormField
                    label="Company"
                    placeholder=ContactField::Company.placeholder()
                    value=value_of(ContactField::Company)
                    on_input=edit(ContactField::Company)
                    disabled=sending
                />
            </div>
            <FormField
                label="Email"
                input_type="email"
                placeholder=ContactField::Email.placeholder()
                value=value_of(ContactField::Email)
                on_input=edit(ContactField::Email)
                disabled=sending
            />
            <TextAreaField
                label="Message"
                placeholder=ContactField::Message.placeholder()
                value=value_of(ContactField::Message)
                on_input=edit(ContactField::Message)
                disabled=sending
            />
            <FieldError message=error/>
            <FieldError message=failure/>
            <div>
                <AnimatedButton
                    action=ButtonAction::Submit
                    size=ButtonSize::Large
                    class="w-full"
                    disabled=sending
                >
                    {move || state.with(|s| s.status().label())}
                </AnimatedButton>
            </div>
        </form>
    }
}
