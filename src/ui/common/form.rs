use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Single-line input labelled for assistive technology
#[component]
pub fn FormField(
    /// Accessible name
    label: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, optional)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div>
            <input
                type=input_type
                class="input-base"
                aria-label=label
                placeholder=placeholder
                required=true
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get().unwrap_or(false)
            />
        </div>
    }
}

/// Multi-line text area
#[component]
pub fn TextAreaField(
    label: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 5)]
    rows: u32,
    #[prop(into, optional)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <textarea
            class="input-base resize-none"
            aria-label=label
            placeholder=placeholder
            rows=rows
            required=true
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
            disabled=move || disabled.get().unwrap_or(false)
        />
    }
}

/// Inline validation or submission error
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|err| {
            view! {
                <div class="flex items-center gap-2 text-sm text-red-600" role="alert">
                    <Icon name=icons::ALERT_TRIANGLE class="w-4 h-4"/>
                    <span>{err}</span>
                </div>
            }
        })
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_form_field_names_input_without_visible_label() {
        let owner = Owner::new();
        let html = owner.with(|| {
            view! {
                <FormField
                    label="Email"
                    input_type="email"
                    placeholder="Company Email"
                    value=Signal::derive(String::new)
                    on_input=Callback::new(|_: String| {})
                />
            }
            .to_html()
        });

        assert!(html.contains("aria-label=\"Email\""));
        assert!(html.contains("type=\"email\""));
        assert!(!html.contains("<label"));
    }
}
