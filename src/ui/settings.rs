//! Site settings context
//!
//! The server provides the settings from its configuration and embeds them in
//! the shell; the client reads the embedded copy back during hydration.

use leptos::prelude::*;

use crate::core::{MotionTimings, SETTINGS_ELEMENT_ID, SiteSettings};

/// Provide settings for the app, reading the embedded copy in the browser
pub fn provide_site_settings() -> SiteSettings {
    let settings = use_context::<SiteSettings>().unwrap_or_else(read_embedded_settings);
    provide_context(settings.clone());
    settings
}

pub fn use_site_settings() -> SiteSettings {
    use_context::<SiteSettings>().unwrap_or_default()
}

pub fn use_motion_timings() -> MotionTimings {
    use_site_settings().timings
}

/// `<script>` carrying the serialized settings, rendered into the shell
#[component]
pub fn SettingsScript(settings: SiteSettings) -> impl IntoView {
    let json = settings.to_json().unwrap_or_else(|err| {
        leptos::logging::warn!("Failed to serialize site settings: {}", err);
        String::from("{}")
    });

    view! {
        <script id=SETTINGS_ELEMENT_ID type="application/json" inner_html=json></script>
    }
}

#[cfg(not(feature = "ssr"))]
fn read_embedded_settings() -> SiteSettings {
    let json = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(SETTINGS_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match json.as_deref().map(SiteSettings::from_json) {
        Some(Ok(settings)) => settings,
        Some(Err(err)) => {
            leptos::logging::warn!("Ignoring malformed site settings: {}", err);
            SiteSettings::default()
        }
        None => SiteSettings::default(),
    }
}

#[cfg(feature = "ssr")]
fn read_embedded_settings() -> SiteSettings {
    SiteSettings::default()
}
