use leptos::prelude::*;

/// Monochrome icon from `/icons`, tinted with the current text colour
#[component]
pub fn Icon(
    /// Icon name (file name without `.svg`)
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5".to_string(), into)]
    class: String,
) -> impl IntoView {
    let mask = format!(
        "-webkit-mask: url(/icons/{name}.svg) center / contain no-repeat; \
         mask: url(/icons/{name}.svg) center / contain no-repeat;"
    );

    view! {
        <span
            class=format!("inline-block shrink-0 bg-current {}", class)
            style=mask
            role="img"
            aria-label=name
        ></span>
    }
}

/// Icons referenced directly by components; content tables name theirs by string
pub mod icons {
    pub const ALERT_TRIANGLE: &str = "alert-triangle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const BOT: &str = "bot";
    pub const COMPASS: &str = "compass";
    pub const GITHUB: &str = "github";
    pub const LINKEDIN: &str = "linkedin";
    pub const MENU: &str = "menu";
    pub const QUOTE: &str = "quote";
    pub const TWITTER: &str = "twitter";
    pub const X: &str = "x";
}
