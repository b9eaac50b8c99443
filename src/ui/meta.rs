//! Per-page document head: title, description, canonical link and, on the
//! home page, schema.org structured data

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::SitePage;
use crate::ui::settings::use_site_settings;

#[component]
pub fn PageMeta(page: SitePage) -> impl IntoView {
    let settings = use_site_settings();
    let canonical = settings.absolute_url(page.path());
    let title = page.title();
    let robots = if page.is_indexable() { "index, follow" } else { "noindex" };
    let structured = (page == SitePage::Home).then(|| settings.organization_json_ld());

    view! {
        <Title text=title.clone()/>
        <Meta name="description" content=page.description()/>
        <Meta name="robots" content=robots/>
        <Meta property="og:type" content="website"/>
        <Meta property="og:title" content=title/>
        <Meta property="og:description" content=page.description()/>
        <Meta property="og:url" content=canonical.clone()/>
        <Link rel="canonical" href=canonical/>
        {structured.map(|json| view! {
            <script type="application/ld+json" inner_html=json></script>
        })}
    }
}
