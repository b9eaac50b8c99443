//! Fixed site header: scroll-driven condensing, desktop nav with a sliding
//! underline and the mobile menu overlay

use leptos::html;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::core::{
    ButtonAction, ButtonSize, ButtonVariant, HeaderPresentation, HeaderVisuals, MenuMachine,
    NAV_LINKS, NavIndicator, NavigationEvent, ScrollAttachment, SitePage, active_link_index,
};
use crate::ui::common::AnimatedButton;
use crate::ui::frame_loop::{FrameLoop, now_ms};
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::use_scroll_tracker;
use crate::ui::settings::use_motion_timings;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let timings = use_motion_timings();
    let scroll = use_scroll_tracker();
    let pathname = use_location().pathname;
    let menu = RwSignal::new(MenuMachine::new());

    // Rendered condensed until the scroll listener is attached
    let presentation = StoredValue::new(HeaderPresentation::new(true, &timings));
    let visuals = RwSignal::new(HeaderVisuals::CONDENSED);

    let frame = FrameLoop::new(move |timestamp| {
        let (sample, animating) =
            presentation.with_value(|p| (p.sample(timestamp), p.is_animating(timestamp)));
        visuals.set(sample);
        animating
    });

    Effect::new(move |previous: Option<ScrollAttachment>| {
        let attachment = scroll.attachment.get();
        let condensed = HeaderPresentation::resolve(attachment, scroll.condensed.get());

        if previous != Some(attachment) {
            // Attaching (or losing) the listener snaps instead of animating
            presentation.set_value(HeaderPresentation::new(condensed, &timings));
            visuals.set(HeaderVisuals::for_condensed(condensed));
        } else if presentation
            .try_update_value(|p| p.sync(condensed, now_ms()))
            .unwrap_or(false)
        {
            frame.start();
        }
        attachment
    });

    // Any route change closes the mobile menu
    Effect::new(move |_| {
        let event = NavigationEvent::new(pathname.get());
        menu.update(|m| m.on_navigation(&event));
    });

    view! {
        <header
            class="fixed top-0 left-0 right-0 z-50 w-full"
            style=move || visuals.get().style()
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 h-full">
                <div class="flex items-center justify-between h-full">
                    <A href="/" attr:class="flex items-center space-x-2 text-2xl font-bold text-foreground">
                        <Icon name=icons::BOT class="w-8 h-8 text-accent-blue"/>
                        <span>"Mooj-Tech"</span>
                    </A>

                    <DesktopNav/>

                    <div class="hidden lg:flex items-center space-x-4">
                        <AnimatedButton
                            action=ButtonAction::Navigate(SitePage::Contact.path())
                            variant=ButtonVariant::Secondary
                            size=ButtonSize::Small
                        >
                            "Request Demo"
                        </AnimatedButton>
                    </div>

                    <div class="lg:hidden">
                        <button
                            class="text-muted-foreground hover:text-foreground focus:outline-none"
                            on:click=move |_| menu.update(|m| m.toggle())
                            aria-label="Toggle navigation menu"
                            aria-expanded=move || menu.with(|m| m.is_open()).to_string()
                        >
                            {move || {
                                let name = if menu.with(|m| m.is_open()) { icons::X } else { icons::MENU };
                                view! {
                                    <span class="block animate-icon-swap">
                                        <Icon name=name class="w-7 h-7"/>
                                    </span>
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || menu.with(|m| m.overlay_mounted())>
                <MobileMenu/>
            </Show>
        </header>
    }
}

/// Desktop links sharing a single underline that slides to the active link
#[component]
fn DesktopNav() -> impl IntoView {
    let timings = use_motion_timings();
    let pathname = use_location().pathname;
    let nav_ref = NodeRef::<html::Nav>::new();

    let indicator = StoredValue::new(NavIndicator::new(&timings));
    let indicator_style = RwSignal::new(String::from("opacity: 0;"));

    let frame = FrameLoop::new(move |timestamp| {
        let (style, animating) =
            indicator.with_value(|i| (i.style(timestamp), i.is_animating(timestamp)));
        indicator_style.set(style);
        animating
    });

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::IndicatorRect;
        use wasm_bindgen::JsCast;

        let place = move |path: &str| {
            let Some(nav) = nav_ref.get_untracked() else {
                return;
            };
            let measured = active_link_index(path).and_then(|index| {
                nav.query_selector(&format!("[data-nav-index=\"{}\"]", index))
                    .ok()
                    .flatten()
                    .and_then(|link| link.dyn_into::<web_sys::HtmlElement>().ok())
                    .map(|link| {
                        let rect = IndicatorRect {
                            left: link.offset_left() as f64,
                            width: link.offset_width() as f64,
                        };
                        (index, rect)
                    })
            });
            let now = now_ms();
            match measured {
                Some((index, rect)) => indicator.update_value(|i| i.move_to(index, rect, now)),
                None => indicator.update_value(|i| i.hide()),
            }
            indicator_style.set(indicator.with_value(|i| i.style(now)));
            frame.start();
        };

        Effect::new(move |_| {
            let path = pathname.get();
            if nav_ref.get().is_some() {
                place(&path);
            }
        });

        // Layout changes move links; re-measuring the same anchor snaps
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            place(&pathname.get_untracked());
        });
        on_cleanup(move || resize.remove());
    }
    #[cfg(feature = "ssr")]
    let _ = (indicator, frame);

    view! {
        <nav node_ref=nav_ref class="hidden lg:flex relative items-center space-x-8">
            {NAV_LINKS
                .iter()
                .enumerate()
                .map(|(index, link)| {
                    let href = link.page.path();
                    let is_active = move || active_link_index(&pathname.get()) == Some(index);
                    view! {
                        <A
                            href=href
                            attr:data-nav-index=index.to_string()
                            attr:class=move || {
                                if is_active() {
                                    "relative text-sm font-medium transition-colors duration-300 text-foreground"
                                } else {
                                    "relative text-sm font-medium transition-colors duration-300 text-muted-foreground hover:text-foreground"
                                }
                            }
                        >
                            {link.name}
                        </A>
                    }
                })
                .collect_view()}
            <span
                class="absolute -bottom-2 h-0.5 bg-accent-blue pointer-events-none"
                style=move || indicator_style.get()
                aria-hidden="true"
            ></span>
        </nav>
    }
}

/// Full-width link list shown below the header on small screens
#[component]
fn MobileMenu() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <div class="lg:hidden absolute top-full left-0 right-0 bg-background/95 backdrop-blur-lg shadow-lg animate-menu-in">
            <div class="flex flex-col space-y-4 p-6">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        let page = link.page;
                        let class = move || {
                            if SitePage::from_path(&pathname.get()) == page {
                                "block py-2 text-center text-lg text-foreground font-semibold"
                            } else {
                                "block py-2 text-center text-lg text-muted-foreground"
                            }
                        };
                        view! {
                            <A href=page.path() attr:class=class>
                                {link.name}
                            </A>
                        }
                    })
                    .collect_view()}
                <AnimatedButton
                    action=ButtonAction::Navigate(SitePage::Contact.path())
                    variant=ButtonVariant::Secondary
                    class="w-full mt-4"
                >
                    "Request Demo"
                </AnimatedButton>
            </div>
        </div>
    }
}
