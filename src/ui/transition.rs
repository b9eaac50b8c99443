//! Page outlet that animates views in and out on navigation
//!
//! The stage stays mounted for the whole session. Each navigation adds a
//! view keyed by its generation; the outgoing view keeps rendering on top,
//! fading out, until its exit timeline finishes or a newer navigation drops
//! it.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::core::{PageTransitions, SitePage};
use crate::ui::frame_loop::{FrameLoop, now_ms};
use crate::ui::pages::render_page;
use crate::ui::settings::use_motion_timings;

#[component]
pub fn TransitionStage() -> impl IntoView {
    let timings = use_motion_timings();
    let pathname = use_location().pathname;

    // The first page is server-rendered, so it starts out settled
    let mut initial = PageTransitions::new(&timings);
    initial.navigate(SitePage::from_path(&pathname.get_untracked()), 0.0);
    initial.tick(timings.page_ms);

    let transitions = RwSignal::new(initial);
    let now = RwSignal::new(0.0_f64);

    let frame = FrameLoop::new(move |timestamp| {
        let events = transitions
            .try_update_untracked(|t| t.tick(timestamp))
            .unwrap_or_default();
        if !events.is_empty() {
            transitions.notify();
        }
        now.set(timestamp);
        transitions.with_untracked(|t| t.is_animating())
    });

    Effect::new(move |_| {
        let page = SitePage::from_path(&pathname.get());
        let started = now_ms();
        let mut navigated = false;
        transitions.maybe_update(|t| {
            navigated = t.navigate(page, started).is_some();
            navigated
        });
        if navigated {
            leptos::logging::log!("Transitioning to {}", page);
            now.set(started);
            frame.start();
        }
    });

    let views = move || {
        transitions.with(|t| {
            t.views()
                .iter()
                .map(|view| (view.generation, view.page))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="relative">
            <For
                each=views
                key=|(generation, _)| *generation
                children=move |(generation, page)| {
                    let style = move || transitions.with(|t| t.style(generation, now.get()).css());
                    view! {
                        <div class="page-view" style=style>
                            {render_page(page)}
                        </div>
                    }
                }
            />
        </div>
    }
}
