//! Window scroll listener feeding the header's condensed flag

use leptos::prelude::*;

use crate::core::{ScrollAttachment, ScrollState};
use crate::ui::settings::use_motion_timings;

/// Reactive view of the page's scroll state
#[derive(Clone, Copy)]
pub struct ScrollTracker {
    pub condensed: ReadSignal<bool>,
    pub attachment: ReadSignal<ScrollAttachment>,
}

/// Listen to window scrolling for as long as the calling component is mounted
///
/// The listener is installed after mount and removed on cleanup. Until then,
/// or when there is no window at all, the tracker reports `Unavailable`.
pub fn use_scroll_tracker() -> ScrollTracker {
    let timings = use_motion_timings();
    let state = StoredValue::new(ScrollState::from_timings(&timings));
    let (condensed, set_condensed) = signal(false);
    let (attachment, set_attachment) = signal(ScrollAttachment::Unavailable);

    #[cfg(not(feature = "ssr"))]
    {
        let listener = StoredValue::new(None::<WindowListenerHandle>);

        let record = move |offset: f64| {
            let flipped = state.try_update_value(|s| s.record(offset)).unwrap_or(false);
            if flipped {
                set_condensed.set(state.with_value(|s| s.is_condensed()));
            }
        };

        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                leptos::logging::warn!("No window to attach the scroll listener to");
                return;
            };
            record(window.scroll_y().unwrap_or(0.0));

            let handle = window_event_listener(leptos::ev::scroll, move |_| {
                if let Some(window) = web_sys::window() {
                    record(window.scroll_y().unwrap_or(0.0));
                }
            });
            listener.set_value(Some(handle));
            set_attachment.set(ScrollAttachment::Attached);
        });

        on_cleanup(move || {
            if let Some(handle) = listener.try_update_value(Option::take).flatten() {
                handle.remove();
            }
        });
    }
    #[cfg(feature = "ssr")]
    let _ = (state, set_condensed, set_attachment);

    ScrollTracker {
        condensed,
        attachment,
    }
}
