//! Scroll-triggered reveal of page sections
//!
//! One `IntersectionObserver` is shared by every [`AnimatedSection`] on the
//! page. Each section registers once, the observer fires once, and the
//! section is unobserved straight away.

use leptos::html;
use leptos::prelude::*;

use crate::core::{MotionTimings, RegionId, RevealStyle};
use crate::ui::frame_loop::FrameLoop;
use crate::ui::settings::use_motion_timings;

#[cfg(not(feature = "ssr"))]
use std::{cell::RefCell, collections::HashMap, rc::Rc};

#[cfg(not(feature = "ssr"))]
use crate::core::RevealRegistry;

#[cfg(not(feature = "ssr"))]
const REGION_ATTRIBUTE: &str = "data-reveal-id";

#[cfg(not(feature = "ssr"))]
struct Region {
    element: web_sys::Element,
    on_reveal: Box<dyn Fn()>,
}

#[cfg(not(feature = "ssr"))]
struct SharedObserver {
    observer: Option<web_sys::IntersectionObserver>,
    registry: RefCell<RevealRegistry>,
    regions: RefCell<HashMap<RegionId, Region>>,
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(not(feature = "ssr"))]
impl SharedObserver {
    fn new() -> Option<Rc<Self>> {
        use wasm_bindgen::{JsCast, JsValue, closure::Closure};

        // Report every 5% step so per-region thresholds can be honoured
        let thresholds = js_sys::Array::new();
        for step in 0..=20 {
            thresholds.push(&JsValue::from_f64(step as f64 / 20.0));
        }
        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&thresholds);

        let shared = Rc::new_cyclic(|weak: &std::rc::Weak<SharedObserver>| {
            let weak = weak.clone();
            let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                    if let Some(shared) = weak.upgrade() {
                        for entry in entries.iter() {
                            shared.handle_entry(entry.unchecked_into());
                        }
                    }
                },
            );
            let observer = web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &init,
            );
            SharedObserver {
                observer: observer.ok(),
                registry: RefCell::new(RevealRegistry::new()),
                regions: RefCell::new(HashMap::new()),
                _callback: callback,
            }
        });
        shared.observer.is_some().then_some(shared)
    }

    fn handle_entry(&self, entry: web_sys::IntersectionObserverEntry) {
        let target = entry.target();
        let Some(id) = target
            .get_attribute(REGION_ATTRIBUTE)
            .as_deref()
            .and_then(RegionId::parse)
        else {
            return;
        };

        let fired = self
            .registry
            .borrow_mut()
            .report(id, entry.intersection_ratio());
        if fired.is_none() {
            return;
        }

        if let Some(observer) = &self.observer {
            observer.unobserve(&target);
        }
        let region = self.regions.borrow_mut().remove(&id);
        if let Some(region) = region {
            let _ = region.element.remove_attribute(REGION_ATTRIBUTE);
            (region.on_reveal)();
        }
    }

    fn register(&self, element: web_sys::Element, threshold: f64, on_reveal: Box<dyn Fn()>) -> RegionId {
        let id = self.registry.borrow_mut().register(threshold);
        let _ = element.set_attribute(REGION_ATTRIBUTE, &id.to_string());
        if let Some(observer) = &self.observer {
            observer.observe(&element);
        }
        self.regions
            .borrow_mut()
            .insert(id, Region { element, on_reveal });
        id
    }

    fn release(&self, id: RegionId) {
        self.registry.borrow_mut().release(id);
        let region = self.regions.borrow_mut().remove(&id);
        if let (Some(region), Some(observer)) = (region, &self.observer) {
            observer.unobserve(&region.element);
        }
    }
}

#[cfg(not(feature = "ssr"))]
impl Drop for SharedObserver {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

/// Shared reveal observer for the page
#[derive(Clone, Copy)]
pub struct RevealContext {
    #[cfg(not(feature = "ssr"))]
    shared: StoredValue<Option<Rc<SharedObserver>>, LocalStorage>,
}

impl RevealContext {
    fn new() -> Self {
        #[cfg(not(feature = "ssr"))]
        {
            let shared = SharedObserver::new();
            if shared.is_none() {
                leptos::logging::warn!(
                    "IntersectionObserver unavailable, sections will render revealed"
                );
            }
            Self {
                shared: StoredValue::new_local(shared),
            }
        }
        #[cfg(feature = "ssr")]
        {
            Self {}
        }
    }

    /// Watch `element`; `on_reveal` runs once when `threshold` of it is visible
    ///
    /// Returns `None` when no observer is available, in which case the caller
    /// should show the element straight away.
    #[cfg(not(feature = "ssr"))]
    pub fn observe(
        &self,
        element: web_sys::Element,
        threshold: f64,
        on_reveal: impl Fn() + 'static,
    ) -> Option<RegionId> {
        self.shared
            .try_with_value(|shared| {
                shared
                    .as_ref()
                    .map(|shared| shared.register(element, threshold, Box::new(on_reveal)))
            })
            .flatten()
    }

    /// Stop watching a region that unmounted before it revealed
    pub fn release(&self, id: RegionId) {
        #[cfg(not(feature = "ssr"))]
        self.shared.try_with_value(|shared| {
            if let Some(shared) = shared {
                shared.release(id);
            }
        });
        #[cfg(feature = "ssr")]
        let _ = id;
    }
}

pub fn provide_reveal_context() -> RevealContext {
    let context = RevealContext::new();
    provide_context(context);
    context
}

fn use_reveal_context() -> RevealContext {
    use_context::<RevealContext>().unwrap_or_else(provide_reveal_context)
}

/// Section that fades and slides into place the first time it scrolls into view
#[component]
pub fn AnimatedSection(
    children: Children,
    /// Extra delay after the section becomes visible, in ms
    #[prop(default = 0.0)]
    delay_ms: f64,
    /// Visible fraction that triggers the reveal; defaults to the site setting
    #[prop(optional)]
    threshold: Option<f64>,
    /// Reveal as soon as the section mounts instead of waiting to be seen
    #[prop(default = false)]
    on_mount: bool,
    /// Additional CSS classes
    #[prop(default = String::new(), into)]
    class: String,
) -> impl IntoView {
    let timings = use_motion_timings();
    let context = use_reveal_context();
    let node_ref = NodeRef::<html::Div>::new();

    let revealed_at = RwSignal::new(None::<f64>);
    let now = RwSignal::new(0.0_f64);
    let region = StoredValue::new(None::<RegionId>);

    let frame = FrameLoop::new(move |timestamp| {
        now.set(timestamp);
        revealed_at
            .get_untracked()
            .is_some_and(|start| timestamp - start < delay_ms + timings.reveal_ms)
    });

    #[cfg(not(feature = "ssr"))]
    {
        let threshold = threshold.unwrap_or(timings.reveal_threshold);
        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };
            if region.get_value().is_some() || revealed_at.get_untracked().is_some() {
                return;
            }
            let reveal = move || {
                let start = crate::ui::frame_loop::now_ms();
                now.set(start);
                revealed_at.set(Some(start));
                frame.start();
            };
            if on_mount {
                reveal();
                return;
            }
            match context.observe(element.into(), threshold, reveal) {
                Some(id) => region.set_value(Some(id)),
                None => revealed_at.set(Some(f64::NEG_INFINITY)),
            }
        });
    }
    #[cfg(feature = "ssr")]
    let _ = (threshold, frame, on_mount);

    on_cleanup(move || {
        if let Some(id) = region.get_value() {
            context.release(id);
        }
    });

    let style = move || section_style(revealed_at.get(), now.get(), delay_ms, &timings).css();

    view! {
        <div node_ref=node_ref class=class style=style>
            {children()}
        </div>
    }
}

fn section_style(
    revealed_at: Option<f64>,
    now: f64,
    delay_ms: f64,
    timings: &MotionTimings,
) -> RevealStyle {
    match revealed_at {
        None => RevealStyle::hidden(timings),
        Some(start) if start.is_infinite() => RevealStyle::resting(),
        Some(start) => RevealStyle::at(now - start, delay_ms, timings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_hidden_until_revealed() {
        let timings = MotionTimings::default();
        assert_eq!(section_style(None, 5000.0, 0.0, &timings), RevealStyle::hidden(&timings));
    }

    #[test]
    fn test_section_without_observer_rests() {
        let timings = MotionTimings::default();
        let style = section_style(Some(f64::NEG_INFINITY), 0.0, 300.0, &timings);
        assert_eq!(style, RevealStyle::resting());
    }

    #[test]
    fn test_section_honours_delay() {
        let timings = MotionTimings::default();
        assert_eq!(
            section_style(Some(1000.0), 1200.0, 300.0, &timings),
            RevealStyle::hidden(&timings)
        );
        assert_eq!(
            section_style(Some(1000.0), 2100.0, 300.0, &timings),
            RevealStyle::resting()
        );
    }
}
