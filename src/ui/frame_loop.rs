//! Animation clock: `performance.now()` and a cancellable `requestAnimationFrame` loop
//!
//! On the server the clock stands still at zero and loops never run, so every
//! animated component renders its resting state.

#[cfg(not(feature = "ssr"))]
use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

/// Milliseconds on the page's monotonic clock
pub fn now_ms() -> f64 {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .unwrap_or_else(js_sys::Date::now)
    }
    #[cfg(feature = "ssr")]
    {
        0.0
    }
}

#[cfg(not(feature = "ssr"))]
struct Driver {
    frame: Cell<Option<i32>>,
    callback: RefCell<Option<wasm_bindgen::closure::Closure<dyn FnMut(f64)>>>,
}

#[cfg(not(feature = "ssr"))]
impl Driver {
    fn request(&self) {
        use wasm_bindgen::JsCast;

        if self.frame.get().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(callback) = self.callback.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                self.frame.set(Some(id));
            }
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.frame.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

#[cfg(not(feature = "ssr"))]
impl Drop for Driver {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// A `requestAnimationFrame` loop owned by the component that created it
///
/// `step` receives the frame timestamp and returns whether another frame is
/// needed. The loop idles until [`FrameLoop::start`] is called again, and is
/// cancelled when the owning component unmounts.
#[derive(Clone, Copy)]
pub struct FrameLoop {
    #[cfg(not(feature = "ssr"))]
    driver: StoredValue<Rc<Driver>, LocalStorage>,
}

impl FrameLoop {
    pub fn new(step: impl FnMut(f64) -> bool + 'static) -> Self {
        #[cfg(not(feature = "ssr"))]
        {
            use wasm_bindgen::closure::Closure;

            let mut step = step;
            let driver = Rc::new_cyclic(|weak: &std::rc::Weak<Driver>| {
                let weak = weak.clone();
                let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
                    let Some(driver) = weak.upgrade() else {
                        return;
                    };
                    driver.frame.set(None);
                    if step(timestamp) {
                        driver.request();
                    }
                });
                Driver {
                    frame: Cell::new(None),
                    callback: RefCell::new(Some(callback)),
                }
            });
            Self {
                driver: StoredValue::new_local(driver),
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = step;
            Self {}
        }
    }

    /// Schedule the next frame unless one is already pending
    pub fn start(&self) {
        #[cfg(not(feature = "ssr"))]
        self.driver.try_with_value(|driver| driver.request());
    }

    pub fn cancel(&self) {
        #[cfg(not(feature = "ssr"))]
        self.driver.try_with_value(|driver| driver.cancel());
    }
}
