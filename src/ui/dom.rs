//! Browser subscriptions owned by RAII handles.
//!
//! Every observer created here is disconnected when its handle is dropped.
//! Components hand the handle to `on_cleanup` (wrapped in a [`SendWrapper`],
//! since DOM objects are not `Send`) so nothing outlives the view that
//! registered it.

#[cfg(feature = "hydrate")]
pub use browser::*;

/// Lock or unlock page-background scrolling
#[cfg(not(feature = "hydrate"))]
pub fn set_body_scroll_locked(_locked: bool) {}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::logging::warn;
    use leptos::web_sys;
    pub use send_wrapper::SendWrapper;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::core::OnceLatch;

    type ObserverCallback<O> = Closure<dyn FnMut(js_sys::Array, O)>;

    /// Fires a callback the first time an element intersects the viewport
    pub struct VisibilityWatch {
        observer: web_sys::IntersectionObserver,
        _callback: ObserverCallback<web_sys::IntersectionObserver>,
    }

    impl VisibilityWatch {
        /// Observe `target` with the given root margin. `on_visible` runs at
        /// most once, after which the observer disconnects itself.
        pub fn once<F>(target: &web_sys::Element, root_margin: &str, on_visible: F) -> Option<Self>
        where
            F: FnOnce() + 'static,
        {
            let latch = Rc::new(RefCell::new(OnceLatch::default()));
            let mut on_visible = Some(on_visible);

            let callback: ObserverCallback<web_sys::IntersectionObserver> = Closure::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    let visible = entries.iter().any(|entry| {
                        entry
                            .dyn_into::<web_sys::IntersectionObserverEntry>()
                            .is_ok_and(|entry| entry.is_intersecting())
                    });
                    if !visible || !latch.borrow_mut().fire() {
                        return;
                    }
                    observer.disconnect();
                    if let Some(on_visible) = on_visible.take() {
                        on_visible();
                    }
                },
            );

            let init = web_sys::IntersectionObserverInit::new();
            init.set_root_margin(root_margin);

            let observer = match web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &init,
            ) {
                Ok(observer) => observer,
                Err(err) => {
                    warn!("IntersectionObserver unavailable: {err:?}");
                    return None;
                }
            };
            observer.observe(target);

            Some(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for VisibilityWatch {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    /// Calls back whenever any observed element changes size
    pub struct SizeWatch {
        observer: web_sys::ResizeObserver,
        _callback: ObserverCallback<web_sys::ResizeObserver>,
    }

    impl SizeWatch {
        pub fn new<F>(targets: &[&web_sys::Element], mut on_resize: F) -> Option<Self>
        where
            F: FnMut() + 'static,
        {
            let callback: ObserverCallback<web_sys::ResizeObserver> =
                Closure::new(move |_: js_sys::Array, _: web_sys::ResizeObserver| on_resize());

            let observer = match web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()) {
                Ok(observer) => observer,
                Err(err) => {
                    warn!("ResizeObserver unavailable: {err:?}");
                    return None;
                }
            };
            for target in targets {
                observer.observe(target);
            }

            Some(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for SizeWatch {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    /// Lock or unlock page-background scrolling
    pub fn set_body_scroll_locked(locked: bool) {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return;
        };

        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(err) = result {
            warn!("failed to toggle scroll lock: {err:?}");
        }
    }
}
