//! Fade-in on first viewport intersection.
//!
//! Cards start hidden (see `.reveal` in the stylesheet) and slide in the
//! first time they become visible. Each wrapper owns its observer and
//! disconnects it after firing, so scrolling back up never replays the
//! animation.

use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Trigger slightly before the element fully enters the viewport.
const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let visible = RwSignal::new(false);

    Effect::new(move |_| {
        let Some(el) = node.get() else {
            return;
        };
        if visible.get_untracked() {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        visible.set(true);
                        observer.disconnect();
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(THRESHOLD));
        options.set_root_margin(ROOT_MARGIN);

        if let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        {
            observer.observe(&el);
            // The closure must outlive the observer. `on_cleanup` requires a
            // `Send + Sync` closure, but the JS handles are `!Send`; wrap them
            // in `SendWrapper` (a no-op on the single-threaded wasm target).
            let guard = SendWrapper::new((observer, callback));
            on_cleanup(move || {
                let (observer, callback) = guard.take();
                observer.disconnect();
                drop(callback);
            });
        }
    });

    view! {
        <div class="reveal" class:reveal--visible=visible node_ref=node>
            {children()}
        </div>
    }
}
