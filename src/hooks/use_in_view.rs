//! One-shot viewport visibility hook.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of an element's area that has to be on screen before it counts
/// as seen.
pub const VIEW_THRESHOLD: f64 = 0.2;

/// Reports whether the element behind `node` has ever been scrolled into
/// view.
///
/// The returned flag is write-once: it flips to `true` the first time at
/// least `threshold` of the element intersects the viewport and stays `true`
/// for the rest of the component's life. The underlying observer disconnects
/// itself after the first hit, so scrolling away never re-arms it, and the
/// effect destructor disconnects it again on unmount. Instances are fully
/// independent of each other.
///
/// If the node has not resolved to an element, or the observer cannot be
/// constructed, the flag simply stays `false`.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let seen = use_state(|| false);

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer = None;
                let mut on_intersect = None;

                if let Some(element) = node.cast::<Element>() {
                    let callback =
                        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                            move |entries: js_sys::Array, obs: IntersectionObserver| {
                                let hit = entries.iter().any(|entry| {
                                    entry
                                        .unchecked_into::<IntersectionObserverEntry>()
                                        .is_intersecting()
                                });
                                if hit {
                                    seen.set(true);
                                    // One-shot: never re-arm after the first entry.
                                    obs.disconnect();
                                }
                            },
                        );

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(threshold));
                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(obs) => {
                            obs.observe(&element);
                            observer = Some(obs);
                            on_intersect = Some(callback);
                        }
                        Err(err) => {
                            log::warn!("failed to create intersection observer: {:?}", err);
                        }
                    }
                } else {
                    log::warn!("use_in_view mounted without a resolvable element");
                }

                move || {
                    if let Some(obs) = observer {
                        obs.disconnect();
                    }
                    drop(on_intersect);
                }
            },
            node,
        );
    }

    *seen
}
