//! Viewport intersection tracking for the navigation highlight.
//!
//! Observes every `<section>` element and marks a section active once it
//! scrolls into the upper-middle band of the viewport. Restricting the band
//! keeps barely-visible sections at the viewport edges from stealing the
//! highlight. Entries are applied in event order; the last one wins, which
//! is all the highlight needs for eventual consistency.

use leptos::prelude::RwSignal;

use crate::state::nav::NavState;

/// Sections count as current once their box enters the band between 20% and
/// 50% of the viewport height.
#[cfg(feature = "csr")]
const ROOT_MARGIN: &str = "-20% 0px -50% 0px";
#[cfg(feature = "csr")]
const THRESHOLD: f64 = 0.1;

/// Attach the intersection observer and start feeding `nav`.
///
/// The observer and its callback intentionally live for the rest of the
/// page's lifetime. Outside the browser this is a no-op.
pub fn start(nav: RwSignal<NavState>) {
    #[cfg(feature = "csr")]
    {
        use leptos::prelude::Update;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    if let Some(id) = entry.target().get_attribute("id") {
                        nav.update(|n| n.enter_band(&id));
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_root_margin(ROOT_MARGIN);
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(THRESHOLD));

        let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) else {
            return;
        };

        let Ok(sections) = doc.query_selector_all("section") else {
            return;
        };
        for i in 0..sections.length() {
            let element = sections
                .item(i)
                .and_then(|node| node.dyn_into::<web_sys::Element>().ok());
            if let Some(element) = element {
                observer.observe(&element);
            }
        }

        callback.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = nav;
    }
}
