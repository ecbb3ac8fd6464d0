//! Full-screen loading indicator driven by the shared request counter.

use dioxus::prelude::*;
use session::GlobalLoader;

/// Shows a spinner overlay while any request is in flight.
///
/// Bridges the loader's listener callback into a sync signal once on mount;
/// the overlay lives for the whole app session, so the subscription is never
/// torn down.
#[component]
pub fn GlobalLoadingOverlay() -> Element {
    let loader = use_context::<GlobalLoader>();
    let visible = use_signal_sync(|| false);

    use_hook(move || {
        loader.subscribe(move |loading| {
            let mut visible = visible;
            visible.set(loading);
        });
    });

    if !visible() {
        return rsx! {};
    }

    rsx! {
        div { class: "loading-overlay",
            div { class: "loading-spinner" }
        }
    }
}
