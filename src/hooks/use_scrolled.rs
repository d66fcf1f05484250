use gloo::events::EventListener;
use yew::prelude::*;

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// `true` once the window is scrolled more than `threshold_px` down.
#[hook]
pub fn use_scrolled(threshold_px: f64) -> bool {
    let scrolled = use_state_eq(|| false);
    {
        let scrolled = scrolled.clone();
        use_effect_with(threshold_px.to_bits(), move |_| {
            scrolled.set(scroll_y() > threshold_px);
            let listener = web_sys::window().map(|w| {
                EventListener::new(&w, "scroll", move |_| scrolled.set(scroll_y() > threshold_px))
            });
            move || drop(listener)
        });
    }
    *scrolled
}
