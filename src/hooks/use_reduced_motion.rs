use gloo::events::EventListener;
use web_sys::MediaQueryList;
use yew::prelude::*;

use crate::behavior::MotionPreference;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn media_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

fn current_preference() -> MotionPreference {
    MotionPreference::from_reduce_flag(media_query().is_some_and(|mql| mql.matches()))
}

/// Tracks `prefers-reduced-motion`, following changes made while the page is open.
#[hook]
pub fn use_reduced_motion() -> MotionPreference {
    let preference = use_state_eq(current_preference);
    {
        let preference = preference.clone();
        use_effect_with((), move |_| {
            let listener = media_query().map(|mql| {
                let query = mql.clone();
                EventListener::new(&mql, "change", move |_| {
                    preference.set(MotionPreference::from_reduce_flag(query.matches()));
                })
            });
            move || drop(listener)
        });
    }
    *preference
}
