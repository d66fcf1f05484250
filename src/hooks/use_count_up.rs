use yew::prelude::*;

use crate::behavior::CountUpAnimator;
use crate::browser::BrowserFrames;

/// Displayed value of a count-up from 0 to `target` over `duration_ms`.
///
/// Stays at 0 while `active` is false. Changing `target` or `duration_ms`
/// cancels the running animation and starts again from 0.
#[hook]
pub fn use_count_up(target: u64, duration_ms: u32, active: bool) -> u64 {
    let value = use_state_eq(|| 0u64);
    {
        let value = value.clone();
        use_effect_with((target, duration_ms, active), move |&(target, duration_ms, active)| {
            value.set(0);
            let animator =
                CountUpAnimator::start_when(active, BrowserFrames, target, duration_ms, move |v| {
                    value.set(v)
                });
            move || drop(animator)
        });
    }
    *value
}
