use yew::prelude::*;

use crate::behavior::{IntervalTicker, LatestCallback, Period};
use crate::browser::BrowserTimers;

/// Calls `callback` every `period` until unmount. `Period::Disabled` pauses.
///
/// The callback is swapped into a shared slot on every render, so the timer
/// always runs the one from the latest render. Only a period change
/// reschedules the underlying interval.
#[hook]
pub fn use_interval<F>(callback: F, period: Period)
where
    F: FnMut() + 'static,
{
    let latest = use_memo((), |_| LatestCallback::noop());
    latest.replace(callback);

    let latest = (*latest).clone();
    use_effect_with(period, move |&period| {
        let ticker = IntervalTicker::start(BrowserTimers, latest, period);
        move || drop(ticker)
    });
}
