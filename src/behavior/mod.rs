//! UI behaviors with no DOM dependency: carousel rotation, interval ticking,
//! count-up animation, viewport intersection and cross-fade timing.
//!
//! Timers and frames are reached through the [`TimerHost`] and [`FrameHost`]
//! traits; the browser implementations live in [`crate::browser`].

pub mod count_up;
pub mod crossfade;
pub mod rotation;
pub mod ticker;
pub mod visibility;

#[cfg(test)]
pub(crate) mod manual;

pub use count_up::{CountUp, CountUpAnimator, FrameHost};
pub use crossfade::{CrossFade, MotionPreference};
pub use rotation::Rotation;
pub use ticker::{IntervalTicker, LatestCallback, Period, TimerHost};
pub use visibility::{Rect, Reveal, RootMargin};
