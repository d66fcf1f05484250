//! Yew hooks binding the behaviors in [`crate::behavior`] to the browser.

mod use_count_up;
mod use_interval;
mod use_on_screen;
mod use_reduced_motion;
mod use_rotation;
mod use_scrolled;

pub use use_count_up::use_count_up;
pub use use_interval::use_interval;
pub use use_on_screen::{use_on_screen, use_revealed};
pub use use_reduced_motion::use_reduced_motion;
pub use use_rotation::{use_rotation, RotationAction};
pub use use_scrolled::use_scrolled;
