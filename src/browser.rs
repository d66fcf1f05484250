//! Browser-backed timer and frame hosts.

use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Interval;
use web_sys::Element;

use crate::behavior::visibility::{resolve_visibility, Rect};
use crate::behavior::{FrameHost, RootMargin, TimerHost};
use crate::error::DomError;

/// `setInterval` through gloo. Dropping the [`Interval`] clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl TimerHost for BrowserTimers {
    type Handle = Interval;

    fn set_interval(&self, millis: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(millis, tick)
    }
}

/// `requestAnimationFrame` through gloo. Dropping the [`AnimationFrame`] cancels it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFrames;

impl FrameHost for BrowserFrames {
    type Handle = AnimationFrame;

    fn request_frame(&self, step: Box<dyn FnOnce(f64)>) -> AnimationFrame {
        request_animation_frame(step)
    }
}

pub fn bounding_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        top: r.top(),
        right: r.right(),
        bottom: r.bottom(),
        left: r.left(),
    }
}

pub fn viewport_rect() -> Option<Rect> {
    let w = web_sys::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Rect::viewport(width, height))
}

/// Re-measures `target` against the viewport on every window scroll and
/// resize. Used where IntersectionObserver is unavailable. Dropping the watch
/// removes the listeners.
pub struct GeometryWatch {
    _listeners: [EventListener; 2],
}

impl GeometryWatch {
    /// Reports the current visibility immediately, then again after each event.
    pub fn start(
        target: Element,
        margin: RootMargin,
        on_change: impl Fn(bool) + 'static,
    ) -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let measure = Rc::new(move || {
            let visible = viewport_rect().is_some_and(|viewport| {
                resolve_visibility(Some(bounding_rect(&target)), viewport, margin)
            });
            on_change(visible);
        });
        measure();

        let listen = |event: &'static str| {
            let measure = measure.clone();
            EventListener::new(&window, event, move |_| measure())
        };
        Ok(Self {
            _listeners: [listen("scroll"), listen("resize")],
        })
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
