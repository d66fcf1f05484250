//! Frame-synchronized count-up from 0 to a target integer.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub const DEFAULT_DURATION_MS: u32 = 1200;

/// Displayed value at progress `p` (clamped to `0..=1`). Exactly `target` at `p >= 1`.
pub fn value_at(target: u64, p: f64) -> u64 {
    if p >= 1.0 {
        return target;
    }
    if p.is_nan() || p <= 0.0 {
        return 0;
    }
    ((target as f64 * p).round() as u64).min(target)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStep {
    pub value: u64,
    pub finished: bool,
}

/// Animation state, advanced by frame timestamps in milliseconds.
///
/// The first frame seen fixes the start time. Displayed values never decrease,
/// even if a host hands out a timestamp older than the previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    target: u64,
    duration_ms: u32,
    started_at: Option<f64>,
    value: u64,
    finished: bool,
}

impl CountUp {
    pub fn new(target: u64, duration_ms: u32) -> Self {
        Self {
            target,
            duration_ms,
            started_at: None,
            value: 0,
            finished: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn progress(&self, now: f64) -> f64 {
        let Some(start) = self.started_at else { return 0.0 };
        if self.duration_ms == 0 {
            return 1.0;
        }
        ((now - start) / f64::from(self.duration_ms)).clamp(0.0, 1.0)
    }

    pub fn step(&mut self, now: f64) -> FrameStep {
        if self.finished {
            return FrameStep {
                value: self.value,
                finished: true,
            };
        }
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
        let p = self.progress(now);
        self.value = self.value.max(value_at(self.target, p));
        self.finished = p >= 1.0;
        FrameStep {
            value: self.value,
            finished: self.finished,
        }
    }
}

/// Something that runs a callback on the next display frame. Dropping the
/// handle cancels a frame that has not run yet.
pub trait FrameHost: Clone + 'static {
    type Handle: 'static;

    fn request_frame(&self, step: Box<dyn FnOnce(f64)>) -> Self::Handle;
}

struct Animation<H: FrameHost> {
    state: CountUp,
    on_update: Rc<dyn Fn(u64)>,
    // Held so dropping the animation cancels the requested frame.
    _frame: Option<H::Handle>,
}

/// Drives a [`CountUp`] one frame at a time, reporting each value to `on_update`.
///
/// Frame callbacks only hold a weak reference, so dropping the animator
/// cancels the pending frame and nothing runs afterwards.
pub struct CountUpAnimator<H: FrameHost> {
    animation: Rc<RefCell<Animation<H>>>,
}

impl<H: FrameHost> CountUpAnimator<H> {
    pub fn start(
        host: H,
        target: u64,
        duration_ms: u32,
        on_update: impl Fn(u64) + 'static,
    ) -> Self {
        let animation = Rc::new(RefCell::new(Animation {
            state: CountUp::new(target, duration_ms),
            on_update: Rc::new(on_update),
            _frame: None,
        }));
        request_next(&host, Rc::downgrade(&animation));
        Self { animation }
    }

    /// [`start`](Self::start) only when `active`. An inactive gate requests no
    /// frame and never reports a value, so the display stays at 0.
    pub fn start_when(
        active: bool,
        host: H,
        target: u64,
        duration_ms: u32,
        on_update: impl Fn(u64) + 'static,
    ) -> Option<Self> {
        active.then(|| Self::start(host, target, duration_ms, on_update))
    }

    pub fn value(&self) -> u64 {
        self.animation.borrow().state.value()
    }

    pub fn is_finished(&self) -> bool {
        self.animation.borrow().state.is_finished()
    }
}

fn request_next<H: FrameHost>(host: &H, animation: Weak<RefCell<Animation<H>>>) {
    let Some(strong) = animation.upgrade() else { return };
    let next_host = host.clone();
    let handle = host.request_frame(Box::new(move |now| on_frame(next_host, animation, now)));
    strong.borrow_mut()._frame = Some(handle);
}

fn on_frame<H: FrameHost>(host: H, animation: Weak<RefCell<Animation<H>>>, now: f64) {
    let Some(strong) = animation.upgrade() else { return };
    let (step, on_update) = {
        let mut a = strong.borrow_mut();
        (a.state.step(now), a.on_update.clone())
    };
    on_update(step.value);
    if !step.finished {
        request_next(&host, animation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::manual::ManualFrames;
    use crate::behavior::Reveal;

    fn recorder() -> (Rc<RefCell<Vec<u64>>>, impl Fn(u64) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        (seen, move |v| s.borrow_mut().push(v))
    }

    #[test]
    fn value_at_converges_exactly() {
        assert_eq!(value_at(2000, 1.0), 2000);
        assert_eq!(value_at(30, 0.5), 15);
        assert_eq!(value_at(120, 0.0), 0);
        assert_eq!(value_at(7, 2.5), 7);
        assert_eq!(value_at(7, f64::NAN), 0);
    }

    #[test]
    fn first_frame_shows_zero() {
        let mut c = CountUp::new(120, 1200);
        assert_eq!(
            c.step(500.0),
            FrameStep {
                value: 0,
                finished: false
            }
        );
        assert_eq!(c.step(1100.0).value, 60);
        assert_eq!(
            c.step(1700.0),
            FrameStep {
                value: 120,
                finished: true
            }
        );
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut c = CountUp::new(30, 0);
        assert_eq!(
            c.step(0.0),
            FrameStep {
                value: 30,
                finished: true
            }
        );
    }

    #[test]
    fn backwards_timestamp_does_not_decrease() {
        let mut c = CountUp::new(100, 1000);
        c.step(0.0);
        c.step(600.0);
        assert_eq!(c.step(100.0).value, 60);
    }

    #[test]
    fn animator_runs_to_target_monotonically() {
        let frames = ManualFrames::new();
        let (seen, on_update) = recorder();
        let animator = CountUpAnimator::start(frames.clone(), 2000, 1200, on_update);

        let mut now = 0.0;
        while frames.pending() > 0 {
            frames.run_frame(now);
            now += 16.7;
        }

        let seen = seen.borrow();
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(seen.last().copied(), Some(2000));
        assert!(animator.is_finished());
        assert_eq!(animator.value(), 2000);
    }

    #[test]
    fn zero_target_stays_zero() {
        let frames = ManualFrames::new();
        let (seen, on_update) = recorder();
        let _animator = CountUpAnimator::start(frames.clone(), 0, 1200, on_update);
        frames.run_frame(0.0);
        frames.run_frame(2000.0);
        assert_eq!(*seen.borrow(), vec![0, 0]);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn no_updates_before_the_first_frame() {
        let frames = ManualFrames::new();
        let (seen, on_update) = recorder();
        let animator = CountUpAnimator::start(frames.clone(), 30, 1200, on_update);
        assert_eq!(animator.value(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn drop_mid_flight_stops_the_loop() {
        let frames = ManualFrames::new();
        let (seen, on_update) = recorder();
        let animator = CountUpAnimator::start(frames.clone(), 120, 1200, on_update);

        frames.run_frame(0.0);
        frames.run_frame(300.0);
        assert_eq!(frames.pending(), 1);

        drop(animator);
        assert_eq!(frames.pending(), 0);
        assert_eq!(frames.run_frame(2000.0), 0);
        assert_eq!(*seen.borrow(), vec![0, 30]);
    }

    #[test]
    fn restart_begins_from_zero() {
        let frames = ManualFrames::new();
        let (seen, on_update) = recorder();
        let first = CountUpAnimator::start(frames.clone(), 100, 1000, on_update);
        frames.run_frame(0.0);
        frames.run_frame(500.0);
        drop(first);

        let (again, on_update) = recorder();
        let _second = CountUpAnimator::start(frames.clone(), 40, 1000, on_update);
        frames.run_frame(600.0);
        frames.run_frame(1600.0);

        assert_eq!(*seen.borrow(), vec![0, 50]);
        assert_eq!(*again.borrow(), vec![0, 40]);
    }

    #[test]
    fn inactive_gate_never_counts() {
        let frames = ManualFrames::new();
        let (seen, on_update) = recorder();
        let animator =
            CountUpAnimator::start_when(false, frames.clone(), 2000, 1200, on_update);

        assert!(animator.is_none());
        assert_eq!(frames.pending(), 0);
        assert_eq!(frames.run_frame(5000.0), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unseen_strip_keeps_counter_at_zero() {
        let frames = ManualFrames::new();
        let (seen, on_update) = recorder();
        let reveal = [false, false]
            .into_iter()
            .fold(Reveal::default(), Reveal::observe);
        let _animator = CountUpAnimator::start_when(
            reveal.is_revealed(),
            frames.clone(),
            120,
            1200,
            on_update,
        );
        frames.run_frame(0.0);
        frames.run_frame(2000.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn active_gate_starts_counting() {
        let frames = ManualFrames::new();
        let (seen, on_update) = recorder();
        let reveal = Reveal::default().observe(true).observe(false);
        let animator = CountUpAnimator::start_when(
            reveal.is_revealed(),
            frames.clone(),
            120,
            1200,
            on_update,
        );

        assert!(animator.is_some());
        frames.run_frame(0.0);
        frames.run_frame(1200.0);
        assert_eq!(*seen.borrow(), vec![0, 120]);
    }
}
