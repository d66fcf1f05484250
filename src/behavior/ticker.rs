//! Fixed-cadence callback scheduling with a runtime-adjustable period.

use std::cell::RefCell;
use std::rc::Rc;

/// How often an [`IntervalTicker`] fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Every(u32),
    Disabled,
}

impl Period {
    /// A running period. Zero is raised to 1 ms so a ticker can never spin.
    pub fn every(millis: u32) -> Self {
        Period::Every(millis.max(1))
    }

    /// `Disabled` while `paused`, otherwise `self`.
    pub fn paused_if(self, paused: bool) -> Self {
        if paused {
            Period::Disabled
        } else {
            self
        }
    }

    pub fn millis(self) -> Option<u32> {
        match self {
            Period::Every(ms) => Some(ms),
            Period::Disabled => None,
        }
    }
}

/// Something that can run a callback repeatedly. Dropping the handle cancels it.
pub trait TimerHost {
    type Handle;

    fn set_interval(&self, millis: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Shared slot holding the most recently supplied callback.
///
/// Timers call through the slot, never through a closure captured when they
/// were scheduled, so replacing the callback takes effect on the next tick.
#[derive(Clone)]
pub struct LatestCallback(Rc<RefCell<Option<Box<dyn FnMut()>>>>);

impl LatestCallback {
    pub fn new(f: impl FnMut() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    pub fn noop() -> Self {
        Self::new(|| ())
    }

    pub fn replace(&self, f: impl FnMut() + 'static) {
        *self.0.borrow_mut() = Some(Box::new(f));
    }

    pub fn invoke(&self) {
        // Taken out for the call so the callback may replace itself.
        let taken = self.0.borrow_mut().take();
        if let Some(mut f) = taken {
            f();
            let mut slot = self.0.borrow_mut();
            if slot.is_none() {
                *slot = Some(f);
            }
        }
    }
}

/// Invokes a [`LatestCallback`] once per period until stopped or dropped.
pub struct IntervalTicker<H: TimerHost> {
    host: H,
    callback: LatestCallback,
    period: Period,
    handle: Option<H::Handle>,
}

impl<H: TimerHost> IntervalTicker<H> {
    pub fn start(host: H, callback: LatestCallback, period: Period) -> Self {
        let mut ticker = Self {
            host,
            callback,
            period,
            handle: None,
        };
        ticker.schedule();
        ticker
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn set_callback(&self, f: impl FnMut() + 'static) {
        self.callback.replace(f);
    }

    /// Reschedules on the new period. The old timer is cancelled first.
    pub fn set_period(&mut self, period: Period) {
        if period == self.period && (self.is_running() || period == Period::Disabled) {
            return;
        }
        self.period = period;
        self.handle = None;
        self.schedule();
    }

    pub fn stop(&mut self) {
        self.handle = None;
    }

    fn schedule(&mut self) {
        if let Period::Every(ms) = self.period {
            let callback = self.callback.clone();
            self.handle = Some(self.host.set_interval(ms, Box::new(move || callback.invoke())));
        }
    }
}
