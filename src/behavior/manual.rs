//! Simulated timer and frame hosts for driving behaviors from tests.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::count_up::FrameHost;
use super::ticker::TimerHost;

type Tick = Rc<RefCell<Box<dyn FnMut()>>>;

struct TimerEntry {
    id: u64,
    period: u64,
    next_due: u64,
    tick: Tick,
}

#[derive(Default)]
struct ClockState {
    now: u64,
    next_id: u64,
    timers: Vec<TimerEntry>,
}

/// Virtual millisecond clock. Timers only fire inside [`ManualClock::advance`].
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

pub struct TimerToken {
    id: u64,
    state: Weak<RefCell<ClockState>>,
}

impl Drop for TimerToken {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().timers.retain(|t| t.id != self.id);
        }
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.state.borrow().now
    }

    pub fn active_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Moves time forward, firing every due timer in deadline order.
    pub fn advance(&self, millis: u64) {
        let target = self.now() + millis;
        loop {
            let due = {
                let state = self.state.borrow();
                state
                    .timers
                    .iter()
                    .filter(|t| t.next_due <= target)
                    .min_by_key(|t| (t.next_due, t.id))
                    .map(|t| (t.id, t.next_due, t.tick.clone()))
            };
            let Some((id, at, tick)) = due else { break };
            {
                let mut state = self.state.borrow_mut();
                state.now = at;
                if let Some(t) = state.timers.iter_mut().find(|t| t.id == id) {
                    t.next_due += t.period;
                }
            }
            (*tick.borrow_mut())();
        }
        self.state.borrow_mut().now = target;
    }
}

impl TimerHost for ManualClock {
    type Handle = TimerToken;

    fn set_interval(&self, millis: u32, tick: Box<dyn FnMut()>) -> TimerToken {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let period = u64::from(millis.max(1));
        let next_due = state.now + period;
        state.timers.push(TimerEntry {
            id,
            period,
            next_due,
            tick: Rc::new(RefCell::new(tick)),
        });
        TimerToken {
            id,
            state: Rc::downgrade(&self.state),
        }
    }
}

#[derive(Default)]
struct FrameQueue {
    next_id: u64,
    pending: Vec<(u64, Box<dyn FnOnce(f64)>)>,
}

/// Frame scheduler that only runs callbacks inside [`ManualFrames::run_frame`].
#[derive(Clone, Default)]
pub struct ManualFrames {
    queue: Rc<RefCell<FrameQueue>>,
}

pub struct FrameToken {
    id: u64,
    queue: Weak<RefCell<FrameQueue>>,
}

impl Drop for FrameToken {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().pending.retain(|(id, _)| *id != self.id);
        }
    }
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Runs every callback requested before this call, returning how many ran.
    pub fn run_frame(&self, now: f64) -> usize {
        let due = std::mem::take(&mut self.queue.borrow_mut().pending);
        let count = due.len();
        for (_, step) in due {
            step(now);
        }
        count
    }
}

impl FrameHost for ManualFrames {
    type Handle = FrameToken;

    fn request_frame(&self, step: Box<dyn FnOnce(f64)>) -> FrameToken {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        queue.pending.push((id, step));
        FrameToken {
            id,
            queue: Rc::downgrade(&self.queue),
        }
    }
}
