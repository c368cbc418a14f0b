//! Time source for the scheduler.
//!
//! Patterns pause between their steps and the scheduler measures how long the
//! current mode has been running. Both go through [`Clock`] so tests can swap
//! the wall clock for a [`ManualClock`] and run thirty seconds of animation
//! instantly.

use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Time elapsed since an arbitrary, fixed origin. Never goes backwards.
    fn now(&self) -> Duration;

    /// Block (or pretend to) for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// Monotonic wall clock backed by [`Instant`] and [`thread::sleep`].
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Fake clock that only moves when told to.
///
/// Clones share the same time, so a test can hand one clone to the scheduler
/// and keep another to inspect or advance it.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    /// Sleeping advances the shared time instead of blocking.
    fn sleep(&mut self, duration: Duration) {
        self.advance(duration);
    }
}
