//! Mode scheduler: runs the active pattern tick after tick and switches to a
//! random pattern every `switch_interval`.
//!
//! All mutable state (active mode, frame counter, mode start time) lives in
//! one [`Scheduler`] value that owns the sink, clock and random source. There
//! are no globals, so a test can build a scheduler around a [`MemorySink`]
//! and a [`ManualClock`] and run it for a simulated minute in microseconds.
//!
//! ## Rust concepts
//! - Generic struct over three traits (`PixelSink`, `Clock`, `Rng`), so the
//!   binary and the tests share one implementation with zero dynamic dispatch
//! - `?` to hand sink errors straight up to the caller
//! - `wrapping_add` for a counter that may overflow without panicking
//!
//! [`MemorySink`]: crate::sink::MemorySink
//! [`ManualClock`]: crate::clock::ManualClock

use crate::clock::Clock;
use crate::pattern::{Pattern, PatternSet, Step};
use crate::sink::PixelSink;
use crate::{StripError, is_running};
use rand::Rng;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

pub struct Scheduler<S, C, R> {
    sink: S,
    clock: C,
    rng: R,
    patterns: PatternSet,
    switch_interval: Duration,
    /// Index into `patterns`, always in range.
    active: usize,
    count: u64,
    mode_started: Duration,
    switches: u64,
}

impl<S: PixelSink, C: Clock, R: Rng> Scheduler<S, C, R> {
    /// Pick the first pattern at random and start its timer.
    pub fn new(
        sink: S,
        clock: C,
        mut rng: R,
        patterns: PatternSet,
        switch_interval: Duration,
    ) -> Self {
        let active = rng.random_range(0..patterns.count());
        let mode_started = clock.now();

        tracing::info!(
            "Starting with pattern '{}' ({} patterns, switching every {}s)",
            patterns.get(active),
            patterns.count(),
            switch_interval.as_secs_f32()
        );

        Self {
            sink,
            clock,
            rng,
            patterns,
            switch_interval,
            active,
            count: 0,
            mode_started,
            switches: 0,
        }
    }

    /// Run one tick of the active pattern, then maybe switch patterns.
    ///
    /// A sink failure aborts the tick and is returned as-is; the frame
    /// counter and mode are left untouched in that case.
    pub fn tick(&mut self) -> Result<(), StripError> {
        let pattern = self.active_pattern();
        let steps = pattern.steps(self.count, self.sink.pixel_count(), &mut self.rng);
        self.play(&steps)?;

        self.count = self.count.wrapping_add(1);
        self.maybe_switch();
        Ok(())
    }

    /// Tick until `running` is cleared. Only returns early on a sink error.
    pub fn run(&mut self, running: &AtomicBool) -> Result<(), StripError> {
        while is_running(running) {
            self.tick()?;
        }

        tracing::info!(
            "Stopped after {} frames and {} pattern switches",
            self.count,
            self.switches
        );
        Ok(())
    }

    fn play(&mut self, steps: &[Step]) -> Result<(), StripError> {
        for step in steps {
            match *step {
                Step::Set { index, color } => self.sink.set_pixel(index, color),
                Step::Fill(color) => self.sink.fill(color),
                Step::Render => self.sink.render()?,
                Step::Sleep(duration) => self.clock.sleep(duration),
            }
        }
        Ok(())
    }

    fn maybe_switch(&mut self) {
        let now = self.clock.now();
        if now.saturating_sub(self.mode_started) <= self.switch_interval {
            return;
        }

        let previous = self.active_pattern();
        // The current pattern may be picked again; that still restarts the timer
        self.active = self.rng.random_range(0..self.patterns.count());
        self.mode_started = now;
        self.switches += 1;

        tracing::info!(
            "Switching pattern: {} -> {} (frame {})",
            previous,
            self.active_pattern(),
            self.count
        );
    }

    pub fn active_mode(&self) -> usize {
        self.active
    }

    pub fn active_pattern(&self) -> Pattern {
        self.patterns.get(self.active)
    }

    pub fn frame_count(&self) -> u64 {
        self.count
    }

    /// How many times the switch interval has elapsed, including re-picks of
    /// the same pattern.
    pub fn mode_switches(&self) -> u64 {
        self.switches
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
