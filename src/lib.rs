//! Animation engine for an addressable RGB LED strip.
//!
//! The crate is split along the boundary between the animation core and the
//! hardware:
//! - [`gradient`], [`pattern`] and [`effects`] compute what the strip shows
//! - [`scheduler`] runs one pattern at a time and switches on a timer
//! - [`sink`] and [`spi`] are where pixels leave the process
//! - [`clock`] supplies time and sleeping so the scheduler can be driven by a fake
//!
//! This module holds the pieces everything else shares: the strip
//! configuration, our color type and Ctrl+C handling for the binary.

pub mod clock;
pub mod effects;
pub mod error;
pub mod gradient;
pub mod pattern;
pub mod scheduler;
pub mod sink;
#[cfg(feature = "hardware")]
pub mod spi;

pub use error::StripError;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Number of pixels on the strip this was built for.
pub const DEFAULT_LED_COUNT: usize = 100;

/// How long one pattern stays active before the scheduler picks again.
pub const DEFAULT_SWITCH_INTERVAL: Duration = Duration::from_millis(30_000);

// ── Strip configuration ────────────────────────────────────────────

/// Startup constants for the animation core.
///
/// Both values are fixed for the lifetime of the process. The binary fills
/// them from command line flags; tests build them directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StripConfig {
    pub leds: usize,
    pub switch_interval: Duration,
}

impl StripConfig {
    pub fn new(leds: usize, switch_interval: Duration) -> Self {
        Self {
            leds,
            switch_interval,
        }
    }

    /// Number of bytes in one raw RGB frame (3 bytes per pixel).
    pub fn frame_byte_count(&self) -> usize {
        self.leds * 3
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            leds: DEFAULT_LED_COUNT,
            switch_interval: DEFAULT_SWITCH_INTERVAL,
        }
    }
}

// ── Color ──────────────────────────────────────────────────────────

/// One pixel worth of 8-bit RGB.
///
/// Kept independent of the SPI crate so patterns and tests build on any host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const CYAN: Color = Color::new(0, 255, 255);
    pub const MAGENTA: Color = Color::new(255, 0, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);

    /// Warm orange used as the background of the calmer patterns.
    pub const ORANGE: Color = Color::new(255, 25, 2);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Apply brightness scaling (0-100) to this color.
    pub fn apply_brightness(self, brightness: u8) -> Self {
        if brightness >= 100 {
            return self;
        }
        Self {
            r: ((self.r as u16 * brightness as u16) / 100) as u8,
            g: ((self.g as u16 * brightness as u16) / 100) as u8,
            b: ((self.b as u16 * brightness as u16) / 100) as u8,
        }
    }

    /// Scale every channel by `level / 255`, rounding down.
    pub fn scale(self, level: u8) -> Self {
        Self {
            r: ((self.r as u16 * level as u16) / 255) as u8,
            g: ((self.g as u16 * level as u16) / 255) as u8,
            b: ((self.b as u16 * level as u16) / 255) as u8,
        }
    }

    /// The three channels in wire order.
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

// ── Signal handling ────────────────────────────────────────────────

/// Set up a Ctrl+C handler that clears the returned `running` flag.
///
/// The scheduler checks the flag between ticks, so a pattern that is halfway
/// through its steps always finishes before the loop exits.
pub fn setup_signal_handler() -> Result<Arc<AtomicBool>, ctrlc::Error> {
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })?;

    Ok(running)
}

/// Check if the main loop should keep running.
pub fn is_running(running: &AtomicBool) -> bool {
    running.load(Ordering::SeqCst)
}

// ── Tests ──────────────────────────────────────────────────────────
