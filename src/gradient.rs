//! Sine-wave color generator.
//!
//! Each channel follows its own sine wave over a scalar position. Patterns
//! feed it `pixel index + frame counter` (scaled) so the colors drift along
//! the strip as the counter grows.

use crate::Color;

/// Which channels a gradient is allowed to light.
///
/// A disabled channel multiplies its wave by zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelMask {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl ChannelMask {
    pub const ALL: ChannelMask = ChannelMask::new(true, true, true);
    pub const NO_BLUE: ChannelMask = ChannelMask::new(true, true, false);

    pub const fn new(red: bool, green: bool, blue: bool) -> Self {
        Self { red, green, blue }
    }

    fn multipliers(self) -> [f64; 3] {
        [self.red, self.green, self.blue].map(|on| if on { 1.0 } else { 0.0 })
    }
}

/// Frequencies and phases for the red, green and blue waves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SineGradient {
    pub frequencies: [f64; 3],
    pub phases: [f64; 3],
}

impl SineGradient {
    /// The amber/cyan rainbow used by the color-cycle patterns.
    pub const RAINBOW: SineGradient = SineGradient::new([0.3, 0.3, 0.3], [0.0, 2.0, 3.0]);

    pub const fn new(frequencies: [f64; 3], phases: [f64; 3]) -> Self {
        Self {
            frequencies,
            phases,
        }
    }

    /// Color at position `i` with the channels in `mask` enabled.
    ///
    /// Every channel is clamped to `0..=255` on both sides, so odd inputs
    /// (huge positions, NaN, negative scales) can never wrap a byte.
    pub fn color_at(&self, i: f64, mask: ChannelMask) -> Color {
        let m = mask.multipliers();
        let channel = |c: usize| channel_value(self.frequencies[c], self.phases[c], i, m[c]);
        Color::new(channel(0), channel(1), channel(2))
    }
}

fn channel_value(frequency: f64, phase: f64, i: f64, multiplier: f64) -> u8 {
    let wave = (frequency * i + phase).sin() * 0.5 + 0.5;
    let value = (wave * 255.0 * multiplier).floor();
    // `as` maps NaN to 0 and saturates, the clamp keeps the intent explicit
    value.clamp(0.0, 255.0) as u8
}
