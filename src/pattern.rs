//! Animation patterns.
//!
//! A pattern does not touch the hardware itself. For each scheduler tick it
//! returns the ordered list of [`Step`]s that make up that tick: pixel writes,
//! renders and pauses. The scheduler plays the list from start to finish
//! before it does anything else, so a pattern's writes can never interleave
//! with another pattern's, and every write lands before the render that
//! follows it.
//!
//! The two patterns the strip was built around live here; the rest are in
//! [`crate::effects`].

use crate::effects;
use crate::gradient::{ChannelMask, SineGradient};
use crate::{Color, StripError};
use clap::ValueEnum;
use rand::Rng;
use std::time::Duration;

/// One discrete action of a pattern tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Write one pixel.
    Set { index: usize, color: Color },
    /// Write every pixel on the strip.
    Fill(Color),
    /// Flush the buffer to the strip.
    Render,
    /// Pause before the next step.
    Sleep(Duration),
}

// ── Pattern registry ─────────────────────────────────────────────────

/// Every pattern the scheduler can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Pattern {
    /// Amber/cyan sine gradient drifting along the strip, blue off.
    ColorCycle,
    /// Orange strip with up to two gray pixels blinking for a moment.
    RandomBlink,
    /// Whole strip fading through the full sine gradient.
    GradientFade,
    /// Bright orange band sweeping over an orange background.
    OrangeWave,
    /// White head with a fading tail sweeping over black.
    WhiteWave,
    /// Two yellow-white sparkles on orange.
    Sparkle,
    /// Calm orange with a rare gray sparkle.
    SlowSparkle,
    /// Every pixel a random color.
    RandomColors,
    /// Red, green and cyan dots chasing along the strip.
    ColorChase,
    /// Three rainbow bands chasing in from the start of the strip.
    RainbowChase,
    /// Halves of the strip flashing red and blue.
    Police,
    /// Three random segments strobing white.
    Strobe,
    /// Half of twenty colored segments flashing at random.
    Chaos,
    /// Red and blue racing towards each other from both ends.
    Race,
    /// A color pulse growing out of the middle and shrinking back.
    Pulse,
    /// Four meteors with fading tails shooting across the strip.
    Meteor,
}

impl Pattern {
    pub fn name(self) -> &'static str {
        match self {
            Pattern::ColorCycle => "color-cycle",
            Pattern::RandomBlink => "random-blink",
            Pattern::GradientFade => "gradient-fade",
            Pattern::OrangeWave => "orange-wave",
            Pattern::WhiteWave => "white-wave",
            Pattern::Sparkle => "sparkle",
            Pattern::SlowSparkle => "slow-sparkle",
            Pattern::RandomColors => "random-colors",
            Pattern::ColorChase => "color-chase",
            Pattern::RainbowChase => "rainbow-chase",
            Pattern::Police => "police",
            Pattern::Strobe => "strobe",
            Pattern::Chaos => "chaos",
            Pattern::Race => "race",
            Pattern::Pulse => "pulse",
            Pattern::Meteor => "meteor",
        }
    }

    /// Steps for one tick at frame `count` on a strip of `leds` pixels.
    pub fn steps<R: Rng>(self, count: u64, leds: usize, rng: &mut R) -> Vec<Step> {
        match self {
            Pattern::ColorCycle => color_cycle(count, leds),
            Pattern::RandomBlink => random_blink(leds, rng),
            Pattern::GradientFade => effects::gradient_fade(count),
            Pattern::OrangeWave => effects::orange_wave(count, leds),
            Pattern::WhiteWave => effects::white_wave(count, leds),
            Pattern::Sparkle => effects::sparkle(leds, rng),
            Pattern::SlowSparkle => effects::slow_sparkle(count, leds, rng),
            Pattern::RandomColors => effects::random_colors(leds, rng),
            Pattern::ColorChase => effects::color_chase(count, leds),
            Pattern::RainbowChase => effects::rainbow_chase(count, leds),
            Pattern::Police => effects::police(count, leds),
            Pattern::Strobe => effects::strobe(leds, rng),
            Pattern::Chaos => effects::chaos(leds, rng),
            Pattern::Race => effects::race(count, leds),
            Pattern::Pulse => effects::pulse(count, leds),
            Pattern::Meteor => effects::meteor(leds, rng),
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered, non-empty list of patterns the scheduler picks from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn new(patterns: Vec<Pattern>) -> Result<Self, StripError> {
        if patterns.is_empty() {
            return Err(StripError::EmptyPatternSet);
        }
        Ok(Self { patterns })
    }

    pub fn count(&self) -> usize {
        self.patterns.len()
    }

    /// Pattern at `index`, which must be below [`PatternSet::count`].
    pub fn get(&self, index: usize) -> Pattern {
        self.patterns[index]
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self {
            patterns: vec![Pattern::ColorCycle, Pattern::RandomBlink],
        }
    }
}

// ── Color cycle ──────────────────────────────────────────────────────

pub const COLOR_CYCLE_DELAY: Duration = Duration::from_millis(100);

/// Position step between neighbouring pixels (and between frames).
const COLOR_CYCLE_SPEED: f64 = 0.1;

/// Paint pixel `j` with the rainbow at `(j + count) * 0.1`, blue disabled,
/// then wait and render.
pub fn color_cycle(count: u64, leds: usize) -> Vec<Step> {
    let mut steps = Vec::with_capacity(leds + 2);

    for j in 0..leds {
        let position = (j as u64).wrapping_add(count) as f64 * COLOR_CYCLE_SPEED;
        let color = SineGradient::RAINBOW.color_at(position, ChannelMask::NO_BLUE);
        steps.push(Step::Set { index: j, color });
    }

    steps.push(Step::Sleep(COLOR_CYCLE_DELAY));
    steps.push(Step::Render);
    steps
}

// ── Random blink ─────────────────────────────────────────────────────

pub const BLINK_GRAY: Color = Color::new(180, 180, 180);
pub const MAX_BLINKS: usize = 2;
pub const BLINK_ON_DELAY: Duration = Duration::from_millis(10);
pub const BLINK_OFF_DELAY: Duration = Duration::from_millis(100);

/// Orange strip, 0 to 2 random pixels flash gray for a moment, back to orange.
///
/// The same pixel may be picked twice; it is simply written again.
pub fn random_blink<R: Rng>(leds: usize, rng: &mut R) -> Vec<Step> {
    let mut steps = vec![Step::Fill(Color::ORANGE)];

    let blinks = rng.random_range(0..=MAX_BLINKS);
    if leds > 0 {
        for _ in 0..blinks {
            let index = rng.random_range(0..leds);
            steps.push(Step::Set {
                index,
                color: BLINK_GRAY,
            });
        }
    }

    steps.extend([
        Step::Render,
        Step::Sleep(BLINK_ON_DELAY),
        Step::Fill(Color::ORANGE),
        Step::Render,
        Step::Sleep(BLINK_OFF_DELAY),
    ]);
    steps
}
