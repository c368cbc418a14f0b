//! The rest of the pattern library: waves, sparkles and the loud ones.
//!
//! Same contract as [`crate::pattern`]: each function returns the steps of a
//! single tick and derives its position in the animation from the frame
//! counter. Nothing here keeps state between ticks.

use crate::Color;
use crate::gradient::{ChannelMask, SineGradient};
use crate::pattern::{BLINK_GRAY, Step};
use rand::Rng;
use std::time::Duration;

/// `count` folded into `0..modulus`; 0 for an empty strip.
fn position(count: u64, modulus: usize) -> usize {
    (count % modulus.max(1) as u64) as usize
}

fn span(start: usize, end: usize, color: Color) -> impl Iterator<Item = Step> {
    (start..end).map(move |index| Step::Set { index, color })
}

// ── Gradient fade ────────────────────────────────────────────────────

pub fn gradient_fade(count: u64) -> Vec<Step> {
    let color = SineGradient::RAINBOW.color_at(count as f64 * 0.1, ChannelMask::ALL);
    vec![
        Step::Fill(color),
        Step::Render,
        Step::Sleep(Duration::from_millis(100)),
    ]
}

// ── Waves ────────────────────────────────────────────────────────────

pub const WAVE_ORANGE: Color = Color::new(255, 50, 3);
const ORANGE_WAVE_LENGTH: usize = 15;
const WHITE_WAVE_LENGTH: usize = 10;

/// A 15 pixel bright band moving one pixel per tick, wrapping at the end.
/// Strips shorter than the band are lit end to end.
pub fn orange_wave(count: u64, leds: usize) -> Vec<Step> {
    let head = position(count, leds);
    let mut steps = vec![Step::Fill(Color::ORANGE)];

    steps.extend((0..ORANGE_WAVE_LENGTH.min(leds)).map(|k| Step::Set {
        index: (head + k) % leds.max(1),
        color: WAVE_ORANGE,
    }));
    steps.extend([Step::Render, Step::Sleep(Duration::from_millis(50))]);
    steps
}

/// Black strip with a 10 pixel white streak that brightens towards its end.
/// The streak is cut off at the end of the strip instead of wrapping.
pub fn white_wave(count: u64, leds: usize) -> Vec<Step> {
    let start = position(count, leds);
    let mut steps = vec![Step::Fill(Color::BLACK)];

    for k in 0..WHITE_WAVE_LENGTH {
        let index = start + k;
        if index >= leds {
            break;
        }
        let level = (255 / ((WHITE_WAVE_LENGTH - k) * 2 + 1)) as u8;
        steps.push(Step::Set {
            index,
            color: Color::new(level, level, level),
        });
    }

    steps.extend([Step::Render, Step::Sleep(Duration::from_millis(10))]);
    steps
}

// ── Random ───────────────────────────────────────────────────────────

pub const SPARKLE_COLOR: Color = Color::new(200, 200, 80);
const SPARKLES: usize = 2;

pub fn sparkle<R: Rng>(leds: usize, rng: &mut R) -> Vec<Step> {
    let mut steps = vec![Step::Fill(Color::ORANGE)];

    if leds > 0 {
        for _ in 0..SPARKLES {
            steps.push(Step::Set {
                index: rng.random_range(0..leds),
                color: SPARKLE_COLOR,
            });
        }
    }

    steps.extend([Step::Render, Step::Sleep(Duration::from_millis(40))]);
    steps
}

const SLOW_SPARKLE_EVERY: u64 = 100;
const SLOW_SPARKLE_ON: Duration = Duration::from_millis(50);
const SLOW_SPARKLE_HOLD: Duration = Duration::from_secs(2);

/// Plain orange, held for two seconds a tick. Every 100th tick one random
/// pixel flashes gray first.
pub fn slow_sparkle<R: Rng>(count: u64, leds: usize, rng: &mut R) -> Vec<Step> {
    let mut steps = vec![Step::Fill(Color::ORANGE)];

    if count % SLOW_SPARKLE_EVERY == 0 && leds > 0 {
        steps.push(Step::Set {
            index: rng.random_range(0..leds),
            color: BLINK_GRAY,
        });
    }

    steps.extend([
        Step::Render,
        Step::Sleep(SLOW_SPARKLE_ON),
        Step::Fill(Color::ORANGE),
        Step::Render,
        Step::Sleep(SLOW_SPARKLE_HOLD),
    ]);
    steps
}

pub fn random_colors<R: Rng>(leds: usize, rng: &mut R) -> Vec<Step> {
    let mut steps: Vec<Step> = (0..leds)
        .map(|index| Step::Set {
            index,
            color: Color::new(rng.random(), rng.random(), rng.random()),
        })
        .collect();

    steps.extend([Step::Render, Step::Sleep(Duration::from_millis(500))]);
    steps
}

// ── Chase ────────────────────────────────────────────────────────────

const CHASE: [Color; 9] = [
    Color::RED,
    Color::BLACK,
    Color::BLACK,
    Color::GREEN,
    Color::BLACK,
    Color::BLACK,
    Color::CYAN,
    Color::BLACK,
    Color::BLACK,
];

pub fn color_chase(count: u64, leds: usize) -> Vec<Step> {
    let shift = position(count, CHASE.len());
    let mut steps: Vec<Step> = (0..leds)
        .map(|index| Step::Set {
            index,
            color: CHASE[(index + shift) % CHASE.len()],
        })
        .collect();

    steps.extend([Step::Render, Step::Sleep(Duration::from_millis(500))]);
    steps
}

const RAINBOW: [Color; 7] = [
    Color::RED,
    Color::new(255, 127, 0),
    Color::YELLOW,
    Color::GREEN,
    Color::BLUE,
    Color::new(75, 0, 130),
    Color::new(148, 0, 211),
];
const RAINBOW_BANDS: usize = 3;
const RAINBOW_BAND_WIDTH: usize = 8;
const RAINBOW_BAND_GAP: usize = 2 * RAINBOW_BAND_WIDTH;

/// Three 8 pixel bands, 16 pixels apart, run in from pixel 0 one pixel per
/// tick. A pass lasts `leds + 24` ticks and every pass moves each band on to
/// the next rainbow color.
pub fn rainbow_chase(count: u64, leds: usize) -> Vec<Step> {
    let pass = (leds + RAINBOW_BANDS * RAINBOW_BAND_WIDTH) as u64;
    let step = (count % pass) as usize;
    let cycle = ((count / pass) % RAINBOW.len() as u64) as usize;

    let mut steps = vec![Step::Fill(Color::BLACK)];
    for band in 0..RAINBOW_BANDS {
        let offset = band * RAINBOW_BAND_GAP;
        let start = step.saturating_sub(offset);
        let end = (step + RAINBOW_BAND_WIDTH).saturating_sub(offset).min(leds);
        let color = RAINBOW[(band + cycle) % RAINBOW.len()];
        steps.extend(span(start, end, color));
    }

    steps.extend([Step::Render, Step::Sleep(Duration::from_millis(40))]);
    steps
}

// ── Flashing ─────────────────────────────────────────────────────────

const POLICE_FLASHES_PER_HALF: u64 = 10;
const POLICE_FLASH_RATE: Duration = Duration::from_millis(100);

/// One on/off flash per tick: ten ticks of red on the first half, then ten of
/// blue on the second half.
pub fn police(count: u64, leds: usize) -> Vec<Step> {
    let half = leds / 2;
    let first_half = (count / POLICE_FLASHES_PER_HALF) % 2 == 0;
    let (start, end, color) = if first_half {
        (0, half, Color::RED)
    } else {
        (half, leds, Color::BLUE)
    };

    let mut steps = vec![Step::Fill(Color::BLACK)];
    steps.extend(span(start, end, color));
    steps.extend(blink_off(POLICE_FLASH_RATE));
    steps
}

const STROBE_SEGMENTS: usize = 10;
const STROBE_LIT_SEGMENTS: usize = 3;
const STROBE_FLASHES: usize = 10;
const STROBE_RATE: Duration = Duration::from_millis(50);

/// Three distinct random tenths of the strip strobe white ten times.
pub fn strobe<R: Rng>(leds: usize, rng: &mut R) -> Vec<Step> {
    let segment = leds / STROBE_SEGMENTS;
    let lit = rand::seq::index::sample(rng, STROBE_SEGMENTS, STROBE_LIT_SEGMENTS);

    let mut flash = vec![Step::Fill(Color::BLACK)];
    for s in lit.iter() {
        let start = s * segment;
        flash.extend(span(start, (start + segment).min(leds), Color::WHITE));
    }
    flash.extend(blink_off(STROBE_RATE));

    flash.repeat(STROBE_FLASHES)
}

const CHAOS_COLORS: [Color; 7] = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::YELLOW,
    Color::MAGENTA,
    Color::CYAN,
    Color::WHITE,
];
const CHAOS_SEGMENTS: usize = 20;
const CHAOS_FLASHES: usize = 2;
const CHAOS_RATE: Duration = Duration::from_millis(60);

/// Twenty segments each get a random color for the tick. Each flash lights
/// a random half of them.
pub fn chaos<R: Rng>(leds: usize, rng: &mut R) -> Vec<Step> {
    let segment = leds / CHAOS_SEGMENTS;
    let colors: Vec<Color> = (0..CHAOS_SEGMENTS)
        .map(|_| CHAOS_COLORS[rng.random_range(0..CHAOS_COLORS.len())])
        .collect();

    let mut steps = Vec::new();
    for _ in 0..CHAOS_FLASHES {
        steps.push(Step::Fill(Color::BLACK));
        for s in rand::seq::index::sample(rng, CHAOS_SEGMENTS, CHAOS_SEGMENTS / 2).iter() {
            let start = s * segment;
            steps.extend(span(start, (start + segment).min(leds), colors[s]));
        }
        steps.extend(blink_off(CHAOS_RATE));
    }
    steps
}

/// Render what was drawn, hold it, black out and hold again.
fn blink_off(hold: Duration) -> [Step; 5] {
    [
        Step::Render,
        Step::Sleep(hold),
        Step::Fill(Color::BLACK),
        Step::Render,
        Step::Sleep(hold),
    ]
}

// ── Race ─────────────────────────────────────────────────────────────

const RACE_SPEED: Duration = Duration::from_millis(30);
const COLLISION_HOLD: Duration = Duration::from_millis(80);
const COLLISION_RADIUS: usize = 2;

/// Red runs up from pixel 0 while blue runs down from the last pixel, one
/// pixel per tick. When they meet in the middle the centre flashes magenta.
pub fn race(count: u64, leds: usize) -> Vec<Step> {
    let middle = leds / 2;
    let p = position(count, middle + 1);

    let mut steps = vec![Step::Fill(Color::BLACK)];
    if p < leds {
        steps.push(Step::Set {
            index: p,
            color: Color::RED,
        });
    }
    if let Some(index) = leds.checked_sub(1 + p) {
        steps.push(Step::Set {
            index,
            color: Color::BLUE,
        });
    }
    steps.extend([Step::Render, Step::Sleep(RACE_SPEED)]);

    if p == middle {
        let start = middle.saturating_sub(COLLISION_RADIUS);
        let end = (middle + COLLISION_RADIUS + 1).min(leds);
        steps.push(Step::Fill(Color::BLACK));
        steps.extend(span(start, end, Color::MAGENTA));
        steps.extend(blink_off(COLLISION_HOLD));
    }

    steps
}

// ── Meteor ───────────────────────────────────────────────────────────

const METEOR_COLORS: [Color; 6] = [
    Color::new(255, 100, 50),
    Color::new(100, 255, 255),
    Color::new(255, 50, 255),
    Color::new(50, 255, 100),
    Color::new(255, 255, 100),
    Color::new(100, 100, 255),
];
const METEORS: usize = 4;
const METEOR_TAIL: usize = 12;
const METEOR_SPEED: Duration = Duration::from_millis(50);
const METEOR_PAUSE: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug)]
struct Meteor {
    /// May be off either end of the strip.
    head: i64,
    /// +1 runs towards the end of the strip, -1 towards pixel 0.
    direction: i64,
    color: Color,
}

impl Meteor {
    fn random<R: Rng>(leds: usize, rng: &mut R) -> Self {
        Self {
            head: rng.random_range(-(METEOR_TAIL as i64)..=leds as i64),
            direction: if rng.random() { 1 } else { -1 },
            color: METEOR_COLORS[rng.random_range(0..METEOR_COLORS.len())],
        }
    }

    /// The head at full color and 11 pixels behind it, each 1/12 dimmer than
    /// the one before. Pixels off the strip are skipped.
    fn trail(self, leds: usize) -> impl Iterator<Item = Step> {
        (0..METEOR_TAIL).filter_map(move |i| {
            let index = usize::try_from(self.head - i as i64 * self.direction).ok()?;
            if index >= leds {
                return None;
            }
            let level = (METEOR_TAIL - i) as u16;
            let fade = |c: u8| (c as u16 * level / METEOR_TAIL as u16) as u8;
            Some(Step::Set {
                index,
                color: Color::new(fade(self.color.r), fade(self.color.g), fade(self.color.b)),
            })
        })
    }
}

/// Four meteors from random places in random directions, played out over
/// `leds + 12` frames, then a short black pause. Where meteors overlap the
/// later one wins.
pub fn meteor<R: Rng>(leds: usize, rng: &mut R) -> Vec<Step> {
    let mut meteors: Vec<Meteor> = (0..METEORS).map(|_| Meteor::random(leds, rng)).collect();

    let mut steps = Vec::new();
    for _ in 0..leds + METEOR_TAIL {
        steps.push(Step::Fill(Color::BLACK));
        for m in &mut meteors {
            m.head += m.direction;
            steps.extend(m.trail(leds));
        }
        steps.extend([Step::Render, Step::Sleep(METEOR_SPEED)]);
    }

    steps.extend([
        Step::Fill(Color::BLACK),
        Step::Render,
        Step::Sleep(METEOR_PAUSE),
    ]);
    steps
}

// ── Pulse ────────────────────────────────────────────────────────────

const PULSE_COLORS: [Color; 6] = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::YELLOW,
    Color::MAGENTA,
    Color::CYAN,
];
const PULSE_FADE_PER_PIXEL: usize = 20;

/// The radius grows from 0 to `leds / 2` and shrinks back, one step per
/// tick. Pixels dim by 20 per step away from the centre. Each full pulse
/// uses the next color.
pub fn pulse(count: u64, leds: usize) -> Vec<Step> {
    let center = leds / 2;
    let max_radius = leds / 2;
    let period = 2 * (max_radius + 1);

    let phase = position(count, period);
    let radius = if phase <= max_radius {
        phase
    } else {
        period - 1 - phase
    };
    let color = PULSE_COLORS[((count / period as u64) % PULSE_COLORS.len() as u64) as usize];

    let mut steps = vec![Step::Fill(Color::BLACK)];
    let start = center.saturating_sub(radius);
    let end = (center + radius + 1).min(leds);
    for index in start..end {
        let distance = index.abs_diff(center);
        let level = 255usize.saturating_sub(distance * PULSE_FADE_PER_PIXEL) as u8;
        steps.push(Step::Set {
            index,
            color: color.scale(level),
        });
    }

    steps.extend([Step::Render, Step::Sleep(Duration::from_millis(20))]);
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;
    use crate::pattern::tests::ZeroRng;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    fn sets(steps: &[Step]) -> Vec<(usize, Color)> {
        steps
            .iter()
            .filter_map(|s| match *s {
                Step::Set { index, color } => Some((index, color)),
                _ => None,
            })
            .collect()
    }

    fn renders(steps: &[Step]) -> usize {
        steps.iter().filter(|s| **s == Step::Render).count()
    }

    #[rstest]
    fn every_pattern_renders_and_stays_in_bounds(
        #[values(0, 1, 50, 99, 100, 101)] leds: usize,
        #[values(0, 1, 9, 10, 20, 51, 1_000, u64::MAX)] count: u64,
    ) {
        let mut rng = StdRng::seed_from_u64(count ^ leds as u64);
        for pattern in <Pattern as clap::ValueEnum>::value_variants() {
            let steps = pattern.steps(count, leds, &mut rng);
            assert!(renders(&steps) >= 1, "{pattern} never renders");
            assert!(
                sets(&steps).iter().all(|&(i, _)| i < leds),
                "{pattern} writes past the strip"
            );
            assert!(
                steps.iter().any(|s| matches!(s, Step::Sleep(_))),
                "{pattern} never pauses"
            );
        }
    }

    #[test]
    fn gradient_fade_fills_with_full_rainbow() {
        assert_eq!(gradient_fade(0)[0], Step::Fill(Color::new(127, 243, 145)));
    }

    #[test]
    fn orange_wave_wraps_around_the_end() {
        let written = sets(&orange_wave(95, 100));
        let indices: Vec<usize> = written.iter().map(|(i, _)| *i).collect();
        assert_eq!(
            indices,
            vec![95, 96, 97, 98, 99, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9]
        );
        assert!(written.iter().all(|(_, c)| *c == WAVE_ORANGE));
    }

    #[test]
    fn white_wave_fades_in_and_clips() {
        let written = sets(&white_wave(0, 100));
        let levels: Vec<u8> = written.iter().map(|(_, c)| c.r).collect();
        assert_eq!(levels, vec![12, 13, 15, 17, 19, 23, 28, 36, 51, 85]);

        assert_eq!(sets(&white_wave(97, 100)).len(), 3);
    }

    #[test]
    fn sparkle_is_two_pixels_on_orange() {
        let mut rng = StdRng::seed_from_u64(3);
        let steps = sparkle(100, &mut rng);
        assert_eq!(steps[0], Step::Fill(Color::ORANGE));
        let written = sets(&steps);
        assert_eq!(written.len(), 2);
        assert!(written.iter().all(|(_, c)| *c == SPARKLE_COLOR));
    }

    #[test]
    fn slow_sparkle_only_every_hundredth_tick() {
        let first = slow_sparkle(0, 100, &mut ZeroRng);
        assert_eq!(sets(&first), vec![(0, BLINK_GRAY)]);
        assert_eq!(renders(&first), 2);
        assert_eq!(first[first.len() - 1], Step::Sleep(Duration::from_secs(2)));

        assert!(sets(&slow_sparkle(1, 100, &mut ZeroRng)).is_empty());
        assert!(sets(&slow_sparkle(99, 100, &mut ZeroRng)).is_empty());
        assert_eq!(sets(&slow_sparkle(200, 100, &mut ZeroRng)).len(), 1);
    }

    #[test]
    fn color_chase_shifts_one_pixel_per_tick() {
        let first = sets(&color_chase(0, 9));
        assert_eq!(first[0].1, Color::RED);
        assert_eq!(first[3].1, Color::GREEN);
        assert_eq!(first[6].1, Color::CYAN);

        let second = sets(&color_chase(1, 9));
        assert_eq!(second[2].1, Color::GREEN);
        assert_eq!(second[8].1, Color::RED);
        assert_eq!(sets(&color_chase(9, 9)), first);
    }

    fn band(range: std::ops::Range<usize>, color: Color) -> Vec<(usize, Color)> {
        range.map(|i| (i, color)).collect()
    }

    #[test]
    fn rainbow_chase_bands_enter_from_the_start() {
        let orange = Color::new(255, 127, 0);

        assert_eq!(sets(&rainbow_chase(0, 100)), band(0..8, Color::RED));

        // second band half on the strip
        let mut expected = band(10..18, Color::RED);
        expected.extend(band(0..2, orange));
        assert_eq!(sets(&rainbow_chase(10, 100)), expected);

        let mut expected = band(32..40, Color::RED);
        expected.extend(band(16..24, orange));
        expected.extend(band(0..8, Color::YELLOW));
        assert_eq!(sets(&rainbow_chase(32, 100)), expected);
    }

    #[test]
    fn rainbow_chase_next_pass_shifts_colors() {
        // pass length is 100 + 3 * 8; the last band is still on its way out
        assert_eq!(sets(&rainbow_chase(123, 100)), band(91..99, Color::YELLOW));
        assert_eq!(
            sets(&rainbow_chase(124, 100)),
            band(0..8, Color::new(255, 127, 0))
        );
    }

    #[test]
    fn chaos_flashes_half_the_segments_in_fixed_colors() {
        let mut rng = StdRng::seed_from_u64(5);
        let steps = chaos(100, &mut rng);
        assert_eq!(renders(&steps), 4);

        let written = sets(&steps);
        // 2 flashes, 10 segments of 5 pixels each
        assert_eq!(written.len(), 100);

        let mut segment_colors = std::collections::HashMap::new();
        for &(i, c) in &written {
            assert!(CHAOS_COLORS.contains(&c));
            // a segment keeps its color for the whole tick
            assert_eq!(*segment_colors.entry(i / 5).or_insert(c), c);
        }

        let first_flash: std::collections::HashSet<usize> =
            written[..50].iter().map(|(i, _)| i / 5).collect();
        assert_eq!(first_flash.len(), 10);
    }

    #[test]
    fn meteor_trail_fades_behind_the_head() {
        let m = Meteor {
            head: 20,
            direction: 1,
            color: Color::new(240, 120, 60),
        };
        let trail = sets(&m.trail(100).collect::<Vec<_>>());
        assert_eq!(trail.len(), 12);
        assert_eq!(trail[0], (20, Color::new(240, 120, 60)));
        assert_eq!(trail[1], (19, Color::new(220, 110, 55)));
        assert_eq!(trail[11], (9, Color::new(20, 10, 5)));

        let backwards = Meteor { direction: -1, ..m };
        let indices: Vec<usize> = sets(&backwards.trail(100).collect::<Vec<_>>())
            .iter()
            .map(|(i, _)| *i)
            .collect();
        assert_eq!(indices, (20..32).collect::<Vec<_>>());
    }

    #[test]
    fn meteor_trail_is_clipped_at_both_ends() {
        let m = Meteor {
            head: 2,
            direction: 1,
            color: Color::WHITE,
        };
        assert_eq!(m.trail(100).count(), 3);

        let m = Meteor { head: -1, ..m };
        assert_eq!(m.trail(100).count(), 0);

        // head past the end, tail reaching back onto the strip
        let m = Meteor { head: 105, ..m };
        assert_eq!(m.trail(100).count(), 6);
    }

    #[test]
    fn meteor_plays_the_whole_strip_then_pauses() {
        let mut rng = StdRng::seed_from_u64(8);
        let steps = meteor(100, &mut rng);

        assert_eq!(renders(&steps), 113);
        let slow = steps
            .iter()
            .filter(|s| **s == Step::Sleep(Duration::from_millis(50)))
            .count();
        assert_eq!(slow, 112);
        assert_eq!(
            &steps[steps.len() - 3..],
            &[
                Step::Fill(Color::BLACK),
                Step::Render,
                Step::Sleep(Duration::from_millis(100)),
            ]
        );
    }

    #[rstest]
    #[case(0, 0..50, Color::RED)]
    #[case(9, 0..50, Color::RED)]
    #[case(10, 50..100, Color::BLUE)]
    #[case(20, 0..50, Color::RED)]
    fn police_alternates_halves(
        #[case] count: u64,
        #[case] lit: std::ops::Range<usize>,
        #[case] color: Color,
    ) {
        let steps = police(count, 100);
        let written = sets(&steps);
        assert_eq!(written.len(), 50);
        assert!(written.iter().all(|&(i, c)| lit.contains(&i) && c == color));
        assert_eq!(renders(&steps), 2);
    }

    #[test]
    fn strobe_lights_three_whole_segments_ten_times() {
        let mut rng = StdRng::seed_from_u64(11);
        let steps = strobe(100, &mut rng);
        assert_eq!(renders(&steps), 20);

        let written = sets(&steps);
        assert_eq!(written.len(), 3 * 10 * 10);

        let mut segments: Vec<usize> = written.iter().map(|(i, _)| i / 10).collect();
        segments.sort_unstable();
        segments.dedup();
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn race_meets_in_the_middle() {
        let start = sets(&race(0, 100));
        assert_eq!(start, vec![(0, Color::RED), (99, Color::BLUE)]);

        let meeting = race(50, 100);
        let written = sets(&meeting);
        assert_eq!(written[0], (50, Color::RED));
        assert_eq!(written[1], (49, Color::BLUE));
        let flash: Vec<usize> = written[2..].iter().map(|(i, _)| *i).collect();
        assert_eq!(flash, vec![48, 49, 50, 51, 52]);
        assert_eq!(renders(&meeting), 3);

        // next tick starts over
        assert_eq!(sets(&race(51, 100)), start);
    }

    #[test]
    fn pulse_grows_and_shrinks() {
        // 10 LEDs: radius 0..=5 then 5..=0, period 12
        let widths: Vec<usize> = (0..12).map(|c| sets(&pulse(c, 10)).len()).collect();
        assert_eq!(widths, vec![1, 3, 5, 7, 9, 10, 10, 9, 7, 5, 3, 1]);
    }

    #[test]
    fn pulse_dims_away_from_center_and_changes_color() {
        let written = sets(&pulse(2, 100));
        assert_eq!(
            written,
            vec![
                (48, Color::new(215, 0, 0)),
                (49, Color::new(235, 0, 0)),
                (50, Color::new(255, 0, 0)),
                (51, Color::new(235, 0, 0)),
                (52, Color::new(215, 0, 0)),
            ]
        );

        // second pulse of a 100 LED strip starts at count 102 and is green
        assert_eq!(sets(&pulse(102, 100)), vec![(50, Color::GREEN)]);
    }
}
