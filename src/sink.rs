//! Pixel sinks: where the animation core hands its pixels to the outside.
//!
//! The core only ever calls [`PixelSink::set_pixel`], [`PixelSink::fill`]
//! and [`PixelSink::render`]. Every sink owns a fixed-length [`PixelBuffer`] and
//! decides for itself what "render" means: an SPI transfer
//! ([`crate::spi::SpiSink`]), a log line ([`LogSink`]), or a recorded
//! snapshot ([`MemorySink`]).

use crate::{Color, StripError};
use std::time::{Duration, Instant};

pub trait PixelSink {
    /// Strip length N. Constant for the lifetime of the sink.
    fn pixel_count(&self) -> usize;

    /// Stage one pixel. Indices at or past `pixel_count()` are ignored.
    fn set_pixel(&mut self, index: usize, color: Color);

    /// Stage every pixel in one color.
    fn fill(&mut self, color: Color) {
        for index in 0..self.pixel_count() {
            self.set_pixel(index, color);
        }
    }

    /// Push the staged pixels to the strip.
    fn render(&mut self) -> Result<(), StripError>;
}

// ── Pixel buffer ───────────────────────────────────────────────────

/// The desired state of every pixel, flushed to hardware on render.
///
/// The length is fixed at construction; there is no way to grow or shrink it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// A buffer of `len` black pixels.
    pub fn new(len: usize) -> Self {
        Self {
            pixels: vec![Color::BLACK; len],
        }
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Write one pixel. Out-of-range indices are silently dropped.
    pub fn set(&mut self, index: usize, color: Color) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Serialize as raw R,G,B bytes with brightness (0-100) applied.
    pub fn to_bytes(&self, brightness: u8) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|c| c.apply_brightness(brightness).to_bytes())
            .collect()
    }
}

// ── Memory sink ────────────────────────────────────────────────────

/// Sink that keeps a copy of every rendered frame. Used to test patterns and
/// the scheduler without hardware.
#[derive(Clone, Debug)]
pub struct MemorySink {
    buffer: PixelBuffer,
    frames: Vec<Vec<Color>>,
    writes: usize,
}

impl MemorySink {
    pub fn new(len: usize) -> Self {
        Self {
            buffer: PixelBuffer::new(len),
            frames: Vec::new(),
            writes: 0,
        }
    }

    /// Current staged pixels, rendered or not.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Every frame passed to `render`, oldest first.
    pub fn frames(&self) -> &[Vec<Color>] {
        &self.frames
    }

    /// Number of pixel writes. A fill counts once per pixel; ignored
    /// out-of-range writes still count.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PixelSink for MemorySink {
    fn pixel_count(&self) -> usize {
        self.buffer.len()
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        self.writes += 1;
        self.buffer.set(index, color);
    }

    fn fill(&mut self, color: Color) {
        self.writes += self.buffer.len();
        self.buffer.fill(color);
    }

    fn render(&mut self) -> Result<(), StripError> {
        self.frames.push(self.buffer.pixels().to_vec());
        Ok(())
    }
}

// ── Log sink ───────────────────────────────────────────────────────

/// Dry-run sink for machines without an SPI bus.
///
/// Frames go to `trace!`, and once a second the render rate goes to `debug!`.
pub struct LogSink {
    buffer: PixelBuffer,
    rate: RenderRate,
}

impl LogSink {
    pub fn new(len: usize) -> Self {
        Self {
            buffer: PixelBuffer::new(len),
            rate: RenderRate::new(),
        }
    }
}

impl PixelSink for LogSink {
    fn pixel_count(&self) -> usize {
        self.buffer.len()
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        self.buffer.set(index, color);
    }

    fn fill(&mut self, color: Color) {
        self.buffer.fill(color);
    }

    fn render(&mut self) -> Result<(), StripError> {
        tracing::trace!(
            "frame: first={:?} last={:?}",
            self.buffer.pixels().first(),
            self.buffer.pixels().last()
        );
        self.rate.tick();
        Ok(())
    }
}

/// Counts renders and reports the rate roughly once a second.
struct RenderRate {
    last: Instant,
    count: u64,
}

impl RenderRate {
    fn new() -> Self {
        Self {
            last: Instant::now(),
            count: 0,
        }
    }

    fn tick(&mut self) {
        self.count += 1;
        let elapsed = self.last.elapsed();

        if elapsed >= Duration::from_secs(1) {
            let per_second = self.count as f64 / elapsed.as_secs_f64();
            tracing::debug!("Renders per second: {:.1}", per_second);
            self.count = 0;
            self.last = Instant::now();
        }
    }
}
