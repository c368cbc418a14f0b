//! SPI output for 3-wire RGB strips on a Raspberry Pi.
//!
//! The strip takes a plain stream of R,G,B bytes, one triplet per pixel, and
//! latches when the clock goes idle. Bus 0, chip select 1 is
//! `/dev/spidev0.1`.
//!
//! The spidev driver rejects any single transfer larger than its `bufsiz`
//! module parameter (4096 bytes unless changed), so frames for strips over
//! 1365 LEDs go out as several back-to-back transfers.

use crate::sink::{PixelBuffer, PixelSink};
use crate::{Color, StripError};
use spidev::{SpiModeFlags, Spidev, SpidevOptions};
use std::io::{self, Write};
use std::path::Path;

/// Kernel default for the spidev `bufsiz` parameter.
pub const MAX_TRANSFER: usize = 4096;

pub struct SpiSink {
    spi: Spidev,
    buffer: PixelBuffer,
    brightness: u8,
}

impl SpiSink {
    /// Open and configure the SPI device, then blank the strip.
    ///
    /// `brightness` (0-100) scales every byte on the way out; the pixel
    /// buffer itself always holds the unscaled colors.
    pub fn open(
        device: &Path,
        speed_hz: u32,
        leds: usize,
        brightness: u8,
    ) -> Result<Self, StripError> {
        let mut spi = Spidev::open(device)?;
        let options = SpidevOptions::new()
            .bits_per_word(8)
            .max_speed_hz(speed_hz)
            .mode(SpiModeFlags::SPI_MODE_0)
            .build();
        spi.configure(&options)?;

        let mut sink = Self {
            spi,
            buffer: PixelBuffer::new(leds),
            brightness: brightness.min(100),
        };

        // Whatever the strip showed before we started is stale
        sink.render()?;
        tracing::info!(
            "SPI strip ready on {} ({} LEDs @ {} Hz)",
            device.display(),
            leds,
            speed_hz
        );

        Ok(sink)
    }
}

impl PixelSink for SpiSink {
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
        let bytes = self.buffer.to_bytes(self.brightness);
        write_frame(&mut self.spi, &bytes)?;
        Ok(())
    }
}

/// Write `frame` as consecutive transfers of at most [`MAX_TRANSFER`] bytes.
fn write_frame<W: Write>(out: &mut W, frame: &[u8]) -> io::Result<()> {
    for chunk in frame.chunks(MAX_TRANSFER) {
        out.write_all(chunk)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Records the length of every write call, like one ioctl per transfer.
    #[derive(Default)]
    struct Transfers(Vec<usize>);

    impl Write for Transfers {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            assert!(buf.len() <= MAX_TRANSFER, "transfer of {} bytes", buf.len());
            self.0.push(buf.len());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn short_strip_is_one_transfer() {
        let mut out = Transfers::default();
        write_frame(&mut out, &PixelBuffer::new(100).to_bytes(100)).unwrap();
        assert_eq!(out.0, vec![300]);
    }

    #[test]
    fn long_strip_is_split_at_the_transfer_limit() {
        // 1366 LEDs is the first length past one 4096 byte transfer
        let mut out = Transfers::default();
        write_frame(&mut out, &PixelBuffer::new(1366).to_bytes(100)).unwrap();
        assert_eq!(out.0, vec![4096, 2]);

        let frame = PixelBuffer::new(u16::MAX as usize).to_bytes(100);
        let mut out = Transfers::default();
        write_frame(&mut out, &frame).unwrap();
        assert_eq!(out.0.iter().sum::<usize>(), frame.len());
        assert_eq!(out.0.len(), frame.len().div_ceil(MAX_TRANSFER));
    }

    #[test]
    fn empty_frame_sends_nothing() {
        let mut out = Transfers::default();
        write_frame(&mut out, &[]).unwrap();
        assert!(out.0.is_empty());
    }
}
