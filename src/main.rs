//! LED strip animation daemon.
//!
//! Owns the strip for as long as the process lives: picks a random pattern,
//! animates it, and every thirty seconds picks again. Runs until Ctrl+C or
//! until the SPI device stops accepting frames.
//!
//! ## Usage
//! ```sh
//! sudo ./target/release/led-strip-rs --leds 100
//! ./target/release/led-strip-rs --sink log --pattern sparkle --pattern race
//! ```

use clap::{Parser, ValueEnum};
use led_strip_rs::clock::SystemClock;
use led_strip_rs::pattern::{Pattern, PatternSet};
use led_strip_rs::scheduler::Scheduler;
use led_strip_rs::sink::{LogSink, PixelSink};
use led_strip_rs::{StripConfig, StripError, setup_signal_handler};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SinkKind {
    /// Write frames to the SPI device
    Spi,
    /// Only log frames, no hardware needed
    Log,
}

/// LED strip animation daemon
#[derive(Parser)]
#[command(name = "led-strip-rs")]
#[command(about = "Animate an SPI-driven RGB LED strip")]
#[command(version)]
struct Args {
    /// Number of LEDs on the strip
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u16).range(1..))]
    leds: u16,

    /// How long each pattern runs before a new one is picked, in milliseconds
    #[arg(long, default_value_t = 30_000)]
    switch_interval_ms: u64,

    /// Where frames go
    #[arg(long, value_enum, default_value_t = SinkKind::Spi)]
    sink: SinkKind,

    /// SPI device node (bus 0, chip select 1 by default)
    #[arg(long, default_value = "/dev/spidev0.1")]
    spi_device: PathBuf,

    /// SPI clock speed in Hz
    #[arg(long, default_value_t = 500_000)]
    spi_speed_hz: u32,

    /// Output brightness (0-100), applied to SPI output only
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u8).range(0..=100))]
    brightness: u8,

    /// Pattern to include in the rotation (repeat for several)
    #[arg(
        long = "pattern",
        value_enum,
        default_values_t = [Pattern::ColorCycle, Pattern::RandomBlink]
    )]
    patterns: Vec<Pattern>,

    /// Seed for the random number generator, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    // RUST_LOG overrides the default `info` level, e.g. RUST_LOG=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_ansi(false) // Disable ANSI color codes for systemd/journald
        .compact()
        .init();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = StripConfig::new(
        usize::from(args.leds),
        Duration::from_millis(args.switch_interval_ms),
    );
    let patterns = PatternSet::new(args.patterns.clone())?;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    tracing::info!("LED strip v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Strip: {} LEDs ({} bytes per frame)",
        config.leds,
        config.frame_byte_count()
    );
    tracing::info!("Sink: {:?}", args.sink);
    tracing::info!(
        "Patterns: {}",
        patterns
            .patterns()
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let running = setup_signal_handler()?;

    match args.sink {
        SinkKind::Log => drive(LogSink::new(config.leds), config, patterns, rng, &running)?,
        SinkKind::Spi => {
            let sink = open_spi(&args, config)?;
            drive(sink, config, patterns, rng, &running)?
        }
    }

    tracing::info!("Shutting down cleanly.");
    Ok(())
}

fn drive<S: PixelSink>(
    sink: S,
    config: StripConfig,
    patterns: PatternSet,
    rng: StdRng,
    running: &AtomicBool,
) -> Result<(), StripError> {
    let mut scheduler = Scheduler::new(
        sink,
        SystemClock::new(),
        rng,
        patterns,
        config.switch_interval,
    );
    scheduler.run(running)
}

#[cfg(feature = "hardware")]
fn open_spi(args: &Args, config: StripConfig) -> Result<impl PixelSink, StripError> {
    led_strip_rs::spi::SpiSink::open(
        &args.spi_device,
        args.spi_speed_hz,
        config.leds,
        args.brightness,
    )
}

#[cfg(not(feature = "hardware"))]
fn open_spi(_args: &Args, _config: StripConfig) -> Result<impl PixelSink, StripError> {
    Err::<LogSink, _>(StripError::HardwareUnavailable)
}
