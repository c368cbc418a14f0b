//! Error type shared by the sinks, the pattern set and the binary.
//!
//! The animation core has nothing to recover from on its own. Every variant
//! here is either a hardware failure surfaced by a sink or a startup mistake,
//! and all of them end the process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StripError {
    /// Opening, configuring or writing the SPI device failed.
    #[error("SPI transfer failed: {0}")]
    Spi(#[from] std::io::Error),

    /// A pattern set needs at least one pattern to pick from.
    #[error("pattern set is empty")]
    EmptyPatternSet,

    /// The SPI sink was requested from a build without the `hardware` feature.
    #[error("SPI output requires the 'hardware' feature (rebuild with default features)")]
    HardwareUnavailable,
}
