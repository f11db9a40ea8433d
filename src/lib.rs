//! # HexDrill
//!
//! A drilled hex hole calculator: plans the round-hole pattern that clears
//! a hexagonal opening (one primary hole per corner plus optional relief
//! hole pairs), quantifies how well a drill size covers the corner
//! material, and emits drilling G-code for the result.
//!
//! ## Architecture
//!
//! HexDrill is organized as a workspace with multiple crates:
//!
//! 1. **hexdrill-core** - Shared types, measurement parsing, fraction display
//! 2. **hexdrill-geometry** - Hex pattern model, area metrics, best-fit sweep
//! 3. **hexdrill-camtools** - Drilling G-code generation
//! 4. **hexdrill** - Main binary that integrates all crates

pub mod report;

pub use hexdrill_camtools::{HexDrillGenerator, HexDrillParameters};
pub use hexdrill_core::{format_fraction, parse_measurement, Point};
pub use hexdrill_geometry::{FitResult, FitSearch, HexPattern, HexPatternParams};
pub use report::PatternReport;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG environment
/// variable support, defaulting to INFO.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
