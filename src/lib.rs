//! # Mix Colors
//!
//! A Rust crate for blending RGBA colors given as text.
//!
//! This library provides:
//! - Validation of `rrggbbaa` hex and `r,g,b,a` decimal color strings
//! - Reading candidate colors from a newline-delimited file
//! - Aggregation of many colors into one (mean, minimum, maximum, last)
//! - Hex and HLS views of the result
//!
//! Invalid colors and a missing color file are reported on the log and
//! skipped; only running out of valid colors fails a run.
//!
//! ## Example
//!
//! ```rust
//! use mix_colors::{run, Config, Mode};
//!
//! let config = Config {
//!     colors: vec!["ff0000ff".into(), "0,0,0,255".into()],
//!     colors_file: None,
//!     mode: Mode::Mix,
//!     ..Config::default()
//! };
//! let summary = run(&config)?;
//! assert_eq!(summary.hex, "7f0000ff");
//! # Ok::<(), mix_colors::ColorError>(())
//! ```

pub mod aggregate;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;

pub use aggregate::{Channels, Mode};
pub use color::{Color, ColorConverter, ColorSummary, Rgba};
pub use config::{Config, OutputFormat};
pub use error::{ColorError, Result};

/// Gather candidate color strings: file lines first, then configured colors
pub fn collect_inputs(config: &Config) -> Vec<String> {
    let mut inputs = match &config.colors_file {
        Some(path) => input::read_color_file_or_empty(path),
        None => Vec::new(),
    };
    inputs.extend(config.colors.iter().cloned());
    inputs
}

/// Parse every candidate, keeping invalid ones as `Color::Invalid`
pub fn parse_colors<S: AsRef<str>>(inputs: &[S]) -> Vec<Color> {
    inputs.iter().map(|input| Color::new(input.as_ref())).collect()
}

/// Aggregate the configured colors into one
///
/// # Errors
///
/// Returns `ColorError::EmptyInput` if no valid color is left.
pub fn aggregate(config: &Config) -> Result<Rgba> {
    let colors = parse_colors(&collect_inputs(config));
    let channels = Channels::from_colors(&colors);
    log::info!(
        "aggregating {} of {} colors with {}",
        channels.len(),
        colors.len(),
        config.mode
    );
    config.mode.apply(&channels)
}

/// Run the whole pipeline and summarize the resulting color
///
/// This is the main entry point: read, validate, aggregate and derive the
/// hex and HLS views of the result.
///
/// # Errors
///
/// Returns `ColorError::EmptyInput` if no valid color is left after
/// filtering. Invalid colors and an unreadable color file are not errors.
pub fn run(config: &Config) -> Result<ColorSummary> {
    let rgba = aggregate(config)?;
    Ok(ColorConverter::new().summarize(rgba))
}
