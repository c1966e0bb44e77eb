//! Color parsing and representation
//!
//! This module validates color strings, holds parsed RGBA values and
//! derives their hex and HLS views.

pub mod conversion;
pub mod model;
pub mod parse;

pub use conversion::{ColorConverter, ColorSummary, Hls};
pub use model::{Color, Rgba};
pub use parse::{hex_to_dec, validate};
