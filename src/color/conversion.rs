//! Color representation utilities
//!
//! Provides the derived views of an RGBA color:
//! - Hex representation (`rrggbbaa`)
//! - RGB to HLS and back, via `palette`'s HSL model
//! - The printable summary of a color
//!
//! Conversions are unclamped so out-of-range channels (above 255) flow
//! through unchanged instead of being pulled back into gamut.

use std::fmt::{self, Display, Formatter};

use palette::convert::FromColorUnclamped;
use palette::{encoding, Hsl, Srgb};
use serde::{Deserialize, Serialize};

use super::model::Rgba;
use crate::constants::{CHANNEL_MAX, HUE_DEGREES, PERCENT};

type Hsl64 = Hsl<encoding::Srgb, f64>;

/// Hue, lightness and saturation, each normalized to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hls {
    /// Hue as a fraction of a full turn, in [0, 1)
    pub hue: f64,
    /// Lightness
    pub lightness: f64,
    /// Saturation
    pub saturation: f64,
}

/// Color converter for hex and HLS views
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new color converter
    pub fn new() -> Self {
        Self
    }

    /// Format RGBA as lowercase hex, two digits per channel
    ///
    /// # Returns
    ///
    /// Hex string (e.g., "ff0000ff")
    pub fn to_hex(&self, rgba: Rgba) -> String {
        format!("{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
    }

    /// Convert normalized RGB (each in [0, 1]) to HLS
    pub fn rgb_to_hls(&self, r: f64, g: f64, b: f64) -> Hls {
        let hsl = Hsl64::from_color_unclamped(Srgb::new(r, g, b));
        Hls {
            hue: hsl.hue.into_positive_degrees() / HUE_DEGREES,
            lightness: hsl.lightness,
            saturation: hsl.saturation,
        }
    }

    /// Convert HLS back to normalized RGB
    pub fn hls_to_rgb(&self, hls: Hls) -> (f64, f64, f64) {
        let hsl = Hsl64::new(hls.hue * HUE_DEGREES, hls.saturation, hls.lightness);
        let rgb = Srgb::<f64>::from_color_unclamped(hsl);
        (rgb.red, rgb.green, rgb.blue)
    }

    /// HLS of an RGBA color, ignoring alpha
    pub fn hls_of(&self, rgba: Rgba) -> Hls {
        self.rgb_to_hls(
            f64::from(rgba.r) / CHANNEL_MAX,
            f64::from(rgba.g) / CHANNEL_MAX,
            f64::from(rgba.b) / CHANNEL_MAX,
        )
    }

    fn hsl_of(&self, rgba: Rgba) -> Hsl64 {
        Hsl64::from_color_unclamped(Srgb::new(
            f64::from(rgba.r) / CHANNEL_MAX,
            f64::from(rgba.g) / CHANNEL_MAX,
            f64::from(rgba.b) / CHANNEL_MAX,
        ))
    }

    /// Build the printable summary of a color
    pub fn summarize(&self, rgba: Rgba) -> ColorSummary {
        let hsl = self.hsl_of(rgba);
        ColorSummary {
            red: rgba.r,
            green: rgba.g,
            blue: rgba.b,
            alpha: rgba.a,
            hex: self.to_hex(rgba),
            hue: hsl.hue.into_positive_degrees(),
            saturation: hsl.saturation * PERCENT,
            lightness: hsl.lightness * PERCENT,
        }
    }
}

/// Raw channels plus derived hex and HLS values of one color
///
/// Hue is in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSummary {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
    pub alpha: u16,
    pub hex: String,
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Display for ColorSummary {
    /// One field per line, ending in a newline.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "red: {}", self.red)?;
        writeln!(f, "green: {}", self.green)?;
        writeln!(f, "blue: {}", self.blue)?;
        writeln!(f, "alpha: {}", self.alpha)?;
        writeln!(f, "hex: {}", self.hex)?;
        // Debug keeps the fractional part on whole numbers (`210.0`).
        writeln!(f, "hue {:?}", self.hue)?;
        writeln!(f, "saturation {:?}", self.saturation)?;
        writeln!(f, "lightness {:?}", self.lightness)
    }
}
