//! Parsed color values

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::parse::validate;
use crate::constants::patterns::DECIMAL_SEPARATOR;
use crate::{ColorError, Result};

/// An RGBA color.
///
/// Channels are nominally 0-255 but are never clamped: the decimal input
/// form allows up to three digits, so values up to 999 are kept as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel
    pub r: u16,
    /// Green channel
    pub g: u16,
    /// Blue channel
    pub b: u16,
    /// Alpha channel
    pub a: u16,
}

impl Rgba {
    /// Construct a new RGBA color
    pub fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Parse an already validated `r,g,b,a` string
    fn from_decimal(decimal: &str) -> Result<Self> {
        let mut parts = decimal.split(DECIMAL_SEPARATOR);
        let mut next = |component: &'static str| -> Result<u16> {
            let value = parts.next().unwrap_or_default();
            value.parse().map_err(|_| ColorError::InvalidComponent {
                component,
                value: value.to_string(),
            })
        };

        Ok(Self {
            r: next("red")?,
            g: next("green")?,
            b: next("blue")?,
            a: next("alpha")?,
        })
    }
}

impl Display for Rgba {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{},{},{},{}", self.r, self.g, self.b, self.a)
    }
}

/// A color built from one input string.
///
/// Input that fails validation still produces a `Color` so callers can keep
/// a one-to-one list of inputs, but it carries no components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    /// Input was valid hex or decimal
    Valid(Rgba),
    /// Input matched neither form
    Invalid { input: String },
}

impl Color {
    /// Validate and parse a color string.
    ///
    /// Invalid input is reported on the log and yields `Color::Invalid`.
    pub fn new(input: &str) -> Self {
        match validate(input).and_then(|decimal| Rgba::from_decimal(&decimal)) {
            Ok(rgba) => Color::Valid(rgba),
            Err(err) => {
                if err.is_recoverable() {
                    log::warn!("{err}");
                } else {
                    log::error!("{err}");
                }
                Color::Invalid {
                    input: input.to_string(),
                }
            }
        }
    }

    /// Components of a valid color
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidColorFormat` for an invalid color.
    pub fn rgba(&self) -> Result<Rgba> {
        match self {
            Color::Valid(rgba) => Ok(*rgba),
            Color::Invalid { input } => Err(ColorError::invalid_format(input.as_str())),
        }
    }

    /// Whether the input was valid
    pub fn is_valid(&self) -> bool {
        matches!(self, Color::Valid(_))
    }
}
