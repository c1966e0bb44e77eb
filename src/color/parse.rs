//! Color string validation
//!
//! Two input forms are accepted:
//! - hex: `ff0000ff` (8 lowercase digits, RGBA)
//! - decimal: `255,0,0,255` (four 1-3 digit integers)
//!
//! Both are normalized to the decimal form. Only the shape is checked, so
//! `999,0,0,0` is valid.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::patterns::{
    CHANNELS, DECIMAL, DECIMAL_SEPARATOR, HEX, HEX_DIGITS_PER_CHANNEL,
};
use crate::{ColorError, Result};

static HEX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(HEX).expect("hex pattern compiles"));
static DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(DECIMAL).expect("decimal pattern compiles"));

/// Syntactic form of a valid color string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputForm {
    /// `rrggbbaa`
    Hex,
    /// `r,g,b,a`
    Decimal,
}

/// Detect which form a string is written in, if any
pub fn detect_form(input: &str) -> Option<InputForm> {
    if HEX_RE.is_match(input) {
        Some(InputForm::Hex)
    } else if DECIMAL_RE.is_match(input) {
        Some(InputForm::Decimal)
    } else {
        None
    }
}

/// Validate a color string and normalize it to decimal form
///
/// # Errors
///
/// Returns `ColorError::InvalidColorFormat` if the string matches neither form.
pub fn validate(input: &str) -> Result<String> {
    match detect_form(input) {
        Some(InputForm::Hex) => hex_to_dec(input),
        Some(InputForm::Decimal) => Ok(input.to_string()),
        None => Err(ColorError::invalid_format(input)),
    }
}

/// Convert `rrggbbaa` to `r,g,b,a`
///
/// The string is split into four 2-character chunks, each parsed as base 16.
///
/// # Errors
///
/// Returns `ColorError::InvalidColorFormat` unless the input is exactly 8
/// lowercase hex digits.
pub fn hex_to_dec(hex: &str) -> Result<String> {
    if !HEX_RE.is_match(hex) {
        return Err(ColorError::invalid_format(hex));
    }

    let components = (0..CHANNELS)
        .map(|i| {
            let pos = i * HEX_DIGITS_PER_CHANNEL;
            u8::from_str_radix(&hex[pos..pos + HEX_DIGITS_PER_CHANNEL], 16)
                .map(|value| value.to_string())
                .map_err(|_| ColorError::invalid_format(hex))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(components.join(DECIMAL_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_hex() {
        assert_eq!(validate("ff0000ff").unwrap(), "255,0,0,255");
        assert_eq!(validate("0a141e28").unwrap(), "10,20,30,40");
    }

    #[test]
    fn test_validate_decimal_unchanged() {
        assert_eq!(validate("255,0,0,255").unwrap(), "255,0,0,255");
        assert_eq!(validate("0,0,0,0").unwrap(), "0,0,0,0");
    }

    #[test]
    fn test_validate_accepts_out_of_range_decimal() {
        assert_eq!(validate("999,300,256,0").unwrap(), "999,300,256,0");
    }

    #[test]
    fn test_validate_rejects() {
        for input in [
            "not-a-color",
            "",
            "FF0000FF",    // uppercase
            "ff0000",      // too short
            "ff0000ff00",  // too long
            "#ff0000ff",   // prefix
            "1,2,3",       // three components
            "1,2,3,4,5",   // five components
            "1000,0,0,0",  // four digits
            "1, 2, 3, 4",  // spaces
            "10,20,30,40\r",
        ] {
            assert!(
                matches!(validate(input), Err(ColorError::InvalidColorFormat { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_hex_to_dec_rejects_non_hex() {
        for input in ["+f+f+f+f", "-1000000", "FF0000FF", "ff0000", "1,2,3,4"] {
            assert!(
                matches!(hex_to_dec(input), Err(ColorError::InvalidColorFormat { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_detect_form() {
        assert_eq!(detect_form("deadbeef"), Some(InputForm::Hex));
        assert_eq!(detect_form("1,2,3,4"), Some(InputForm::Decimal));
        assert_eq!(detect_form("12345678"), Some(InputForm::Hex));
        assert_eq!(detect_form("nope"), None);
    }

    #[test]
    fn test_hex_roundtrip() {
        for (r, g, b, a) in [(0u8, 0u8, 0u8, 0u8), (255, 255, 255, 255), (1, 128, 17, 254)] {
            let hex = format!("{r:02x}{g:02x}{b:02x}{a:02x}");
            assert_eq!(hex_to_dec(&hex).unwrap(), format!("{r},{g},{b},{a}"));
        }
    }
}
