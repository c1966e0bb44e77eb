//! Input patterns and formatting constants
//!
//! Accepted color syntax and the defaults shared by the library and the
//! command-line tool.

/// Accepted input syntax
pub mod patterns {
    /// Hex form: exactly 8 lowercase hex digits, RGBA order
    pub const HEX: &str = r"^[0-9a-f]{8}$";

    /// Decimal form: four 1-3 digit integers separated by commas
    pub const DECIMAL: &str = r"^([0-9]{1,3},){3}[0-9]{1,3}$";

    /// Hex digits per channel in hex form
    pub const HEX_DIGITS_PER_CHANNEL: usize = 2;

    /// Channels per color
    pub const CHANNELS: usize = 4;

    /// Separator between decimal components
    pub const DECIMAL_SEPARATOR: &str = ",";
}

/// Channel value that normalizes to 1.0
pub const CHANNEL_MAX: f64 = 255.0;

/// Full turn of the hue circle in degrees
pub const HUE_DEGREES: f64 = 360.0;

/// Scale applied to saturation and lightness for display
pub const PERCENT: f64 = 100.0;

/// Color file read when no other path is configured
pub const DEFAULT_COLORS_FILE: &str = "colors.txt";
