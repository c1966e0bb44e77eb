//! Aggregation of many colors into one
//!
//! Valid colors are split into per-channel sequences ([`Channels`]) and
//! reduced by one of the strategies named in [`Mode`]:
//! - `mix`: truncated mean of every channel
//! - `lowest`: per-channel minimum
//! - `highest`: per-channel maximum
//! - `mix-saturate`: the last color, unchanged
//!
//! Every strategy fails with [`ColorError::EmptyInput`] when there is
//! nothing to reduce.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{Color, ColorConverter, Rgba};
use crate::{ColorError, Result};

/// Aggregation strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Truncated mean per channel
    #[default]
    Mix,
    /// Minimum per channel
    Lowest,
    /// Maximum per channel
    Highest,
    /// Last color, after a no-op trip through HLS
    MixSaturate,
}

impl Mode {
    /// All strategies, in display order
    pub const ALL: [Mode; 4] = [Mode::Mix, Mode::Lowest, Mode::Highest, Mode::MixSaturate];

    /// Name used on the command line and in config files
    pub fn name(self) -> &'static str {
        match self {
            Mode::Mix => "mix",
            Mode::Lowest => "lowest",
            Mode::Highest => "highest",
            Mode::MixSaturate => "mix-saturate",
        }
    }

    /// Look a strategy up by name, falling back to `Mix` for unknown names
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::debug!("unknown mode {name:?}, using {}", Mode::Mix);
            Mode::Mix
        })
    }

    /// Reduce the channels with this strategy
    pub fn apply(self, channels: &Channels) -> Result<Rgba> {
        match self {
            Mode::Mix => mix(channels),
            Mode::Lowest => lowest(channels),
            Mode::Highest => highest(channels),
            Mode::MixSaturate => mix_saturate(channels),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// The error when a mode name is not one of [`Mode::ALL`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mode {0:?}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

/// Channel sequences of a set of colors.
///
/// The four sequences always have the same length; entry `i` of each
/// belongs to the `i`-th color pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Channels {
    reds: Vec<u16>,
    greens: Vec<u16>,
    blues: Vec<u16>,
    alphas: Vec<u16>,
}

impl Channels {
    /// Create empty channels
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the channels of every valid color, skipping invalid ones
    pub fn from_colors<'a>(colors: impl IntoIterator<Item = &'a Color>) -> Self {
        colors
            .into_iter()
            .filter_map(|color| match color {
                Color::Valid(rgba) => Some(*rgba),
                Color::Invalid { .. } => None,
            })
            .collect()
    }

    /// Append one color
    pub fn push(&mut self, rgba: Rgba) {
        self.reds.push(rgba.r);
        self.greens.push(rgba.g);
        self.blues.push(rgba.b);
        self.alphas.push(rgba.a);
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.reds.len()
    }

    /// Whether no color was collected
    pub fn is_empty(&self) -> bool {
        self.reds.is_empty()
    }

    pub fn reds(&self) -> &[u16] {
        &self.reds
    }

    pub fn greens(&self) -> &[u16] {
        &self.greens
    }

    pub fn blues(&self) -> &[u16] {
        &self.blues
    }

    pub fn alphas(&self) -> &[u16] {
        &self.alphas
    }

    /// Iterate the colors back out
    pub fn iter(&self) -> impl Iterator<Item = Rgba> + '_ {
        (0..self.len())
            .map(|i| Rgba::new(self.reds[i], self.greens[i], self.blues[i], self.alphas[i]))
    }

    /// The most recently pushed color
    pub fn last(&self) -> Option<Rgba> {
        Some(Rgba::new(
            *self.reds.last()?,
            *self.greens.last()?,
            *self.blues.last()?,
            *self.alphas.last()?,
        ))
    }

    /// Apply a reduction to each channel
    fn reduce(&self, f: impl Fn(&[u16]) -> Option<u16>) -> Result<Rgba> {
        Ok(Rgba {
            r: f(&self.reds).ok_or(ColorError::EmptyInput)?,
            g: f(&self.greens).ok_or(ColorError::EmptyInput)?,
            b: f(&self.blues).ok_or(ColorError::EmptyInput)?,
            a: f(&self.alphas).ok_or(ColorError::EmptyInput)?,
        })
    }
}

impl FromIterator<Rgba> for Channels {
    fn from_iter<I: IntoIterator<Item = Rgba>>(iter: I) -> Self {
        let mut channels = Channels::new();
        for rgba in iter {
            channels.push(rgba);
        }
        channels
    }
}

/// Mean of a channel, truncated toward zero
fn truncated_mean(values: &[u16]) -> Option<u16> {
    if values.is_empty() {
        return None;
    }
    let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    // The mean never exceeds the largest value, so it fits.
    u16::try_from(sum / values.len() as u64).ok()
}

/// New color from the truncated mean of every channel
pub fn mix(channels: &Channels) -> Result<Rgba> {
    channels.reduce(truncated_mean)
}

/// New color from the lowest value of every channel
pub fn lowest(channels: &Channels) -> Result<Rgba> {
    channels.reduce(|values| values.iter().copied().min())
}

/// New color from the highest value of every channel
pub fn highest(channels: &Channels) -> Result<Rgba> {
    channels.reduce(|values| values.iter().copied().max())
}

/// The last color, unchanged.
///
/// The saturation of every input is computed and the last color goes
/// through an RGB -> HLS -> RGB round trip, but neither feeds the result.
pub fn mix_saturate(channels: &Channels) -> Result<Rgba> {
    let converter = ColorConverter::new();
    let last = channels.last().ok_or(ColorError::EmptyInput)?;

    let saturations: Vec<f64> = channels
        .iter()
        .map(|rgba| converter.hls_of(rgba).saturation)
        .collect();
    log::debug!("mix-saturate input saturations: {saturations:?}");

    let (r, g, b) = converter.hls_to_rgb(converter.hls_of(last));
    log::trace!("mix-saturate round trip of {last}: ({r}, {g}, {b})");

    Ok(last)
}
