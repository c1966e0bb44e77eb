//! Pipeline configuration.
//!
//! A [`Config`] carries everything one run needs: the colors given on the
//! command line, the color file to read, the aggregation mode and the output
//! format. It is built by the command-line tool and passed to [`crate::run`].
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use mix_colors::{Config, Mode};
//! use std::path::Path;
//!
//! // Load from file
//! let config = Config::from_json_file(Path::new("mix.json"))?;
//!
//! // Or start from defaults
//! let config = Config {
//!     colors: vec!["ff0000ff".into(), "0,0,255,255".into()],
//!     mode: Mode::Highest,
//!     ..Config::default()
//! };
//! # Ok::<(), mix_colors::ColorError>(())
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::aggregate::Mode;
use crate::constants::DEFAULT_COLORS_FILE;
use crate::{ColorError, Result};

/// Settings for one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colors given directly, appended after the file's colors
    pub colors: Vec<String>,

    /// Color file to read first; `None` skips the file
    pub colors_file: Option<PathBuf>,

    /// Aggregation strategy
    pub mode: Mode,

    /// How the result is printed
    pub format: OutputFormat,
}

/// Output format of the aggregated color.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `name: value` line per field
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colors: Vec::new(),
            colors_file: Some(PathBuf::from(DEFAULT_COLORS_FILE)),
            mode: Mode::default(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| ColorError::config(format!("cannot read {}", path.display()), err))?;
        serde_json::from_str(&content)
            .map_err(|err| ColorError::config(format!("cannot parse {}", path.display()), err))
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|err| ColorError::config("cannot serialize configuration", err))?;
        std::fs::write(path, json)
            .map_err(|err| ColorError::config(format!("cannot write {}", path.display()), err))
    }
}
