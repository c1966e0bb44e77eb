//! Command-line interface for mix_colors
//!
//! Reads colors from a file and the command line, blends them and prints the
//! result.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use mix_colors::{run, ColorSummary, Config, Mode, OutputFormat};

/// Blend RGBA colors given as `rrggbbaa` hex or `r,g,b,a` decimals
#[derive(Debug, Clone, Parser)]
#[clap(name = "mix-colors", version)]
struct CliArguments {
    /// Colors to blend, added after the colors read from the color file
    #[clap(required = true, num_args = 1..)]
    colors: Vec<String>,

    /// Aggregation mode: mix, lowest, highest or mix-saturate.
    /// Unknown modes fall back to mix
    #[clap(short, long)]
    mode: Option<String>,

    /// Newline-delimited color file [default: colors.txt]
    #[clap(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Do not read a color file
    #[clap(long, conflicts_with = "file")]
    no_file: bool,

    /// Output format
    #[clap(long, value_enum)]
    format: Option<OutputFormat>,

    /// Load settings from a JSON file; flags given here override it
    #[clap(short, long, value_name = "PATH", env = "MIX_COLORS_CONFIG")]
    config: Option<PathBuf>,

    /// Sets the level of logging verbosity:
    /// -v = info, -vv = debug, -vvv = trace
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl CliArguments {
    /// Merge the flags over a base configuration
    fn into_config(self, base: Config) -> Config {
        let mut config = base;
        config.colors.extend(self.colors);
        if let Some(mode) = self.mode {
            config.mode = Mode::from_name(&mode);
        }
        if self.no_file {
            config.colors_file = None;
        } else if let Some(file) = self.file {
            config.colors_file = Some(file);
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> ExitCode {
    let arguments = CliArguments::parse();
    init_logging(arguments.verbose);

    let base = match &arguments.config {
        Some(path) => match Config::from_json_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("{error}");
                eprintln!("Suggestion: {}", error.user_message());
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };
    let config = arguments.into_config(base);
    log::debug!("{config:?}");

    match run(&config) {
        Ok(summary) => {
            print_summary(&summary, config.format);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Aggregation failed: {error}");
            eprintln!("Suggestion: {}", error.user_message());
            ExitCode::FAILURE
        }
    }
}

fn print_summary(summary: &ColorSummary, format: OutputFormat) {
    match format {
        // The summary ends in a newline, so this leaves a blank line.
        OutputFormat::Text => println!("{summary}"),
        OutputFormat::Json => match serde_json::to_string_pretty(summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing result: {e}");
                println!("{summary}");
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArguments {
        CliArguments::try_parse_from(std::iter::once("mix-colors").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["ff0000ff"]).into_config(Config::default());
        assert_eq!(config.colors, ["ff0000ff"]);
        assert_eq!(config.mode, Mode::Mix);
        assert_eq!(config.colors_file, Some(PathBuf::from("colors.txt")));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_mode_flag() {
        let config = parse(&["-m", "highest", "1,2,3,4"]).into_config(Config::default());
        assert_eq!(config.mode, Mode::Highest);

        let config = parse(&["--mode", "mix-saturate", "1,2,3,4"]).into_config(Config::default());
        assert_eq!(config.mode, Mode::MixSaturate);
    }

    #[test]
    fn test_unknown_mode_falls_back() {
        let config = parse(&["-m", "brightest", "1,2,3,4"]).into_config(Config::default());
        assert_eq!(config.mode, Mode::Mix);
    }

    #[test]
    fn test_colors_required() {
        assert!(CliArguments::try_parse_from(["mix-colors"]).is_err());
        assert!(CliArguments::try_parse_from(["mix-colors", "-m", "lowest"]).is_err());
    }

    #[test]
    fn test_file_flags() {
        let config = parse(&["-f", "mine.txt", "1,2,3,4"]).into_config(Config::default());
        assert_eq!(config.colors_file, Some(PathBuf::from("mine.txt")));

        let config = parse(&["--no-file", "1,2,3,4"]).into_config(Config::default());
        assert_eq!(config.colors_file, None);
    }

    #[test]
    fn test_flags_override_config() {
        let base = Config {
            colors: vec!["0,0,0,0".to_string()],
            mode: Mode::Lowest,
            format: OutputFormat::Json,
            ..Config::default()
        };
        let config = parse(&["1,2,3,4"]).into_config(base.clone());
        assert_eq!(config.mode, Mode::Lowest);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.colors, ["0,0,0,0", "1,2,3,4"]);

        let config = parse(&["--format", "text", "-m", "mix", "1,2,3,4"]).into_config(base);
        assert_eq!(config.mode, Mode::Mix);
        assert_eq!(config.format, OutputFormat::Text);
    }
}
