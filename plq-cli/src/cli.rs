use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::render::ColorMode;

/// plq — build a time-bounded vehicle search filter
///
/// Fill in the range and attributes as you would in the search form. The finished
/// filter is written to stdout as JSON, ready for the query service.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("form").args([
        "from", "from_hour", "from_minute", "from_second",
        "to", "to_hour", "to_minute", "to_second",
        "plates", "colors", "models", "makes", "check",
    ]).multiple(true)),
    group(ArgGroup::new("solo").args(["config_path"]).conflicts_with_all(["form"])),
)]
pub struct Cli {
    /// Prints the configuration file in use, or where one would be read from.
    #[arg(long)]
    pub config_path: bool,
    /// Reads configuration from this file instead of the standard locations.
    #[arg(long, env = "PLQ_CONFIG")]
    pub config: Option<PathBuf>,

    /// First day of the range (e.g. `2024-01-31`, `31/01/2024`, `yesterday`, `monday`)
    #[arg(long)]
    pub from: Option<String>,
    /// Hour of the first day, 0-23. Defaults to 0.
    #[arg(long, value_name = "HH")]
    pub from_hour: Option<String>,
    /// Minute of the start, 0-59. Defaults to 0.
    #[arg(long, value_name = "MM")]
    pub from_minute: Option<String>,
    /// Second of the start, 0-59. Defaults to 0.
    #[arg(long, value_name = "SS")]
    pub from_second: Option<String>,

    /// Last day of the range (same formats as `--from`)
    #[arg(long)]
    pub to: Option<String>,
    /// Hour of the last day, 0-23. Defaults to 0.
    #[arg(long, value_name = "HH")]
    pub to_hour: Option<String>,
    /// Minute of the end, 0-59. Defaults to 59.
    #[arg(long, value_name = "MM")]
    pub to_minute: Option<String>,
    /// Second of the end, 0-59. Defaults to 59.
    #[arg(long, value_name = "SS")]
    pub to_second: Option<String>,

    /// License plates to look for (e.g. `--plates 1234ABC 5678DEF`)
    #[arg(long, num_args(1..))]
    pub plates: Vec<String>,
    /// Vehicle colors (letters only)
    #[arg(long, num_args(1..))]
    pub colors: Vec<String>,
    /// Vehicle models
    #[arg(long, num_args(1..))]
    pub models: Vec<String>,
    /// Vehicle makes (letters only)
    #[arg(long, num_args(1..))]
    pub makes: Vec<String>,

    /// Shows how each field was read instead of writing the filter.
    #[arg(long)]
    pub check: bool,
    /// Pretty-prints the JSON filter.
    #[arg(long)]
    pub pretty: bool,
    /// Logs every field commit to stderr.
    #[arg(long, short)]
    pub verbose: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}
