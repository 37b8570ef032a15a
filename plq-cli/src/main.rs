mod cli;
mod cli_modes;
mod logging;
mod render;

use anyhow::Result;
use cli::Cli;
use cli_modes::{CliModeResult, check_mode, config_path_mode, fill_form, submit_mode};
use plq_core::Config;
use render::{RenderOptions, Renderer};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("plq: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::new();

    // An explicit --config must load; the standard locations may fall back to defaults.
    let (config, config_error) = match &cli.config {
        Some(path) => (Config::load_from(path.clone())?, None),
        None => match Config::load() {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        },
    };

    logging::init(cli.verbose, &config.log_level);
    if let Some(e) = config_error {
        tracing::warn!("using default configuration: {e:#}");
    }

    let renderer = Renderer::new(Some(RenderOptions {
        use_color: cli.color.use_color(),
    }));

    if let CliModeResult::Finish = config_path_mode(&cli, &renderer, &config) {
        return Ok(());
    }

    let form = fill_form(&cli, &config, &renderer);

    if let CliModeResult::Finish = check_mode(&cli, &renderer, &form) {
        return Ok(());
    }

    submit_mode(&cli, &config, &form)?;
    Ok(())
}
