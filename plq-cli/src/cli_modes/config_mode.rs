use super::CliModeResult;
use crate::{Cli, render::Renderer};
use plq_core::Config;

pub fn config_path_mode(cli: &Cli, renderer: &Renderer, config: &Config) -> CliModeResult {
    if !cli.config_path {
        return CliModeResult::NothingToDo;
    }
    match &config.source {
        Some(path) => renderer.print_info(&format!("{}", path.display())),
        None => {
            renderer.print_info("No configuration file found. Looked in:");
            for path in Config::config_file_paths() {
                renderer.print_info(&format!("  {}", path.display()));
            }
        }
    }
    CliModeResult::Finish
}
