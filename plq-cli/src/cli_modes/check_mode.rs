use super::CliModeResult;
use crate::{Cli, render::Renderer};
use plq_core::QueryForm;

pub fn check_mode(cli: &Cli, renderer: &Renderer, form: &QueryForm) -> CliModeResult {
    if !cli.check {
        return CliModeResult::NothingToDo;
    }
    renderer.print_validity(form);
    CliModeResult::Finish
}
