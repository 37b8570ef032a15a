use super::CliModeResult;
use crate::Cli;
use anyhow::Result;
use plq_core::{Config, JsonSink, QueryForm};
use std::io;

/// Hands the filter to the query service, here a JSON document on stdout.
pub fn submit_mode(cli: &Cli, config: &Config, form: &QueryForm) -> Result<CliModeResult> {
    let mut sink = JsonSink::new(io::stdout().lock(), cli.pretty || config.pretty);
    form.submit(&mut sink)?;
    Ok(CliModeResult::Finish)
}
