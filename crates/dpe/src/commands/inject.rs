//! `dpe inject` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use dpe_render::inject_chart_directives;

use crate::error::CliError;

/// Arguments for the inject command.
#[derive(Args)]
pub(crate) struct InjectArgs {
    /// Report text in the markup dialect.
    input: PathBuf,
}

impl InjectArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let text = std::fs::read_to_string(&self.input)?;
        let injected = inject_chart_directives(&text);
        std::io::stdout().lock().write_all(injected.as_bytes())?;
        Ok(())
    }
}
