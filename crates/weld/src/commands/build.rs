//! `weld build` command implementation.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;

use weld_emit::{emit_artifacts, routes};

use crate::commands::{CommonArgs, load_and_check, print_report_warnings};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output directory for build artifacts (overrides config).
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error on any validation or emission failure.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        run_build(&self.common, self.out_dir, &output)
    }
}

/// Run one full build: validate, then emit artifacts.
///
/// Shared with the watch command so rebuilds take the identical path.
pub(crate) fn run_build(
    common: &CommonArgs,
    out_dir: Option<PathBuf>,
    output: &Output,
) -> Result<(), CliError> {
    let site = load_and_check(common, out_dir)?;
    print_report_warnings(output, &site.report);

    let routes = routes(&site.store, &site.config, Utc::now().date_naive());
    let summary = emit_artifacts(&site.store, &site.config, &routes)?;

    output.success(&format!(
        "Emitted {} routes -> {}",
        summary.route_count,
        site.config.content_resolved.out_dir.display()
    ));
    Ok(())
}
