//! `weld check` command implementation.

use clap::Args;

use crate::commands::{CommonArgs, load_and_check, print_report_warnings};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl CheckArgs {
    /// Execute the check command: the full validation pipeline without
    /// artifact emission.
    ///
    /// # Errors
    ///
    /// Returns an error on any validation failure.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let site = load_and_check(&self.common, None)?;
        print_report_warnings(&output, &site.report);

        output.info(&format!(
            "{} documents in collection \"{}\"",
            site.store.len(),
            site.store.collection()
        ));
        if site.report.orphans.is_empty() {
            output.success("Navigation and content are consistent");
        } else {
            output.success(&format!(
                "Navigation and content are consistent ({} orphan document(s))",
                site.report.orphans.len()
            ));
        }
        Ok(())
    }
}
