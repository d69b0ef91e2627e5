//! CLI command implementations.

mod build;
mod check;
mod watch;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use watch::WatchArgs;

use std::path::PathBuf;

use clap::Args;

use weld_config::{CliSettings, Config};
use weld_content::ContentStore;
use weld_nav::{CheckReport, build_tree, check};

use crate::error::CliError;
use crate::output::Output;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover weld.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Site base URL (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose output (show per-stage logs).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Result of the load-and-validate pipeline shared by every command.
#[derive(Debug)]
pub(crate) struct ValidatedSite {
    pub config: Config,
    pub store: ContentStore,
    pub report: CheckReport,
}

/// Run the full validation pipeline: config, content store, sidebar tree,
/// integrity check.
///
/// The store and tree are independent producers; the integrity check is the
/// serialization point that needs both.
pub(crate) fn load_and_check(
    common: &CommonArgs,
    out_dir: Option<PathBuf>,
) -> Result<ValidatedSite, CliError> {
    let settings = CliSettings {
        source_dir: common.source_dir.clone(),
        out_dir,
        base_url: common.base_url.clone(),
    };
    let config = Config::load(common.config.as_deref(), Some(&settings))?;

    let store = ContentStore::load(&config.content_resolved)?;
    let tree = build_tree(&config.sidebar)?;
    let report = check(&tree, &store)?;

    Ok(ValidatedSite {
        config,
        store,
        report,
    })
}

/// Print warning-level observations from a successful check.
pub(crate) fn print_report_warnings(output: &Output, report: &CheckReport) {
    for slug in &report.orphans {
        output.warning(&format!("orphan document: {slug} (routable but unlisted)"));
    }
}
