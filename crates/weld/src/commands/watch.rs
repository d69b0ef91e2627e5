//! `weld watch` command implementation.
//!
//! Watches the content source directory (and the config file) and re-runs
//! the full build pipeline on every change. Rebuilds discard and
//! reconstruct the whole model; there is no incremental patching.

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use clap::Args;
use notify::{RecursiveMode, Watcher};
use tracing::debug;

use weld_config::{CliSettings, Config};

use crate::commands::CommonArgs;
use crate::commands::build::run_build;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the watch command.
#[derive(Args)]
pub(crate) struct WatchArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output directory for build artifacts (overrides config).
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Debounce window in milliseconds for coalescing editor save bursts.
    #[arg(long, default_value_t = 300)]
    debounce_ms: u64,
}

impl WatchArgs {
    /// Execute the watch command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the watcher cannot be
    /// started. Build failures inside the loop are reported and watched
    /// past, so a broken save does not kill the session.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Resolve config once to learn what to watch; each rebuild reloads
        // it so config edits take effect too.
        let settings = CliSettings {
            source_dir: self.common.source_dir.clone(),
            out_dir: self.out_dir.clone(),
            base_url: self.common.base_url.clone(),
        };
        let config = Config::load(self.common.config.as_deref(), Some(&settings))?;
        let source_dir = config.content_resolved.source_dir.clone();
        let artifacts_dir = config.content_resolved.out_dir.clone();

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
            if let Ok(event) = res {
                // Ignore our own artifact writes
                if event.paths.iter().any(|p| !p.starts_with(&artifacts_dir)) {
                    let _ = tx.send(());
                }
            }
        })
        .map_err(|e| CliError::Watch(e.to_string()))?;

        watcher
            .watch(&source_dir, RecursiveMode::Recursive)
            .map_err(|e| CliError::Watch(e.to_string()))?;
        if let Some(config_path) = &config.config_path {
            watcher
                .watch(config_path, RecursiveMode::NonRecursive)
                .map_err(|e| CliError::Watch(e.to_string()))?;
        }

        output.info(&format!("Watching {}", source_dir.display()));
        report(&output, run_build(&self.common, self.out_dir.clone(), &output));

        while rx.recv().is_ok() {
            // Coalesce the burst of events editors emit per save
            while rx.recv_timeout(Duration::from_millis(self.debounce_ms)).is_ok() {}

            debug!("change detected, rebuilding");
            report(&output, run_build(&self.common, self.out_dir.clone(), &output));
        }

        Ok(())
    }
}

/// Report a build outcome without ending the watch session.
fn report(output: &Output, result: Result<(), CliError>) {
    if let Err(err) = result {
        output.error(&format!("Build failed: {err}"));
    }
}
