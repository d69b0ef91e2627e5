//! Build artifact writing.
//!
//! Emits `sitemap.xml` and `routes.json` into the configured output
//! directory. `routes.json` is the machine manifest the external renderer
//! consumes: one record per route with its sitemap metadata and the fully
//! composed head-tag sequence.

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use weld_config::Config;
use weld_content::{ContentStore, HeadTag};

use crate::head::compose_head;
use crate::routes::Route;
use crate::sitemap::write_sitemap;

/// Error raised while writing build artifacts.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// I/O error writing an artifact.
    #[error("I/O error writing {}: {source}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// Manifest serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Summary of a completed emission pass.
#[derive(Debug)]
pub struct BuildSummary {
    /// Number of routes emitted.
    pub route_count: usize,
    /// Where the sitemap was written.
    pub sitemap_path: PathBuf,
    /// Where the route manifest was written.
    pub manifest_path: PathBuf,
}

/// One record of the `routes.json` manifest.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestEntry<'a> {
    path: &'a str,
    source_slug: &'a str,
    last_modified: String,
    change_frequency: &'static str,
    priority: f32,
    head: Vec<HeadTag>,
}

/// Write `sitemap.xml` and `routes.json` for the given routes.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or an
/// artifact cannot be written.
pub fn emit_artifacts(
    store: &ContentStore,
    config: &Config,
    routes: &[Route],
) -> Result<BuildSummary, EmitError> {
    let out_dir = &config.content_resolved.out_dir;
    std::fs::create_dir_all(out_dir).map_err(|source| EmitError::Io {
        path: out_dir.clone(),
        source,
    })?;

    let sitemap_path = out_dir.join("sitemap.xml");
    let mut xml = Vec::new();
    write_sitemap(routes, &config.site.base_url, &mut xml).map_err(|source| EmitError::Io {
        path: sitemap_path.clone(),
        source,
    })?;
    std::fs::write(&sitemap_path, xml).map_err(|source| EmitError::Io {
        path: sitemap_path.clone(),
        source,
    })?;

    let manifest: Vec<ManifestEntry<'_>> = routes
        .iter()
        .map(|route| {
            let entry = store
                .find(store.collection(), &route.source_slug)
                .expect("route slugs come from the store");
            ManifestEntry {
                path: &route.path,
                source_slug: &route.source_slug,
                last_modified: route.last_modified.format("%Y-%m-%d").to_string(),
                change_frequency: route.change_frequency.as_str(),
                priority: route.priority,
                head: compose_head(route, entry, config),
            }
        })
        .collect();

    let manifest_path = out_dir.join("routes.json");
    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(&manifest_path, json).map_err(|source| EmitError::Io {
        path: manifest_path.clone(),
        source,
    })?;

    info!(
        routes = routes.len(),
        out_dir = %out_dir.display(),
        "build artifacts written"
    );

    Ok(BuildSummary {
        route_count: routes.len(),
        sitemap_path,
        manifest_path,
    })
}
