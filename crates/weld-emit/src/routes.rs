//! Route derivation from the content store.
//!
//! Routes are computed from the store, not the navigation tree: sitemaps
//! must include orphaned pages. One route per document, always.

use chrono::NaiveDate;

use weld_config::{ChangeFrequency, Config};
use weld_content::ContentStore;

/// A final, emittable route.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    /// Canonical URL path: lowercase, single leading slash, no trailing
    /// slash except root.
    pub path: String,
    /// Slug of the originating document.
    pub source_slug: String,
    /// Sitemap `<lastmod>` date.
    pub last_modified: NaiveDate,
    /// Sitemap `<changefreq>` value.
    pub change_frequency: ChangeFrequency,
    /// Sitemap `<priority>` value.
    pub priority: f32,
}

/// Canonicalize a slug into a URL path.
///
/// The root slug (empty string) maps to `/`.
#[must_use]
pub fn route_path(slug: &str) -> String {
    if slug.is_empty() {
        return "/".to_owned();
    }
    format!("/{}", slug.to_lowercase())
}

/// Join a route path onto the site base URL.
#[must_use]
pub fn absolute_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Compute the route list for every document in the store.
///
/// Sitemap metadata uses per-document overrides when present, else the
/// configured defaults; `last_modified` falls back to `build_date`. The
/// result is sorted by path so sitemap diffs are stable across builds.
#[must_use]
pub fn routes(store: &ContentStore, config: &Config, build_date: NaiveDate) -> Vec<Route> {
    let mut routes: Vec<Route> = store
        .entries()
        .iter()
        .map(|entry| Route {
            path: route_path(&entry.slug),
            source_slug: entry.slug.clone(),
            last_modified: entry.last_modified.unwrap_or(build_date),
            change_frequency: entry
                .change_frequency
                .unwrap_or(config.sitemap.change_frequency),
            priority: entry.priority.unwrap_or(config.sitemap.priority),
        })
        .collect();

    routes.sort_by(|a, b| a.path.cmp(&b.path));
    routes
}
