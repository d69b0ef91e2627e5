//! Route, sitemap, and SEO metadata emission for weld.
//!
//! This crate consumes a validated content store and produces the build
//! artifacts:
//! - [`routes`]: the canonical route list (one route per document, orphans
//!   included, sorted by path)
//! - [`write_sitemap`]: sitemap-protocol XML
//! - [`compose_head`]: per-route head-tag sequences (Open Graph, Twitter
//!   Card, JSON-LD, then per-document extras)
//! - [`emit_artifacts`]: writes `sitemap.xml` and `routes.json` to the
//!   output directory

mod artifacts;
mod head;
mod routes;
mod sitemap;

pub use artifacts::{BuildSummary, EmitError, emit_artifacts};
pub use head::compose_head;
pub use routes::{Route, absolute_url, route_path, routes};
pub use sitemap::write_sitemap;
