//! Content collection loading and frontmatter validation for weld.
//!
//! This crate provides:
//! - [`ContentStore`]: immutable document collection keyed by slug
//! - [`slug_from_path`]: deterministic file-location-to-slug mapping
//! - Frontmatter parsing with required-field schema validation
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use weld_config::ContentConfig;
//! use weld_content::ContentStore;
//!
//! let store = ContentStore::load(&ContentConfig::default())?;
//!
//! if let Some(entry) = store.find("docs", "guides/install") {
//!     println!("{}", entry.title);
//! }
//! # Ok(())
//! # }
//! ```

mod frontmatter;
mod slug;
mod store;

pub use frontmatter::{Frontmatter, HeadTag, split_frontmatter};
pub use slug::slug_from_path;
pub use store::{ContentError, ContentStore, DocumentEntry};
