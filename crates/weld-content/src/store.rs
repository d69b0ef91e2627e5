//! Immutable document store.
//!
//! Discovers every content file under the configured source directory,
//! parses its frontmatter, validates the schema, and exposes the result by
//! collection + slug. Loading is all-or-nothing: any malformed document
//! aborts the load with a precise file/field identifier.
//!
//! Per-file parsing fans out across a rayon pool; files are independent, so
//! the only serialization point is the duplicate-slug check after the full
//! scan. Entries are sorted by slug so the result is deterministic
//! regardless of scan or thread order.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::{debug, info};

use weld_config::{ChangeFrequency, ContentConfig};

use crate::frontmatter::{Frontmatter, HeadTag, split_frontmatter};
use crate::slug::slug_from_path;

/// A loaded, validated content document.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentEntry {
    /// Collection the document belongs to.
    pub collection: String,
    /// Route slug derived from the file location. Unique within the collection.
    pub slug: String,
    /// Required page title from frontmatter.
    pub title: String,
    /// Required page description from frontmatter.
    pub description: String,
    /// Per-document head tags, appended after the global SEO defaults.
    pub extra_head: Vec<HeadTag>,
    /// `lastUpdated` frontmatter date, if present.
    pub last_modified: Option<NaiveDate>,
    /// Per-document `<changefreq>` override, if present.
    pub change_frequency: Option<ChangeFrequency>,
    /// Per-document `<priority>` override, if present.
    pub priority: Option<f32>,
    /// Source file the entry was loaded from.
    pub source_path: PathBuf,
}

/// Error raised while loading the content collection.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Content source directory does not exist.
    #[error("Content directory not found: {}", .0.display())]
    SourceDirNotFound(PathBuf),
    /// I/O error reading a file or directory.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// File has no leading `---` frontmatter block.
    #[error("{}: missing frontmatter block", .file.display())]
    MissingFrontmatter {
        /// Offending file.
        file: PathBuf,
    },
    /// Frontmatter block is not valid YAML.
    #[error("{}: invalid frontmatter: {message}", .file.display())]
    Parse {
        /// Offending file.
        file: PathBuf,
        /// Parser message.
        message: String,
    },
    /// A required frontmatter field is missing or empty.
    #[error("{}: missing required frontmatter field `{field}`", .file.display())]
    Schema {
        /// Offending file.
        file: PathBuf,
        /// Field name.
        field: &'static str,
    },
    /// Two distinct files resolve to the same slug.
    #[error("duplicate slug `{slug}`: {} and {}", .first.display(), .second.display())]
    DuplicateSlug {
        /// The colliding slug.
        slug: String,
        /// First file.
        first: PathBuf,
        /// Second file.
        second: PathBuf,
    },
}

/// Immutable document collection with slug lookups.
///
/// Built once per load; rebuilds discard and reconstruct the whole store
/// rather than patching it.
#[derive(Debug)]
pub struct ContentStore {
    collection: String,
    entries: Vec<DocumentEntry>,
    slug_index: HashMap<String, usize>,
}

impl ContentStore {
    /// Discover, parse, and validate every content file under the source
    /// directory.
    ///
    /// # Errors
    ///
    /// Fails fast on the first unreadable or malformed document; duplicate
    /// slugs are detected after the full scan so the error can name both
    /// files.
    pub fn load(content: &ContentConfig) -> Result<Self, ContentError> {
        if !content.source_dir.is_dir() {
            return Err(ContentError::SourceDirNotFound(content.source_dir.clone()));
        }

        let mut files = Vec::new();
        collect_content_files(
            &content.source_dir,
            Path::new(""),
            &content.extensions,
            &mut files,
        )?;

        let mut entries = files
            .par_iter()
            .map(|rel_path| load_entry(&content.source_dir, rel_path, &content.collection))
            .collect::<Result<Vec<_>, _>>()?;

        entries.sort_by(|a, b| a.slug.cmp(&b.slug));

        for pair in entries.windows(2) {
            if pair[0].slug == pair[1].slug {
                return Err(ContentError::DuplicateSlug {
                    slug: pair[0].slug.clone(),
                    first: pair[0].source_path.clone(),
                    second: pair[1].source_path.clone(),
                });
            }
        }

        let slug_index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.slug.clone(), i))
            .collect();

        info!(
            collection = %content.collection,
            count = entries.len(),
            "content collection loaded"
        );

        Ok(Self {
            collection: content.collection.clone(),
            entries,
            slug_index,
        })
    }

    /// Look up a document by collection and slug.
    #[must_use]
    pub fn find(&self, collection: &str, slug: &str) -> Option<&DocumentEntry> {
        if collection != self.collection {
            return None;
        }
        self.slug_index.get(slug).map(|&i| &self.entries[i])
    }

    /// Collection identifier this store was loaded into.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// All entries, sorted by slug.
    #[must_use]
    pub fn entries(&self) -> &[DocumentEntry] {
        &self.entries
    }

    /// Number of documents in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the store holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Recursively collect content files, as paths relative to the source root.
///
/// Hidden files and directories (leading dot) are skipped, matching the
/// scanner behavior for editor droppings and VCS metadata.
fn collect_content_files(
    source_dir: &Path,
    rel_dir: &Path,
    extensions: &[String],
    files: &mut Vec<PathBuf>,
) -> Result<(), ContentError> {
    let dir_path = source_dir.join(rel_dir);
    let entries = std::fs::read_dir(&dir_path).map_err(|source| ContentError::Io {
        path: dir_path.clone(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| ContentError::Io {
            path: dir_path.clone(),
            source,
        })?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        let rel_path = rel_dir.join(&name);
        let is_dir = entry
            .file_type()
            .map_err(|source| ContentError::Io {
                path: entry.path(),
                source,
            })?
            .is_dir();

        if is_dir {
            collect_content_files(source_dir, &rel_path, extensions, files)?;
        } else if rel_path
            .extension()
            .is_some_and(|ext| extensions.iter().any(|e| ext == e.as_str()))
        {
            files.push(rel_path);
        }
    }

    Ok(())
}

/// Load and validate a single document.
fn load_entry(
    source_dir: &Path,
    rel_path: &Path,
    collection: &str,
) -> Result<DocumentEntry, ContentError> {
    let source_path = source_dir.join(rel_path);
    debug!(file = %source_path.display(), "loading document");

    let raw = std::fs::read_to_string(&source_path).map_err(|source| ContentError::Io {
        path: source_path.clone(),
        source,
    })?;

    let (yaml, _body) =
        split_frontmatter(&raw).ok_or_else(|| ContentError::MissingFrontmatter {
            file: source_path.clone(),
        })?;

    let fm = Frontmatter::from_yaml(yaml).map_err(|e| ContentError::Parse {
        file: source_path.clone(),
        message: e.to_string(),
    })?;

    let title = require_field(fm.title, "title", &source_path)?;
    let description = require_field(fm.description, "description", &source_path)?;

    Ok(DocumentEntry {
        collection: collection.to_owned(),
        slug: slug_from_path(rel_path),
        title,
        description,
        extra_head: fm.head,
        last_modified: fm.last_updated,
        change_frequency: fm.change_frequency,
        priority: fm.priority,
        source_path,
    })
}

/// Require a frontmatter field to be present and non-empty.
fn require_field(
    value: Option<String>,
    field: &'static str,
    file: &Path,
) -> Result<String, ContentError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ContentError::Schema {
            file: file.to_path_buf(),
            field,
        }),
    }
}
