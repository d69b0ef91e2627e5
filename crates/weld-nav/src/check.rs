//! Cross-validation of the navigation tree against the content store.
//!
//! The sole cross-cutting step of the build: every leaf must resolve to an
//! existing document before anything is emitted. Violations are accumulated
//! so authors can fix a whole sidebar in one pass, never one error at a
//! time. Documents missing from the tree are only observations: orphans stay
//! routable and sitemapped.

use std::collections::HashSet;
use std::fmt;

use tracing::warn;

use weld_content::ContentStore;

use crate::tree::SidebarNode;

/// A sidebar leaf referencing a document that does not exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrokenLink {
    /// Leaf label.
    pub label: String,
    /// Slug that failed to resolve.
    pub slug: String,
}

/// Batch of integrity violations; any one of them is build-fatal.
#[derive(Debug)]
pub struct IntegrityError {
    /// Every broken link found in the tree, in traversal order.
    pub broken: Vec<BrokenLink>,
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} broken sidebar link(s):", self.broken.len())?;
        for link in &self.broken {
            write!(
                f,
                "\n  \"{}\" -> {} (no such document)",
                link.label, link.slug
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for IntegrityError {}

/// Warning-level observations from a successful check.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Slugs present in the store but referenced by no navigation leaf.
    pub orphans: Vec<String>,
}

/// Cross-validate a navigation tree against the content store.
///
/// Walks every leaf and resolves it through the store. All violations are
/// collected before failing.
///
/// # Errors
///
/// Returns [`IntegrityError`] listing every leaf whose slug resolves to no
/// document.
pub fn check(tree: &[SidebarNode], store: &ContentStore) -> Result<CheckReport, IntegrityError> {
    let collection = store.collection();
    let mut broken = Vec::new();
    let mut referenced = HashSet::new();

    walk_leaves(tree, &mut |label, slug| {
        referenced.insert(slug.to_owned());
        if store.find(collection, slug).is_none() {
            broken.push(BrokenLink {
                label: label.to_owned(),
                slug: slug.to_owned(),
            });
        }
    });

    if !broken.is_empty() {
        return Err(IntegrityError { broken });
    }

    let orphans: Vec<String> = store
        .entries()
        .iter()
        .filter(|entry| !referenced.contains(&entry.slug))
        .map(|entry| entry.slug.clone())
        .collect();

    for slug in &orphans {
        warn!(%slug, "document is not referenced by any sidebar entry");
    }

    Ok(CheckReport { orphans })
}

/// Visit every leaf in declared order.
fn walk_leaves<'a>(nodes: &'a [SidebarNode], visit: &mut impl FnMut(&'a str, &'a str)) {
    for node in nodes {
        match node {
            SidebarNode::Leaf { label, slug } => visit(label, slug),
            SidebarNode::Group { children, .. } => walk_leaves(children, visit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use weld_config::ContentConfig;

    /// Build a store containing documents for the given slugs.
    fn store_with(slugs: &[&str]) -> (tempfile::TempDir, ContentStore) {
        let dir = tempfile::tempdir().unwrap();
        for slug in slugs {
            let rel = if slug.is_empty() {
                "index.md".to_owned()
            } else {
                format!("{slug}.md")
            };
            let path = dir.path().join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(
                &path,
                format!("---\ntitle: {slug}\ndescription: About {slug}\n---\n"),
            )
            .unwrap();
        }
        let store = ContentStore::load(&ContentConfig {
            source_dir: dir.path().to_path_buf(),
            ..ContentConfig::default()
        })
        .unwrap();
        (dir, store)
    }

    fn leaf(label: &str, slug: &str) -> SidebarNode {
        SidebarNode::Leaf {
            label: label.to_owned(),
            slug: slug.to_owned(),
        }
    }

    fn group(label: &str, children: Vec<SidebarNode>) -> SidebarNode {
        SidebarNode::Group {
            label: label.to_owned(),
            collapsed: false,
            children,
        }
    }

    #[test]
    fn test_check_all_leaves_resolve() {
        let (_dir, store) = store_with(&["intro", "guides/install"]);
        let tree = vec![
            leaf("Intro", "intro"),
            group("Guides", vec![leaf("Install", "guides/install")]),
        ];

        let report = check(&tree, &store).unwrap();
        assert!(report.orphans.is_empty());
    }

    #[test]
    fn test_check_reports_all_broken_links() {
        let (_dir, store) = store_with(&["intro"]);
        let tree = vec![
            leaf("Intro", "intro"),
            leaf("Missing", "simplescripting/missing-page"),
            group("More", vec![leaf("Also Missing", "guides/ghost")]),
        ];

        let err = check(&tree, &store).unwrap_err();

        assert_eq!(err.broken.len(), 2);
        assert_eq!(err.broken[0].slug, "simplescripting/missing-page");
        assert_eq!(err.broken[0].label, "Missing");
        assert_eq!(err.broken[1].slug, "guides/ghost");
    }

    #[test]
    fn test_check_error_message_lists_every_link() {
        let (_dir, store) = store_with(&[]);
        let tree = vec![leaf("A", "a"), leaf("B", "b")];

        let message = check(&tree, &store).unwrap_err().to_string();
        assert!(message.contains("2 broken sidebar link(s)"));
        assert!(message.contains("\"A\" -> a"));
        assert!(message.contains("\"B\" -> b"));
    }

    #[test]
    fn test_orphans_are_warnings_not_errors() {
        let (_dir, store) = store_with(&["intro", "unlisted", "also/unlisted"]);
        let tree = vec![leaf("Intro", "intro")];

        let report = check(&tree, &store).unwrap();
        assert_eq!(
            report.orphans,
            vec!["also/unlisted".to_owned(), "unlisted".to_owned()]
        );
    }

    #[test]
    fn test_empty_tree_makes_every_document_an_orphan() {
        let (_dir, store) = store_with(&["a", "b"]);

        let report = check(&[], &store).unwrap();
        assert_eq!(report.orphans.len(), 2);
    }

    #[test]
    fn test_duplicate_leaf_references_are_fine() {
        let (_dir, store) = store_with(&["intro"]);
        let tree = vec![leaf("Intro", "intro"), leaf("Start Here", "intro")];

        let report = check(&tree, &store).unwrap();
        assert!(report.orphans.is_empty());
    }

    #[test]
    fn test_post_check_every_leaf_resolves() {
        let (_dir, store) = store_with(&["intro", "guides/install"]);
        let tree = vec![
            leaf("Intro", "intro"),
            group("Guides", vec![leaf("Install", "guides/install")]),
        ];

        check(&tree, &store).unwrap();

        // The validated-tree invariant: every leaf now resolves.
        walk_leaves(&tree, &mut |_, slug| {
            assert!(store.find(store.collection(), slug).is_some());
        });
    }
}
