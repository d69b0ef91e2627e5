//! Sidebar tree construction with shape validation.
//!
//! Raw [`SidebarRecord`]s are duck-shaped (every field optional); this module
//! turns them into the explicit [`SidebarNode`] sum type so the leaf/group
//! discriminator is a compile-time invariant for everything downstream.
//! Declared order is preserved: it controls on-page rendering order.

use tracing::warn;

use weld_config::SidebarRecord;

/// A compiled navigation node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarNode {
    /// Clickable entry pointing at a document.
    Leaf {
        /// Display label.
        label: String,
        /// Slug of the referenced document.
        slug: String,
    },
    /// Non-clickable container of further nodes.
    Group {
        /// Display label.
        label: String,
        /// Whether the group starts collapsed.
        collapsed: bool,
        /// Child nodes in declared order.
        children: Vec<SidebarNode>,
    },
}

impl SidebarNode {
    /// Display label of this node.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf { label, .. } | Self::Group { label, .. } => label,
        }
    }
}

/// Error raised by sidebar shape validation.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// A record violates the `{ label, slug? | items? }` shape.
    #[error("{path}: {reason}")]
    Shape {
        /// Index chain of the offending node (e.g. `sidebar[2].items[0]`).
        path: String,
        /// What is wrong with the node.
        reason: String,
    },
}

/// Compile the raw sidebar specification into a tree of [`SidebarNode`]s.
///
/// Shape rules:
/// - every node needs a non-empty `label`
/// - exactly one of `slug` (leaf) or `items` (group) must be present
/// - a leaf `slug` must be non-empty
/// - an empty group is allowed but logged as a warning
///
/// # Errors
///
/// Returns [`NavError::Shape`] naming the first offending node by its index
/// chain.
pub fn build_tree(records: &[SidebarRecord]) -> Result<Vec<SidebarNode>, NavError> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| build_node(record, &format!("sidebar[{i}]")))
        .collect()
}

/// Build a single node, recursing into group children.
fn build_node(record: &SidebarRecord, path: &str) -> Result<SidebarNode, NavError> {
    let label = match record.label.as_deref().map(str::trim) {
        Some(l) if !l.is_empty() => l.to_owned(),
        _ => {
            return Err(NavError::Shape {
                path: path.to_owned(),
                reason: "node must have a non-empty `label`".to_owned(),
            });
        }
    };

    match (&record.slug, &record.items) {
        (Some(_), Some(_)) => Err(NavError::Shape {
            path: path.to_owned(),
            reason: "node must set exactly one of `slug` or `items`, not both".to_owned(),
        }),
        (None, None) => Err(NavError::Shape {
            path: path.to_owned(),
            reason: "node must set exactly one of `slug` or `items`".to_owned(),
        }),
        (Some(slug), None) => {
            if slug.trim().is_empty() {
                return Err(NavError::Shape {
                    path: path.to_owned(),
                    reason: "leaf `slug` must be a non-empty string".to_owned(),
                });
            }
            Ok(SidebarNode::Leaf {
                label,
                slug: slug.clone(),
            })
        }
        (None, Some(items)) => {
            if items.is_empty() {
                warn!(node = %path, label = %label, "sidebar group has no items");
            }
            let children = items
                .iter()
                .enumerate()
                .map(|(i, child)| build_node(child, &format!("{path}.items[{i}]")))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(SidebarNode::Group {
                label,
                collapsed: record.collapsed.unwrap_or(false),
                children,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_shape_error(result: Result<Vec<SidebarNode>, NavError>, expected_path: &str) {
        let NavError::Shape { path, .. } = result.unwrap_err();
        assert_eq!(path, expected_path);
    }

    #[test]
    fn test_build_preserves_declared_order() {
        let records = vec![
            SidebarRecord::leaf("Intro", "intro"),
            SidebarRecord::group(
                "Guides",
                vec![
                    SidebarRecord::leaf("Install", "guides/install"),
                    SidebarRecord::leaf("Deploy", "guides/deploy"),
                ],
            ),
            SidebarRecord::leaf("FAQ", "faq"),
        ];

        let tree = build_tree(&records).unwrap();

        assert_eq!(tree.len(), 3);
        assert_eq!(tree[0].label(), "Intro");
        assert_eq!(tree[2].label(), "FAQ");
        let SidebarNode::Group { children, collapsed, .. } = &tree[1] else {
            panic!("expected group");
        };
        assert!(!*collapsed);
        assert_eq!(children[0].label(), "Install");
        assert_eq!(children[1].label(), "Deploy");
    }

    #[test]
    fn test_collapsed_flag_carried() {
        let mut record = SidebarRecord::group("Guides", vec![SidebarRecord::leaf("A", "a")]);
        record.collapsed = Some(true);

        let tree = build_tree(std::slice::from_ref(&record)).unwrap();
        let SidebarNode::Group { collapsed, .. } = &tree[0] else {
            panic!("expected group");
        };
        assert!(*collapsed);
    }

    #[test]
    fn test_both_slug_and_items_is_shape_error() {
        let record = SidebarRecord {
            label: Some("Bad".to_owned()),
            slug: Some("bad".to_owned()),
            items: Some(vec![]),
            collapsed: None,
        };
        assert_shape_error(build_tree(&[record]), "sidebar[0]");
    }

    #[test]
    fn test_neither_slug_nor_items_is_shape_error() {
        let record = SidebarRecord {
            label: Some("Bad".to_owned()),
            slug: None,
            items: None,
            collapsed: None,
        };
        assert_shape_error(build_tree(&[record]), "sidebar[0]");
    }

    #[test]
    fn test_missing_label_is_shape_error() {
        let record = SidebarRecord {
            label: None,
            slug: Some("x".to_owned()),
            items: None,
            collapsed: None,
        };
        assert_shape_error(build_tree(&[record]), "sidebar[0]");
    }

    #[test]
    fn test_empty_slug_is_shape_error() {
        let record = SidebarRecord {
            label: Some("X".to_owned()),
            slug: Some("  ".to_owned()),
            items: None,
            collapsed: None,
        };
        assert_shape_error(build_tree(&[record]), "sidebar[0]");
    }

    #[test]
    fn test_nested_error_reports_index_chain() {
        let records = vec![
            SidebarRecord::leaf("Fine", "fine"),
            SidebarRecord::group(
                "Outer",
                vec![SidebarRecord::group(
                    "Inner",
                    vec![SidebarRecord {
                        label: Some("Broken".to_owned()),
                        slug: None,
                        items: None,
                        collapsed: None,
                    }],
                )],
            ),
        ];

        assert_shape_error(build_tree(&records), "sidebar[1].items[0].items[0]");
    }

    #[test]
    fn test_empty_group_is_allowed() {
        let record = SidebarRecord::group("Coming Soon", vec![]);
        let tree = build_tree(&[record]).unwrap();

        let SidebarNode::Group { children, .. } = &tree[0] else {
            panic!("expected group");
        };
        assert!(children.is_empty());
    }

    #[test]
    fn test_empty_spec_builds_empty_tree() {
        assert!(build_tree(&[]).unwrap().is_empty());
    }
}
