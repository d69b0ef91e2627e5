//! Raw sidebar specification records.
//!
//! The sidebar is authored in `weld.toml` as an ordered, nested structure of
//! records shaped as `{ label, slug?, items?, collapsed? }`. Records are
//! deliberately loose here: every field is optional so that shape violations
//! surface as positioned errors from the tree builder, not as opaque TOML
//! deserialization failures.

use serde::Deserialize;

/// One node of the authored sidebar specification.
///
/// Exactly one of `slug` (leaf) or `items` (group) must be present on a
/// well-formed record; the tree builder in `weld-nav` enforces this and
/// reports the violating node by its index chain.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SidebarRecord {
    /// Display label. Required on every node.
    pub label: Option<String>,
    /// Document slug this entry links to (leaf discriminator).
    pub slug: Option<String>,
    /// Child records (group discriminator).
    pub items: Option<Vec<SidebarRecord>>,
    /// Whether a group starts collapsed. Defaults to false.
    pub collapsed: Option<bool>,
}

impl SidebarRecord {
    /// Convenience constructor for a leaf record.
    #[must_use]
    pub fn leaf(label: &str, slug: &str) -> Self {
        Self {
            label: Some(label.to_owned()),
            slug: Some(slug.to_owned()),
            items: None,
            collapsed: None,
        }
    }

    /// Convenience constructor for a group record.
    #[must_use]
    pub fn group(label: &str, items: Vec<SidebarRecord>) -> Self {
        Self {
            label: Some(label.to_owned()),
            slug: None,
            items: Some(items),
            collapsed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leaf_record() {
        let toml = r#"
label = "Install"
slug = "guides/install"
"#;
        let record: SidebarRecord = toml::from_str(toml).unwrap();
        assert_eq!(record.label.as_deref(), Some("Install"));
        assert_eq!(record.slug.as_deref(), Some("guides/install"));
        assert!(record.items.is_none());
    }

    #[test]
    fn test_parse_nested_group() {
        let toml = r#"
label = "Guides"
collapsed = true
items = [
    { label = "Install", slug = "guides/install" },
    { label = "Advanced", items = [
        { label = "Tuning", slug = "guides/advanced/tuning" },
    ] },
]
"#;
        let record: SidebarRecord = toml::from_str(toml).unwrap();
        let items = record.items.unwrap();
        assert_eq!(items.len(), 2);
        let nested = items[1].items.as_ref().unwrap();
        assert_eq!(nested[0].slug.as_deref(), Some("guides/advanced/tuning"));
    }

    #[test]
    fn test_malformed_record_still_parses() {
        // Missing label and both discriminators: parses fine, fails shape
        // validation later with a positioned error.
        let toml = r#"
collapsed = false
"#;
        let record: SidebarRecord = toml::from_str(toml).unwrap();
        assert!(record.label.is_none());
        assert!(record.slug.is_none());
        assert!(record.items.is_none());
    }
}
