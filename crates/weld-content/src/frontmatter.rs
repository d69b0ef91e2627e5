//! Frontmatter block extraction and parsing.
//!
//! Each content file is UTF-8 text with a leading YAML frontmatter block
//! delimited by `---` lines, followed by body content. The body is opaque to
//! this subsystem; only the frontmatter is interpreted.
//!
//! # Schema
//!
//! `title` and `description` are required and must be non-empty (enforced by
//! the store, which knows the file being loaded). Everything else is
//! optional: a `head` tag list, a `lastUpdated` date, and per-document
//! sitemap overrides. Unknown keys are ignored.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use weld_config::ChangeFrequency;

/// A head-tag descriptor, either from per-document frontmatter or composed
/// by the SEO defaults.
///
/// The sequence of tags is ordered; attributes within one tag are sorted for
/// deterministic output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag {
    /// Tag name (e.g., "meta", "script", "link").
    pub tag: String,
    /// Tag attributes.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    /// Inline content (e.g., a JSON-LD body). Most tags have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl HeadTag {
    /// Convenience constructor for a `<meta>` tag with a single
    /// name/content attribute pair.
    #[must_use]
    pub fn meta(key_attr: &str, key: &str, value: &str) -> Self {
        let mut attrs = BTreeMap::new();
        attrs.insert(key_attr.to_owned(), key.to_owned());
        attrs.insert("content".to_owned(), value.to_owned());
        Self {
            tag: "meta".to_owned(),
            attrs,
            content: None,
        }
    }
}

/// Parsed frontmatter fields.
///
/// All fields are optional at the parse layer; required-field enforcement
/// happens in the store where the offending file path is known.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    /// Page title.
    pub title: Option<String>,
    /// Page description.
    pub description: Option<String>,
    /// Per-document head tags, appended after the global defaults.
    #[serde(default)]
    pub head: Vec<HeadTag>,
    /// Last-modified date for the sitemap (`lastUpdated: 2025-06-01`).
    pub last_updated: Option<NaiveDate>,
    /// Per-document `<changefreq>` override.
    pub change_frequency: Option<ChangeFrequency>,
    /// Per-document `<priority>` override.
    pub priority: Option<f32>,
}

impl Frontmatter {
    /// Parse frontmatter fields from YAML content.
    ///
    /// Uses `serde_yaml` for correct handling of all YAML value styles
    /// (quoted strings, block scalars `|`/`>`, etc.). Unknown keys are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(trimmed)
    }
}

/// Split a content file into its frontmatter YAML and body.
///
/// The file must start with a `---` line; the frontmatter runs until the
/// next `---` line. Returns `None` if either delimiter is missing.
#[must_use]
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix("\n"))?;

    let mut line_start = 0;
    while line_start <= rest.len() {
        let line_end = rest[line_start..]
            .find('\n')
            .map_or(rest.len(), |i| line_start + i);
        let line = rest[line_start..line_end].trim_end_matches('\r');

        if line.trim_end() == "---" {
            let yaml = &rest[..line_start];
            let body = rest.get(line_end + 1..).unwrap_or("");
            return Some((yaml, body));
        }

        if line_end >= rest.len() {
            break;
        }
        line_start = line_end + 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── split_frontmatter tests ──────────────────────────────────────

    #[test]
    fn test_split_basic() {
        let content = "---\ntitle: Hello\n---\nBody text\n";
        let (yaml, body) = split_frontmatter(content).unwrap();
        assert_eq!(yaml, "title: Hello\n");
        assert_eq!(body, "Body text\n");
    }

    #[test]
    fn test_split_empty_body() {
        let content = "---\ntitle: Hello\n---";
        let (yaml, body) = split_frontmatter(content).unwrap();
        assert_eq!(yaml, "title: Hello\n");
        assert_eq!(body, "");
    }

    #[test]
    fn test_split_crlf_line_endings() {
        let content = "---\r\ntitle: Hello\r\n---\r\nBody\r\n";
        let (yaml, body) = split_frontmatter(content).unwrap();
        assert_eq!(yaml, "title: Hello\r\n");
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn test_split_no_leading_delimiter() {
        assert!(split_frontmatter("title: Hello\n---\n").is_none());
    }

    #[test]
    fn test_split_unterminated_block() {
        assert!(split_frontmatter("---\ntitle: Hello\nno closing fence").is_none());
    }

    #[test]
    fn test_split_dashes_inside_yaml_value_not_a_delimiter() {
        let content = "---\ntitle: a --- b\n---\nBody\n";
        let (yaml, body) = split_frontmatter(content).unwrap();
        assert_eq!(yaml, "title: a --- b\n");
        assert_eq!(body, "Body\n");
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_frontmatter("").is_none());
    }

    // ── Frontmatter parsing tests ────────────────────────────────────

    #[test]
    fn test_parse_required_fields() {
        let yaml = "title: Commands\ndescription: Dispatching commands";
        let fm = Frontmatter::from_yaml(yaml).unwrap();
        assert_eq!(fm.title, Some("Commands".to_owned()));
        assert_eq!(fm.description, Some("Dispatching commands".to_owned()));
        assert!(fm.head.is_empty());
        assert!(fm.last_updated.is_none());
    }

    #[test]
    fn test_parse_block_scalar_description() {
        let yaml = "title: T\ndescription: |\n  Multi\n  line";
        let fm = Frontmatter::from_yaml(yaml).unwrap();
        assert_eq!(fm.description, Some("Multi\nline".to_owned()));
    }

    #[test]
    fn test_parse_head_tags() {
        let yaml = r"
title: T
description: D
head:
  - tag: meta
    attrs:
      property: og:image
      content: https://docs.example.com/social.png
  - tag: script
    attrs:
      type: application/ld+json
    content: '{}'
";
        let fm = Frontmatter::from_yaml(yaml).unwrap();
        assert_eq!(fm.head.len(), 2);
        assert_eq!(fm.head[0].tag, "meta");
        assert_eq!(
            fm.head[0].attrs.get("property"),
            Some(&"og:image".to_owned())
        );
        assert_eq!(fm.head[1].content.as_deref(), Some("{}"));
    }

    #[test]
    fn test_parse_sitemap_overrides() {
        let yaml = r"
title: T
description: D
lastUpdated: 2025-06-01
changeFrequency: daily
priority: 0.9
";
        let fm = Frontmatter::from_yaml(yaml).unwrap();
        assert_eq!(
            fm.last_updated,
            Some(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
        );
        assert_eq!(fm.change_frequency, Some(ChangeFrequency::Daily));
        assert!((fm.priority.unwrap() - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_unknown_keys_ignored() {
        let yaml = "title: T\ndescription: D\nsidebar_badge: new";
        let fm = Frontmatter::from_yaml(yaml).unwrap();
        assert_eq!(fm.title, Some("T".to_owned()));
    }

    #[test]
    fn test_parse_empty_yaml() {
        let fm = Frontmatter::from_yaml("").unwrap();
        assert!(fm.title.is_none());
        assert!(fm.description.is_none());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        assert!(Frontmatter::from_yaml("title: [unclosed").is_err());
    }

    #[test]
    fn test_head_tag_meta_constructor() {
        let tag = HeadTag::meta("property", "og:type", "article");
        assert_eq!(tag.tag, "meta");
        assert_eq!(tag.attrs.get("property"), Some(&"og:type".to_owned()));
        assert_eq!(tag.attrs.get("content"), Some(&"article".to_owned()));
        assert!(tag.content.is_none());
    }
}
