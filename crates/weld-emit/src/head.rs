//! SEO head-tag composition.
//!
//! Attaches a fixed, ordered sequence of head tags to every route: Open
//! Graph, Twitter Card, then one JSON-LD structured-data block. Per-document
//! `head` entries are merged in after the global defaults; global-first
//! ordering matters for tag precedence in some consumers.

use std::collections::BTreeMap;

use weld_config::Config;
use weld_content::{DocumentEntry, HeadTag};

use crate::routes::{Route, absolute_url};

/// Compose the head-tag sequence for one route.
///
/// Pure function: same route, document, and config always yield the same
/// sequence.
#[must_use]
pub fn compose_head(route: &Route, entry: &DocumentEntry, config: &Config) -> Vec<HeadTag> {
    let url = absolute_url(&config.site.base_url, &route.path);

    let mut tags = vec![
        HeadTag::meta("property", "og:type", &config.seo.og_type),
        HeadTag::meta("property", "og:locale", &config.site.locale),
        HeadTag::meta("property", "og:title", &entry.title),
        HeadTag::meta("property", "og:description", &entry.description),
        HeadTag::meta("property", "og:url", &url),
        HeadTag::meta("name", "twitter:card", &config.seo.twitter_card),
        json_ld(entry, config, &url),
    ];

    tags.extend(entry.extra_head.iter().cloned());
    tags
}

/// Build the `application/ld+json` structured-data block.
fn json_ld(entry: &DocumentEntry, config: &Config, url: &str) -> HeadTag {
    let data = serde_json::json!({
        "@context": "https://schema.org",
        "@type": config.seo.ld_type,
        "headline": entry.title,
        "description": entry.description,
        "url": url,
        "inLanguage": config.site.locale,
        "publisher": {
            "@type": "Organization",
            "name": config.site.title,
        },
    });

    let mut attrs = BTreeMap::new();
    attrs.insert("type".to_owned(), "application/ld+json".to_owned());

    HeadTag {
        tag: "script".to_owned(),
        attrs,
        content: Some(data.to_string()),
    }
}
