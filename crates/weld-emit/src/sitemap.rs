//! Sitemap XML generation per the sitemap protocol.
//!
//! One `<url>` entry per route with `<loc>`, `<lastmod>`, `<changefreq>`,
//! and `<priority>` children. Routes arrive already sorted, so the output
//! is byte-stable across builds.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::routes::{Route, absolute_url};

const SITEMAP_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Write the sitemap document for the given routes.
///
/// # Errors
///
/// Returns an error if writing to the underlying writer fails.
pub fn write_sitemap<W: Write>(
    routes: &[Route],
    base_url: &str,
    writer: W,
) -> std::io::Result<()> {
    let mut xml = Writer::new_with_indent(writer, b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_XMLNS));
    xml.write_event(Event::Start(urlset))?;

    for route in routes {
        xml.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut xml, "loc", &absolute_url(base_url, &route.path))?;
        write_text_element(
            &mut xml,
            "lastmod",
            &route.last_modified.format("%Y-%m-%d").to_string(),
        )?;
        write_text_element(&mut xml, "changefreq", route.change_frequency.as_str())?;
        write_text_element(&mut xml, "priority", &format!("{:.1}", route.priority))?;
        xml.write_event(Event::End(BytesEnd::new("url")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("urlset")))?;
    Ok(())
}

/// Write `<name>value</name>` with text escaping.
fn write_text_element<W: Write>(
    xml: &mut Writer<W>,
    name: &str,
    value: &str,
) -> std::io::Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(value)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
