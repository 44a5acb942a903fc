//! Visible text extraction from an HTML document.

use dom_query::Document;

/// Elements whose text content is never rendered.
const INVISIBLE_TAGS: &str = "script, style, noscript, template";

/// Parses `html` and returns all visible text in document order.
///
/// Markup is stripped and adjacent text nodes are concatenated as-is, so
/// whitespace between inline elements is kept exactly as it appears in the
/// source. Headings, tables and the like are not preserved separately.
pub fn visible_text(html: &str) -> String {
    let doc = Document::from(html);
    doc.select(INVISIBLE_TAGS).remove();
    doc.select("html").text().to_string()
}
