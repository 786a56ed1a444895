//! Anchor extraction from rendered HTML
//!
//! The render step normally reports anchors itself. These helpers cover the
//! case where only the rendered markup is at hand.

use crate::state::{Anchor, PageResults};
use scraper::{Html, Selector};

/// Collects every `<a href>` of a rendered document, in document order
///
/// # Extraction Rules
///
/// **Include:**
/// - `<a href="...">` anywhere in the document
///
/// **Exclude:**
/// - `<a href="..." download>`
///
/// Href values are passed through untouched. Deciding which ones are worth
/// prerendering is left to the normalizer.
///
/// # Example
///
/// ```
/// use prerender_queue::anchors::extract_anchors;
///
/// let html = r#"<html><body><a href="/about">About</a><a name="x">No href</a></body></html>"#;
/// let anchors = extract_anchors(html);
/// assert_eq!(anchors.len(), 1);
/// assert_eq!(anchors[0].href.as_deref(), Some("/about"));
/// ```
pub fn extract_anchors(html: &str) -> Vec<Anchor> {
    let document = Html::parse_document(html);

    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter(|element| element.value().attr("download").is_none())
        .filter_map(|element| element.value().attr("href"))
        .map(Anchor::new)
        .collect()
}

/// Builds the render results for a page from its rendered markup
pub fn page_results_from_html(page_url: &str, html: &str) -> PageResults {
    PageResults {
        url: page_url.to_string(),
        anchors: Some(extract_anchors(html)),
    }
}
