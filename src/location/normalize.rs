use crate::location::{parse_href, ErrorSink, PrerenderOptions};
use crate::state::PrerenderLocation;
use crate::{UrlError, UrlResult};
use url::Url;

/// Operation tag attached to every failure reported by the normalizer
pub const NORMALIZE_OPERATION: &str = "normalize_prerender_location";

/// Turns an anchor's `href` into a canonical prerender location
///
/// # Normalization Steps
///
/// 1. Reject a missing (non-string) href
/// 2. Strip stray `'` and `"` characters left over from markup extraction
/// 3. Parse the href as a URL reference; reject it if it has no path
///    (`""`, `"#top"`, `"?page=2"`, `mailto:` and other non-http schemes)
/// 4. Parse the current page URL; when the href names a host explicitly and
///    it differs from the page's host, reject it
/// 5. Resolve the href against the current page URL
/// 6. Drop the fragment, and the query unless `include_path_query` is set
/// 7. Re-append the href's own fragment to both `url` and `path` when
///    `include_path_hash` is set
///
/// Parse or resolve failures are reported to `sink` under
/// [`NORMALIZE_OPERATION`] and treated as a rejection. Routine rejections are
/// not reported.
///
/// The returned location has no status; it gets one when it is queued.
///
/// # Examples
///
/// ```
/// use prerender_queue::location::{normalize_prerender_location, PrerenderOptions, TracingSink};
///
/// let options = PrerenderOptions::default();
/// let location = normalize_prerender_location(
///     "http://example.com/blog/post-1",
///     Some("../about?x=1#top"),
///     &options,
///     &TracingSink,
/// )
/// .unwrap();
/// assert_eq!(location.url(), "http://example.com/about");
/// assert_eq!(location.path(), "/about");
/// ```
pub fn normalize_prerender_location(
    current_page_url: &str,
    href: Option<&str>,
    options: &PrerenderOptions,
    sink: &dyn ErrorSink,
) -> Option<PrerenderLocation> {
    let Some(href) = href else {
        tracing::trace!("Skipping anchor without a string href on {}", current_page_url);
        return None;
    };

    match try_normalize(current_page_url, href, options) {
        Ok(location) => location,
        Err(e) => {
            sink.report(NORMALIZE_OPERATION, &e);
            None
        }
    }
}

fn try_normalize(
    current_page_url: &str,
    href: &str,
    options: &PrerenderOptions,
) -> UrlResult<Option<PrerenderLocation>> {
    let href: String = href.chars().filter(|c| !matches!(c, '\'' | '"')).collect();

    let href_parts = parse_href(&href)?;
    if !href_parts.is_navigational() {
        tracing::trace!("Skipping non-navigational href {:?}", href);
        return Ok(None);
    }

    let page_url = Url::parse(current_page_url).map_err(|source| UrlError::Parse {
        input: current_page_url.to_string(),
        source,
    })?;

    // Only hrefs that name a host are compared; relative ones are same-origin.
    if let Some(hostname) = href_parts.hostname.as_deref() {
        if page_url.host_str() != Some(hostname) {
            tracing::trace!(
                "Skipping cross-origin href {} (page host {:?})",
                href,
                page_url.host_str()
            );
            return Ok(None);
        }
    }

    let mut resolved = page_url.join(&href).map_err(|source| UrlError::Resolve {
        base: current_page_url.to_string(),
        href: href.clone(),
        source,
    })?;

    resolved.set_fragment(None);
    if !options.include_path_query {
        resolved.set_query(None);
    }

    let mut url = resolved.to_string();
    let mut path = match resolved.query() {
        Some(query) => format!("{}?{}", resolved.path(), query),
        None => resolved.path().to_string(),
    };

    if options.include_path_hash {
        if let Some(hash) = href_parts.hash.as_deref() {
            url.push('#');
            url.push_str(hash);
            path.push('#');
            path.push_str(hash);
        }
    }

    Ok(Some(PrerenderLocation::new(url, path)))
}
