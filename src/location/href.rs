use crate::{UrlError, UrlResult};
use url::Url;

/// URL-reference view of a raw `href`
///
/// Unlike [`Url`], this also describes relative references. Only an absolute
/// reference (one that starts with a scheme) can carry an explicit hostname.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HrefParts {
    /// Explicit host, as normalized by the URL parser
    pub hostname: Option<String>,
    /// Path component; `None` when the reference has no path at all
    pub pathname: Option<String>,
    /// Query string without the leading `?`
    pub search: Option<String>,
    /// Fragment without the leading `#`
    pub hash: Option<String>,
}

impl HrefParts {
    /// Returns true if the reference points at a page (has a path)
    pub fn is_navigational(&self) -> bool {
        self.pathname.is_some()
    }
}

/// Splits an href into hostname, path, query and fragment
///
/// # Rules
///
/// - An href starting with an RFC 3986 scheme is absolute and parsed with
///   [`Url::parse`]. Only `http` and `https` references have a path worth
///   following; `mailto:`, `javascript:`, `tel:`, `data:` and friends get
///   `pathname = None`.
/// - Anything else is relative: the fragment is cut at the first `#`, then the
///   query at the first `?`, and the rest is the path. An empty path is absent.
/// - A protocol-relative reference (`//host/x`) has no explicit hostname here.
///
/// # Errors
///
/// Returns `UrlError::Parse` when an absolute reference is malformed.
///
/// # Examples
///
/// ```
/// use prerender_queue::location::parse_href;
///
/// let parts = parse_href("../about?x=1#top").unwrap();
/// assert_eq!(parts.hostname, None);
/// assert_eq!(parts.pathname.as_deref(), Some("../about"));
/// assert_eq!(parts.search.as_deref(), Some("x=1"));
/// assert_eq!(parts.hash.as_deref(), Some("top"));
///
/// assert!(!parse_href("#top").unwrap().is_navigational());
/// ```
pub fn parse_href(href: &str) -> UrlResult<HrefParts> {
    let href = href.trim();

    match scheme_of(href) {
        Some(scheme) => parse_absolute(href, &scheme),
        None => Ok(parse_relative(href)),
    }
}

fn parse_absolute(href: &str, scheme: &str) -> UrlResult<HrefParts> {
    let url = Url::parse(href).map_err(|source| UrlError::Parse {
        input: href.to_string(),
        source,
    })?;

    let navigational = scheme == "http" || scheme == "https";

    Ok(HrefParts {
        hostname: url.host_str().map(str::to_string),
        pathname: navigational
            .then(|| url.path())
            .filter(|p| !p.is_empty())
            .map(str::to_string),
        search: url.query().map(str::to_string),
        hash: url.fragment().map(str::to_string),
    })
}

fn parse_relative(href: &str) -> HrefParts {
    let (rest, hash) = match href.split_once('#') {
        Some((rest, hash)) => (rest, Some(hash.to_string())),
        None => (href, None),
    };

    let (path, search) = match rest.split_once('?') {
        Some((path, search)) => (path, Some(search.to_string())),
        None => (rest, None),
    };

    HrefParts {
        hostname: None,
        pathname: (!path.is_empty()).then(|| path.to_string()),
        search,
        hash,
    }
}

/// Returns the lowercased scheme if `href` starts with one
fn scheme_of(href: &str) -> Option<String> {
    let (candidate, _) = href.split_once(':')?;
    let mut chars = candidate.chars();

    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_valid = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    (starts_alpha && rest_valid).then(|| candidate.to_ascii_lowercase())
}
