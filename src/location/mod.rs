//! Location normalizer for Prerender-Queue
//!
//! This module turns raw anchor hrefs into canonical, comparable
//! [`PrerenderLocation`](crate::state::PrerenderLocation)s, rejecting links
//! that are empty, non-navigational, or point at another host.

mod href;
mod normalize;
mod sink;

// Re-export main functions
pub use href::{parse_href, HrefParts};
pub use normalize::{normalize_prerender_location, NORMALIZE_OPERATION};
pub use sink::{CollectingSink, ErrorSink, TracingSink};

/// Canonicalization switches for a prerender target
///
/// Both flags are independent. With both off, a location is identified by
/// scheme, host and path only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrerenderOptions {
    /// Keep the query string in the canonical URL
    pub include_path_query: bool,

    /// Keep the href's fragment in the canonical URL and path
    pub include_path_hash: bool,
}

impl PrerenderOptions {
    pub fn new(include_path_query: bool, include_path_hash: bool) -> Self {
        Self {
            include_path_query,
            include_path_hash,
        }
    }
}
