use crate::state::LocationStatus;
use std::fmt;

/// One page targeted for prerendering
///
/// `url` is the canonical absolute URL and the identity key inside a queue.
/// `path` is derived from the same canonical form, so both either carry the
/// query and fragment or both leave them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerenderLocation {
    url: String,
    path: String,
    status: Option<LocationStatus>,
}

impl PrerenderLocation {
    /// Builds a location that has not been queued yet (no status)
    pub(crate) fn new(url: String, path: String) -> Self {
        Self {
            url,
            path,
            status: None,
        }
    }

    /// Canonical absolute URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Path (plus retained query/fragment) handed to the renderer
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Lifecycle status; `None` until the location is placed in a queue
    pub fn status(&self) -> Option<LocationStatus> {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: LocationStatus) {
        self.status = Some(status);
    }
}

impl fmt::Display for PrerenderLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "[{}] {}", status, self.url),
            None => write!(f, "{}", self.url),
        }
    }
}
