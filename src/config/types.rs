use crate::location::PrerenderOptions;
use serde::Deserialize;

/// Main configuration structure for Prerender-Queue
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub prerender: PrerenderConfig,
}

/// Prerender settings for one output target
#[derive(Debug, Clone, Deserialize)]
pub struct PrerenderConfig {
    /// Seed paths to start the crawl from, in order
    #[serde(default = "default_include")]
    pub include: Vec<IncludeEntry>,

    /// Keep query strings when canonicalizing discovered links
    #[serde(rename = "include-path-query", default)]
    pub include_path_query: bool,

    /// Keep fragments when canonicalizing discovered links
    #[serde(rename = "include-path-hash", default)]
    pub include_path_hash: bool,
}

impl PrerenderConfig {
    /// Returns the canonicalization switches for this target
    pub fn options(&self) -> PrerenderOptions {
        PrerenderOptions::new(self.include_path_query, self.include_path_hash)
    }
}

impl Default for PrerenderConfig {
    fn default() -> Self {
        Self {
            include: default_include(),
            include_path_query: false,
            include_path_hash: false,
        }
    }
}

/// Seed path descriptor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IncludeEntry {
    /// Path (or same-host absolute URL) to prerender
    pub path: String,
}

impl IncludeEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

fn default_include() -> Vec<IncludeEntry> {
    vec![IncludeEntry::new("/")]
}
