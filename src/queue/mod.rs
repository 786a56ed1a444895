//! Queue builder for Prerender-Queue
//!
//! This module owns the prerender work queue and the rules that populate it:
//! - Seeding the queue from the configured include paths
//! - Collecting new same-host links from each rendered page
//! - Deduplicating locations by canonical URL

mod builder;
mod prerender_queue;

pub use builder::{add_location_to_process, crawl_anchors_for_next_urls, get_prerender_queue};
pub use prerender_queue::{PrerenderQueue, StatusCounts};

/// Placeholder host used as the origin for configured seed paths
///
/// It exists only so relative seeds can be resolved; nothing is ever fetched
/// from it.
pub const DEFAULT_PRERENDER_HOST: &str = "prerender.stenciljs.com";
