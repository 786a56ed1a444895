use crate::config::PrerenderConfig;
use crate::location::{normalize_prerender_location, ErrorSink, PrerenderOptions};
use crate::queue::{PrerenderQueue, DEFAULT_PRERENDER_HOST};
use crate::state::PageResults;

/// Normalizes one href and queues it if it is new
///
/// # Arguments
///
/// * `current_page_url` - Absolute URL of the page the href was found on
/// * `href` - Raw href; `None` when the anchor had no string href
/// * `options` - Canonicalization switches
/// * `queue` - Queue to append to
/// * `sink` - Receives parse failures
///
/// # Returns
///
/// True if a new pending location was appended.
pub fn add_location_to_process(
    current_page_url: &str,
    href: Option<&str>,
    options: &PrerenderOptions,
    queue: &mut PrerenderQueue,
    sink: &dyn ErrorSink,
) -> bool {
    let Some(location) = normalize_prerender_location(current_page_url, href, options, sink)
    else {
        return false;
    };

    let url = location.url().to_string();
    if queue.try_push(location) {
        tracing::debug!("Queued {} for prerendering", url);
        true
    } else {
        tracing::trace!("Already queued: {}", url);
        false
    }
}

/// Queues every new same-host link found on a rendered page
///
/// Anchors are processed in document order, each resolved against
/// `results.url`. A page without anchors leaves the queue untouched.
///
/// # Returns
///
/// The number of locations appended.
///
/// # Example
///
/// ```
/// use prerender_queue::location::{PrerenderOptions, TracingSink};
/// use prerender_queue::queue::{crawl_anchors_for_next_urls, PrerenderQueue};
/// use prerender_queue::state::{Anchor, PageResults};
///
/// let results = PageResults {
///     url: "http://example.com/".to_string(),
///     anchors: Some(vec![Anchor::new("/about"), Anchor::new("/about#team")]),
/// };
///
/// let mut queue = PrerenderQueue::new();
/// let added = crawl_anchors_for_next_urls(
///     &results,
///     &PrerenderOptions::default(),
///     &mut queue,
///     &TracingSink,
/// );
/// assert_eq!(added, 1);
/// assert_eq!(queue.get(0).unwrap().url(), "http://example.com/about");
/// ```
pub fn crawl_anchors_for_next_urls(
    results: &PageResults,
    options: &PrerenderOptions,
    queue: &mut PrerenderQueue,
    sink: &dyn ErrorSink,
) -> usize {
    let Some(anchors) = results.anchors.as_deref() else {
        return 0;
    };

    let mut added = 0;
    for anchor in anchors {
        if add_location_to_process(&results.url, anchor.href.as_deref(), options, queue, sink) {
            added += 1;
        }
    }

    tracing::debug!(
        "Found {} new locations among {} anchors on {}",
        added,
        anchors.len(),
        results.url
    );

    added
}

/// Builds the initial queue from the configured seed paths
///
/// Seeds are resolved against `http://` + [`DEFAULT_PRERENDER_HOST`], which
/// only anchors relative paths and is never requested over the network.
pub fn get_prerender_queue(config: &PrerenderConfig, sink: &dyn ErrorSink) -> PrerenderQueue {
    let prerender_host = format!("http://{}", DEFAULT_PRERENDER_HOST);
    let options = config.options();

    let mut queue = PrerenderQueue::new();
    for entry in &config.include {
        add_location_to_process(
            &prerender_host,
            Some(entry.path.as_str()),
            &options,
            &mut queue,
            sink,
        );
    }

    tracing::debug!(
        "Seeded prerender queue with {} of {} include paths",
        queue.len(),
        config.include.len()
    );

    queue
}
