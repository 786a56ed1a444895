//! Integration tests for the prerender queue
//!
//! These tests drive a small simulated crawl: seed the queue from config,
//! "render" pages from in-memory HTML, and feed the anchors back in.

use prerender_queue::anchors::page_results_from_html;
use prerender_queue::config::parse_config;
use prerender_queue::location::{
    normalize_prerender_location, CollectingSink, PrerenderOptions, NORMALIZE_OPERATION,
};
use prerender_queue::queue::{
    crawl_anchors_for_next_urls, get_prerender_queue, PrerenderQueue, DEFAULT_PRERENDER_HOST,
};
use prerender_queue::state::{Anchor, LocationStatus, PageResults};
use std::collections::HashMap;

const HREFS: &[&str] = &[
    "/",
    "/about",
    "about",
    "../about",
    "./docs/intro",
    "../about?x=1#top",
    "/search?q=rust",
    "/page#section",
    "https://example.com/abs?x=1#y",
    "http://example.com/plain",
    "'/quoted'",
    "//example.com/protocol-relative",
];

const PAGES: &[&str] = &[
    "http://example.com/",
    "http://example.com/blog/post-1",
    "http://example.com/a/b/c/",
];

fn all_options() -> Vec<PrerenderOptions> {
    vec![
        PrerenderOptions::new(false, false),
        PrerenderOptions::new(true, false),
        PrerenderOptions::new(false, true),
        PrerenderOptions::new(true, true),
    ]
}

fn normalize(page: &str, href: &str, options: PrerenderOptions) -> Option<String> {
    let sink = CollectingSink::new();
    normalize_prerender_location(page, Some(href), &options, &sink).map(|l| l.url().to_string())
}

#[test]
fn test_scenario_relative_link_stripped() {
    let sink = CollectingSink::new();
    let location = normalize_prerender_location(
        "http://example.com/blog/post-1",
        Some("../about?x=1#top"),
        &PrerenderOptions::new(false, false),
        &sink,
    )
    .unwrap();

    assert_eq!(location.url(), "http://example.com/about");
    assert_eq!(location.path(), "/about");
}

#[test]
fn test_scenario_relative_link_with_query_and_hash() {
    assert_eq!(
        normalize(
            "http://example.com/blog/post-1",
            "../about?x=1#top",
            PrerenderOptions::new(true, true)
        )
        .as_deref(),
        Some("http://example.com/about?x=1#top")
    );
}

#[test]
fn test_scenario_cross_origin() {
    for options in all_options() {
        assert_eq!(normalize("http://example.com/", "https://other.com/x", options), None);
    }
}

#[test]
fn test_renormalizing_is_idempotent() {
    for options in all_options() {
        for page in PAGES {
            for href in HREFS {
                let Some(url) = normalize(page, href, options) else {
                    continue;
                };
                assert_eq!(
                    normalize(&url, &url, options).as_deref(),
                    Some(url.as_str()),
                    "not idempotent for {} on {} with {:?}",
                    href,
                    page,
                    options
                );
            }
        }
    }
}

#[test]
fn test_relative_links_stay_on_page_host() {
    let options = PrerenderOptions::default();
    for page in PAGES {
        for href in ["about", "../x", "./y/z", "/root", "?q=1/path", "a/b?c#d"] {
            if let Some(url) = normalize(page, href, options) {
                let parsed = url::Url::parse(&url).unwrap();
                assert_eq!(parsed.host_str(), Some("example.com"), "{} on {}", href, page);
            }
        }
    }
}

#[test]
fn test_hrefs_without_path_rejected() {
    for options in all_options() {
        for href in ["", "#", "#section", "?x=1", "javascript:void(0)"] {
            assert_eq!(normalize("http://example.com/", href, options), None, "{:?}", href);
        }
    }
}

#[test]
fn test_query_option() {
    for page in PAGES {
        for href in HREFS {
            if let Some(url) = normalize(page, href, PrerenderOptions::new(false, true)) {
                assert!(!url.contains('?'), "{} kept a query", url);
            }
        }
    }

    assert_eq!(
        normalize(
            "http://example.com/",
            "/search?q=rust",
            PrerenderOptions::new(true, false)
        )
        .as_deref(),
        Some("http://example.com/search?q=rust")
    );
}

#[test]
fn test_hash_option_applies_to_url_and_path() {
    let sink = CollectingSink::new();

    let with_hash = normalize_prerender_location(
        "http://example.com/",
        Some("/page#section"),
        &PrerenderOptions::new(false, true),
        &sink,
    )
    .unwrap();
    assert!(with_hash.url().ends_with("#section"));
    assert!(with_hash.path().ends_with("#section"));

    let without_hash = normalize_prerender_location(
        "http://example.com/",
        Some("/page#section"),
        &PrerenderOptions::new(false, false),
        &sink,
    )
    .unwrap();
    assert!(!without_hash.url().contains('#'));
    assert!(!without_hash.path().contains('#'));
}

#[test]
fn test_seed_queue_dedup() {
    let config = parse_config(
        r#"
[[prerender.include]]
path = "/about"

[[prerender.include]]
path = "/about"
"#,
    )
    .unwrap();

    let sink = CollectingSink::new();
    let queue = get_prerender_queue(&config.prerender, &sink);

    assert_eq!(queue.len(), 1);
    assert_eq!(
        queue.get(0).unwrap().url(),
        format!("http://{}/about", DEFAULT_PRERENDER_HOST)
    );
}

#[test]
fn test_same_href_from_different_pages_queued_once() {
    let sink = CollectingSink::new();
    let options = PrerenderOptions::default();
    let mut queue = PrerenderQueue::new();

    for page in ["http://example.com/", "http://example.com/team/", "http://example.com/x/y"] {
        let results = PageResults {
            url: page.to_string(),
            anchors: Some(vec![Anchor::new("/about"), Anchor::new("/about#team")]),
        };
        crawl_anchors_for_next_urls(&results, &options, &mut queue, &sink);
    }

    assert_eq!(queue.len(), 1);
    assert!(queue
        .iter()
        .all(|l| l.status() == Some(LocationStatus::Pending)));
}

#[test]
fn test_malformed_links_reported_but_not_fatal() {
    let sink = CollectingSink::new();
    let mut queue = PrerenderQueue::new();
    let results = PageResults {
        url: "http://example.com/".to_string(),
        anchors: Some(vec![
            Anchor::new("http://[broken"),
            Anchor { href: None },
            Anchor::new("https://other.com/"),
            Anchor::new("/good"),
        ]),
    };

    let added =
        crawl_anchors_for_next_urls(&results, &PrerenderOptions::default(), &mut queue, &sink);

    assert_eq!(added, 1);
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.reports()[0].0, NORMALIZE_OPERATION);
}

#[test]
fn test_simulated_crawl_until_exhausted() {
    let site: HashMap<&str, &str> = HashMap::from([
        (
            "/",
            r##"<html><body>
                <a href="/about">About</a>
                <a href="/blog/">Blog</a>
                <a href="https://twitter.com/example">Social</a>
                <a href="#main">Skip</a>
            </body></html>"##,
        ),
        (
            "/about",
            r#"<html><body><a href="/">Home</a><a href="team">Team</a></body></html>"#,
        ),
        (
            "/blog/",
            r#"<html><body>
                <a href="post-1?utm_source=x">Post 1</a>
                <a href="./post-2">Post 2</a>
                <a href="../about">About</a>
            </body></html>"#,
        ),
        ("/team", r#"<html><body><a href="/">Home</a></body></html>"#),
        ("/blog/post-1", r#"<html><body><a href="/blog/">Back</a></body></html>"#),
        ("/blog/post-2", r#"<html><body><a href="post-1">Prev</a></body></html>"#),
    ]);

    let config = parse_config("").unwrap();
    let options = config.prerender.options();
    let sink = CollectingSink::new();
    let mut queue = get_prerender_queue(&config.prerender, &sink);

    while let Some(index) = queue.next_pending() {
        queue.set_status(index, LocationStatus::Processing).unwrap();

        let location = queue.get(index).unwrap().clone();
        let html = site.get(location.path()).copied().unwrap_or("");
        let results = page_results_from_html(location.url(), html);
        crawl_anchors_for_next_urls(&results, &options, &mut queue, &sink);

        queue.set_status(index, LocationStatus::Complete).unwrap();
    }

    assert!(queue.is_exhausted());
    assert!(sink.is_empty());

    let paths: Vec<&str> = queue.iter().map(|l| l.path()).collect();
    assert_eq!(
        paths,
        vec!["/", "/about", "/blog/", "/team", "/blog/post-1", "/blog/post-2"]
    );
}
