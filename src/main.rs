//! Prerender-Queue main entry point
//!
//! Builds the seed prerender queue from a configuration file and, given a
//! rendered page, shows which of its links would be queued next.

use anyhow::Context;
use clap::Parser;
use prerender_queue::anchors::page_results_from_html;
use prerender_queue::config::{load_config_with_hash, Config};
use prerender_queue::location::TracingSink;
use prerender_queue::queue::{crawl_anchors_for_next_urls, get_prerender_queue, PrerenderQueue};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Prerender-Queue: link discovery for static-site prerendering
///
/// Loads the include list and canonicalization options, seeds the prerender
/// queue, and optionally collects the links of a rendered page into it.
#[derive(Parser, Debug)]
#[command(name = "prerender-queue")]
#[command(version = "1.0.0")]
#[command(about = "Builds a deduplicated prerender queue", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Rendered HTML file whose anchors should be collected
    #[arg(long, value_name = "FILE", requires = "page_url")]
    html: Option<PathBuf>,

    /// Absolute URL the rendered HTML file was served at
    #[arg(long, value_name = "URL", requires = "html")]
    page_url: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    let mut queue = get_prerender_queue(&config.prerender, &TracingSink);
    print_queue("Seed queue", &config, &queue);

    if let (Some(html_path), Some(page_url)) = (&cli.html, &cli.page_url) {
        let html = std::fs::read_to_string(html_path)
            .with_context(|| format!("failed to read {}", html_path.display()))?;

        let results = page_results_from_html(page_url, &html);
        let added = crawl_anchors_for_next_urls(
            &results,
            &config.prerender.options(),
            &mut queue,
            &TracingSink,
        );
        tracing::info!("Collected {} new locations from {}", added, page_url);

        print_queue("Queue after crawling page", &config, &queue);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("prerender_queue=info,warn"),
            1 => EnvFilter::new("prerender_queue=debug,info"),
            2 => EnvFilter::new("prerender_queue=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn print_queue(title: &str, config: &Config, queue: &PrerenderQueue) {
    let options = config.prerender.options();

    println!("=== {} ===", title);
    println!(
        "  include-path-query: {}, include-path-hash: {}",
        options.include_path_query, options.include_path_hash
    );

    for location in queue {
        println!("  {}  ({})", location, location.path());
    }

    let counts = queue.status_counts();
    println!(
        "  {} locations ({} pending, {} processing, {} complete)\n",
        counts.total(),
        counts.pending,
        counts.processing,
        counts.complete
    );
}
