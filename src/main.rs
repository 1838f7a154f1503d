//! Hostscope command-line entry point

use anyhow::Context;
use clap::Parser;
use hostscope::config::CrawlConfig;
use hostscope::crawler::Crawler;
use hostscope::output::{render_text, to_json_pretty};
use tracing_subscriber::EnvFilter;

/// Hostscope: a recursive same-host link crawler
///
/// Crawls every page reachable from the seed URL within the seed's host
/// scope, down to the depth limit, and prints the resulting link tree.
#[derive(Parser, Debug)]
#[command(name = "hostscope")]
#[command(version)]
#[command(about = "Recursive same-host link crawler", long_about = None)]
struct Cli {
    /// URL to crawl
    #[arg(short, long)]
    url: String,

    /// Depth limit
    #[arg(short, long, default_value_t = 2)]
    depth: u32,

    /// Maximum number of concurrent fetches
    #[arg(short, long, default_value_t = 10)]
    workers: usize,

    /// Output JSON instead of the text tree
    #[arg(short, long)]
    json: bool,

    /// Enable debug logging (very verbose)
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let config = CrawlConfig {
        depth_limit: cli.depth,
        workers: cli.workers,
        ..CrawlConfig::default()
    };

    let crawler = Crawler::new(&config).context("failed to initialize crawler")?;

    tracing::info!(url = %cli.url, depth = cli.depth, workers = cli.workers, "starting crawl");
    let tree = crawler
        .crawl(&cli.url)
        .await
        .with_context(|| format!("failed to crawl seed URL {}", cli.url))?;

    if cli.json {
        println!("{}", to_json_pretty(&tree)?);
    } else {
        print!("{}", render_text(&tree));
    }

    Ok(())
}

/// Sets up the tracing subscriber based on the --debug flag.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("hostscope=debug,info")
    } else {
        EnvFilter::new("hostscope=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
