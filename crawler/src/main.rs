use anyhow::Result;
use authindex::persist::save_records;
use authindex::InvertedIndex;
use clap::Parser;
use crawler::config::{default_seeds, load_seeds, DEFAULT_DEPTH, DEFAULT_OUTPUT};
use crawler::fetcher::DEFAULT_USER_AGENT;
use crawler::{Crawler, HttpFetcher};
use std::io;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "crawler")]
#[command(about = "Collect monograph links and authors, then search them by author name")]
struct Cli {
    /// File with seed URLs (one per line); the built-in yearly listings when absent
    #[arg(long)]
    seeds: Option<String>,
    /// Maximum number of hops from each seed
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,
    /// JSON export of the collected records
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: String,
    /// Request timeout seconds; requests wait on the transport when unset
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    /// Exit after exporting instead of starting the interactive search
    #[arg(long, default_value_t = false)]
    no_query: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Cli::parse();

    let seeds = match &args.seeds {
        Some(path) => load_seeds(path)?,
        None => default_seeds(),
    };
    tracing::info!(seeds = seeds.len(), depth = args.depth, output = %args.output, "starting crawl");

    let fetcher = HttpFetcher::new(&args.user_agent, args.timeout_secs.map(Duration::from_secs))?;
    let mut crawler = Crawler::new(fetcher);
    for seed in &seeds {
        crawler.crawl(seed, args.depth).await;
    }
    let stats = crawler.stats();
    tracing::info!(
        pages = stats.pages_fetched,
        failures = stats.fetch_failures,
        records = stats.records,
        "crawl finished"
    );

    let records = crawler.into_records();
    save_records(&args.output, &records)?;

    let mut index = InvertedIndex::new();
    index.index_all(&records);
    if args.no_query {
        return Ok(());
    }
    search::run_query_loop(&index, io::stdin().lock(), io::stdout().lock())
}
