use anyhow::Result;
use clap::Parser;
use search::{index_from_export, run_query_loop};
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Search authors in a previously exported crawl")]
struct Args {
    /// JSON export written by the crawler
    #[arg(long, default_value = "dados_coletados.json")]
    records: String,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();
    let index = index_from_export(&args.records)?;
    tracing::info!(records = %args.records, authors = index.author_count(), "index ready");
    run_query_loop(&index, io::stdin().lock(), io::stdout().lock())
}
