mod entry;
mod error;
mod fetcher;
mod output;
mod parser;
mod pipeline;
mod words;

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use tracing::info;

use fetcher::HttpFetcher;

#[derive(Parser, Debug)]
#[command(
    name = "dict_scraper",
    about = "Scrape dictionary entries for a list of words into a JSON file",
    after_help = "example: dict_scraper words.txt result.json"
)]
struct Cli {
    /// Word list, one word per line
    input: PathBuf,
    /// Where to write the JSON result
    output: PathBuf,
    /// Max concurrent page fetches (default: all words at once)
    #[arg(short = 'c', long)]
    concurrency: Option<NonZeroUsize>,
    /// Dictionary base URL; each word is appended as the last path segment
    #[arg(long, env = "DICT_BASE_URL", default_value = fetcher::DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let source = Arc::new(HttpFetcher::new(cli.base_url));
    let stored = pipeline::run_job(source, &cli.input, &cli.output, cli.concurrency).await?;
    println!("result stored at: {}", stored.display());

    info!("Done in {}", format_duration(t0.elapsed()));
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
