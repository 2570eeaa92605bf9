use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::entry::Entry;
use crate::error::Result;
use crate::fetcher::PageSource;
use crate::{output, parser, words};

type TaskOutput = (usize, String, Result<Entry>);

/// Word list in, JSON file out. Nothing is written unless every word succeeds.
pub async fn run_job<S>(
    source: Arc<S>,
    input: &Path,
    out: &Path,
    concurrency: Option<NonZeroUsize>,
) -> Result<PathBuf>
where
    S: PageSource + ?Sized + 'static,
{
    let words = words::read_words(input)?;
    let entries = run(source, words, concurrency).await?;
    output::write_entries(out, &entries).await
}

/// Fetch, parse and extract every word concurrently.
///
/// One task per word, all dispatched at once unless `concurrency` caps the
/// number of in-flight fetches. Results land in the slot of their input index,
/// so the output order is the input order. The first failure aborts the
/// remaining tasks and is returned as-is.
pub async fn run<S>(
    source: Arc<S>,
    words: Vec<String>,
    concurrency: Option<NonZeroUsize>,
) -> Result<Vec<Entry>>
where
    S: PageSource + ?Sized + 'static,
{
    let total = words.len();
    let t0 = Instant::now();
    info!(
        "Scraping {} words (concurrency: {})",
        total,
        concurrency.map_or("unbounded".to_string(), |n| n.to_string())
    );

    let semaphore = concurrency.map(|n| Arc::new(Semaphore::new(n.get())));
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let mut set: JoinSet<TaskOutput> = JoinSet::new();
    for (idx, word) in words.into_iter().enumerate() {
        let source = Arc::clone(&source);
        let semaphore = semaphore.clone();

        set.spawn(async move {
            let _permit = match semaphore {
                Some(sem) => sem.acquire_owned().await.ok(),
                None => None,
            };
            debug!("Fetching {}", word);
            let result = source
                .fetch(&word)
                .await
                .map(|html| parser::process_page(&word, &html));
            (idx, word, result)
        });
    }

    let outcome = collect_in_order(&mut set, total, &pb).await;
    pb.finish_and_clear();

    if outcome.is_ok() {
        info!("Scraped {} words in {:.1}s", total, t0.elapsed().as_secs_f64());
    }
    outcome
}

async fn collect_in_order(
    set: &mut JoinSet<TaskOutput>,
    total: usize,
    pb: &ProgressBar,
) -> Result<Vec<Entry>> {
    let mut slots: Vec<Option<Entry>> = (0..total).map(|_| None).collect();

    while let Some(joined) = set.join_next().await {
        let (idx, word, result) = match joined {
            Ok(done) => done,
            Err(e) => {
                set.abort_all();
                return Err(e.into());
            }
        };
        match result {
            Ok(entry) => {
                slots[idx] = Some(entry);
                pb.inc(1);
            }
            Err(e) => {
                warn!("Aborting batch, \"{}\" failed: {}", word, e);
                set.abort_all();
                return Err(e);
            }
        }
    }

    Ok(slots.into_iter().flatten().collect())
}

// ── Tests ──
