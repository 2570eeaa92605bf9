pub mod phrases;
pub mod poses;

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::document::{first_text, Document};
use crate::entry::Entry;

static IND: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".ind").unwrap());
static EM: LazyLock<Selector> = LazyLock::new(|| Selector::parse("em").unwrap());
static EX: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".ex").unwrap());
static SUB_SENSE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".subSense").unwrap());

pub fn extract_all(word: &str, doc: &Document) -> Entry {
    Entry {
        word: word.to_string(),
        pos_list: poses::scrape_poses(doc),
        phrases: phrases::scrape_phrases(doc),
    }
}

/// Indicator text of a sense-like item; the first `.ind` wins.
fn indicator_of(item: ElementRef<'_>) -> String {
    first_text(item, &IND).unwrap_or_default()
}

/// Example sentences, each read from its first `em`. An example without one reads as "".
fn examples_of(examples: Vec<ElementRef<'_>>) -> Vec<String> {
    examples
        .into_iter()
        .map(|ex| first_text(ex, &EM).unwrap_or_default())
        .collect()
}

// ── Tests ──
