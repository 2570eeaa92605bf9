pub mod document;
pub mod extract;

use crate::entry::Entry;
use document::Document;

/// Two-stage pipeline: markup → document → entry. Never fails.
pub fn process_page(word: &str, markup: &str) -> Entry {
    let doc = Document::parse(markup);
    extract::extract_all(word, &doc)
}
