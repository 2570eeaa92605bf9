use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::{examples_of, indicator_of, EX, SUB_SENSE};
use crate::entry::{Phrase, PhraseSense};
use crate::parser::document::{joined_text, next_element_sibling, select_all, select_outside, Document};

static ETYMOLOGY: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".etymology").unwrap());
static PHRASES_TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3.phrases-title").unwrap());
static PHRASE_ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".senseInnerWrapper > ul.gramb > li").unwrap());
static PHRASE_TEXT: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".ind .phrase").unwrap());
static PHRASE_SENSE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li.phrase_sense").unwrap());

/// Phrases from the first section headed by a phrases title; empty when there is none.
pub fn scrape_phrases(doc: &Document) -> Vec<Phrase> {
    let Some(section) = doc.first_with_child(&ETYMOLOGY, &PHRASES_TITLE) else {
        return Vec::new();
    };

    select_all(section, &PHRASE_ITEM)
        .into_iter()
        .map(|item| Phrase {
            phrase: joined_text(item, &PHRASE_TEXT).unwrap_or_default(),
            senses: next_element_sibling(item)
                .map(scrape_phrase_senses)
                .unwrap_or_default(),
        })
        .collect()
}

/// Senses listed in the block that follows a phrase item.
pub fn scrape_phrase_senses(block: ElementRef<'_>) -> Vec<PhraseSense> {
    select_all(block, &PHRASE_SENSE)
        .into_iter()
        .map(|item| PhraseSense {
            sense: indicator_of(item),
            examples: examples_of(select_outside(item, &EX, &SUB_SENSE)),
        })
        .collect()
}
