use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use super::{examples_of, indicator_of, EX, SUB_SENSE};
use crate::entry::{PosGroup, Sense, SubSense};
use crate::parser::document::{first_text, select_all, select_outside, Document};

static GRAMB: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".entryWrapper > .gramb").unwrap());
static POS_LABEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".pos span").unwrap());
static SENSE_ITEM: LazyLock<Selector> = LazyLock::new(|| Selector::parse("ul.semb > li").unwrap());
static SUB_SENSE_ITEM: LazyLock<Selector> = LazyLock::new(|| Selector::parse("ol.subSenses > li").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Grammatical categories left out of the output.
const SKIPPED_POS: &[&str] = &["abbreviation", "noun", ""];

pub fn scrape_poses(doc: &Document) -> Vec<PosGroup> {
    doc.select_all(&GRAMB)
        .into_iter()
        .filter_map(|group| {
            let pos = normalize_label(&first_text(group, &POS_LABEL).unwrap_or_default());
            if SKIPPED_POS.contains(&pos.as_str()) {
                return None;
            }
            Some(PosGroup {
                pos,
                senses: scrape_senses(group),
            })
        })
        .collect()
}

pub fn scrape_senses(group: ElementRef<'_>) -> Vec<Sense> {
    select_all(group, &SENSE_ITEM)
        .into_iter()
        .map(|item| Sense {
            sense: indicator_of(item),
            examples: examples_of(select_outside(item, &EX, &SUB_SENSE)),
            sub_senses: scrape_sub_senses(item),
        })
        .collect()
}

pub fn scrape_sub_senses(sense: ElementRef<'_>) -> Vec<SubSense> {
    select_all(sense, &SUB_SENSE_ITEM)
        .into_iter()
        .map(|item| SubSense {
            sense: indicator_of(item),
            examples: examples_of(select_all(item, &EX)),
        })
        .collect()
}

/// Collapse runs of whitespace and trim, so "  verb\n" matches "verb".
fn normalize_label(raw: &str) -> String {
    WHITESPACE_RE.replace_all(raw.trim(), " ").into_owned()
}
