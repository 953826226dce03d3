//! Candidate-list selector evaluation shared by the adapters.
//!
//! Every logical field is extracted through an ordered list of selector
//! candidates, tried in sequence until one yields a value. This is the
//! core resilience mechanism of the subsystem: a site renaming one class
//! degrades to the next candidate instead of breaking the adapter.

use std::collections::HashSet;

use scraper::{Html, Selector};
use tracing::debug;

/// Lazy-load attributes, preferred over `src`: many sites park a
/// placeholder in `src` until a scroll-triggered load swaps it out.
const LAZY_SRC_ATTRS: &[&str] = &["data-src", "data-lazy-src", "data-original"];

const PLACEHOLDER_TOKENS: &[&str] = &["placeholder", "spinner", "loading", "blank."];

fn parse(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            debug!(selector, error = %e, "skipping unparsable selector");
            None
        }
    }
}

fn squash(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text of the first candidate that yields a non-empty value.
pub(crate) fn first_text(doc: &Html, candidates: &[&str]) -> String {
    for candidate in candidates {
        let Some(selector) = parse(candidate) else { continue };
        for element in doc.select(&selector) {
            let text = squash(&element.text().collect::<String>());
            if !text.is_empty() {
                return text;
            }
        }
    }
    String::new()
}

/// Attribute value of the first (selector, attribute) candidate that
/// yields a non-empty value.
pub(crate) fn first_attr(doc: &Html, candidates: &[(&str, &str)]) -> String {
    for (candidate, attr) in candidates {
        let Some(selector) = parse(candidate) else { continue };
        for element in doc.select(&selector) {
            if let Some(value) = element.value().attr(attr) {
                let value = value.trim();
                if !value.is_empty() {
                    return value.to_string();
                }
            }
        }
    }
    String::new()
}

/// Whitespace-normalized join of every match of the first productive
/// candidate. Used for the specs/summary block, where counts sit as
/// separate unlabeled elements.
pub(crate) fn combined_text(doc: &Html, candidates: &[&str]) -> String {
    for candidate in candidates {
        let Some(selector) = parse(candidate) else { continue };
        let parts: Vec<String> = doc
            .select(&selector)
            .map(|element| squash(&element.text().collect::<String>()))
            .filter(|text| !text.is_empty())
            .collect();
        if !parts.is_empty() {
            return parts.join(" | ");
        }
    }
    String::new()
}

/// All matches of the first productive candidate, empty entries dropped.
pub(crate) fn text_list(doc: &Html, candidates: &[&str]) -> Vec<String> {
    for candidate in candidates {
        let Some(selector) = parse(candidate) else { continue };
        let items: Vec<String> = doc
            .select(&selector)
            .map(|element| squash(&element.text().collect::<String>()))
            .filter(|text| !text.is_empty())
            .collect();
        if !items.is_empty() {
            return items;
        }
    }
    Vec::new()
}

/// Image URLs from gallery/thumbnail candidates, all candidates pooled.
///
/// Prefers lazy-load attributes over `src`, discards placeholder
/// entries, and dedups while preserving first-seen order.
pub(crate) fn image_urls(doc: &Html, candidates: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for candidate in candidates {
        let Some(selector) = parse(candidate) else { continue };
        for element in doc.select(&selector) {
            let value = LAZY_SRC_ATTRS
                .iter()
                .find_map(|attr| element.value().attr(attr))
                .or_else(|| element.value().attr("src"));
            let Some(value) = value.map(str::trim) else { continue };

            if value.is_empty() || value.starts_with("data:") {
                continue;
            }
            let lower = value.to_lowercase();
            if PLACEHOLDER_TOKENS.iter().any(|token| lower.contains(token)) {
                continue;
            }
            if seen.insert(value.to_string()) {
                urls.push(value.to_string());
            }
        }
    }
    urls
}
