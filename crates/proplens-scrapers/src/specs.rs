//! Heuristics over the combined specs/summary text block.
//!
//! Several sites render room counts and area as unlabeled numbers next
//! to icons rather than separately addressable elements, so these
//! patterns anchor the digits on a unit or keyword; a bare number never
//! matches.

use proplens_core::{normalize, ListingType};
use regex::Regex;

const RENTAL_TOKENS: &[&str] = &["rent", "lease", "/month", "per month"];

/// Precompiled field patterns applied to a specs block.
pub(crate) struct SpecsReader {
    bedrooms: Regex,
    bathrooms: Regex,
    area: Regex,
    year_built: Regex,
}

impl SpecsReader {
    pub(crate) fn new() -> Self {
        Self {
            bedrooms: Regex::new(r"(?i)(\d+)\s*(?:bed(?:room)?s?\b|bds?\b|br\b)").unwrap(),
            bathrooms: Regex::new(r"(?i)(\d+)(?:\.\d+)?\s*(?:bath(?:room)?s?\b|ba\b)").unwrap(),
            area: Regex::new(
                r"(?i)([\d,]+(?:\.\d+)?)\s*(?:sq\.?\s*ft\.?|sqft|square\s+feet|ft²|sq\.?\s*m\b|m²)",
            )
            .unwrap(),
            year_built: Regex::new(r"(?i)(?:built|year)\D{0,12}((?:18|19|20)\d{2})").unwrap(),
        }
    }

    fn capture<'t>(&self, pattern: &Regex, text: &'t str) -> Option<&'t str> {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub(crate) fn bedrooms(&self, specs: &str) -> Option<u32> {
        self.capture(&self.bedrooms, specs).and_then(normalize::count)
    }

    pub(crate) fn bathrooms(&self, specs: &str) -> Option<u32> {
        self.capture(&self.bathrooms, specs).and_then(normalize::count)
    }

    pub(crate) fn area(&self, specs: &str) -> f64 {
        self.capture(&self.area, specs)
            .map(normalize::area)
            .unwrap_or(0.0)
    }

    pub(crate) fn year_built(&self, specs: &str) -> Option<u32> {
        self.capture(&self.year_built, specs).and_then(normalize::year)
    }
}

/// SALE unless the price or specs text carries a rental-indicating token.
pub(crate) fn listing_type(price_text: &str, specs: &str) -> ListingType {
    let haystack = format!("{} {}", price_text, specs).to_lowercase();
    if RENTAL_TOKENS.iter().any(|token| haystack.contains(token)) {
        ListingType::Rental
    } else {
        ListingType::Sale
    }
}
