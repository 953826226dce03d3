//! Text-to-value normalization.
//!
//! Pure, total functions from raw extracted text to typed values. They
//! never fail: unparsable input maps to the documented sentinel (`0`,
//! `None`), so a single bad field cannot abort extraction of the rest
//! of a record. No network or DOM dependency.

use tracing::debug;

const CURRENCY_CHARS: &[char] = &['$', '€', '£', '¥', ','];
const MONTHLY_MARKERS: &[&str] = &["/month", "permonth", "/mo"];

/// Parse a price string into a non-negative amount. `0.0` = unparsable.
///
/// Handles currency symbols, thousands separators, "k"/"m" suffixes,
/// "from" qualifiers, monthly-rate markers, and ranges (a range reports
/// its lower bound). The rental-vs-sale distinction is carried by
/// `listingType`, never by scaling the number.
pub fn price(raw: &str) -> f64 {
    let mut text: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !CURRENCY_CHARS.contains(c))
        .collect();

    if let Some(idx) = text.find('-') {
        text.truncate(idx);
    }

    for marker in MONTHLY_MARKERS {
        if let Some(idx) = text.find(marker) {
            text.truncate(idx);
        }
    }

    if let Some(rest) = text.strip_prefix("from") {
        text = rest.to_string();
    }

    let mut multiplier = 1.0;
    if text.ends_with('k') {
        multiplier = 1_000.0;
        text.pop();
    } else if text.ends_with('m') {
        multiplier = 1_000_000.0;
        text.pop();
    }

    match numeric_token(&text).parse::<f64>() {
        Ok(value) if value >= 0.0 => value * multiplier,
        _ => {
            debug!(raw, "price text yielded no numeric value");
            0.0
        }
    }
}

/// Parse a positive integer count (bedrooms, bathrooms). Strips
/// non-digit characters; empty or zero input is `None`, not `0`.
pub fn count(raw: &str) -> Option<u32> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(value) => Some(value),
    }
}

/// Parse an area value, preserving a single decimal point. `0.0` when
/// nothing parsable remains.
pub fn area(raw: &str) -> f64 {
    let mut seen_dot = false;
    let cleaned: String = raw
        .chars()
        .filter(|c| {
            if c.is_ascii_digit() {
                true
            } else if *c == '.' && !seen_dot {
                seen_dot = true;
                true
            } else {
                false
            }
        })
        .collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Parse a build year. Rejects values outside 1800-2100 so a stray
/// digit run near a "year"/"built" anchor cannot become a build year.
pub fn year(raw: &str) -> Option<u32> {
    let value = count(raw)?;
    (1800..=2100).contains(&value).then_some(value)
}

/// First contiguous numeric token: digits plus at most one decimal point.
fn numeric_token(text: &str) -> &str {
    let start = match text.find(|c: char| c.is_ascii_digit()) {
        Some(idx) => idx,
        None => return "",
    };

    let mut end = start;
    let mut seen_dot = false;
    for (idx, c) in text[start..].char_indices() {
        if c.is_ascii_digit() {
            end = start + idx + 1;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
            end = start + idx + 1;
        } else {
            break;
        }
    }
    &text[start..end]
}
