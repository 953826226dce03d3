use serde::{Deserialize, Serialize};

mod error;
pub mod normalize;

pub use error::{Result, ScrapeError};

/// Whether a listing is offered for sale or for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListingType {
    Sale,
    Rental,
}

impl Default for ListingType {
    fn default() -> Self {
        ListingType::Sale
    }
}

impl std::fmt::Display for ListingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingType::Sale => write!(f, "SALE"),
            ListingType::Rental => write!(f, "RENTAL"),
        }
    }
}

/// One extracted listing, uniform across source sites.
///
/// Produced by exactly one adapter invocation and handed to the caller;
/// the core keeps no state between calls. Absence is encoded per field:
/// empty string for the always-displayable text fields, `0` for `price`
/// and `area`, and `None` for the optional integer fields (omitted from
/// JSON entirely, not serialized as null or zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedProperty {
    pub title: String,
    pub address: String,
    pub location: String,
    /// Non-negative; `0` means the price text could not be parsed.
    pub price: f64,
    /// Free-text category; [`Self::DEFAULT_TYPE`] when the source has none.
    #[serde(rename = "type")]
    pub property_type: String,
    pub listing_type: ListingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<u32>,
    /// `0` when not found; unlike the optional counts, area is expected
    /// on every listing, so unknown stays an explicit sentinel.
    pub area: f64,
    pub description: String,
    /// Empty entries are filtered out; duplicates are allowed.
    pub features: Vec<String>,
    /// Deduplicated, first-seen order, placeholder entries excluded.
    pub images: Vec<String>,
}

impl ScrapedProperty {
    /// Category used when a source provides no explicit property type.
    pub const DEFAULT_TYPE: &'static str = "House";
}
