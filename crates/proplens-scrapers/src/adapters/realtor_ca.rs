//! Adapter for realtor.ca listing pages.
//!
//! The site hydrates listing data client-side, so it routes through the
//! headless renderer. Candidates run newest-markup-first, with the
//! legacy ids the site still ships kept as fallbacks.

use scraper::Html;

use crate::select;
use crate::{Adapter, RawListing};

const READY: &[&str] = &[
    "#listingPriceValue",
    "[data-testid='listing-price']",
    ".listingPrice",
];

const TITLE: &[&str] = &["h1#listingAddress", "[data-testid='listing-address']", "h1"];

const ADDRESS: &[&str] = &[
    "#listingAddress",
    "[data-testid='listing-address']",
    ".propertyAddress",
    "h1",
];

const LOCATION: &[&str] = &[
    "[data-testid='listing-locality']",
    ".propertyCityMunicipality",
    ".cityName",
];

const PRICE: &[&str] = &[
    "#listingPriceValue",
    "[data-testid='listing-price']",
    ".listingPrice",
];

const PROPERTY_TYPE: &[&str] = &[
    "#BuildingTypeVal",
    "[data-testid='property-type']",
    ".propertyTypeLabel",
];

const SPECS: &[&str] = &[
    ".listingIconCon",
    "#propertyDetailsSectionContentSubCon",
    ".propertyDetailsSectionContent",
];

const DESCRIPTION: &[&str] = &[
    "#propertyDescriptionCon",
    "[data-testid='listing-description']",
    ".propertyDescription",
];

const FEATURES: &[&str] = &[
    "#propertyDetailsFeatures li",
    ".propertyFeatures li",
    ".listingFeatures li",
];

const IMAGES: &[&str] = &[
    "#heroImage img",
    ".thumbnailCon img",
    ".listingPhotos img",
    "[data-testid='gallery'] img",
];

pub struct RealtorCaAdapter;

impl RealtorCaAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Adapter for RealtorCaAdapter {
    fn id(&self) -> &'static str {
        "realtor-ca"
    }

    fn ready_selectors(&self) -> &'static [&'static str] {
        READY
    }

    fn extract(&self, html: &str) -> RawListing {
        let doc = Html::parse_document(html);
        RawListing {
            title: select::first_text(&doc, TITLE),
            address: select::first_text(&doc, ADDRESS),
            location: select::first_text(&doc, LOCATION),
            price: select::first_text(&doc, PRICE),
            property_type: select::first_text(&doc, PROPERTY_TYPE),
            specs: select::combined_text(&doc, SPECS),
            description: select::first_text(&doc, DESCRIPTION),
            features: select::text_list(&doc, FEATURES),
            images: select::image_urls(&doc, IMAGES),
        }
    }
}
