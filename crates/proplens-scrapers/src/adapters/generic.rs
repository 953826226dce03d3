//! Fallback adapter for simple server-rendered brokerage sites.
//!
//! Leans on OpenGraph tags and schema.org microdata first, then the
//! class names small listing sites tend to use. Registered per host like
//! any other adapter; it is not a universal scraper.

use scraper::Html;

use crate::select;
use crate::{Adapter, RawListing};

const TITLE_META: &[(&str, &str)] = &[("meta[property='og:title']", "content")];

const TITLE: &[&str] = &["h1.listing-title", "h1", "title"];

const ADDRESS: &[&str] = &[
    "[itemprop='streetAddress']",
    ".property-address",
    ".address",
    "h1",
];

const LOCATION: &[&str] = &[
    "[itemprop='addressLocality']",
    ".property-location",
    ".location",
];

const PRICE: &[&str] = &[
    "[itemprop='price']",
    ".property-price",
    ".price",
    "[class*='price']",
];

const PRICE_META: &[(&str, &str)] = &[
    ("meta[itemprop='price']", "content"),
    ("[itemprop='price']", "content"),
];

const PROPERTY_TYPE: &[&str] = &[".property-type", ".listing-category"];

const SPECS: &[&str] = &[".property-details", ".specs", ".listing-details", ".summary"];

const DESCRIPTION_META: &[(&str, &str)] = &[("meta[property='og:description']", "content")];

const DESCRIPTION: &[&str] = &[
    ".property-description",
    "[itemprop='description']",
    ".description",
];

const FEATURES: &[&str] = &[".features li", ".amenities li", "ul.property-features li"];

const IMAGES: &[&str] = &[
    ".gallery img",
    ".photos img",
    ".property-images img",
    "img[data-src]",
];

const OG_IMAGE: &[(&str, &str)] = &[("meta[property='og:image']", "content")];

pub struct GenericAdapter;

impl GenericAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Adapter for GenericAdapter {
    fn id(&self) -> &'static str {
        "generic"
    }

    fn extract(&self, html: &str) -> RawListing {
        let doc = Html::parse_document(html);

        let title = {
            let meta = select::first_attr(&doc, TITLE_META);
            if meta.is_empty() {
                select::first_text(&doc, TITLE)
            } else {
                meta
            }
        };

        let price = {
            let text = select::first_text(&doc, PRICE);
            if text.is_empty() {
                select::first_attr(&doc, PRICE_META)
            } else {
                text
            }
        };

        let description = {
            let text = select::first_text(&doc, DESCRIPTION);
            if text.is_empty() {
                select::first_attr(&doc, DESCRIPTION_META)
            } else {
                text
            }
        };

        let mut images = select::image_urls(&doc, IMAGES);
        let og_image = select::first_attr(&doc, OG_IMAGE);
        if !og_image.is_empty() && !images.contains(&og_image) {
            images.insert(0, og_image);
        }

        RawListing {
            title,
            address: select::first_text(&doc, ADDRESS),
            location: select::first_text(&doc, LOCATION),
            price,
            property_type: select::first_text(&doc, PROPERTY_TYPE),
            specs: select::combined_text(&doc, SPECS),
            description,
            features: select::text_list(&doc, FEATURES),
            images,
        }
    }
}
