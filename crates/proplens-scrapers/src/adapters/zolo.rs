//! Adapter for zolo.ca listing pages. Served markup carries the listing
//! data, so it routes through the static renderer.

use scraper::Html;

use crate::select;
use crate::{Adapter, RawListing};

const TITLE: &[&str] = &["h1.listing-address", "h1[itemprop='name']", "h1"];

const ADDRESS: &[&str] = &[
    "h1.listing-address",
    "[itemprop='streetAddress']",
    ".listing-location h1",
];

const LOCATION: &[&str] = &[
    ".listing-location .city",
    "[itemprop='addressLocality']",
    ".breadcrumbs .city",
];

const PRICE: &[&str] = &[
    ".listing-price",
    ".price-container .price",
    "[itemprop='price']",
];

const PROPERTY_TYPE: &[&str] = &[
    ".listing-attributes .type",
    ".key-facts .type",
    "[data-attribute='property-type']",
];

const SPECS: &[&str] = &[".listing-attributes", ".key-facts", ".listing-meta"];

const DESCRIPTION: &[&str] = &[
    ".listing-description",
    "[itemprop='description']",
    ".description-body",
];

const FEATURES: &[&str] = &[".features-list li", ".listing-features li"];

const IMAGES: &[&str] = &[".gallery-strip img", ".carousel img", "img.listing-photo"];

pub struct ZoloAdapter;

impl ZoloAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Adapter for ZoloAdapter {
    fn id(&self) -> &'static str {
        "zolo"
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
