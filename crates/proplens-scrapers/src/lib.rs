pub mod adapters;
pub mod config;
pub mod engine;
pub mod renderer;
pub mod router;
mod select;
mod specs;

use std::sync::Arc;

pub use adapters::{GenericAdapter, RealtorCaAdapter, ZoloAdapter};
pub use config::{ScrapeConfig, DEFAULT_USER_AGENT};
pub use engine::PropertyScraper;
pub use renderer::{BrowserPool, HeadlessRenderer, Renderer, StaticRenderer};
pub use router::{RenderMode, SiteRegistry, SiteRoute};

/// Raw field values pulled out of a rendered listing page.
///
/// The direct output of selector evaluation: untyped text, consumed
/// immediately by normalization and then discarded. A field the page
/// does not expose is simply left empty.
#[derive(Debug, Clone, Default)]
pub struct RawListing {
    pub title: String,
    pub address: String,
    pub location: String,
    pub price: String,
    pub property_type: String,
    /// Combined specs/summary block; room counts, area, and build year
    /// are mined out of this with anchored patterns because several
    /// sites render them as unlabeled numbers next to icons.
    pub specs: String,
    pub description: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
}

/// Site-specific extraction logic mapping rendered HTML to raw fields.
///
/// Extraction never fails: a missing field yields an empty raw value
/// for the normalizers to turn into the documented sentinel. Each field
/// runs through a prioritized candidate list of selectors so markup
/// churn on the source site degrades extraction instead of breaking it.
pub trait Adapter: Send + Sync {
    fn id(&self) -> &'static str;

    /// Selectors whose appearance signals that the listing data has
    /// hydrated. Only consulted for headless rendering.
    fn ready_selectors(&self) -> &'static [&'static str] {
        &[]
    }

    fn extract(&self, html: &str) -> RawListing;
}

/// Enum of the supported extraction adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterKind {
    RealtorCa,
    Zolo,
    /// Fallback for simple server-rendered brokerage sites.
    Generic,
}

impl AdapterKind {
    pub fn id(self) -> &'static str {
        match self {
            AdapterKind::RealtorCa => "realtor-ca",
            AdapterKind::Zolo => "zolo",
            AdapterKind::Generic => "generic",
        }
    }
}

/// Factory for creating adapter instances.
pub struct AdapterFactory;

impl AdapterFactory {
    pub fn create(kind: AdapterKind) -> Arc<dyn Adapter> {
        match kind {
            AdapterKind::RealtorCa => Arc::new(RealtorCaAdapter::new()),
            AdapterKind::Zolo => Arc::new(ZoloAdapter::new()),
            AdapterKind::Generic => Arc::new(GenericAdapter::new()),
        }
    }
}
