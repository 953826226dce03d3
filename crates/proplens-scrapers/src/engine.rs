//! The scrape orchestrator: route, render, extract, normalize, assemble.

use std::sync::Arc;

use proplens_core::{normalize, Result, ScrapeError, ScrapedProperty};
use tracing::{debug, info};
use url::Url;

use crate::config::ScrapeConfig;
use crate::renderer::{HeadlessRenderer, Renderer, StaticRenderer};
use crate::router::{RenderMode, SiteRegistry};
use crate::specs::{self, SpecsReader};
use crate::{AdapterFactory, RawListing};

/// Public entry point of the scraping subsystem.
///
/// One scrape is a single pass — route, render, extract, normalize —
/// yielding a best-effort record or a typed error. Nothing is retried
/// internally; callers decide retry policy from
/// [`ScrapeError::is_retryable`]. Concurrent scrapes share only the
/// headless browser pool.
pub struct PropertyScraper {
    config: ScrapeConfig,
    registry: SiteRegistry,
    static_renderer: Arc<dyn Renderer>,
    headless_renderer: Arc<dyn Renderer>,
    specs: SpecsReader,
}

impl PropertyScraper {
    pub fn new(config: ScrapeConfig) -> Result<Self> {
        Self::with_registry(config, SiteRegistry::default())
    }

    pub fn with_registry(config: ScrapeConfig, registry: SiteRegistry) -> Result<Self> {
        let static_renderer = Arc::new(StaticRenderer::new(&config)?);
        let headless_renderer = Arc::new(HeadlessRenderer::new(&config));
        Ok(Self::with_renderers(
            config,
            registry,
            static_renderer,
            headless_renderer,
        ))
    }

    /// Construct with injected renderers, so the pipeline can run
    /// without network or browser.
    pub fn with_renderers(
        config: ScrapeConfig,
        registry: SiteRegistry,
        static_renderer: Arc<dyn Renderer>,
        headless_renderer: Arc<dyn Renderer>,
    ) -> Self {
        Self {
            config,
            registry,
            static_renderer,
            headless_renderer,
            specs: SpecsReader::new(),
        }
    }

    pub fn registry(&self) -> &SiteRegistry {
        &self.registry
    }

    /// Scrape one listing URL into a [`ScrapedProperty`].
    pub async fn scrape_property(&self, url: &str) -> Result<ScrapedProperty> {
        let url =
            Url::parse(url).map_err(|_| ScrapeError::UnsupportedSite(url.to_string()))?;
        let route = self.registry.resolve(&url)?;
        let adapter = AdapterFactory::create(route.adapter);
        info!(%url, adapter = adapter.id(), mode = %route.mode, "scraping listing");

        let (renderer, timeout) = match route.mode {
            RenderMode::Static => (&self.static_renderer, self.config.static_timeout),
            RenderMode::Headless => (&self.headless_renderer, self.config.headless_timeout),
        };

        let html = renderer
            .render(&url, adapter.ready_selectors(), timeout)
            .await?;
        debug!(%url, bytes = html.len(), "rendered");

        self.assemble(adapter.extract(&html))
    }

    /// Normalize raw fields into the output record, enforcing the
    /// required-field contract.
    fn assemble(&self, raw: RawListing) -> Result<ScrapedProperty> {
        let title = raw.title.trim().to_string();
        let address = raw.address.trim().to_string();
        let price = normalize::price(&raw.price);

        // A record is only unusable when both the identity (title and
        // address) and the price are missing; anything less degrades to
        // sentinel values instead of failing.
        let identity_missing = title.is_empty() && address.is_empty();
        let price_missing = price <= 0.0;
        if identity_missing && price_missing {
            return Err(ScrapeError::Extraction {
                missing: vec!["address/title".to_string(), "price".to_string()],
            });
        }

        let property_type = match raw.property_type.trim() {
            "" => ScrapedProperty::DEFAULT_TYPE.to_string(),
            explicit => explicit.to_string(),
        };

        Ok(ScrapedProperty {
            listing_type: specs::listing_type(&raw.price, &raw.specs),
            bedrooms: self.specs.bedrooms(&raw.specs),
            bathrooms: self.specs.bathrooms(&raw.specs),
            year_built: self.specs.year_built(&raw.specs),
            area: self.specs.area(&raw.specs),
            title,
            address,
            location: raw.location.trim().to_string(),
            price,
            property_type,
            description: raw.description.trim().to_string(),
            features: raw
                .features
                .into_iter()
                .map(|feature| feature.trim().to_string())
                .filter(|feature| !feature.is_empty())
                .collect(),
            images: raw.images,
        })
    }
}
