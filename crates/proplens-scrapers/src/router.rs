//! Host-to-adapter routing.
//!
//! The registry is the single extension point for adding sites: no other
//! component branches on hostname. Supporting a new site means a new
//! adapter plus one `register` call here.

use proplens_core::{Result, ScrapeError};
use url::Url;

use crate::AdapterKind;

/// Whether a site's listing data is present in the served HTML or only
/// after JavaScript execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Static,
    Headless,
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Static => write!(f, "static"),
            RenderMode::Headless => write!(f, "headless"),
        }
    }
}

/// One routing entry: URLs whose host contains `host` are handled by
/// `adapter` in `mode`.
#[derive(Debug, Clone)]
pub struct SiteRoute {
    pub host: String,
    pub adapter: AdapterKind,
    pub mode: RenderMode,
}

/// Maps a listing URL's host to its adapter and render mode.
///
/// Matching is by host substring, first registered entry wins, so
/// resolution is deterministic: the same URL always routes to the same
/// adapter and mode. The registry is supplied at construction time; a
/// scrape never consults ambient state.
#[derive(Debug, Clone)]
pub struct SiteRegistry {
    routes: Vec<SiteRoute>,
}

impl SiteRegistry {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn register(
        mut self,
        host: impl Into<String>,
        adapter: AdapterKind,
        mode: RenderMode,
    ) -> Self {
        self.routes.push(SiteRoute {
            host: host.into(),
            adapter,
            mode,
        });
        self
    }

    /// Resolve a URL to its routing entry, or `UnsupportedSite`.
    pub fn resolve(&self, url: &Url) -> Result<&SiteRoute> {
        let host = url
            .host_str()
            .ok_or_else(|| ScrapeError::UnsupportedSite(url.to_string()))?;

        self.routes
            .iter()
            .find(|route| host.contains(&route.host))
            .ok_or_else(|| ScrapeError::UnsupportedSite(host.to_string()))
    }

    pub fn routes(&self) -> &[SiteRoute] {
        &self.routes
    }
}

impl Default for SiteRegistry {
    fn default() -> Self {
        Self::new()
            .register("realtor.ca", AdapterKind::RealtorCa, RenderMode::Headless)
            .register("zolo.ca", AdapterKind::Zolo, RenderMode::Static)
            .register("point2homes.com", AdapterKind::Generic, RenderMode::Static)
            .register("duproprio.com", AdapterKind::Generic, RenderMode::Static)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_resolves_registered_hosts() {
        let registry = SiteRegistry::default();

        let route = registry
            .resolve(&url("https://www.realtor.ca/real-estate/123/house"))
            .unwrap();
        assert_eq!(route.adapter, AdapterKind::RealtorCa);
        assert_eq!(route.mode, RenderMode::Headless);

        let route = registry.resolve(&url("https://zolo.ca/hamilton-real-estate/9-pine-rd")).unwrap();
        assert_eq!(route.adapter, AdapterKind::Zolo);
        assert_eq!(route.mode, RenderMode::Static);
    }

    #[test]
    fn test_unregistered_host_is_unsupported() {
        let registry = SiteRegistry::default();
        let err = registry.resolve(&url("https://example.com/listing/1")).unwrap_err();
        assert!(matches!(err, ScrapeError::UnsupportedSite(_)));
    }

    #[test]
    fn test_hostless_url_is_unsupported() {
        let registry = SiteRegistry::default();
        let err = registry.resolve(&url("mailto:agent@example.com")).unwrap_err();
        assert!(matches!(err, ScrapeError::UnsupportedSite(_)));
    }

    #[test]
    fn test_first_registered_entry_wins() {
        let registry = SiteRegistry::new()
            .register("listings.test", AdapterKind::Zolo, RenderMode::Static)
            .register("test", AdapterKind::Generic, RenderMode::Headless);

        let route = registry.resolve(&url("https://listings.test/9")).unwrap();
        assert_eq!(route.adapter, AdapterKind::Zolo);
        assert_eq!(route.mode, RenderMode::Static);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let registry = SiteRegistry::default();
        let target = url("https://www.realtor.ca/real-estate/123/house");
        let first = registry.resolve(&target).unwrap().adapter;
        let second = registry.resolve(&target).unwrap().adapter;
        assert_eq!(first, second);
    }
}
