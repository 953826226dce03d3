use proplens_core::ScrapeError;
use proplens_scrapers::{PropertyScraper, RenderMode, ScrapeConfig, SiteRegistry};
use url::Url;

#[tokio::test]
async fn test_unsupported_host_is_rejected_without_fetching() {
    // No server is running anywhere; routing must fail before any
    // network or browser work happens.
    let scraper = PropertyScraper::new(ScrapeConfig::default()).unwrap();
    let err = scraper
        .scrape_property("https://example.com/listing/1")
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapeError::UnsupportedSite(_)));
    assert!(!err.is_retryable());
}

#[test]
fn test_default_registry_routes_known_sites() {
    let registry = SiteRegistry::default();

    let realtor: Url = "https://www.realtor.ca/real-estate/123/house".parse().unwrap();
    let route = registry.resolve(&realtor).unwrap();
    assert_eq!(route.adapter.id(), "realtor-ca");
    assert_eq!(route.mode, RenderMode::Headless);

    let zolo: Url = "https://zolo.ca/hamilton-real-estate/9-pine-rd".parse().unwrap();
    let route = registry.resolve(&zolo).unwrap();
    assert_eq!(route.adapter.id(), "zolo");
    assert_eq!(route.mode, RenderMode::Static);
}

#[test]
fn test_same_url_always_routes_identically() {
    let registry = SiteRegistry::default();
    let url: Url = "https://www.point2homes.com/CA/home/123".parse().unwrap();

    let first = registry.resolve(&url).unwrap();
    let (adapter, mode) = (first.adapter, first.mode);
    for _ in 0..3 {
        let route = registry.resolve(&url).unwrap();
        assert_eq!(route.adapter, adapter);
        assert_eq!(route.mode, mode);
    }
}
