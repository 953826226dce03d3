use proplens_core::{ListingType, ScrapeError};
use proplens_scrapers::{AdapterKind, PropertyScraper, RenderMode, ScrapeConfig, SiteRegistry};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING_FIXTURE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>123 Main St | Sunrise Realty</title>
    <meta property="og:title" content="123 Main St">
</head>
<body>
    <h1 class="property-address">123 Main St</h1>
    <div class="property-location">Hamilton, ON</div>
    <span class="property-price">$450,000</span>
    <div class="property-details">3 bed &middot; 2 bath &middot; 1,850 sq ft &middot; Built in 1995</div>
    <div class="property-description">Charming family home close to schools.</div>
    <ul class="features">
        <li>Attached garage</li>
        <li></li>
        <li>Fenced yard</li>
    </ul>
    <div class="gallery">
        <img src="/assets/placeholder.png" data-src="/photos/front.jpg">
        <img src="/photos/kitchen.jpg">
        <img src="/photos/front.jpg">
    </div>
</body>
</html>"#;

const SPARSE_FIXTURE: &str = r#"<!DOCTYPE html>
<html>
<body>
    <h1 class="property-address">9 Pine Rd</h1>
    <span class="price">$275,000</span>
</body>
</html>"#;

/// Route the mock server's host at the generic static adapter, the way
/// production registers simple brokerage sites.
fn scraper_for_mock_host() -> PropertyScraper {
    let registry =
        SiteRegistry::new().register("127.0.0.1", AdapterKind::Generic, RenderMode::Static);
    PropertyScraper::with_registry(ScrapeConfig::default(), registry).unwrap()
}

async fn serve(fixture: &str, route: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_scrapes_static_listing_end_to_end() {
    let server = serve(LISTING_FIXTURE, "/listing/42").await;
    let scraper = scraper_for_mock_host();

    let property = scraper
        .scrape_property(&format!("{}/listing/42", server.uri()))
        .await
        .unwrap();

    assert_eq!(property.title, "123 Main St");
    assert_eq!(property.address, "123 Main St");
    assert_eq!(property.location, "Hamilton, ON");
    assert_eq!(property.price, 450_000.0);
    assert_eq!(property.bedrooms, Some(3));
    assert_eq!(property.bathrooms, Some(2));
    assert_eq!(property.area, 1850.0);
    assert_eq!(property.year_built, Some(1995));
    assert_eq!(property.property_type, "House");
    assert_eq!(property.listing_type, ListingType::Sale);
    assert_eq!(property.features, vec!["Attached garage", "Fenced yard"]);
    assert_eq!(property.images, vec!["/photos/front.jpg", "/photos/kitchen.jpg"]);
}

#[tokio::test]
async fn test_record_serializes_for_the_crm() {
    let server = serve(LISTING_FIXTURE, "/listing/42").await;
    let scraper = scraper_for_mock_host();

    let property = scraper
        .scrape_property(&format!("{}/listing/42", server.uri()))
        .await
        .unwrap();
    let json = serde_json::to_value(&property).unwrap();

    assert_eq!(json["type"], "House");
    assert_eq!(json["listingType"], "SALE");
    assert_eq!(json["yearBuilt"], 1995);
    assert_eq!(json["bedrooms"], 3);
}

#[tokio::test]
async fn test_degraded_listing_is_still_a_success() {
    let server = serve(SPARSE_FIXTURE, "/listing/9").await;
    let scraper = scraper_for_mock_host();

    let property = scraper
        .scrape_property(&format!("{}/listing/9", server.uri()))
        .await
        .unwrap();

    assert_eq!(property.address, "9 Pine Rd");
    assert_eq!(property.price, 275_000.0);
    assert_eq!(property.bedrooms, None);
    assert_eq!(property.bathrooms, None);
    assert_eq!(property.year_built, None);
    assert_eq!(property.area, 0.0);

    // Absent optionals must be omitted from the serialized record.
    let json = serde_json::to_value(&property).unwrap();
    assert!(json.get("bedrooms").is_none());
}

#[tokio::test]
async fn test_empty_page_is_an_extraction_error() {
    let server = serve("<html><body><p>Coming soon.</p></body></html>", "/listing/0").await;
    let scraper = scraper_for_mock_host();

    let err = scraper
        .scrape_property(&format!("{}/listing/0", server.uri()))
        .await
        .unwrap_err();

    match err {
        ScrapeError::Extraction { missing } => {
            assert!(missing.contains(&"price".to_string()));
        }
        other => panic!("expected Extraction, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_success_status_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let scraper = scraper_for_mock_host();

    let err = scraper
        .scrape_property(&format!("{}/listing/gone", server.uri()))
        .await
        .unwrap_err();

    assert!(err.is_retryable());
    match err {
        ScrapeError::RenderFetch { status, .. } => assert_eq!(status, Some(404)),
        other => panic!("expected RenderFetch, got {other:?}"),
    }
}
