//! Page rendering: plain HTTP fetch or managed headless Chromium.
//!
//! The orchestrator picks a renderer from the route's `RenderMode`; the
//! trait keeps the engine injectable so the pipeline is testable without
//! network or browser.

mod headless;

pub use headless::{find_chromium, BrowserPool, HeadlessRenderer, PooledPage};

use std::time::Duration;

use async_trait::async_trait;
use proplens_core::{Result, ScrapeError};
use tracing::{debug, warn};
use url::Url;

use crate::config::ScrapeConfig;

/// Produces the HTML for a listing URL.
///
/// `wait_for` is the adapter's content-ready selector set; static
/// rendering ignores it.
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, url: &Url, wait_for: &[&str], timeout: Duration) -> Result<String>;
}

/// Single-GET renderer for server-rendered sites.
///
/// Fetches are not pooled beyond the HTTP client's own connection
/// handling; many can run concurrently.
pub struct StaticRenderer {
    client: reqwest::Client,
}

impl StaticRenderer {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.static_timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ScrapeError::Renderer(format!("failed to build http client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Renderer for StaticRenderer {
    async fn render(&self, url: &Url, _wait_for: &[&str], timeout: Duration) -> Result<String> {
        debug!(%url, "fetching static page");

        let response = self
            .client
            .get(url.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_fetch_error(url, e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "static fetch returned non-success status");
            return Err(ScrapeError::RenderFetch {
                url: url.to_string(),
                status: Some(status.as_u16()),
                reason: format!("HTTP {status}"),
            });
        }

        response.text().await.map_err(|e| ScrapeError::RenderFetch {
            url: url.to_string(),
            status: Some(status.as_u16()),
            reason: format!("failed to read body: {e}"),
        })
    }
}

fn classify_fetch_error(url: &Url, error: reqwest::Error, timeout: Duration) -> ScrapeError {
    if error.is_timeout() {
        ScrapeError::RenderTimeout {
            url: url.to_string(),
            waited_ms: timeout.as_millis() as u64,
        }
    } else {
        ScrapeError::RenderFetch {
            url: url.to_string(),
            status: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
