//! Headless Chromium rendering with a bounded session pool.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use proplens_core::{Result, ScrapeError};
use tokio::sync::{OnceCell, OwnedSemaphorePermit, Semaphore};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ScrapeConfig;
use crate::renderer::Renderer;

const READY_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Anything at or below this length is an empty document skeleton, not
/// partial content worth extracting from.
const PARTIAL_DOM_MIN_LEN: usize = 256;

/// Locate a Chromium binary: explicit override, then PATH, then common
/// install locations.
pub fn find_chromium() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("PROPLENS_CHROMIUM_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    for name in ["google-chrome", "chromium", "chromium-browser", "chrome"] {
        if let Ok(path) = which::which(name) {
            return Some(path);
        }
    }

    if cfg!(target_os = "macos") {
        let common = PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome");
        if common.exists() {
            return Some(common);
        }
    }

    None
}

/// Bounded pool of Chromium pages over one lazily-launched browser.
///
/// Each session is memory- and CPU-heavy, so the semaphore caps how many
/// exist at once. Callers past the bound wait for a slot; they are never
/// rejected by the pool itself.
pub struct BrowserPool {
    browser: OnceCell<Browser>,
    permits: Arc<Semaphore>,
    active: Arc<AtomicUsize>,
}

impl BrowserPool {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            browser: OnceCell::new(),
            permits: Arc::new(Semaphore::new(max_sessions.max(1))),
            active: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Sessions currently handed out.
    pub fn active_sessions(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// Acquire a page, waiting for a free slot when saturated.
    pub async fn acquire(&self) -> Result<PooledPage> {
        let permit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|_| ScrapeError::Renderer("browser pool closed".into()))?;

        let browser = self.browser.get_or_try_init(Self::launch).await?;
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ScrapeError::Renderer(format!("failed to open page: {e}")))?;

        self.active.fetch_add(1, Ordering::SeqCst);
        Ok(PooledPage {
            page,
            active: Arc::clone(&self.active),
            _permit: permit,
        })
    }

    async fn launch() -> Result<Browser> {
        let chrome = find_chromium().ok_or_else(|| {
            ScrapeError::Renderer(
                "chromium executable not found; set PROPLENS_CHROMIUM_PATH".into(),
            )
        })?;

        let config = BrowserConfig::builder()
            .chrome_executable(chrome)
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .build()
            .map_err(ScrapeError::Renderer)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| ScrapeError::Renderer(format!("failed to launch chromium: {e}")))?;

        // The CDP event stream must be drained for the browser to work.
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        info!("launched headless chromium");
        Ok(browser)
    }
}

/// A Chromium page checked out of the pool.
///
/// Dropping it releases the slot, updates the active count, and closes
/// the page — on every exit path, including timeout and caller
/// cancellation, so sessions cannot leak across calls.
pub struct PooledPage {
    page: Page,
    active: Arc<AtomicUsize>,
    _permit: OwnedSemaphorePermit,
}

impl PooledPage {
    pub fn page(&self) -> &Page {
        &self.page
    }
}

impl Drop for PooledPage {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
        let page = self.page.clone();
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                let _ = page.close().await;
            });
        }
    }
}

/// JavaScript-executing renderer backed by the browser pool.
pub struct HeadlessRenderer {
    pool: BrowserPool,
    degraded: AtomicU64,
}

impl HeadlessRenderer {
    pub fn new(config: &ScrapeConfig) -> Self {
        Self {
            pool: BrowserPool::new(config.max_headless_sessions),
            degraded: AtomicU64::new(0),
        }
    }

    pub fn pool(&self) -> &BrowserPool {
        &self.pool
    }

    /// Renders that hit the deadline before a content-ready marker
    /// appeared. The HTML returned for those may be partial.
    pub fn degraded_renders(&self) -> u64 {
        self.degraded.load(Ordering::Relaxed)
    }

    fn note_degraded(&self, url: &Url, why: &str) {
        self.degraded.fetch_add(1, Ordering::Relaxed);
        warn!(%url, why, "returning possibly-partial DOM");
    }

    async fn outer_html(page: &Page) -> Result<String> {
        page.evaluate("document.documentElement.outerHTML")
            .await
            .map_err(|e| ScrapeError::Renderer(format!("failed to read DOM: {e}")))?
            .into_value::<String>()
            .map_err(|e| ScrapeError::Renderer(format!("unexpected DOM payload: {e}")))
    }

    async fn marker_present(page: &Page, selector: &str) -> bool {
        let probe = format!(
            "document.querySelector({}) !== null",
            serde_json::Value::from(selector)
        );
        match page.evaluate(probe).await {
            Ok(result) => result.into_value::<bool>().unwrap_or(false),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl Renderer for HeadlessRenderer {
    async fn render(&self, url: &Url, wait_for: &[&str], timeout: Duration) -> Result<String> {
        // The wait for a pool slot is not part of the render timeout;
        // saturated callers queue rather than fail.
        let session = self.pool.acquire().await?;
        let page = session.page();
        let deadline = tokio::time::Instant::now() + timeout;

        debug!(%url, "navigating");
        match tokio::time::timeout_at(deadline, page.goto(url.as_str())).await {
            Ok(Ok(_)) => {
                let _ = tokio::time::timeout_at(deadline, page.wait_for_navigation()).await;
            }
            Ok(Err(e)) => {
                return Err(ScrapeError::RenderFetch {
                    url: url.to_string(),
                    status: None,
                    reason: format!("navigation failed: {e}"),
                });
            }
            Err(_) => {
                // Navigation ran out the clock. Partial DOM is often
                // still extractable; only a bare skeleton is fatal.
                let html = Self::outer_html(page).await.unwrap_or_default();
                if html.len() > PARTIAL_DOM_MIN_LEN {
                    self.note_degraded(url, "navigation timeout");
                    return Ok(html);
                }
                return Err(ScrapeError::RenderTimeout {
                    url: url.to_string(),
                    waited_ms: timeout.as_millis() as u64,
                });
            }
        }

        let mut ready = wait_for.is_empty();
        while !ready && tokio::time::Instant::now() < deadline {
            for selector in wait_for {
                if Self::marker_present(page, selector).await {
                    debug!(%url, selector, "content-ready marker found");
                    ready = true;
                    break;
                }
            }
            if !ready {
                tokio::time::sleep(READY_POLL_INTERVAL).await;
            }
        }
        if !ready {
            self.note_degraded(url, "content-ready marker never appeared");
        }

        Self::outer_html(page).await
    }
}
