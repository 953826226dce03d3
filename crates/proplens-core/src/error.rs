use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Failure taxonomy for a scrape call.
///
/// Every failure is a distinct, named condition so the calling layer can
/// pick a remediation per class instead of pattern-matching on message
/// strings. Field-level normalization problems are never errors; they
/// degrade to the sentinel values documented on [`crate::ScrapedProperty`].
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The URL's host matches no registered adapter (or the URL itself
    /// is unusable). Retrying cannot help.
    #[error("no adapter registered for {0}")]
    UnsupportedSite(String),

    /// A static fetch or headless navigation failed outright: non-success
    /// status, DNS/connect failure, or a navigation error.
    #[error("fetch failed for {url}: {reason}")]
    RenderFetch {
        url: String,
        status: Option<u16>,
        reason: String,
    },

    /// The render deadline elapsed with no usable content at all. A
    /// deadline that elapses with partial DOM present is not this error;
    /// the renderer returns the partial content and logs the event.
    #[error("render of {url} timed out after {waited_ms}ms")]
    RenderTimeout { url: String, waited_ms: u64 },

    /// The page rendered but the required fields could not be normalized
    /// to non-empty values. Retrying against the same markup will almost
    /// always fail identically; the missing fields are named to aid
    /// adapter maintenance.
    #[error("required fields missing after extraction: {missing:?}")]
    Extraction { missing: Vec<String> },

    /// Renderer infrastructure failure: browser could not be located or
    /// launched, a page could not be opened, or the HTTP client could
    /// not be built.
    #[error("renderer failure: {0}")]
    Renderer(String),
}

impl ScrapeError {
    /// Whether a caller-side retry with backoff has a chance of helping.
    ///
    /// The core never retries internally; that keeps latency predictable
    /// and avoids amplifying load against a struggling source site.
    pub fn is_retryable(&self) -> bool {
        match self {
            ScrapeError::UnsupportedSite(_) | ScrapeError::Extraction { .. } => false,
            ScrapeError::RenderFetch { .. }
            | ScrapeError::RenderTimeout { .. }
            | ScrapeError::Renderer(_) => true,
        }
    }
}
