use std::time::Duration;

/// Client identifier sent on static fetches. A realistic browser UA
/// avoids trivial rejection by source sites; it never misrepresents
/// origin or authentication.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Construction-time tunables for the scrape engine.
///
/// These and the site registry are the whole configuration surface;
/// nothing is read from ambient global state during a scrape.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Upper bound on concurrent headless browser sessions. Callers past
    /// the bound wait for a slot; they are never rejected by the pool.
    pub max_headless_sessions: usize,
    pub static_timeout: Duration,
    pub headless_timeout: Duration,
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            max_headless_sessions: 2,
            static_timeout: Duration::from_secs(30),
            headless_timeout: Duration::from_secs(45),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
