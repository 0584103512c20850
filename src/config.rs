use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the webhook endpoint
pub const WEBHOOK_ENV_VAR: &str = "DISCORD_WEBHOOK_URL";

/// User agent sent with every page fetch
pub const USER_AGENT: &str = "Mozilla/5.0 (YGM watcher)";

/// Timeout for page GETs
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Timeout for webhook POSTs
pub const POST_TIMEOUT: Duration = Duration::from_secs(10);

/// A named URL configured for monitoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    /// Page name, also used to select the checker
    pub name: String,

    /// URL fetched on every run
    pub url: String,
}

impl PageSpec {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// The fixed, ordered page table. Output follows this order.
pub fn default_pages() -> Vec<PageSpec> {
    vec![
        PageSpec::new("Shop", "https://www.yorkghostmerchants.com/shop"),
        PageSpec::new("Bowler Hat", "https://www.yorkghostmerchants.com/bowler-hat"),
    ]
}

/// Runtime configuration, resolved once at process start
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Webhook endpoint; `None` disables notification
    pub webhook_url: Option<String>,

    /// Pages to check, in declared order
    pub pages: Vec<PageSpec>,

    /// Timeout for page GETs
    pub fetch_timeout: Duration,

    /// Timeout for webhook POSTs
    pub post_timeout: Duration,

    /// User agent for page GETs
    pub user_agent: String,

    /// Print the alert instead of sending it
    pub dry_run: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            pages: default_pages(),
            fetch_timeout: FETCH_TIMEOUT,
            post_timeout: POST_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
            dry_run: false,
        }
    }
}

impl WatchConfig {
    /// Load configuration from the process environment, letting a command
    /// line value take precedence over `DISCORD_WEBHOOK_URL`.
    pub fn load(webhook_override: Option<String>) -> Self {
        let from_env = std::env::var(WEBHOOK_ENV_VAR).ok();
        let webhook_url = resolve_webhook_url(webhook_override, from_env);

        match &webhook_url {
            Some(_) => ::log::debug!("Webhook endpoint configured"),
            None => ::log::debug!("No webhook endpoint configured"),
        }

        Self {
            webhook_url,
            ..Self::default()
        }
    }

    /// Set the webhook endpoint
    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = non_blank(Some(url.into()));
        self
    }

    /// Print alerts instead of sending them
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Replace the page table
    pub fn with_pages(mut self, pages: Vec<PageSpec>) -> Self {
        self.pages = pages;
        self
    }
}

/// Picks the webhook endpoint from the flag value or the environment value.
/// Blank values count as absent.
pub fn resolve_webhook_url(
    from_flag: Option<String>,
    from_env: Option<String>,
) -> Option<String> {
    non_blank(from_flag).or_else(|| non_blank(from_env))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pages_order() {
        let pages = default_pages();
        let names: Vec<&str> = pages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Shop", "Bowler Hat"]);
        assert_eq!(pages[0].url, "https://www.yorkghostmerchants.com/shop");
    }

    #[test]
    fn test_default_page_names_unique() {
        let pages = default_pages();
        for (i, page) in pages.iter().enumerate() {
            assert!(pages[i + 1..].iter().all(|p| p.name != page.name));
        }
    }

    #[test]
    fn test_resolve_webhook_prefers_flag() {
        let url = resolve_webhook_url(
            Some("https://flag.example/hook".to_string()),
            Some("https://env.example/hook".to_string()),
        );
        assert_eq!(url.as_deref(), Some("https://flag.example/hook"));
    }

    #[test]
    fn test_resolve_webhook_falls_back_to_env() {
        let url = resolve_webhook_url(None, Some("https://env.example/hook".to_string()));
        assert_eq!(url.as_deref(), Some("https://env.example/hook"));

        let url = resolve_webhook_url(
            Some("   ".to_string()),
            Some("https://env.example/hook".to_string()),
        );
        assert_eq!(url.as_deref(), Some("https://env.example/hook"));
    }

    #[test]
    fn test_resolve_webhook_blank_is_missing() {
        assert_eq!(resolve_webhook_url(None, None), None);
        assert_eq!(resolve_webhook_url(None, Some(String::new())), None);
        assert_eq!(
            resolve_webhook_url(Some(" \t".to_string()), Some("\n".to_string())),
            None
        );
    }

    #[test]
    fn test_default_config_values() {
        let config = WatchConfig::default();
        assert!(config.webhook_url.is_none());
        assert_eq!(config.fetch_timeout, Duration::from_secs(20));
        assert_eq!(config.post_timeout, Duration::from_secs(10));
        assert_eq!(config.user_agent, "Mozilla/5.0 (YGM watcher)");
        assert_eq!(config.pages, default_pages());
        assert!(!config.dry_run);
    }

    #[test]
    fn test_with_webhook_url_blank_disables() {
        let config = WatchConfig::default().with_webhook_url("");
        assert!(config.webhook_url.is_none());

        let config = WatchConfig::default().with_webhook_url("https://discord.example/hook");
        assert_eq!(
            config.webhook_url.as_deref(),
            Some("https://discord.example/hook")
        );
    }
}
