use crate::http::WebhookResponse;
use thiserror::Error;

/// Errors surfaced by the HTTP wrapper and the pipelines built on it
#[derive(Debug, Error)]
pub enum WatchError {
    /// No webhook endpoint was configured
    #[error("DISCORD_WEBHOOK_URL environment variable is not set")]
    ConfigMissing,

    /// GET failed: network error, timeout or non-2xx status
    #[error("{0}")]
    Fetch(String),

    /// POST never produced a response: network error, timeout or bad URL
    #[error("{0}")]
    Post(String),

    /// POST completed but the webhook answered outside the 2xx range
    #[error("webhook returned HTTP {}", .0.status)]
    WebhookStatus(WebhookResponse),
}
