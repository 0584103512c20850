use crate::error::WatchError;
use crate::utils::{BODY_PREVIEW_CHARS, truncate_chars};
use reqwest::Client;
use reqwest::header::USER_AGENT;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// JSON body accepted by the chat webhook
#[derive(Debug, Serialize)]
pub struct WebhookPayload<'a> {
    pub content: &'a str,
}

impl<'a> WebhookPayload<'a> {
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }
}

/// What the webhook answered, kept for diagnostic printing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    /// Raw HTTP status code
    pub status: u16,

    /// First 200 characters of the response body
    pub body: String,
}

impl WebhookResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The two requests the watcher ever makes.
///
/// Every failure comes back as a `WatchError` value, so callers branch on
/// results instead of catching anything.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// GET a page and return its body; any non-2xx status is a `Fetch` error
    async fn fetch_page(&self, url: &str, timeout: Duration) -> Result<String, WatchError>;

    /// POST a JSON payload to the webhook; any non-2xx status is a
    /// `WebhookStatus` error carrying the status and truncated body
    async fn post_webhook(
        &self,
        url: &str,
        payload: &WebhookPayload<'_>,
        timeout: Duration,
    ) -> Result<WebhookResponse, WatchError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a client sending `user_agent` with page fetches
    pub fn new(user_agent: &str) -> Self {
        Self {
            client: Client::new(),
            user_agent: user_agent.to_string(),
        }
    }
}

impl HttpTransport for HttpClient {
    async fn fetch_page(&self, url: &str, timeout: Duration) -> Result<String, WatchError> {
        let url =
            Url::parse(url).map_err(|e| WatchError::Fetch(format!("invalid URL {url}: {e}")))?;
        ::log::debug!("GET {} (timeout {}s)", url, timeout.as_secs());

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .timeout(timeout)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| WatchError::Fetch(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| WatchError::Fetch(e.to_string()))?;
        ::log::debug!("Fetched {} bytes", body.len());

        Ok(body)
    }

    async fn post_webhook(
        &self,
        url: &str,
        payload: &WebhookPayload<'_>,
        timeout: Duration,
    ) -> Result<WebhookResponse, WatchError> {
        // The webhook URL embeds a secret token, so it is kept out of messages
        let url =
            Url::parse(url).map_err(|e| WatchError::Post(format!("invalid webhook URL: {e}")))?;
        ::log::debug!("POST webhook ({} chars of content)", payload.content.chars().count());

        let response = self
            .client
            .post(url)
            .json(payload)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| WatchError::Post(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let response = WebhookResponse {
            status,
            body: truncate_chars(&body, BODY_PREVIEW_CHARS),
        };

        if response.is_success() {
            Ok(response)
        } else {
            Err(WatchError::WebhookStatus(response))
        }
    }
}
