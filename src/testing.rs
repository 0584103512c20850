//! In-memory transport for pipeline tests

use crate::error::WatchError;
use crate::http::{HttpTransport, WebhookPayload, WebhookResponse};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Serves canned pages and records every webhook POST
pub struct FakeTransport {
    pages: HashMap<String, Result<String, String>>,
    /// `None` simulates a network failure on POST
    post_status: Option<u16>,
    fetched: Mutex<Vec<String>>,
    posts: Mutex<Vec<(String, String)>>,
    fetch_timeouts: Mutex<Vec<Duration>>,
    post_timeouts: Mutex<Vec<Duration>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            post_status: Some(204),
            fetched: Mutex::new(Vec::new()),
            posts: Mutex::new(Vec::new()),
            fetch_timeouts: Mutex::new(Vec::new()),
            post_timeouts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), Ok(html.to_string()));
        self
    }

    pub fn with_fetch_error(mut self, url: &str, cause: &str) -> Self {
        self.pages.insert(url.to_string(), Err(cause.to_string()));
        self
    }

    pub fn with_post_status(mut self, status: u16) -> Self {
        self.post_status = Some(status);
        self
    }

    pub fn with_post_network_error(mut self) -> Self {
        self.post_status = None;
        self
    }

    /// URLs fetched so far, in call order
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    /// (webhook URL, content) for every POST so far
    pub fn posts(&self) -> Vec<(String, String)> {
        self.posts.lock().unwrap().clone()
    }

    /// Timeout passed with every GET, in call order
    pub fn fetch_timeouts(&self) -> Vec<Duration> {
        self.fetch_timeouts.lock().unwrap().clone()
    }

    /// Timeout passed with every POST, in call order
    pub fn post_timeouts(&self) -> Vec<Duration> {
        self.post_timeouts.lock().unwrap().clone()
    }
}

impl HttpTransport for FakeTransport {
    async fn fetch_page(&self, url: &str, timeout: Duration) -> Result<String, WatchError> {
        self.fetched.lock().unwrap().push(url.to_string());
        self.fetch_timeouts.lock().unwrap().push(timeout);
        match self.pages.get(url) {
            Some(Ok(html)) => Ok(html.clone()),
            Some(Err(cause)) => Err(WatchError::Fetch(cause.clone())),
            None => Err(WatchError::Fetch(format!("no canned page for {url}"))),
        }
    }

    async fn post_webhook(
        &self,
        url: &str,
        payload: &WebhookPayload<'_>,
        timeout: Duration,
    ) -> Result<WebhookResponse, WatchError> {
        self.post_timeouts.lock().unwrap().push(timeout);
        self.posts
            .lock()
            .unwrap()
            .push((url.to_string(), payload.content.to_string()));

        match self.post_status {
            None => Err(WatchError::Post("connection refused".to_string())),
            Some(status) => {
                let response = WebhookResponse {
                    status,
                    body: if status == 204 {
                        String::new()
                    } else {
                        "{\"message\": \"fail\"}".to_string()
                    },
                };
                if response.is_success() {
                    Ok(response)
                } else {
                    Err(WatchError::WebhookStatus(response))
                }
            }
        }
    }
}
