use crate::config::WatchConfig;
use crate::error::WatchError;
use crate::http::{HttpTransport, WebhookPayload, WebhookResponse};
use crate::results::ActivityReport;
use std::time::Duration;

const ALERT_HEADER: &str = "👻 YGM watcher: activity detected!";
const ALERT_LABEL: &str = "Pages that may have changed:";
const ALERT_REMINDER: &str = "Check them before they sell out or close again.";

/// Printed to stderr when the monitor has nowhere to send its alert
pub const MISSING_WEBHOOK_WARNING: &str =
    "WARNING: DISCORD_WEBHOOK_URL not set; skipping notification.";

/// Sends messages to the configured chat webhook
#[derive(Debug, Clone)]
pub struct Notifier {
    webhook_url: Option<String>,
    timeout: Duration,
}

impl Notifier {
    pub fn new(webhook_url: Option<String>, timeout: Duration) -> Self {
        Self {
            webhook_url,
            timeout,
        }
    }

    pub fn from_config(config: &WatchConfig) -> Self {
        Self::new(config.webhook_url.clone(), config.post_timeout)
    }

    pub fn is_enabled(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// POST `message`, failing with `ConfigMissing` when no endpoint is set
    pub async fn send<T: HttpTransport>(
        &self,
        transport: &T,
        message: &str,
    ) -> Result<WebhookResponse, WatchError> {
        let url = self.webhook_url.as_deref().ok_or(WatchError::ConfigMissing)?;
        transport
            .post_webhook(url, &WebhookPayload::new(message), self.timeout)
            .await
    }

    /// Best-effort send: every failure is logged and swallowed.
    /// Returns whether the webhook accepted the message.
    pub async fn notify<T: HttpTransport>(&self, transport: &T, message: &str) -> bool {
        if !self.is_enabled() {
            eprintln!("{MISSING_WEBHOOK_WARNING}");
            return false;
        }

        match self.send(transport, message).await {
            Ok(response) => {
                print_response(&response);
                ::log::info!("Notification sent");
                true
            }
            Err(e) => {
                if let WatchError::WebhookStatus(response) = &e {
                    print_response(response);
                }
                eprintln!("{}", send_failure_line(&e));
                false
            }
        }
    }
}

/// Print the webhook's status and body preview
pub fn print_response(response: &WebhookResponse) {
    println!("Discord response status: {}", response.status);
    println!(
        "Discord response body (first 200 chars): {:?}",
        response.body
    );
}

/// Stderr line for a failed webhook POST
pub fn send_failure_line(err: &WatchError) -> String {
    format!("ERROR sending Discord notification: {err}")
}

/// Build the single combined alert for every active page
pub fn build_alert(report: &ActivityReport) -> String {
    let mut lines = vec![
        ALERT_HEADER.to_string(),
        String::new(),
        ALERT_LABEL.to_string(),
    ];
    lines.extend(
        report
            .entries()
            .iter()
            .map(|page| format!("- **{}** → {}", page.name, page.url)),
    );
    lines.push(String::new());
    lines.push(ALERT_REMINDER.to_string());
    lines.join("\n")
}
