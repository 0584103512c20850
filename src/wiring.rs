use crate::config::WatchConfig;
use crate::error::WatchError;
use crate::http::{HttpTransport, WebhookResponse};
use crate::notify::{Notifier, print_response, send_failure_line};

/// Fixed message posted by the wiring test
pub const TEST_MESSAGE: &str =
    "👻 Test alert from GitHub Actions – if you see this, Discord wiring works.";

/// Posts the fixed test message and reports what the webhook said.
///
/// Unlike the monitor, every failure here is returned to the caller: a
/// missing endpoint fails before any request is made.
pub async fn run_wiring_test<T: HttpTransport>(
    config: &WatchConfig,
    transport: &T,
) -> Result<WebhookResponse, WatchError> {
    let notifier = Notifier::from_config(config);
    if !notifier.is_enabled() {
        println!("ERROR: DISCORD_WEBHOOK_URL environment variable is not set.");
        return Err(WatchError::ConfigMissing);
    }

    match notifier.send(transport, TEST_MESSAGE).await {
        Ok(response) => {
            print_response(&response);
            println!("SUCCESS: Discord notification sent.");
            Ok(response)
        }
        Err(e) => {
            if let WatchError::WebhookStatus(response) = &e {
                print_response(response);
            }
            eprintln!("{}", send_failure_line(&e));
            Err(e)
        }
    }
}

/// Process exit status for a wiring test outcome
pub fn exit_status(outcome: &Result<WebhookResponse, WatchError>) -> u8 {
    match outcome {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
