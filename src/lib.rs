// Re-export modules
pub mod args;
pub mod checkers;
pub mod config;
pub mod error;
pub mod http;
pub mod monitor;
pub mod notify;
pub mod results;
pub mod utils;
pub mod wiring;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types for convenience
pub use checkers::PageKind;
pub use config::{PageSpec, WatchConfig};
pub use error::WatchError;
pub use http::{HttpClient, HttpTransport, WebhookResponse};
pub use monitor::run_monitor;
pub use notify::Notifier;
pub use results::{ActivityReport, CheckResult, RunSummary};
pub use wiring::run_wiring_test;
