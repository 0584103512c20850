use clap::Parser;
use ygm_watcher::args::MonitorArgs;
use ygm_watcher::{HttpClient, WatchConfig, run_monitor};

#[tokio::main]
async fn main() {
    // Initialize logging
    ygm_watcher::utils::init_logging();

    // Parse command-line arguments
    let args = MonitorArgs::parse();

    let config = WatchConfig::load(args.webhook_url).with_dry_run(args.dry_run);
    ::log::info!("Checking {} pages", config.pages.len());

    let client = HttpClient::new(&config.user_agent);
    let summary = run_monitor(&config, &client).await;

    // Best-effort monitor: the exit status stays 0 whatever happened
    ::log::debug!(
        "Run finished: {} active, notified: {}",
        summary.report.len(),
        summary.notified
    );
}
