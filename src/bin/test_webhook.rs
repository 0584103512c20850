use clap::Parser;
use std::process::ExitCode;
use ygm_watcher::args::WiringArgs;
use ygm_watcher::wiring::{exit_status, run_wiring_test};
use ygm_watcher::{HttpClient, WatchConfig};

#[tokio::main]
async fn main() -> ExitCode {
    ygm_watcher::utils::init_logging();

    let args = WiringArgs::parse();
    let config = WatchConfig::load(args.webhook_url);

    let client = HttpClient::new(&config.user_agent);
    let outcome = run_wiring_test(&config, &client).await;

    ExitCode::from(exit_status(&outcome))
}
