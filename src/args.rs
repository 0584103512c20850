use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "ygm-watcher")]
#[command(about = "Checks the watched pages once and alerts the webhook on activity")]
#[command(version)]
pub struct MonitorArgs {
    /// Webhook endpoint (overrides DISCORD_WEBHOOK_URL)
    #[arg(long)]
    pub webhook_url: Option<String>,

    /// Run all checks and print the alert, but never POST it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(Parser, Debug, Default)]
#[command(name = "test-webhook")]
#[command(about = "Sends a one-off test message to verify webhook wiring")]
#[command(version)]
pub struct WiringArgs {
    /// Webhook endpoint (overrides DISCORD_WEBHOOK_URL)
    #[arg(long)]
    pub webhook_url: Option<String>,
}
