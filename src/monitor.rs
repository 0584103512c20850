use crate::checkers::PageKind;
use crate::config::{PageSpec, WatchConfig};
use crate::http::HttpTransport;
use crate::notify::{self, Notifier};
use crate::results::{ActivityReport, CheckResult, RunSummary};
use std::time::Duration;

/// Fetches one page and runs its checker. Never fails: a fetch error
/// becomes an inactive result carrying the cause.
pub async fn check_one<T: HttpTransport>(
    transport: &T,
    page: &PageSpec,
    timeout: Duration,
) -> CheckResult {
    let kind = PageKind::from_name(&page.name);
    ::log::debug!("Checking {} ({:?}) at {}", page.name, kind, page.url);

    match transport.fetch_page(&page.url, timeout).await {
        Ok(html) => kind.evaluate(&page.name, &html),
        Err(e) => {
            ::log::warn!("Fetch failed for {}: {}", page.name, e);
            CheckResult::fetch_failed(&page.name, &e)
        }
    }
}

/// Runs one monitoring pass over every configured page.
///
/// Pages are checked one at a time in declared order. Every status line is
/// printed. When at least one page is active a single combined alert goes
/// to the webhook; notification problems are logged, never returned.
pub async fn run_monitor<T: HttpTransport>(config: &WatchConfig, transport: &T) -> RunSummary {
    let start_time = std::time::Instant::now();
    let mut summary = RunSummary::default();

    for page in &config.pages {
        let result = check_one(transport, page, config.fetch_timeout).await;
        summary.results.push((page.clone(), result));
    }
    summary.report = activity_report(&summary.results);

    for (_, result) in &summary.results {
        println!("{}", result.message);
    }

    ::log::info!(
        "Checked {} pages in {:.2} seconds, {} active",
        summary.results.len(),
        start_time.elapsed().as_secs_f64(),
        summary.report.len()
    );

    if summary.report.is_empty() {
        println!("No activity detected; no notification sent.");
        return summary;
    }

    let alert = notify::build_alert(&summary.report);

    if config.dry_run {
        println!("Dry run, alert not sent:\n{alert}");
        return summary;
    }

    let notifier = Notifier::from_config(config);
    summary.notified = notifier.notify(transport, &alert).await;

    summary
}

/// Collects the active pages out of finished results
pub fn activity_report(results: &[(PageSpec, CheckResult)]) -> ActivityReport {
    let mut report = ActivityReport::new();
    for (page, result) in results {
        if result.is_active {
            report.push(page);
        }
    }
    report
}
