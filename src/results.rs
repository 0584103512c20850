use crate::config::PageSpec;
use crate::error::WatchError;
use serde::{Deserialize, Serialize};

/// Outcome of checking one page in the current run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the page suggests a state change of interest
    pub is_active: bool,

    /// Human-readable status line
    pub message: String,
}

impl CheckResult {
    /// Create a new check result
    pub fn new(is_active: bool, message: String) -> Self {
        Self { is_active, message }
    }

    /// A page that could not be fetched is never active
    pub fn fetch_failed(name: &str, err: &WatchError) -> Self {
        Self {
            is_active: false,
            message: format!("{name}: error fetching page: {err}"),
        }
    }
}

/// Pages found active in the current run, in declared order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityReport {
    entries: Vec<PageSpec>,
}

impl ActivityReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an active page
    pub fn push(&mut self, page: &PageSpec) {
        self.entries.push(page.clone());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[PageSpec] {
        &self.entries
    }
}

/// Everything one monitor run observed
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Every page with its result, in declared order
    pub results: Vec<(PageSpec, CheckResult)>,

    /// The active subset
    pub report: ActivityReport,

    /// Whether the webhook accepted an alert this run
    pub notified: bool,
}
