use crate::results::CheckResult;

/// Text the shop shows while nothing is listed. Matched case-sensitively.
pub const EMPTY_MARKER: &str = "No results found";

/// Active when the empty-listing marker is gone from the page
pub fn check(name: &str, html: &str) -> CheckResult {
    if html.contains(EMPTY_MARKER) {
        CheckResult::new(false, format!("{name}: no results found."))
    } else {
        CheckResult::new(
            true,
            format!("{name}: POSSIBLE STOCK DETECTED (no 'No results found')."),
        )
    }
}
