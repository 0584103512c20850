use crate::results::CheckResult;

/// Notice shown while applications are closed
pub const CLOSED_PHRASE: &str = "entry period has now ended";

/// Active when the closed notice is missing, in any letter case
pub fn check(name: &str, html: &str) -> CheckResult {
    if contains_ignore_case(html, CLOSED_PHRASE) {
        CheckResult::new(false, format!("{name}: entry period closed."))
    } else {
        CheckResult::new(
            true,
            format!("{name}: POSSIBLE ENTRY WINDOW OPEN (closed message missing)."),
        )
    }
}

/// Case-insensitive substring test over the whole page
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
