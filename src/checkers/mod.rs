pub mod entry_window;
pub mod shop;


use crate::results::CheckResult;

/// Known page kinds, selected by exact page name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Shop listing, active once "No results found" disappears
    Shop,
    /// Application page, active once the closed notice disappears
    EntryWindow,
    /// Any other name; judged with the shop rule
    Fallback,
}

impl PageKind {
    /// Selects the checker for a page name
    pub fn from_name(name: &str) -> Self {
        match name {
            "Shop" => PageKind::Shop,
            "Bowler Hat" => PageKind::EntryWindow,
            _ => {
                ::log::warn!(
                    "No dedicated checker for page {:?}, using the shop rule",
                    name
                );
                PageKind::Fallback
            }
        }
    }

    /// Applies this kind's heuristic to fetched HTML
    pub fn evaluate(&self, name: &str, html: &str) -> CheckResult {
        match self {
            PageKind::Shop | PageKind::Fallback => shop::check(name, html),
            PageKind::EntryWindow => entry_window::check(name, html),
        }
    }
}
