//! Page-wide yewdux store.
//!
//! # Design
//! - Only the applied presentation is shared; the panel's draft stays local.
//! - Reports are counted so views can tell a re-apply from a no-op render.

use crate::core::article::ArticleState;
use yewdux::store::Store;

/// Shared state for the reader page.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct ReaderStore {
    /// Presentation currently applied to the article.
    pub applied: ArticleState,
    /// Number of reports received from the settings panel.
    pub reports: u64,
}

/// Record a state reported by the settings panel.
pub fn record_report(store: &mut ReaderStore, state: ArticleState) {
    store.applied = state;
    store.reports = store.reports.saturating_add(1);
}
