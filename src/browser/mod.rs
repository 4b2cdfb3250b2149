pub mod chrome;
pub mod session;

#[cfg(test)]
pub mod fake;

use std::time::Duration;

use crate::model::{ElementError, ListingHandle, PageError};

/// The one surface the pipeline touches on the browser. Everything runs
/// against the single open tab; calls are made strictly one at a time.
#[async_trait::async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigates the tab and waits for the page to arrive.
    async fn goto(&self, url: &str, timeout: Duration) -> Result<(), PageError>;

    /// Bounded wait for a selector. Absence is `false`, never an error.
    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> bool;

    /// Snapshot of the elements currently matching `selector`, in
    /// document order. Handles go stale once the page mutates.
    async fn find_handles(&self, selector: &str) -> Result<Vec<ListingHandle>, ElementError>;

    /// Scrolls the element into view and clicks it.
    async fn click(&self, handle: ListingHandle) -> Result<(), ElementError>;

    /// Inner text of the first descendant matching `selector`, or `None`
    /// when nothing matches.
    async fn read_child_text(
        &self,
        handle: ListingHandle,
        selector: &str,
    ) -> Result<Option<String>, ElementError>;

    /// Full visible text of the element itself.
    async fn read_full_text(&self, handle: ListingHandle) -> Result<String, ElementError>;

    /// Current document source, for debug dumps.
    async fn page_html(&self) -> Result<String, ElementError>;
}
