//! Per-browser state and the snapshot handed to the host.

use serde::Serialize;

use super::query::{PageSize, Query};
use crate::core::api::PageResult;
use crate::domains::resources::Resource;

/// A record staged for deletion and the confirmation prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDeletion<T> {
    pub target: Option<T>,
    pub dialog_open: bool,
}

impl<T> PendingDeletion<T> {
    pub fn stage(&mut self, target: T) {
        self.target = Some(target);
        self.dialog_open = true;
    }

    pub fn clear(&mut self) {
        self.target = None;
        self.dialog_open = false;
    }
}

impl<T> Default for PendingDeletion<T> {
    fn default() -> Self {
        Self {
            target: None,
            dialog_open: false,
        }
    }
}

/// Everything a browser owns, guarded by a single lock.
#[derive(Debug)]
pub(crate) struct BrowserState<T> {
    pub query: Query,
    pub result: PageResult<T>,
    pub in_flight: usize,
    pub deletion: PendingDeletion<T>,
}

impl<T: Resource> BrowserState<T> {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            query: Query::new(page_size),
            result: PageResult::default(),
            in_flight: 0,
            deletion: PendingDeletion::default(),
        }
    }

    /// Copy out what the host renders. `filter_locally` narrows the loaded
    /// page by the committed search term.
    pub fn snapshot(&self, filter_locally: bool) -> BrowserSnapshot<T> {
        let needle = self.query.debounced_search_term().trim().to_lowercase();
        let items = if filter_locally && !needle.is_empty() {
            self.result
                .items
                .iter()
                .filter(|item| item.matches(&needle))
                .cloned()
                .collect()
        } else {
            self.result.items.clone()
        };

        BrowserSnapshot {
            items,
            loading: self.in_flight > 0,
            total_items: self.result.total_count,
            total_pages: self.result.total_pages,
            page: self.query.page(),
            page_size: self.query.page_size(),
            search_term: self.query.search_term().to_string(),
            debounced_search_term: self.query.debounced_search_term().to_string(),
            pending_deletion: self.deletion.target.clone(),
            delete_dialog_open: self.deletion.dialog_open,
            pager_visible: self.result.total_pages > 1,
        }
    }
}

/// Read-only view of a browser at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowserSnapshot<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub total_items: u64,
    pub total_pages: u32,
    pub page: u32,
    pub page_size: PageSize,
    pub search_term: String,
    pub debounced_search_term: String,
    pub pending_deletion: Option<T>,
    pub delete_dialog_open: bool,
    pub pager_visible: bool,
}
