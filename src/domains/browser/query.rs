//! The list query owned by one browser.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::BrowserError;
use crate::core::api::ListQuery;

/// Page sizes offered by the pager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Fifty,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [Self::Ten, Self::Twenty, Self::Fifty];

    pub fn get(self) -> u32 {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = BrowserError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(BrowserError::InvalidPageSize(value))
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl FromStr for PageSize {
    type Err = BrowserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| BrowserError::UnparsablePageSize(s.to_string()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Paging and search state.
///
/// `search_term` follows every keystroke; `debounced_search_term` is what
/// the list is actually filtered by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    page: u32,
    page_size: PageSize,
    search_term: String,
    debounced_search_term: String,
}

impl Query {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page: 1,
            page_size,
            search_term: String::new(),
            debounced_search_term: String::new(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn debounced_search_term(&self) -> &str {
        &self.debounced_search_term
    }

    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
    }

    /// Commit the current search term and go back to the first page.
    ///
    /// Returns whether the committed query changed.
    pub fn commit_search(&mut self) -> bool {
        let changed = self.debounced_search_term != self.search_term || self.page != 1;
        self.debounced_search_term.clone_from(&self.search_term);
        self.page = 1;
        changed
    }

    /// Jump to `page`. Zero is treated as the first page.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        let changed = self.page != page;
        self.page = page;
        changed
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&mut self, page_size: PageSize) -> bool {
        let changed = self.page_size != page_size || self.page != 1;
        self.page_size = page_size;
        self.page = 1;
        changed
    }

    /// The committed query as sent to the data source.
    pub fn to_list_query(&self) -> ListQuery {
        ListQuery::new(self.page, self.page_size.get(), self.debounced_search_term.clone())
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}
