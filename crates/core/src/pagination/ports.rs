//! Port interfaces for paged fetching

use async_trait::async_trait;
use searchads_domain::{PageInfo, Selector};

/// One page of decoded results
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Server pagination metadata, when reported
    pub page_info: Option<PageInfo>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page_info: Option<PageInfo>) -> Self {
        Self { items, page_info }
    }
}

/// Fetches a single page for a selector
///
/// Implemented by the HTTP layer for each find endpoint, and by fakes in
/// tests.
#[async_trait]
pub trait PageSource<T: Send>: Send + Sync {
    type Error: Send;

    /// Fetch the page addressed by `selector.pagination`
    async fn fetch_page(&self, selector: &Selector) -> Result<Page<T>, Self::Error>;
}
