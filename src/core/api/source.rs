//! The data-access seam consumed by the view controllers.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use super::envelope::Envelope;
use super::error::TransportError;
use crate::domains::resources::{Resource, ResourceId};

/// Parameters of one list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
}

impl ListQuery {
    /// Create a list query.
    pub fn new(page: u32, page_size: u32, search: impl Into<String>) -> Self {
        Self {
            page,
            page_size,
            search: search.into(),
        }
    }

    /// The same query with the search term dropped.
    pub fn without_search(mut self) -> Self {
        self.search.clear();
        self
    }

    /// Encode as a URL query string (`page=1&page_size=10&search=...`).
    pub fn to_query_string(&self) -> Result<String, TransportError> {
        serde_urlencoded::to_string(self).map_err(|e| TransportError::invalid_url(e.to_string()))
    }
}

/// Remote collection of one resource type.
///
/// `Err` is reserved for transport failures; a failure the server reports
/// comes back as an `Ok` envelope with `ok: false`.
#[async_trait]
pub trait DataSource: Send + Sync + 'static {
    /// Record type served by this source.
    type Item: Resource;

    /// Fetch one page of the collection.
    async fn list(&self, query: &ListQuery) -> Result<Envelope<Vec<Self::Item>>, TransportError>;

    /// Fetch a single record.
    async fn get(&self, id: ResourceId) -> Result<Envelope<Self::Item>, TransportError>;

    /// Delete a single record.
    async fn remove(&self, id: ResourceId) -> Result<Envelope<()>, TransportError>;
}

#[async_trait]
impl<S> DataSource for Arc<S>
where
    S: DataSource + ?Sized,
{
    type Item = S::Item;

    async fn list(&self, query: &ListQuery) -> Result<Envelope<Vec<Self::Item>>, TransportError> {
        (**self).list(query).await
    }

    async fn get(&self, id: ResourceId) -> Result<Envelope<Self::Item>, TransportError> {
        (**self).get(id).await
    }

    async fn remove(&self, id: ResourceId) -> Result<Envelope<()>, TransportError> {
        (**self).remove(id).await
    }
}
