//! The uniform response wrapper returned by every API call.

use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};

/// Success/failure wrapper around every API payload.
///
/// On the wire:
///
/// ```json
/// { "ok": true, "data": [...], "pagination": { "total_count": 2, "total_pages": 1 } }
/// { "ok": false, "message": "not found" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the server considers the call successful.
    pub ok: bool,

    /// The payload, when the call returns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Human-readable message from the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Paging metadata attached to list responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,

    /// Field-level validation errors, as sent by the backend on rejected writes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

/// Paging metadata of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total_count: u64,
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
}

/// One page of a resource collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub total_pages: u32,
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            total_pages: 0,
        }
    }
}

impl<T> Envelope<T> {
    /// A successful envelope carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            message: None,
            pagination: None,
            errors: None,
        }
    }

    /// A successful envelope with only a message (delete acknowledgements).
    pub fn acknowledged(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            data: None,
            message: Some(message.into()),
            pagination: None,
            errors: None,
        }
    }

    /// A failed envelope with an optional server message.
    pub fn failure(message: Option<String>) -> Self {
        Self {
            ok: false,
            data: None,
            message,
            pagination: None,
            errors: None,
        }
    }

    /// Attach paging metadata.
    pub fn with_pagination(mut self, total_count: u64, total_pages: u32) -> Self {
        self.pagination = Some(Pagination {
            total_count,
            total_pages,
            page_size: None,
            current_page: None,
        });
        self
    }

    /// Convert a failed envelope into [`ApiError::Reported`].
    pub fn into_result(self) -> ApiResult<Self> {
        if self.ok {
            Ok(self)
        } else {
            Err(ApiError::reported(self.message))
        }
    }

    /// The payload of a successful envelope (which may legitimately be absent).
    pub fn into_data(self) -> ApiResult<Option<T>> {
        self.into_result().map(|envelope| envelope.data)
    }

    /// The server message of a successful acknowledgement.
    pub fn into_ack(self) -> ApiResult<Option<String>> {
        self.into_result().map(|envelope| envelope.message)
    }
}

impl<T> Envelope<Vec<T>> {
    /// Turn a list envelope into a [`PageResult`].
    ///
    /// A list served without pagination is treated as a single page holding
    /// everything.
    pub fn into_page(self) -> ApiResult<PageResult<T>> {
        let envelope = self.into_result()?;
        let items = envelope.data.unwrap_or_default();

        let (total_count, total_pages) = match envelope.pagination {
            Some(pagination) => (pagination.total_count, pagination.total_pages),
            None => (items.len() as u64, u32::from(!items.is_empty())),
        };

        Ok(PageResult {
            items,
            total_count,
            total_pages,
        })
    }
}
