//! Data-access layer for the console.
//!
//! Every call to the remote API answers with the same [`Envelope`]; this
//! module defines that envelope, the [`DataSource`] seam the view
//! controllers consume, and the error types that separate reported
//! failures from transport failures.
//!
//! # Feature Flags
//!
//! - `http` (default): [`HttpDataSource`], a `reqwest` implementation of
//!   [`DataSource`] against the REST backend.

mod envelope;
mod error;
mod source;

#[cfg(feature = "http")]
pub mod http;

pub use envelope::{Envelope, PageResult, Pagination};
pub use error::{ApiError, ApiResult, TransportError};
pub use source::{DataSource, ListQuery};

#[cfg(feature = "http")]
pub use http::HttpDataSource;
