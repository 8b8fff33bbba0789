//! sonar::source
//!
//! The `IssueSource` trait and the error type for fetch operations.
//!
//! # Design
//!
//! The trait is async because fetching involves network I/O. Pagination
//! logic depends only on this trait, so it can be exercised against the
//! in-memory [`mock`] implementation without a server.
//!
//! [`mock`]: crate::sonar::mock

use async_trait::async_trait;
use thiserror::Error;

use super::types::IssuePage;

/// Maximum number of items the server returns per page.
///
/// This is a hard server-side limit; larger result sets must be fetched in
/// blocks of this size.
pub const PAGE_SIZE: u64 = 500;

/// Maximum number of results the server will return for one query, across
/// all pages. There is no pagination workaround beyond this ceiling.
pub const MAX_TOTAL_RESULTS: u64 = 10_000;

/// Errors from fetching issues.
#[derive(Debug, Clone, Error)]
pub enum SonarError {
    /// The server answered with a non-200 status. Not retryable.
    #[error("unexpected HTTP status: {0}")]
    Status(u16),

    /// The query matches more results than the web API can return.
    #[error("server reported {total} issues; the web API returns at most 10000 results")]
    ResultCeiling {
        /// Total reported by the server for the whole query.
        total: u64,
    },

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(String),
}

/// A paginated source of issues.
///
/// `fetch_page` retrieves one page of open issues for the configured
/// project. Pages are 1-based.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Fetch one page of issues.
    ///
    /// # Errors
    ///
    /// - `Status` if the server answers with a non-200 status
    /// - `Decode` if the response body is not a valid issue page
    /// - `Network` on transport failure
    async fn fetch_page(&self, page: u64) -> Result<IssuePage, SonarError>;
}
