//! sonar::mock
//!
//! In-memory [`IssueSource`] for deterministic testing.
//!
//! # Design
//!
//! The mock serves a fixed sequence of pages, records every page number it
//! is asked for, and can be configured to fail on a specific page to
//! exercise error paths.
//!
//! # Example
//!
//! ```
//! use sonar_extract::sonar::mock::MockIssueSource;
//! use sonar_extract::sonar::{fetch_all_issues, IssuePage};
//!
//! # tokio_test::block_on(async {
//! let source = MockIssueSource::new(vec![IssuePage { total: 0, issues: vec![] }]);
//!
//! let issues = fetch_all_issues(&source).await.unwrap();
//!
//! assert!(issues.is_empty());
//! assert_eq!(source.fetched_pages(), vec![1]);
//! # });
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::source::{IssueSource, SonarError};
use super::types::IssuePage;

/// Mock issue source for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone)]
pub struct MockIssueSource {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockInner>>,
}

/// Internal mutable state.
#[derive(Debug)]
struct MockInner {
    /// Pages served in order; page `n` is `pages[n - 1]`.
    pages: Vec<IssuePage>,
    /// Page number to fail on, with the error to return.
    fail_on: Option<(u64, SonarError)>,
    /// Recorded page numbers, in request order.
    fetched: Vec<u64>,
}

impl MockIssueSource {
    /// Create a mock serving the given pages.
    pub fn new(pages: Vec<IssuePage>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockInner {
                pages,
                fail_on: None,
                fetched: Vec::new(),
            })),
        }
    }

    /// Configure the fetch of `page` to fail with `error`.
    pub fn fail_on(&self, page: u64, error: SonarError) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_on = Some((page, error));
    }

    /// Page numbers requested so far, in order.
    pub fn fetched_pages(&self) -> Vec<u64> {
        self.inner.lock().unwrap().fetched.clone()
    }
}

#[async_trait]
impl IssueSource for MockIssueSource {
    async fn fetch_page(&self, page: u64) -> Result<IssuePage, SonarError> {
        let mut inner = self.inner.lock().unwrap();
        inner.fetched.push(page);

        if let Some((fail_page, error)) = &inner.fail_on {
            if *fail_page == page {
                return Err(error.clone());
            }
        }

        // Pages are 1-based; anything out of range serves an empty page.
        Ok((page as usize)
            .checked_sub(1)
            .and_then(|index| inner.pages.get(index))
            .cloned()
            .unwrap_or_default())
    }
}
