//! sonar::paging
//!
//! Pagination controller: drives an [`IssueSource`] until every page of the
//! query has been retrieved, and aggregates the issues in server order.
//!
//! # Design
//!
//! Pages are fetched sequentially, in strictly ascending order starting at
//! 1. Sequential fetching is a deliberate simplicity/ordering tradeoff, not
//! a performance requirement: it makes the aggregate order identical to
//! what a single unpaginated fetch would have produced.

use super::source::{IssueSource, SonarError, MAX_TOTAL_RESULTS, PAGE_SIZE};
use super::types::Issue;

/// Fetch every open issue for the configured project.
///
/// Reads `total` from page 1, verifies it against the server's result
/// ceiling, and fetches the remaining `ceil(total / 500)` pages in order.
/// A `total` of 0 yields an empty aggregate.
///
/// # Errors
///
/// - `ResultCeiling` if `total` exceeds the 10,000-result ceiling; no
///   further pages are fetched
/// - Any [`SonarError`] from a page fetch aborts the whole run; there is
///   no partial result
pub async fn fetch_all_issues<S: IssueSource + ?Sized>(
    source: &S,
) -> Result<Vec<Issue>, SonarError> {
    log::info!("gathering issues: started");

    let first = source.fetch_page(1).await?;
    let total = first.total;
    log::info!("total issues: {}", total);

    if total > MAX_TOTAL_RESULTS {
        log::error!(
            "the server can only return the first {} results via the web API",
            MAX_TOTAL_RESULTS
        );
        return Err(SonarError::ResultCeiling { total });
    }

    let mut issues = first.issues;

    if total > PAGE_SIZE {
        let pages = total.div_ceil(PAGE_SIZE);
        log::info!("total pages: {}", pages);

        for page in 2..=pages {
            log::info!("searching for issues on page {}", page);
            let mut next = source.fetch_page(page).await?;
            issues.append(&mut next.issues);
            log::info!("issues fetched so far: {}", issues.len());
        }
    }

    log::info!("gathering issues: done ({} issues)", issues.len());
    Ok(issues)
}
