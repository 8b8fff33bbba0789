//! sonar
//!
//! SonarQube web API client, pagination, and wire types.
//!
//! # Architecture
//!
//! The [`IssueSource`] trait is the seam between pagination logic and the
//! network: [`SonarClient`] implements it over HTTP, and [`mock`] provides a
//! deterministic in-memory implementation for tests. The pagination
//! controller ([`fetch_all_issues`]) only ever sees the trait.
//!
//! # Modules
//!
//! - `types`: Wire types decoded from the issue-search response
//! - `source`: The `IssueSource` trait, error type, and server ceilings
//! - [`client`]: HTTP implementation backed by reqwest
//! - [`paging`]: Pagination controller and aggregation
//! - [`mock`]: In-memory implementation for deterministic testing

pub mod client;
pub mod mock;
pub mod paging;
pub mod source;
pub mod types;

pub use client::SonarClient;
pub use paging::fetch_all_issues;
pub use source::{IssueSource, SonarError, MAX_TOTAL_RESULTS, PAGE_SIZE};
pub use types::{Issue, IssuePage};
