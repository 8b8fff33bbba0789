//! sonar-extract - a CLI for extracting open SonarQube issues into a flat
//! text report.
//!
//! The tool authenticates against a SonarQube or SonarCloud server, pages
//! through the `api/issues/search` endpoint until every open issue for a
//! project has been retrieved, groups the issues by source file, and writes
//! them to `extract.txt` in the working directory.
//!
//! # Architecture
//!
//! The pipeline is strictly linear: fetch → aggregate → serialize.
//!
//! - [`cli`] - Command-line interface layer (parses args, drives the pipeline)
//! - [`sonar`] - SonarQube web API client, pagination, and wire types
//! - [`report`] - Grouping by file and text report serialization
//!
//! # Correctness Invariants
//!
//! 1. Pages are fetched sequentially, in strictly ascending order from 1
//! 2. Aggregation preserves server order (page order, then in-page order)
//! 3. Any fetch or decode failure aborts the run; no partial report is written
//! 4. Business logic never terminates the process; errors propagate to `main`

pub mod cli;
pub mod report;
pub mod sonar;
