//! sonar::types
//!
//! Wire types decoded from the `api/issues/search` response.
//!
//! Only the fields the report needs are read; everything else in the
//! response is ignored during decode.

use serde::{Deserialize, Serialize};

/// One open issue reported by the server.
///
/// Immutable once decoded. The `component` field is the server's term for
/// the fully-qualified path of the file the issue belongs to, and is the
/// grouping key for the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Opaque unique identifier; informational only.
    pub key: String,
    /// Identifier of the violated rule.
    pub rule: String,
    /// Category (BUG, VULNERABILITY, CODE_SMELL, SECURITY_HOTSPOT).
    /// Server-defined set, not validated locally.
    #[serde(rename = "type")]
    pub issue_type: String,
    /// Fully-qualified path of the file the issue belongs to.
    pub component: String,
    /// Line number within the file. Absent for file-level issues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

/// One page of the issue-search response.
///
/// `total` is the count for the whole query, not the current page, and is
/// stable across all pages of one query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuePage {
    /// Total number of issues matching the query.
    #[serde(default)]
    pub total: u64,
    /// Issues on this page, in server order.
    #[serde(default)]
    pub issues: Vec<Issue>,
}
