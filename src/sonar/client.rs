//! sonar::client
//!
//! HTTP implementation of [`IssueSource`] against the SonarQube web API.
//!
//! # Authentication
//!
//! SonarQube user tokens are sent as the HTTP Basic username with an empty
//! password. The credential is attached preemptively: it goes out with the
//! first request rather than waiting for a 401 challenge.
//!
//! # URL handling
//!
//! The API path is appended to the configured base URL verbatim. No
//! trailing-slash normalization is performed, so the base URL must end
//! with `/`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::source::{IssueSource, SonarError, PAGE_SIZE};
use super::types::IssuePage;

/// Issue-search endpoint, relative to the server base URL.
const API_ISSUES_SEARCH: &str = "api/issues/search";

/// Issue categories included in the query.
const ISSUE_TYPES: &str = "BUG,VULNERABILITY,CODE_SMELL,SECURITY_HOTSPOT";

/// SonarQube web API client for one project.
pub struct SonarClient {
    /// HTTP client for making requests.
    client: Client,
    /// Server base URL, ending with `/`.
    base_url: String,
    /// User token, used as the Basic-auth principal.
    token: String,
    /// Key of the project to query.
    project_key: String,
}

// Custom Debug to avoid exposing the token.
impl std::fmt::Debug for SonarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SonarClient")
            .field("base_url", &self.base_url)
            .field("project_key", &self.project_key)
            .finish()
    }
}

impl SonarClient {
    /// Create a client for the given server, token, and project.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        project_key: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token: token.into(),
            project_key: project_key.into(),
        }
    }

    /// Full URL of the issue-search endpoint.
    fn search_url(&self) -> String {
        format!("{}{}", self.base_url, API_ISSUES_SEARCH)
    }
}

#[async_trait]
impl IssueSource for SonarClient {
    async fn fetch_page(&self, page: u64) -> Result<IssuePage, SonarError> {
        let page_param = page.to_string();
        let page_size_param = PAGE_SIZE.to_string();

        let response = self
            .client
            .get(self.search_url())
            .basic_auth(&self.token, Some(""))
            .query(&[
                ("componentKeys", self.project_key.as_str()),
                ("statuses", "OPEN"),
                ("types", ISSUE_TYPES),
                ("p", page_param.as_str()),
                ("ps", page_size_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SonarError::Network(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            log::warn!("status code: {}", status.as_u16());
            return Err(SonarError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SonarError::Network(e.to_string()))?;
        log::debug!("{}", body);

        serde_json::from_str(&body).map_err(|e| SonarError::Decode(e.to_string()))
    }
}
