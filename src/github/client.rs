//! GitHub issues endpoint client.
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use urlencoding::encode;

use super::issue::{CreatedIssue, IssueRequest, NewIssue};
use super::{GITHUB_ACCEPT, GITHUB_API_HEADER, GITHUB_API_ROOT, GITHUB_API_VERSION};
use crate::errors::IssueFilerError;

/// Client for the issues endpoint of one GitHub repository.
#[derive(Debug, Clone)]
pub struct GithubClient {
    /// Repository owner
    owner: String,

    /// Repository name
    repo: String,

    /// API root, overridable for tests
    api_root: String,

    /// Reqwest client
    client: reqwest::Client,
}

impl GithubClient {
    /// Create a new client for `owner/repo`.
    pub fn new(owner: String, repo: String) -> Self {
        Self {
            owner,
            repo,
            api_root: GITHUB_API_ROOT.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Point the client at a different API root.
    pub fn with_api_root(mut self, api_root: &str) -> Self {
        self.api_root = api_root.trim_end_matches('/').to_string();
        self
    }

    /// Issues endpoint URL for the configured repository.
    fn issues_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.api_root,
            encode(&self.owner),
            encode(&self.repo)
        )
    }

    /// Create one issue with the given bearer token.
    ///
    /// Sends exactly one POST; a 201 yields the created issue's number and
    /// link, any other status is an error carrying the status line. A
    /// repeated call files a duplicate issue.
    /// # Errors
    /// Error on transport failure, non-201 status, or a malformed response.
    pub async fn create_issue(
        &self,
        request: &IssueRequest,
        token: &str,
    ) -> Result<CreatedIssue, IssueFilerError> {
        let url = self.issues_url();
        log::debug!("posting issue to {url}");
        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, "reqwest")
            .header(GITHUB_API_HEADER, GITHUB_API_VERSION)
            .json(&NewIssue::from(request))
            .send()
            .await?;
        if response.status() != StatusCode::CREATED {
            return Err(IssueFilerError::from_status(response.status()));
        }
        let text = response.text().await?;
        let created: CreatedIssue = serde_json::from_str(&text)?;
        Ok(created)
    }
}
