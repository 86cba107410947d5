use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
/// Issue returned by a create call. Only the browser URL reaches replies.
pub struct CreatedIssue {
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
/// One entry of a repository issue listing.
pub struct IssueSummary {
    pub html_url: String,
}

#[derive(Debug, Error)]
/// Enumerates supported `GithubIssuesError` values.
pub enum GithubIssuesError {
    #[error("invalid github api base '{0}'")]
    InvalidApiBase(String),
    #[error("github api {operation} request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("github api {operation} failed with status {status}: {body}")]
    HttpStatus {
        operation: &'static str,
        status: u16,
        body: String,
    },
    #[error("failed to decode github {operation}: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

#[async_trait]
/// Trait contract for `IssueTracker` behavior.
///
/// Implementations issue exactly one request per call and never retry.
pub trait IssueTracker: Send + Sync {
    async fn create_issue(
        &self,
        repo: &str,
        title: &str,
        body: &str,
    ) -> Result<CreatedIssue, GithubIssuesError>;

    async fn list_issues(&self, repo: &str) -> Result<Vec<IssueSummary>, GithubIssuesError>;
}
