use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::github_transport_helpers::{parse_api_base, truncate_for_error};
use crate::issue_tracker::{CreatedIssue, GithubIssuesError, IssueSummary, IssueTracker};

/// GitHub REST client bound to one owner account.
///
/// Each operation is exactly one request. Listing reads only the first page.
#[derive(Clone)]
pub struct GithubApiClient {
    http: reqwest::Client,
    api_base: reqwest::Url,
    owner: String,
}

impl GithubApiClient {
    pub fn new(api_base: &str, token: &str, owner: &str) -> Result<Self> {
        let api_base = parse_api_base(api_base)
            .ok_or_else(|| anyhow!("invalid github api base '{}'", api_base.trim()))?;
        let owner = owner.trim();
        if owner.is_empty() {
            bail!("github owner cannot be empty");
        }

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("gdbot"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            reqwest::header::HeaderValue::from_static("2022-11-28"),
        );
        let auth_header = format!("Bearer {}", token.trim());
        let mut auth_value = reqwest::header::HeaderValue::from_str(&auth_header)
            .context("invalid github authorization header")?;
        auth_value.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth_value);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to create github api client")?;
        Ok(Self {
            http,
            api_base,
            owner: owner.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    fn repo_issues_url(&self, repo: &str) -> Result<reqwest::Url, GithubIssuesError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| GithubIssuesError::InvalidApiBase(self.api_base.to_string()))?
            .pop_if_empty()
            .extend(["repos", self.owner.as_str(), repo, "issues"]);
        Ok(url)
    }

    async fn request_json<T>(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, GithubIssuesError>
    where
        T: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|source| GithubIssuesError::Transport { operation, source })?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GithubIssuesError::HttpStatus {
                operation,
                status: status.as_u16(),
                body: truncate_for_error(&body, 800),
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|source| GithubIssuesError::Decode { operation, source })
    }
}

#[async_trait]
impl IssueTracker for GithubApiClient {
    async fn create_issue(
        &self,
        repo: &str,
        title: &str,
        body: &str,
    ) -> Result<CreatedIssue, GithubIssuesError> {
        let url = self.repo_issues_url(repo)?;
        let payload = json!({ "title": title, "body": body });
        self.request_json("create issue", self.http.post(url).json(&payload))
            .await
    }

    async fn list_issues(&self, repo: &str) -> Result<Vec<IssueSummary>, GithubIssuesError> {
        let url = self.repo_issues_url(repo)?;
        self.request_json("list issues", self.http.get(url)).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::GithubApiClient;
    use crate::issue_tracker::{GithubIssuesError, IssueTracker};

    fn test_client(base_url: &str) -> GithubApiClient {
        GithubApiClient::new(base_url, "test-token", "octo").expect("client")
    }

    #[test]
    fn unit_new_rejects_invalid_api_base_and_blank_owner() {
        assert!(GithubApiClient::new("not a url", "token", "octo").is_err());
        assert!(GithubApiClient::new("https://api.github.com", "token", "  ").is_err());
        let client =
            GithubApiClient::new("https://api.github.com", "token", " octo ").expect("client");
        assert_eq!(client.owner(), "octo");
    }

    #[tokio::test]
    async fn functional_create_issue_posts_title_and_body_for_owner_repo() {
        let server = MockServer::start();
        let create = server.mock(|when, then| {
            when.method(POST)
                .path("/repos/octo/demo-repo/issues")
                .header("authorization", "Bearer test-token")
                .header("accept", "application/vnd.github+json")
                .json_body(json!({
                    "title": "Fix",
                    "body": "Issue created using gdbot!"
                }));
            then.status(201).json_body(json!({
                "number": 1,
                "title": "Fix",
                "html_url": "https://github.com/octo/demo-repo/issues/1"
            }));
        });

        let issue = test_client(&server.base_url())
            .create_issue("demo-repo", "Fix", "Issue created using gdbot!")
            .await
            .expect("create issue");
        assert_eq!(issue.html_url, "https://github.com/octo/demo-repo/issues/1");
        create.assert_calls(1);
    }

    #[tokio::test]
    async fn functional_list_issues_returns_urls_in_response_order() {
        let server = MockServer::start();
        let list = server.mock(|when, then| {
            when.method(GET).path("/repos/octo/api/issues");
            then.status(200).json_body(json!([
                {"number": 7, "title": "b", "html_url": "https://github.com/octo/api/issues/7"},
                {"number": 3, "title": "a", "html_url": "https://github.com/octo/api/issues/3"}
            ]));
        });

        let issues = test_client(&server.base_url())
            .list_issues("api")
            .await
            .expect("list issues");
        let urls = issues
            .iter()
            .map(|issue| issue.html_url.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            urls,
            vec![
                "https://github.com/octo/api/issues/7",
                "https://github.com/octo/api/issues/3"
            ]
        );
        list.assert_calls(1);
    }

    #[tokio::test]
    async fn integration_api_base_with_path_prefix_is_preserved() {
        let server = MockServer::start();
        let list = server.mock(|when, then| {
            when.method(GET).path("/api/v3/repos/octo/api/issues");
            then.status(200).json_body(json!([]));
        });

        let client = test_client(&format!("{}/api/v3/", server.base_url()));
        let issues = client.list_issues("api").await.expect("list issues");
        assert!(issues.is_empty());
        list.assert_calls(1);
    }

    #[tokio::test]
    async fn regression_non_success_status_is_reported_without_retry() {
        let server = MockServer::start();
        let create = server.mock(|when, then| {
            when.method(POST).path("/repos/octo/missing/issues");
            then.status(404).body("{\"message\":\"Not Found\"}");
        });

        let error = test_client(&server.base_url())
            .create_issue("missing", "Fix", "body")
            .await
            .expect_err("404 should fail");
        match &error {
            GithubIssuesError::HttpStatus {
                operation, status, ..
            } => {
                assert_eq!(*operation, "create issue");
                assert_eq!(*status, 404);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(error.to_string().contains("Not Found"));
        create.assert_calls(1);
    }

    #[tokio::test]
    async fn regression_server_errors_are_not_retried() {
        let server = MockServer::start();
        let list = server.mock(|when, then| {
            when.method(GET).path("/repos/octo/api/issues");
            then.status(503).body("unavailable");
        });

        let error = test_client(&server.base_url())
            .list_issues("api")
            .await
            .expect_err("503 should fail");
        assert!(matches!(
            error,
            GithubIssuesError::HttpStatus { status: 503, .. }
        ));
        list.assert_calls(1);
    }

    #[tokio::test]
    async fn regression_malformed_success_body_is_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/repos/octo/api/issues");
            then.status(200).body("not json");
        });

        let error = test_client(&server.base_url())
            .list_issues("api")
            .await
            .expect_err("decode failure");
        assert!(matches!(
            error,
            GithubIssuesError::Decode {
                operation: "list issues",
                ..
            }
        ));
    }
}
