use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use gdbot_commands::{parse_legacy_message, parse_slash_command, SlashCommandInvocation};
use gdbot_github_issues::{
    execute_issue_command, CreatedIssue, GithubApiClient, GithubIssuesError, IssueSummary,
    IssueTracker, ISSUE_LIST_HEADER,
};
use httpmock::prelude::*;
use serde_json::json;

/// Counts calls and fails every one of them, standing in for an unreachable API.
#[derive(Default)]
struct CountingTracker {
    calls: AtomicUsize,
}

#[async_trait]
impl IssueTracker for CountingTracker {
    async fn create_issue(
        &self,
        _repo: &str,
        _title: &str,
        _body: &str,
    ) -> Result<CreatedIssue, GithubIssuesError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(GithubIssuesError::HttpStatus {
            operation: "create issue",
            status: 502,
            body: "bad gateway".to_string(),
        })
    }

    async fn list_issues(&self, _repo: &str) -> Result<Vec<IssueSummary>, GithubIssuesError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(GithubIssuesError::HttpStatus {
            operation: "list issues",
            status: 502,
            body: "bad gateway".to_string(),
        })
    }
}

fn github_client(server: &MockServer) -> GithubApiClient {
    GithubApiClient::new(&server.base_url(), "ghp-test", "x").expect("github client")
}

#[tokio::test]
async fn integration_legacy_message_creates_issue_and_replies_with_first_title_word() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/repos/x/demo-repo/issues")
            .header("authorization", "Bearer ghp-test")
            .json_body(json!({
                "title": "Fix",
                "body": "Issue created using gdbot!"
            }));
        then.status(201).json_body(json!({
            "number": 1,
            "title": "Fix",
            "html_url": "https://github.com/x/demo-repo/issues/1"
        }));
    });
    let client = github_client(&server);

    let command = parse_legacy_message("!gdbot demo-repo Fix bug", false).expect("command");
    let reply = execute_issue_command(&client, &command)
        .await
        .expect("reply");

    assert!(reply.contains("Issue created in demo-repo repository with title Fix"));
    assert!(reply.contains("https://github.com/x/demo-repo/issues/1"));
    create.assert_calls(1);
}

#[tokio::test]
async fn integration_slash_get_lists_every_issue_url_in_order() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/repos/x/api/issues");
        then.status(200).json_body(json!([
            {"number": 2, "title": "second", "html_url": "https://github.com/x/api/issues/2"},
            {"number": 1, "title": "first", "html_url": "https://github.com/x/api/issues/1"}
        ]));
    });
    let client = github_client(&server);

    let invocation = SlashCommandInvocation::new("issue")
        .with_subcommand("get")
        .with_option("project", "api");
    let command = parse_slash_command(&invocation).expect("command");
    let reply = execute_issue_command(&client, &command)
        .await
        .expect("reply");

    assert_eq!(
        reply.lines().collect::<Vec<_>>(),
        vec![
            ISSUE_LIST_HEADER,
            "https://github.com/x/api/issues/2",
            "https://github.com/x/api/issues/1"
        ]
    );
    list.assert_calls(1);
}

#[tokio::test]
async fn integration_slash_create_failure_produces_no_reply() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST).path("/repos/x/private-repo/issues");
        then.status(401).json_body(json!({"message": "Bad credentials"}));
    });
    let client = github_client(&server);

    let invocation = SlashCommandInvocation::new("issue")
        .with_subcommand("create")
        .with_option("project", "private-repo")
        .with_option("title", "Crash")
        .with_option("description", "details");
    let command = parse_slash_command(&invocation).expect("command");

    assert_eq!(execute_issue_command(&client, &command).await, None);
    create.assert_calls(1);
}

#[tokio::test]
async fn integration_ignored_messages_never_reach_the_tracker() {
    let tracker = CountingTracker::default();
    let ignored = [
        ("hello there", false),
        ("!gdbot demo-repo Fix", true),
        ("!unknown demo-repo Fix", false),
        ("gdbot demo-repo Fix", false),
    ];

    for (content, author_is_bot) in ignored {
        if let Some(command) = parse_legacy_message(content, author_is_bot) {
            execute_issue_command(&tracker, &command).await;
        }
    }

    assert_eq!(tracker.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn regression_each_command_makes_exactly_one_call_even_when_it_fails() {
    let tracker = CountingTracker::default();

    let create = parse_legacy_message("!gdbot demo-repo Fix", false).expect("command");
    assert_eq!(execute_issue_command(&tracker, &create).await, None);

    let list = parse_slash_command(
        &SlashCommandInvocation::new("issue")
            .with_subcommand("get")
            .with_option("project", "demo-repo"),
    )
    .expect("command");
    assert_eq!(execute_issue_command(&tracker, &list).await, None);

    assert_eq!(tracker.calls.load(Ordering::SeqCst), 2);
}
