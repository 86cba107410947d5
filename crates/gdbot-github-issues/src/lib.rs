//! GitHub side of gdbot.
//! Hosts the `IssueTracker` seam, its reqwest-backed GitHub implementation,
//! and the adapter that turns one parsed command into one call and one reply.

pub mod github_api_client;
pub mod github_transport_helpers;
pub mod issue_adapter;
pub mod issue_render;
pub mod issue_tracker;

pub use github_api_client::GithubApiClient;
pub use issue_adapter::execute_issue_command;
pub use issue_render::{
    render_issue_created_reply, render_issue_list_reply, render_missing_parameter_reply,
    ISSUE_LIST_EMPTY_LINE, ISSUE_LIST_HEADER,
};
pub use issue_tracker::{CreatedIssue, GithubIssuesError, IssueSummary, IssueTracker};
