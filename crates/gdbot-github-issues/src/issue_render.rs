use gdbot_commands::CommandValidationError;

use crate::issue_tracker::IssueSummary;

pub const ISSUE_LIST_HEADER: &str = "Here are the issues in the repository:";
pub const ISSUE_LIST_EMPTY_LINE: &str = "No issues found.";

pub fn render_issue_created_reply(project: &str, title: &str, url: &str) -> String {
    format!("Issue created in {project} repository with title {title}\nIssue URL: {url}")
}

pub fn render_issue_list_reply(issues: &[IssueSummary]) -> String {
    let mut lines = vec![ISSUE_LIST_HEADER.to_string()];
    if issues.is_empty() {
        lines.push(ISSUE_LIST_EMPTY_LINE.to_string());
    }
    lines.extend(issues.iter().map(|issue| issue.html_url.clone()));
    lines.join("\n")
}

pub fn render_missing_parameter_reply(error: &CommandValidationError, usage: &str) -> String {
    match error {
        CommandValidationError::MissingParameter { parameter } => {
            format!("Missing required parameter `{parameter}`.\n{usage}")
        }
    }
}
