use gdbot_commands::{IssueCommand, IssueRequest};
use tracing::{debug, info, warn};

use crate::issue_render::{
    render_issue_created_reply, render_issue_list_reply, render_missing_parameter_reply,
};
use crate::issue_tracker::IssueTracker;

/// Runs one parsed command against the tracker and returns the reply text.
///
/// Commands missing a required parameter never reach the tracker and get a
/// usage reply. Tracker failures are logged at warning level and yield `None`:
/// the user receives no reply.
pub async fn execute_issue_command(
    tracker: &dyn IssueTracker,
    command: &IssueCommand,
) -> Option<String> {
    let request = match command.validate() {
        Ok(request) => request,
        Err(error) => {
            debug!(
                action = command.action.as_str(),
                %error,
                "rejected issue command before outbound call"
            );
            return Some(render_missing_parameter_reply(&error, command.usage()));
        }
    };

    match request {
        IssueRequest::Create {
            project,
            title,
            body,
        } => match tracker.create_issue(&project, &title, &body).await {
            Ok(issue) => {
                info!(
                    repository = %project,
                    title = %title,
                    url = %issue.html_url,
                    "issue created"
                );
                Some(render_issue_created_reply(&project, &title, &issue.html_url))
            }
            Err(error) => {
                warn!(repository = %project, %error, "failed to create issue");
                None
            }
        },
        IssueRequest::List { project } => match tracker.list_issues(&project).await {
            Ok(issues) => {
                debug!(repository = %project, count = issues.len(), "listed issues");
                Some(render_issue_list_reply(&issues))
            }
            Err(error) => {
                warn!(repository = %project, %error, "failed to list issues");
                None
            }
        },
    }
}
