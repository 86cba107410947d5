use thiserror::Error;

/// Body used when the invoking surface does not supply a description.
pub const DEFAULT_ISSUE_BODY: &str = "Issue created using gdbot!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Enumerates supported `IssueAction` values.
pub enum IssueAction {
    CreateIssue,
    ListIssues,
}

impl IssueAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateIssue => "create_issue",
            Self::ListIssues => "list_issues",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Chat surface a command was parsed from. Selects the usage text shown on
/// precondition failures.
pub enum CommandOrigin {
    Legacy,
    Slash,
}

/// Canonical command produced by either parser.
///
/// Parameters stay optional here: the legacy surface is positional and may
/// omit tokens, so presence is enforced by [`IssueCommand::validate`] right
/// before the outbound call rather than at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueCommand {
    pub action: IssueAction,
    pub origin: CommandOrigin,
    pub project: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl IssueCommand {
    pub fn create(
        origin: CommandOrigin,
        project: Option<String>,
        title: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            action: IssueAction::CreateIssue,
            origin,
            project,
            title,
            description,
        }
    }

    pub fn list(origin: CommandOrigin, project: Option<String>) -> Self {
        Self {
            action: IssueAction::ListIssues,
            origin,
            project,
            title: None,
            description: None,
        }
    }

    /// Checks required parameters and resolves defaults.
    ///
    /// Whitespace only decides presence; accepted values are forwarded
    /// verbatim. A supplied description is never replaced.
    pub fn validate(&self) -> Result<IssueRequest, CommandValidationError> {
        let project = required_parameter(self.project.as_deref(), "project")?;
        match self.action {
            IssueAction::CreateIssue => {
                let title = required_parameter(self.title.as_deref(), "title")?;
                let body = self
                    .description
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ISSUE_BODY.to_string());
                Ok(IssueRequest::Create {
                    project,
                    title,
                    body,
                })
            }
            IssueAction::ListIssues => Ok(IssueRequest::List { project }),
        }
    }

    pub fn usage(&self) -> &'static str {
        match (self.origin, self.action) {
            (CommandOrigin::Legacy, _) => crate::LEGACY_USAGE,
            (CommandOrigin::Slash, IssueAction::CreateIssue) => {
                "Usage: /issue create project:<repo> title:<title> description:<text>"
            }
            (CommandOrigin::Slash, IssueAction::ListIssues) => "Usage: /issue get project:<repo>",
        }
    }
}

fn required_parameter(
    value: Option<&str>,
    parameter: &'static str,
) -> Result<String, CommandValidationError> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(ToOwned::to_owned)
        .ok_or(CommandValidationError::MissingParameter { parameter })
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Validated outbound request; project and title are never blank.
pub enum IssueRequest {
    Create {
        project: String,
        title: String,
        body: String,
    },
    List {
        project: String,
    },
}

impl IssueRequest {
    pub fn project(&self) -> &str {
        match self {
            Self::Create { project, .. } | Self::List { project } => project,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Enumerates supported `CommandValidationError` values.
pub enum CommandValidationError {
    #[error("missing required parameter `{parameter}`")]
    MissingParameter { parameter: &'static str },
}
