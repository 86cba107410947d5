use std::collections::BTreeMap;

use crate::issue_command::{CommandOrigin, IssueCommand};

pub const ISSUE_COMMAND_NAME: &str = "issue";

/// Platform-neutral view of a slash-command interaction: the command name,
/// the invoked subcommand and its string options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlashCommandInvocation {
    pub command_name: String,
    pub subcommand: Option<String>,
    pub options: BTreeMap<String, String>,
}

impl SlashCommandInvocation {
    pub fn new(command_name: impl Into<String>) -> Self {
        Self {
            command_name: command_name.into(),
            ..Self::default()
        }
    }

    pub fn with_subcommand(mut self, subcommand: impl Into<String>) -> Self {
        self.subcommand = Some(subcommand.into());
        self
    }

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    fn option(&self, name: &str) -> Option<String> {
        self.options.get(name).cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Enumerates supported `IssueSubcommand` values.
pub enum IssueSubcommand {
    Create,
    Get,
    Unrecognized(String),
}

impl IssueSubcommand {
    pub fn from_name(name: &str) -> Self {
        match name {
            "create" => Self::Create,
            "get" => Self::Get,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

pub fn parse_slash_command(invocation: &SlashCommandInvocation) -> Option<IssueCommand> {
    if invocation.command_name != ISSUE_COMMAND_NAME {
        return None;
    }
    let subcommand = invocation.subcommand.as_deref()?;
    match IssueSubcommand::from_name(subcommand) {
        IssueSubcommand::Create => Some(IssueCommand::create(
            CommandOrigin::Slash,
            invocation.option("project"),
            invocation.option("title"),
            invocation.option("description"),
        )),
        IssueSubcommand::Get => Some(IssueCommand::list(
            CommandOrigin::Slash,
            invocation.option("project"),
        )),
        IssueSubcommand::Unrecognized(_) => None,
    }
}
