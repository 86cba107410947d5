//! Declarative shape of the `/issue` command registered with the chat platform.

use crate::slash_command_parser::ISSUE_COMMAND_NAME;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashOptionSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashSubcommandSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub options: Vec<SlashOptionSchema>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashCommandSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub subcommands: Vec<SlashSubcommandSchema>,
}

fn required_string(name: &'static str, description: &'static str) -> SlashOptionSchema {
    SlashOptionSchema {
        name,
        description,
        required: true,
    }
}

pub fn issue_command_schema() -> SlashCommandSchema {
    SlashCommandSchema {
        name: ISSUE_COMMAND_NAME,
        description: "Manage GitHub issues",
        subcommands: vec![
            SlashSubcommandSchema {
                name: "create",
                description: "Create a new issue",
                options: vec![
                    required_string("project", "Repository name"),
                    required_string("title", "Issue title"),
                    required_string("description", "Issue description"),
                ],
            },
            SlashSubcommandSchema {
                name: "get",
                description: "List issues of a repository",
                options: vec![required_string("project", "Repository name")],
            },
        ],
    }
}
