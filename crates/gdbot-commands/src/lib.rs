//! Command parsing for gdbot.
//! Normalizes legacy `!gdbot` text messages and `/issue` slash-command
//! interactions into a single [`IssueCommand`] consumed by the issue adapter.

pub mod issue_command;
pub mod legacy_command_parser;
pub mod slash_command_parser;
pub mod slash_command_schema;

pub use issue_command::{
    CommandOrigin, CommandValidationError, IssueAction, IssueCommand, IssueRequest,
    DEFAULT_ISSUE_BODY,
};
pub use legacy_command_parser::{
    parse_legacy_command_envelope, parse_legacy_message, LegacyCommandEnvelope, LegacyVerb,
    LEGACY_COMMAND_PREFIX, LEGACY_USAGE,
};
pub use slash_command_parser::{
    parse_slash_command, IssueSubcommand, SlashCommandInvocation, ISSUE_COMMAND_NAME,
};
pub use slash_command_schema::{
    issue_command_schema, SlashCommandSchema, SlashOptionSchema, SlashSubcommandSchema,
};
