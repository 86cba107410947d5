use crate::issue_command::{CommandOrigin, IssueCommand};

pub const LEGACY_COMMAND_PREFIX: char = '!';
pub const LEGACY_USAGE: &str = "Usage: !gdbot <repo> <title>";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Public struct `LegacyCommandEnvelope` used across gdbot components.
pub struct LegacyCommandEnvelope<'a> {
    pub verb: &'a str,
    pub args: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Enumerates supported `LegacyVerb` values.
pub enum LegacyVerb {
    CreateIssue,
    Unrecognized(String),
}

impl LegacyVerb {
    pub fn from_token(token: &str) -> Self {
        let normalized = token.to_lowercase();
        match normalized.as_str() {
            "gdbot" => Self::CreateIssue,
            _ => Self::Unrecognized(normalized),
        }
    }
}

/// Splits a prefixed message into its verb and positional arguments.
///
/// The verb must follow the prefix directly; `"! gdbot"` yields an empty verb.
pub fn parse_legacy_command_envelope(content: &str) -> Option<LegacyCommandEnvelope<'_>> {
    let body = content.strip_prefix(LEGACY_COMMAND_PREFIX)?;
    let verb = body.split(char::is_whitespace).next().unwrap_or_default();
    let args = body[verb.len()..].split_whitespace().collect();
    Some(LegacyCommandEnvelope { verb, args })
}

pub fn parse_legacy_message(content: &str, author_is_bot: bool) -> Option<IssueCommand> {
    if author_is_bot {
        return None;
    }
    let envelope = parse_legacy_command_envelope(content)?;
    match LegacyVerb::from_token(envelope.verb) {
        // Only the first word after the repository becomes the title.
        LegacyVerb::CreateIssue => Some(IssueCommand::create(
            CommandOrigin::Legacy,
            envelope.args.first().map(|value| value.to_string()),
            envelope.args.get(1).map(|value| value.to_string()),
            None,
        )),
        LegacyVerb::Unrecognized(_) => None,
    }
}
