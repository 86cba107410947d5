//! Conversion from serenity interaction payloads and reply sizing.

use gdbot_commands::SlashCommandInvocation;
use serenity::all::{CommandDataOption, CommandDataOptionValue, CommandInteraction};

/// Discord rejects message content longer than this many characters.
pub const DISCORD_MESSAGE_MAX_CHARS: usize = 2_000;

const TRUNCATION_MARKER: &str = "...";

pub(super) fn slash_invocation_from_interaction(
    interaction: &CommandInteraction,
) -> SlashCommandInvocation {
    slash_invocation_from_options(&interaction.data.name, &interaction.data.options)
}

pub(super) fn slash_invocation_from_options(
    command_name: &str,
    options: &[CommandDataOption],
) -> SlashCommandInvocation {
    let mut invocation = SlashCommandInvocation::new(command_name);
    for option in options {
        if let CommandDataOptionValue::SubCommand(sub_options) = &option.value {
            invocation = invocation.with_subcommand(option.name.as_str());
            invocation = collect_string_options(invocation, sub_options);
        }
    }
    invocation
}

fn collect_string_options(
    mut invocation: SlashCommandInvocation,
    options: &[CommandDataOption],
) -> SlashCommandInvocation {
    for option in options {
        if let CommandDataOptionValue::String(value) = &option.value {
            invocation = invocation.with_option(option.name.as_str(), value.as_str());
        }
    }
    invocation
}

/// Final action on a deferred slash interaction once the adapter has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum DeferredSlashReply {
    Edit(String),
    /// Removes the "thinking" placeholder so failures stay silent.
    Delete,
}

impl DeferredSlashReply {
    pub(super) fn from_reply(reply: Option<String>) -> Self {
        match reply {
            Some(reply) => Self::Edit(truncate_for_discord(&reply)),
            None => Self::Delete,
        }
    }
}

pub fn truncate_for_discord(value: &str) -> String {
    if value.chars().count() <= DISCORD_MESSAGE_MAX_CHARS {
        return value.to_string();
    }
    let keep = DISCORD_MESSAGE_MAX_CHARS - TRUNCATION_MARKER.len();
    let mut truncated = value.chars().take(keep).collect::<String>();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}
