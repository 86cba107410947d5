//! Registration of the `/issue` slash command with Discord.

use std::fmt;

use anyhow::{Context, Result};
use gdbot_commands::{issue_command_schema, SlashCommandSchema};
use serenity::all::{
    Command, CommandOptionType, CreateCommand, CreateCommandOption, GuildId, Http,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where slash commands are registered. Guild commands become available
/// immediately; global commands can take up to an hour to propagate.
pub enum CommandRegistrationScope {
    Guild(u64),
    Global,
}

impl CommandRegistrationScope {
    pub fn from_guild_id(guild_id: Option<u64>) -> Self {
        match guild_id {
            Some(id) => Self::Guild(id),
            None => Self::Global,
        }
    }
}

impl fmt::Display for CommandRegistrationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guild(id) => write!(f, "guild:{id}"),
            Self::Global => f.write_str("global"),
        }
    }
}

pub fn build_slash_command(schema: &SlashCommandSchema) -> CreateCommand {
    schema.subcommands.iter().fold(
        CreateCommand::new(schema.name).description(schema.description),
        |command, subcommand| {
            let option = subcommand.options.iter().fold(
                CreateCommandOption::new(
                    CommandOptionType::SubCommand,
                    subcommand.name,
                    subcommand.description,
                ),
                |option, string_option| {
                    option.add_sub_option(
                        CreateCommandOption::new(
                            CommandOptionType::String,
                            string_option.name,
                            string_option.description,
                        )
                        .required(string_option.required),
                    )
                },
            );
            command.add_option(option)
        },
    )
}

/// Replaces the registered command set for `scope` with `/issue`.
pub(super) async fn register_slash_commands(
    http: &Http,
    scope: CommandRegistrationScope,
) -> Result<usize> {
    let commands = vec![build_slash_command(&issue_command_schema())];
    let registered = match scope {
        CommandRegistrationScope::Guild(id) => GuildId::new(id)
            .set_commands(http, commands)
            .await
            .with_context(|| format!("failed to register slash commands for guild {id}"))?,
        CommandRegistrationScope::Global => Command::set_global_commands(http, commands)
            .await
            .context("failed to register global slash commands")?,
    };
    Ok(registered.len())
}
