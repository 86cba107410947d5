//! Discord gateway runtime for gdbot.
//!
//! Owns the serenity client, registers the `/issue` slash command and routes
//! legacy `!gdbot` messages and slash interactions into the issue adapter.

pub mod discord_runtime;

pub use discord_runtime::{
    build_slash_command, gateway_intents, run_discord_bot, truncate_for_discord,
    CommandRegistrationScope, DiscordBotRuntimeConfig, GdbotEventHandler,
    DISCORD_MESSAGE_MAX_CHARS,
};
