//! Discord event handling and client lifecycle.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use gdbot_commands::{parse_legacy_message, parse_slash_command};
use gdbot_github_issues::{execute_issue_command, IssueTracker};
use serenity::all::{
    ApplicationId, Client, Context, EditInteractionResponse, EventHandler, GatewayIntents,
    Interaction, Message, Ready,
};
use serenity::async_trait;
use tracing::{debug, info, warn};

mod discord_interaction_helpers;
mod slash_command_registration;

pub use discord_interaction_helpers::{truncate_for_discord, DISCORD_MESSAGE_MAX_CHARS};
pub use slash_command_registration::{build_slash_command, CommandRegistrationScope};

use discord_interaction_helpers::{slash_invocation_from_interaction, DeferredSlashReply};
use slash_command_registration::register_slash_commands;

#[derive(Clone)]
/// Public struct `DiscordBotRuntimeConfig` used across gdbot components.
pub struct DiscordBotRuntimeConfig {
    pub bot_token: String,
    pub application_id: Option<u64>,
    pub registration: Option<CommandRegistrationScope>,
}

pub fn gateway_intents() -> GatewayIntents {
    GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT
}

/// Routes gateway events through the parsers and the issue adapter.
///
/// serenity dispatches every event on its own task; the handler holds no
/// mutable state, so concurrent events never coordinate.
pub struct GdbotEventHandler {
    tracker: Arc<dyn IssueTracker>,
    application_id: Option<u64>,
    registration: Option<CommandRegistrationScope>,
}

impl GdbotEventHandler {
    pub fn new(
        tracker: Arc<dyn IssueTracker>,
        application_id: Option<u64>,
        registration: Option<CommandRegistrationScope>,
    ) -> Self {
        Self {
            tracker,
            application_id,
            registration,
        }
    }
}

#[async_trait]
impl EventHandler for GdbotEventHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Logged in as {}!", ready.user.tag());

        let Some(scope) = self.registration else {
            return;
        };
        let application_id = self
            .application_id
            .map(ApplicationId::new)
            .unwrap_or(ready.application.id);
        ctx.http.set_application_id(application_id);
        match register_slash_commands(&ctx.http, scope).await {
            Ok(count) => info!(
                scope = %scope,
                commands = count,
                "registered slash commands"
            ),
            Err(error) => warn!(
                scope = %scope,
                error = %format!("{error:#}"),
                "failed to register slash commands"
            ),
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let Some(command) = parse_legacy_message(&msg.content, msg.author.bot) else {
            return;
        };
        debug!(
            action = command.action.as_str(),
            project = ?command.project,
            title = ?command.title,
            "legacy command received"
        );

        let Some(reply) = execute_issue_command(self.tracker.as_ref(), &command).await else {
            return;
        };
        if let Err(error) = msg
            .channel_id
            .say(&ctx.http, truncate_for_discord(&reply))
            .await
        {
            warn!(channel_id = %msg.channel_id, %error, "failed to send legacy command reply");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(interaction) = interaction else {
            return;
        };
        let invocation = slash_invocation_from_interaction(&interaction);
        let Some(command) = parse_slash_command(&invocation) else {
            return;
        };
        debug!(
            action = command.action.as_str(),
            project = ?command.project,
            "slash command received"
        );

        // Discord drops interactions not acknowledged within 3 seconds.
        if let Err(error) = interaction.defer(&ctx.http).await {
            warn!(
                interaction_id = %interaction.id,
                %error,
                "failed to acknowledge slash command"
            );
            return;
        }

        let reply = execute_issue_command(self.tracker.as_ref(), &command).await;
        match DeferredSlashReply::from_reply(reply) {
            DeferredSlashReply::Edit(content) => {
                let response = EditInteractionResponse::new().content(content);
                if let Err(error) = interaction.edit_response(&ctx.http, response).await {
                    warn!(
                        interaction_id = %interaction.id,
                        %error,
                        "failed to send slash command reply"
                    );
                }
            }
            DeferredSlashReply::Delete => {
                if let Err(error) = interaction.delete_response(&ctx.http).await {
                    warn!(
                        interaction_id = %interaction.id,
                        %error,
                        "failed to clear deferred slash command response"
                    );
                }
            }
        }
    }
}

/// Connects to the Discord gateway and serves events until the client stops.
pub async fn run_discord_bot(
    config: DiscordBotRuntimeConfig,
    tracker: Arc<dyn IssueTracker>,
) -> Result<()> {
    let handler = GdbotEventHandler::new(tracker, config.application_id, config.registration);
    let mut client = Client::builder(config.bot_token.trim(), gateway_intents())
        .event_handler(handler)
        .await
        .context("failed to create discord client")?;
    client
        .start()
        .await
        .context("discord gateway client exited unexpectedly")?;
    Ok(())
}
