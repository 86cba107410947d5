mod bootstrap_helpers;
mod health_server;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use gdbot_cli::{validate_cli, Cli};
use gdbot_discord_runtime::{run_discord_bot, CommandRegistrationScope, DiscordBotRuntimeConfig};
use gdbot_github_issues::{GithubApiClient, IssueTracker};
use tracing::{info, warn};

use crate::bootstrap_helpers::{init_tracing, load_dotenv_file, DOTENV_FILE_NAME};
use crate::health_server::run_health_server;

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_loaded = load_dotenv_file(Path::new(DOTENV_FILE_NAME))?;
    let cli = Cli::parse();
    validate_cli(&cli)?;
    let _log_guard = init_tracing(&cli)?;
    info!(
        environment = cli.environment.as_str(),
        dotenv_loaded,
        owner = %cli.github_owner,
        "starting gdbot"
    );

    let github = GithubApiClient::new(&cli.github_api_base, &cli.github_token, &cli.github_owner)?;
    let tracker: Arc<dyn IssueTracker> = Arc::new(github);

    if let Some(bind) = cli.health_bind.clone() {
        tokio::spawn(async move {
            if let Err(error) = run_health_server(&bind).await {
                warn!(error = %format!("{error:#}"), "keep-alive server stopped");
            }
        });
    }

    let registration = (!cli.skip_command_registration)
        .then(|| CommandRegistrationScope::from_guild_id(cli.discord_guild_id));
    let config = DiscordBotRuntimeConfig {
        bot_token: cli.discord_token.clone(),
        application_id: cli.discord_application_id,
        registration,
    };

    tokio::select! {
        result = run_discord_bot(config, tracker) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown requested");
            Ok(())
        }
    }
}
