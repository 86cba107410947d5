use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::{parse_deployment_environment, parse_discord_snowflake, CliDeploymentEnvironment};

#[derive(Debug, Parser)]
#[command(
    name = "gdbot",
    about = "Discord bot that creates and lists GitHub issues",
    version
)]
/// Public struct `Cli` used across gdbot components.
pub struct Cli {
    #[arg(
        long = "discord-token",
        env = "BOT_TOKEN",
        hide_env_values = true,
        help = "Discord bot token used to log in to the gateway"
    )]
    pub discord_token: String,

    #[arg(
        long = "discord-application-id",
        env = "DISCORD_APPLICATION_ID",
        value_parser = parse_discord_snowflake,
        help = "Discord application id used for slash-command registration. Defaults to the id reported at login"
    )]
    pub discord_application_id: Option<u64>,

    #[arg(
        long = "discord-guild-id",
        env = "DISCORD_GUILD_ID",
        value_parser = parse_discord_snowflake,
        help = "Guild to register slash commands in. Commands are registered globally when unset"
    )]
    pub discord_guild_id: Option<u64>,

    #[arg(
        long = "skip-command-registration",
        env = "GDBOT_SKIP_COMMAND_REGISTRATION",
        default_value_t = false,
        help = "Do not register slash commands on startup"
    )]
    pub skip_command_registration: bool,

    #[arg(
        long = "github-token",
        env = "GITHUB_AUTH_TOKEN",
        hide_env_values = true,
        help = "GitHub token used to create and list issues"
    )]
    pub github_token: String,

    #[arg(
        long = "github-owner",
        env = "GITHUB_USERNAME",
        help = "GitHub user or organization that owns every repository named in commands"
    )]
    pub github_owner: String,

    #[arg(
        long = "github-api-base",
        env = "GDBOT_GITHUB_API_BASE",
        default_value = "https://api.github.com",
        help = "GitHub REST API base URL"
    )]
    pub github_api_base: String,

    #[arg(
        long = "environment",
        env = "ENV",
        default_value = "dev",
        value_parser = parse_deployment_environment,
        help = "Deployment environment. PROD logs at info level, anything else at debug level"
    )]
    pub environment: CliDeploymentEnvironment,

    #[arg(
        long = "log-dir",
        env = "GDBOT_LOG_DIR",
        default_value = "logs",
        help = "Directory for the daily-rotated access log"
    )]
    pub log_dir: PathBuf,

    #[arg(
        long = "no-log-file",
        env = "GDBOT_NO_LOG_FILE",
        action = ArgAction::SetTrue,
        help = "Log to stderr only"
    )]
    pub no_log_file: bool,

    #[arg(
        long = "health-bind",
        env = "GDBOT_HEALTH_BIND",
        help = "Optional host:port for the keep-alive HTTP server"
    )]
    pub health_bind: Option<String>,
}
