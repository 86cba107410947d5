use anyhow::{bail, Result};

use crate::Cli;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Rejects configuration that would only fail later at the first network call.
pub fn validate_cli(cli: &Cli) -> Result<()> {
    if is_blank(&cli.discord_token) {
        bail!("--discord-token (BOT_TOKEN) cannot be empty");
    }
    if is_blank(&cli.github_token) {
        bail!("--github-token (GITHUB_AUTH_TOKEN) cannot be empty");
    }
    if is_blank(&cli.github_owner) {
        bail!("--github-owner (GITHUB_USERNAME) cannot be empty");
    }
    if cli.github_owner.trim().contains('/') {
        bail!("--github-owner must be a user or organization name, not owner/repo");
    }
    if is_blank(&cli.github_api_base) {
        bail!("--github-api-base cannot be empty");
    }
    if cli.skip_command_registration && cli.discord_guild_id.is_some() {
        bail!("--discord-guild-id cannot be combined with --skip-command-registration");
    }
    if let Some(bind) = cli.health_bind.as_deref() {
        if is_blank(bind) {
            bail!("--health-bind cannot be empty");
        }
    }
    Ok(())
}
