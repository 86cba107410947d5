use std::path::Path;

use anyhow::{Context, Result};
use gdbot_cli::{Cli, CliDeploymentEnvironment};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub(crate) const ACCESS_LOG_FILE_NAME: &str = "access.log";
pub(crate) const DOTENV_FILE_NAME: &str = ".env";

const GDBOT_LOG_TARGETS: [&str; 5] = [
    "gdbot",
    "gdbot_cli",
    "gdbot_commands",
    "gdbot_discord_runtime",
    "gdbot_github_issues",
];

/// Loads `KEY=VALUE` pairs from `path` into the process environment without
/// overriding variables that are already set. Returns whether a file was read.
pub(crate) fn load_dotenv_file(path: &Path) -> Result<bool> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(dotenvy::Error::Io(error)) if error.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(error) => Err(error)
            .with_context(|| format!("failed to load environment file '{}'", path.display())),
    }
}

/// Our crates log at the environment level; dependencies stay at `warn`.
pub(crate) fn default_filter_directives(environment: CliDeploymentEnvironment) -> String {
    let level = environment.default_log_directive();
    let mut directives = vec!["warn".to_string()];
    directives.extend(
        GDBOT_LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}")),
    );
    directives.join(",")
}

pub(crate) fn build_access_log_writer(log_dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory '{}'", log_dir.display()))?;
    let appender = tracing_appender::rolling::daily(log_dir, ACCESS_LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(appender))
}

/// Installs the global subscriber. The returned guard must live until exit or
/// buffered file lines are lost.
pub(crate) fn init_tracing(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter_directives(cli.environment)));
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    if cli.no_log_file {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .try_init()
            .context("failed to install tracing subscriber")?;
        return Ok(None);
    }

    let (file_writer, guard) = build_access_log_writer(&cli.log_dir)?;
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(Some(guard))
}
