#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Enumerates supported `CliDeploymentEnvironment` values.
pub enum CliDeploymentEnvironment {
    Production,
    #[default]
    Development,
}

impl CliDeploymentEnvironment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }

    /// Log level used when `RUST_LOG` is unset.
    pub fn default_log_directive(self) -> &'static str {
        match self {
            Self::Production => "info",
            Self::Development => "debug",
        }
    }
}

/// Any value other than `PROD` (case-insensitive) selects development.
pub fn parse_deployment_environment(value: &str) -> Result<CliDeploymentEnvironment, String> {
    if value.trim().eq_ignore_ascii_case("prod") {
        Ok(CliDeploymentEnvironment::Production)
    } else {
        Ok(CliDeploymentEnvironment::Development)
    }
}

pub fn parse_discord_snowflake(value: &str) -> Result<u64, String> {
    let parsed = value
        .trim()
        .parse::<u64>()
        .map_err(|error| format!("failed to parse discord id: {error}"))?;
    if parsed == 0 {
        return Err("discord id must be greater than 0".to_string());
    }
    Ok(parsed)
}
