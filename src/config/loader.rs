//! Configuration loading from the process environment.

use thiserror::Error;

use crate::config::schema::{LogFormat, ServiceConfig, DEFAULT_UPSTREAM_URL};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Env { var: &'static str, reason: String },

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from the process environment.
///
/// Validation is left to the caller so CLI overrides can be applied first.
pub fn load_from_env() -> Result<ServiceConfig, ConfigError> {
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup.
pub fn load_from_lookup<F>(lookup: F) -> Result<ServiceConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ServiceConfig::default();

    config.upstream.base_url = non_empty(lookup("SERVICE1_URL"))
        .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());

    if let Some(port) = non_empty(lookup("PORT")) {
        let port: u16 = port.parse().map_err(|e| ConfigError::Env {
            var: "PORT",
            reason: format!("{}", e),
        })?;
        config.listener.bind_address = format!("0.0.0.0:{}", port);
    }

    if let Some(format) = non_empty(lookup("LOG_FORMAT")) {
        config.observability.log_format = format
            .parse::<LogFormat>()
            .map_err(|reason| ConfigError::Env { var: "LOG_FORMAT", reason })?;
    }

    Ok(config)
}

/// Validate a fully assembled configuration.
pub fn finalize(config: ServiceConfig) -> Result<ServiceConfig, ConfigError> {
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
