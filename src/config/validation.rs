use crate::config::types::{Config, IncludeEntry, PrerenderConfig};
use crate::{ConfigError, ConfigResult};
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_prerender_config(&config.prerender)?;
    Ok(())
}

/// Validates prerender configuration
fn validate_prerender_config(config: &PrerenderConfig) -> ConfigResult<()> {
    for entry in &config.include {
        validate_include_entry(entry)?;
    }
    Ok(())
}

/// Validates a single seed path
///
/// Seeds are either paths resolved against the default prerender host or
/// absolute http(s) URLs.
fn validate_include_entry(entry: &IncludeEntry) -> ConfigResult<()> {
    let path = entry.path.trim();

    if path.is_empty() {
        return Err(ConfigError::Validation(
            "include path cannot be empty".to_string(),
        ));
    }

    if path.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ConfigError::Validation(format!(
            "include path '{}' must not contain whitespace or control characters",
            entry.path
        )));
    }

    if path.contains("://") {
        let url = Url::parse(path).map_err(|e| {
            ConfigError::InvalidUrl(format!("Invalid include URL '{}': {}", path, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Validation(format!(
                "include URL '{}' must use HTTP or HTTPS",
                path
            )));
        }

        // Absolute seeds on another host are rejected as cross-origin later on.
        tracing::warn!(
            "include URL '{}' is absolute; it is only queued if its host matches the prerender host",
            path
        );
    }

    Ok(())
}
