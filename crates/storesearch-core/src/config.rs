use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
///
/// # Errors
///
/// Returns `ConfigError` if `GOOGLE_KEY` is missing or empty, or a numeric
/// value does not parse.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let google_api_key = require("GOOGLE_KEY")?;

    let log_level = or_default("STORESEARCH_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("STORESEARCH_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("STORESEARCH_USER_AGENT", "storesearch/0.1 (places-export)");
    let places_base_url = or_default("STORESEARCH_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);
    let page_token_delay_ms = parse_u64("STORESEARCH_PAGE_TOKEN_DELAY_MS", "2000")?;

    Ok(AppConfig {
        google_api_key,
        log_level,
        request_timeout_secs,
        user_agent,
        places_base_url,
        page_token_delay_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
