use crate::settings::{YolpSettings, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load client settings from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_settings() -> Result<YolpSettings, ConfigError> {
    dotenvy::dotenv().ok();
    load_settings_from_env()
}

/// Load client settings from environment variables already in the process.
///
/// Unlike [`load_settings`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_settings_from_env() -> Result<YolpSettings, ConfigError> {
    build_settings(|key| std::env::var(key))
}

/// Build settings using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_settings<F>(lookup: F) -> Result<YolpSettings, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let app_id = lookup("YOLP_APP_ID")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar("YOLP_APP_ID".to_string()))?;

    let base_url = parse_base_url(&or_default("YOLP_BASE_URL", DEFAULT_BASE_URL))?;
    let user_agent = or_default("YOLP_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(YolpSettings {
        app_id,
        base_url,
        user_agent,
    })
}

/// Accepts only absolute `http`/`https` URLs; trailing slashes are dropped.
fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty());

    if !has_host {
        return Err(ConfigError::InvalidEnvVar {
            var: "YOLP_BASE_URL".to_string(),
            reason: format!("expected an absolute http(s) URL, got '{raw}'"),
        });
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
