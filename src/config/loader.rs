//! Settings loading
//!
//! Hierarchy, highest priority first:
//! 1. CLI flags (applied by the presentation layer)
//! 2. Environment variables (CHART_VENDOR_*)
//! 3. Built-in defaults

use std::time::Duration;

use crate::error::{VendorError, VendorResult};

use super::types::Settings;

pub const ENV_TIMEOUT: &str = "CHART_VENDOR_TIMEOUT";
pub const ENV_USER_AGENT: &str = "CHART_VENDOR_USER_AGENT";
pub const ENV_VERIFY_DIGEST: &str = "CHART_VENDOR_VERIFY_DIGEST";

/// Defaults with process environment overrides applied
pub fn load_settings() -> VendorResult<Settings> {
    with_env_overrides(Settings::default(), |key| std::env::var(key).ok())
}

/// Apply `CHART_VENDOR_*` overrides read through `lookup`
pub fn with_env_overrides<F>(mut settings: Settings, lookup: F) -> VendorResult<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    // CHART_VENDOR_TIMEOUT (seconds)
    if let Some(raw) = lookup(ENV_TIMEOUT) {
        settings.http.timeout = parse_timeout(ENV_TIMEOUT, &raw)?;
    }

    if let Some(agent) = lookup(ENV_USER_AGENT) {
        let agent = agent.trim();
        if !agent.is_empty() {
            settings.http.user_agent = agent.to_string();
        }
    }

    // CHART_VENDOR_VERIFY_DIGEST (true/false/1/0/yes/no)
    if let Some(raw) = lookup(ENV_VERIFY_DIGEST) {
        settings.verify_digest = parse_bool(ENV_VERIFY_DIGEST, &raw)?;
    }

    Ok(settings)
}

/// Parse a timeout given in whole seconds; zero is rejected
pub fn parse_timeout(key: &str, raw: &str) -> VendorResult<Duration> {
    let secs: u64 = raw.trim().parse().map_err(|_| VendorError::Config {
        key: key.to_string(),
        message: format!("expected whole seconds, got '{raw}'"),
    })?;
    if secs == 0 {
        return Err(VendorError::Config {
            key: key.to_string(),
            message: "timeout must be at least 1 second".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}

fn parse_bool(key: &str, raw: &str) -> VendorResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(VendorError::Config {
            key: key.to_string(),
            message: format!("expected a boolean, got '{raw}'"),
        }),
    }
}
