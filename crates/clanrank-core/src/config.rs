//! Application configuration from environment variables.
//!
//! Everything has a sensible default; the tool runs with no configuration
//! at all. The parsing core takes an injectable lookup function so tests
//! drive it from a plain `HashMap` without touching process state.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from configuration parsing.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Runtime configuration for the rank calculator.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the RuneProfile API.
    pub runeprofile_base_url: String,
    /// Base URL of the Wise Old Man v2 API.
    pub wom_base_url: String,
    /// Wise Old Man group id of the clan.
    pub clan_group_id: u64,
    /// Directory for cached raw source payloads.
    pub cache_dir: PathBuf,
    /// Path to the quest point table.
    pub quests_path: PathBuf,
    /// Per-request HTTP timeout.
    pub http_timeout_secs: u64,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

/// Load configuration from the process environment, reading `.env` first.
///
/// # Errors
///
/// Returns [`ConfigError`] if a set variable has an unparsable value.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
fn build_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default =
        |var: &str, default: &str| lookup(var).unwrap_or_else(|_| default.to_string());

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let runeprofile_base_url = or_default(
        "CLANRANK_RUNEPROFILE_BASE_URL",
        "https://api.runeprofile.com",
    );
    let wom_base_url = or_default("CLANRANK_WOM_BASE_URL", "https://api.wiseoldman.net/v2");
    let clan_group_id = parse_u64("CLANRANK_CLAN_GROUP_ID", "1169")?;
    let cache_dir = lookup("CLANRANK_CACHE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("clanrank"));
    let quests_path = PathBuf::from(or_default("CLANRANK_QUESTS_PATH", "./config/quests.yaml"));
    let http_timeout_secs = parse_u64("CLANRANK_HTTP_TIMEOUT_SECS", "30")?;
    let log_level = or_default("CLANRANK_LOG_LEVEL", "info");

    Ok(AppConfig {
        runeprofile_base_url,
        wom_base_url,
        clan_group_id,
        cache_dir,
        quests_path,
        http_timeout_secs,
        log_level,
    })
}
