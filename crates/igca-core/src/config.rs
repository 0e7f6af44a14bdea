use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading
/// env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in
/// the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful
/// for testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let top_n = parse_usize("IGCA_TOP_N", "10")?;
    if top_n == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "IGCA_TOP_N".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        search_path: PathBuf::from(or_default("IGCA_SEARCH_PATH", "./data/raw/search_data.json")),
        profile_path: PathBuf::from(or_default(
            "IGCA_PROFILE_PATH",
            "./data/raw/profile_data.json",
        )),
        post_path: PathBuf::from(or_default("IGCA_POST_PATH", "./data/raw/post_data.json")),
        brief_path: PathBuf::from(or_default("IGCA_BRIEF_PATH", "./config/brief.yaml")),
        reports_path: PathBuf::from(or_default("IGCA_REPORTS_PATH", "./reports")),
        max_posts_per_profile: parse_usize("IGCA_MAX_POSTS_PER_PROFILE", "50")?,
        top_n,
        log_level: or_default("IGCA_LOG_LEVEL", "info"),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
