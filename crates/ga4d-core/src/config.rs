use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Email granted Viewer access when `GA4D_GRANT_SERVICE_ACCOUNT` is unset.
/// This is the data-sync identity the dashboard reads GA4 metrics with.
const DEFAULT_GRANT_SERVICE_ACCOUNT: &str = "gtm-tool-386203@appspot.gserviceaccount.com";

/// Predefined GA4 role granted when `GA4D_GRANT_ROLE` is unset.
const DEFAULT_GRANT_ROLE: &str = "predefinedRoles/viewer";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files, useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup, no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    // None of the credential/URL vars are required up front: discover-to-file
    // needs only GA4 credentials, and --upsert additionally needs DATABASE_URL.
    // The commands validate what they actually use and fail with a pointed
    // message instead of a blanket startup error.
    let database_url = lookup("DATABASE_URL").ok();
    let ga4_credentials_path = lookup("GA4_CREDENTIALS_PATH").ok().map(PathBuf::from);
    let ga4_credentials_json = lookup("GA4_SERVICE_ACCOUNT_CREDENTIALS").ok();

    let env = parse_environment(&or_default("GA4D_ENV", "development"));
    let log_level = or_default("GA4D_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("GA4D_REQUEST_TIMEOUT_SECS", "30")?;
    let grant_service_account =
        or_default("GA4D_GRANT_SERVICE_ACCOUNT", DEFAULT_GRANT_SERVICE_ACCOUNT);
    let grant_role = or_default("GA4D_GRANT_ROLE", DEFAULT_GRANT_ROLE);

    let db_max_connections = parse_u32("GA4D_DB_MAX_CONNECTIONS", "10")?;
    let db_min_connections = parse_u32("GA4D_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("GA4D_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        database_url,
        env,
        log_level,
        ga4_credentials_path,
        ga4_credentials_json,
        request_timeout_secs,
        grant_service_account,
        grant_role,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
