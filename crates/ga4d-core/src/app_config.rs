use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    /// Supabase Postgres connection URL. Only required when the discover
    /// command runs with `--upsert`.
    pub database_url: Option<String>,
    pub env: Environment,
    pub log_level: String,
    /// Path to a service-account JSON key file.
    pub ga4_credentials_path: Option<PathBuf>,
    /// Inline service-account JSON, as an alternative to the key file.
    pub ga4_credentials_json: Option<String>,
    pub request_timeout_secs: u64,
    /// Identity the grant-access command gives Viewer access to.
    pub grant_service_account: String,
    /// Predefined GA4 role granted by the grant-access command.
    pub grant_role: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[redacted]"),
            )
            .field("ga4_credentials_path", &self.ga4_credentials_path)
            .field(
                "ga4_credentials_json",
                &self.ga4_credentials_json.as_ref().map(|_| "[redacted]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("grant_service_account", &self.grant_service_account)
            .field("grant_role", &self.grant_role)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}
