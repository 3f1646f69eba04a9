//! Service-account credential loading and token exchange.
//!
//! Credentials come from either a key file on disk or an inline JSON blob
//! (the shapes the original deployment used: `GA4_CREDENTIALS_PATH` and
//! `GA4_SERVICE_ACCOUNT_CREDENTIALS`). Token exchange is delegated to
//! `gcloud-sdk`; these tools are one-shot batch jobs, so a single token
//! fetched at startup outlives the run.

use std::path::{Path, PathBuf};

use gcloud_sdk::{GoogleAuthTokenGenerator, TokenSourceType};

use crate::error::AdminError;

/// Read-only scope, enough for discovery (accounts/properties/streams).
pub const ANALYTICS_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/analytics.readonly";

/// User-management scope, required to create access bindings.
pub const ANALYTICS_MANAGE_USERS_SCOPE: &str =
    "https://www.googleapis.com/auth/analytics.manage.users";

/// Where the service-account key comes from.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// Path to a service-account JSON key file.
    File(PathBuf),
    /// The key JSON itself, passed inline via the environment.
    Json(String),
}

impl CredentialSource {
    /// Picks a credential source with file-path precedence: an explicit path
    /// wins over inline JSON. Returns `None` when neither is configured;
    /// callers treat that as fatal.
    #[must_use]
    pub fn from_config(path: Option<&Path>, inline_json: Option<&str>) -> Option<Self> {
        if let Some(p) = path {
            return Some(CredentialSource::File(p.to_path_buf()));
        }
        inline_json.map(|j| CredentialSource::Json(j.to_owned()))
    }
}

/// Exchanges service-account credentials for an OAuth2 access token and
/// returns the full `Authorization` header value (`Bearer ...`).
///
/// # Errors
///
/// Returns [`AdminError::Credentials`] if the key cannot be read or the
/// token exchange fails.
pub async fn fetch_auth_header(
    source: CredentialSource,
    scope: &str,
) -> Result<String, AdminError> {
    let token_source = match source {
        CredentialSource::File(path) => TokenSourceType::File(path),
        CredentialSource::Json(json) => TokenSourceType::Json(json),
    };

    let generator = GoogleAuthTokenGenerator::new(token_source, vec![scope.to_string()])
        .await
        .map_err(|e| AdminError::Credentials(e.to_string()))?;
    let token = generator
        .create_token()
        .await
        .map_err(|e| AdminError::Credentials(e.to_string()))?;

    Ok(token.header_value())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
