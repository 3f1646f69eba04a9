use thiserror::Error;

/// Errors returned by the Analytics Admin API client.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-2xx response. `status` is the canonical RPC
    /// status string from the Google error envelope (e.g. `ALREADY_EXISTS`,
    /// `PERMISSION_DENIED`) when the body carried one.
    #[error("Admin API error {code}: {message}")]
    Api {
        code: u16,
        status: Option<String>,
        message: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Service-account credentials could not be loaded or exchanged for a token.
    #[error("credential error: {0}")]
    Credentials(String),
}

impl AdminError {
    /// True when the API rejected a create because the resource already exists.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        matches!(self, AdminError::Api { status: Some(s), .. } if s == "ALREADY_EXISTS")
    }

    /// True when the API refused the call for lack of permission.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, AdminError::Api { status: Some(s), .. } if s == "PERMISSION_DENIED")
    }
}
