//! HTTP client for the Analytics Admin `v1alpha` REST surface.
//!
//! Wraps `reqwest` with bearer-token auth, Google error-envelope parsing,
//! and typed response deserialization. Every list endpoint follows
//! `nextPageToken` to exhaustion before returning.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::AdminError;
use crate::types::{
    AccessBinding, AccessBindingList, Account, AccountList, DataStream, DataStreamList, Property,
    PropertyList,
};

const DEFAULT_BASE_URL: &str = "https://analyticsadmin.googleapis.com/";

const PAGE_SIZE: u32 = 200;

/// Client for the Analytics Admin API.
///
/// Holds the HTTP client, the `Authorization` header value, and the base
/// URL. Use [`AdminClient::new`] for production or
/// [`AdminClient::with_base_url`] to point at a mock server in tests.
pub struct AdminClient {
    client: Client,
    auth_header: String,
    base_url: Url,
}

impl AdminClient {
    /// Creates a new client pointed at the production Admin API.
    ///
    /// `auth_header` is the full `Authorization` value (`Bearer ya29...`)
    /// produced by [`crate::credentials::fetch_auth_header`].
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(auth_header: &str, timeout_secs: u64) -> Result<Self, AdminError> {
        Self::with_base_url(auth_header, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`AdminError::Credentials`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        auth_header: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, AdminError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("ga4d/0.1 (property-discovery)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join resolves endpoint paths under it rather than replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| {
            AdminError::Credentials(format!("invalid base URL '{base_url}': {e}"))
        })?;

        Ok(Self {
            client,
            auth_header: auth_header.to_owned(),
            base_url,
        })
    }

    /// Lists every account the authenticated identity can see.
    ///
    /// # Errors
    ///
    /// - [`AdminError::Api`] if the API returns an error envelope.
    /// - [`AdminError::Http`] on network failure.
    /// - [`AdminError::Deserialize`] if a page does not match the expected shape.
    pub async fn list_accounts(&self) -> Result<Vec<Account>, AdminError> {
        let mut accounts = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let url = self.build_url("v1alpha/accounts", &[], page_token.as_deref())?;
            let page: AccountList = self.get_json(&url, "accounts.list").await?;
            accounts.extend(page.accounts);
            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => return Ok(accounts),
            }
        }
    }

    /// Lists the properties owned by one account (`accounts/{id}`), excluding
    /// soft-deleted ones. Property-type filtering is left to the caller.
    ///
    /// # Errors
    ///
    /// - [`AdminError::Api`] if the API returns an error envelope.
    /// - [`AdminError::Http`] on network failure.
    /// - [`AdminError::Deserialize`] if a page does not match the expected shape.
    pub async fn list_properties(&self, account_name: &str) -> Result<Vec<Property>, AdminError> {
        let filter = format!("parent:{account_name}");
        let mut properties = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let url = self.build_url(
                "v1alpha/properties",
                &[("filter", &filter), ("showDeleted", "false")],
                page_token.as_deref(),
            )?;
            let context = format!("properties.list({account_name})");
            let page: PropertyList = self.get_json(&url, &context).await?;
            properties.extend(page.properties);
            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => return Ok(properties),
            }
        }
    }

    /// Lists the data streams attached to one property (`properties/{id}`).
    ///
    /// # Errors
    ///
    /// - [`AdminError::Api`] if the API returns an error envelope.
    /// - [`AdminError::Http`] on network failure.
    /// - [`AdminError::Deserialize`] if a page does not match the expected shape.
    pub async fn list_data_streams(
        &self,
        property_name: &str,
    ) -> Result<Vec<DataStream>, AdminError> {
        let path = format!("v1alpha/{property_name}/dataStreams");
        let mut streams = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let url = self.build_url(&path, &[], page_token.as_deref())?;
            let context = format!("dataStreams.list({property_name})");
            let page: DataStreamList = self.get_json(&url, &context).await?;
            streams.extend(page.data_streams);
            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => return Ok(streams),
            }
        }
    }

    /// Lists the access bindings on one property (`properties/{id}`).
    ///
    /// # Errors
    ///
    /// - [`AdminError::Api`] if the API returns an error envelope.
    /// - [`AdminError::Http`] on network failure.
    /// - [`AdminError::Deserialize`] if a page does not match the expected shape.
    pub async fn list_access_bindings(
        &self,
        property_name: &str,
    ) -> Result<Vec<AccessBinding>, AdminError> {
        let path = format!("v1alpha/{property_name}/accessBindings");
        let mut bindings = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let url = self.build_url(&path, &[], page_token.as_deref())?;
            let context = format!("accessBindings.list({property_name})");
            let page: AccessBindingList = self.get_json(&url, &context).await?;
            bindings.extend(page.access_bindings);
            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => return Ok(bindings),
            }
        }
    }

    /// Creates an access binding granting `roles` to `user` on a property.
    ///
    /// `user` is the full identity string (`user:name@example.com`). The API
    /// rejects duplicates with `ALREADY_EXISTS`, which callers detect via
    /// [`AdminError::is_already_exists`].
    ///
    /// # Errors
    ///
    /// - [`AdminError::Api`] if the API returns an error envelope.
    /// - [`AdminError::Http`] on network failure.
    /// - [`AdminError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn create_access_binding(
        &self,
        property_name: &str,
        user: &str,
        roles: &[String],
    ) -> Result<AccessBinding, AdminError> {
        let path = format!("v1alpha/{property_name}/accessBindings");
        let url = self.build_url(&path, &[], None)?;
        let body = serde_json::json!({ "user": user, "roles": roles });

        let response = self
            .client
            .post(url.clone())
            .header(reqwest::header::AUTHORIZATION, &self.auth_header)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Self::api_error(status.as_u16(), &text));
        }

        serde_json::from_str(&text).map_err(|e| AdminError::Deserialize {
            context: format!("accessBindings.create({property_name})"),
            source: e,
        })
    }

    /// Builds a full request URL under the base, with query parameters and an
    /// optional page token. All values are percent-encoded by
    /// [`Url::query_pairs_mut`].
    fn build_url(
        &self,
        path: &str,
        extra: &[(&str, &str)],
        page_token: Option<&str>,
    ) -> Result<Url, AdminError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| AdminError::Credentials(format!("invalid endpoint path '{path}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("pageSize", &PAGE_SIZE.to_string());
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            if let Some(token) = page_token {
                pairs.append_pair("pageToken", token);
            }
        }
        Ok(url)
    }

    /// Sends an authenticated GET, surfaces Google error envelopes, and
    /// parses the body into `T`.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<T, AdminError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::AUTHORIZATION, &self.auth_header)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Self::api_error(status.as_u16(), &text));
        }

        serde_json::from_str(&text).map_err(|e| AdminError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }

    /// Converts a non-2xx response into [`AdminError::Api`], pulling the
    /// canonical status and message out of the Google error envelope
    /// (`{"error": {"code", "message", "status"}}`) when present.
    fn api_error(code: u16, body: &str) -> AdminError {
        let envelope: Option<serde_json::Value> = serde_json::from_str(body).ok();
        let error = envelope.as_ref().and_then(|v| v.get("error"));
        let status = error
            .and_then(|e| e.get("status"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned);
        let message = error
            .and_then(|e| e.get("message"))
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| body.chars().take(200).collect(), str::to_owned);
        AdminError::Api {
            code,
            status,
            message,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
