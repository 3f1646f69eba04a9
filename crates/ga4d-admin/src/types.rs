//! Analytics Admin API response types.
//!
//! All types model the JSON structures returned by the `v1alpha` REST
//! surface. List endpoints wrap their items with a `nextPageToken`; the
//! client follows that token internally, so callers only ever see full
//! `Vec`s.

use serde::Deserialize;

/// A Google Analytics account (`accounts/123`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Resource name, `accounts/{id}`.
    pub name: String,
    #[serde(default)]
    pub display_name: String,
}

/// Discriminator for GA property flavors. Only ordinary (GA4) properties
/// are of interest; subproperties, rollups, and legacy types are dropped
/// by the pipeline without error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum PropertyType {
    #[default]
    #[serde(rename = "PROPERTY_TYPE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "PROPERTY_TYPE_ORDINARY")]
    Ordinary,
    #[serde(rename = "PROPERTY_TYPE_SUBPROPERTY")]
    Subproperty,
    #[serde(rename = "PROPERTY_TYPE_ROLLUP")]
    Rollup,
}

/// A GA4 property (`properties/123456789`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Resource name, `properties/{numeric id}`.
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub property_type: PropertyType,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
    /// Parent resource name, `accounts/{id}`.
    #[serde(default)]
    pub parent: Option<String>,
    /// RFC 3339 creation timestamp.
    #[serde(default)]
    pub create_time: Option<String>,
}

impl Property {
    /// True for ordinary (GA4) properties, the only kind the pipeline keeps.
    #[must_use]
    pub fn is_ordinary(&self) -> bool {
        self.property_type == PropertyType::Ordinary
    }
}

/// Web-stream detail carried by website data streams.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebStreamData {
    /// Domain of the site being measured, e.g. `https://www.example.com`.
    #[serde(default)]
    pub default_uri: Option<String>,
    #[serde(default)]
    pub measurement_id: Option<String>,
}

/// A data-collection stream attached to a property.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataStream {
    pub name: String,
    #[serde(default, rename = "type")]
    pub stream_type: Option<String>,
    #[serde(default)]
    pub web_stream_data: Option<WebStreamData>,
}

/// A role grant for one identity on an account or property.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessBinding {
    #[serde(default)]
    pub name: Option<String>,
    /// Identity the roles are bound to, in `user:{email}` form.
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

// ---------------------------------------------------------------------------
// List envelopes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccountList {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PropertyList {
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DataStreamList {
    #[serde(default)]
    pub data_streams: Vec<DataStream>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccessBindingList {
    #[serde(default)]
    pub access_bindings: Vec<AccessBinding>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}
