//! HTTP client for the Google Analytics Admin API.
//!
//! Covers the handful of `v1alpha` endpoints the discovery and access-grant
//! tools need: account/property/data-stream listing and access-binding
//! management. Authentication is a service-account OAuth2 bearer token
//! fetched once at startup (see [`credentials`]).

mod client;
pub mod credentials;
mod error;
pub mod normalize;
mod types;

pub use client::AdminClient;
pub use credentials::CredentialSource;
pub use error::AdminError;
pub use types::{Account, AccessBinding, DataStream, Property, PropertyType, WebStreamData};
