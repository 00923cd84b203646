//! Front-end API models

use serde::{Deserialize, Serialize};

/// Front-end (proxy) registration of an API as returned by `/proxies`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProxy {
    /// Proxy identifier
    pub id: String,

    /// Back-end API identifier in the repository
    pub api_id: String,

    /// API name
    pub name: String,

    /// Exposure path the API is registered under
    pub path: String,

    /// Owning organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,

    /// API version label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Lifecycle state (unpublished, published, deprecated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Icon resource path; present only when the API carries an icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Remaining proxy configuration, passed through to the export untouched
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

/// Original API definition document (OpenAPI/Swagger/WSDL)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDefinition {
    /// Raw document bytes, base64 in the export
    #[serde(with = "super::base64_bytes")]
    pub content: Vec<u8>,

    /// Content type reported on download
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// Icon attached to a front-end API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiIcon {
    /// Raw image bytes, base64 in the export
    #[serde(with = "super::base64_bytes")]
    pub content: Vec<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}
