//! Client application models

use serde::{Deserialize, Serialize};

use super::quota::QuotaPolicy;

/// Registered consumer application that may be granted access to APIs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientApplication {
    /// Application ID
    pub id: String,

    /// Application name
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Owning organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Quota assigned to this application, attached after the fetch.
    /// Populated only for administrative accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_quota: Option<QuotaPolicy>,
}
