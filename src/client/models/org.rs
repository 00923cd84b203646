//! Organization models

use serde::{Deserialize, Serialize};

/// Organization registered in the API-Manager
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Organization ID
    pub id: String,

    /// Organization name
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Whether the organization may register its own APIs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub development: Option<bool>,
}
