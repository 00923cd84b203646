//! API access grant models

use serde::{Deserialize, Serialize};

/// Grant record linking an organization or application to an API it may call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAccess {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// API granted by this record
    pub api_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
