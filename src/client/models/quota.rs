//! Quota policy models

use serde::{Deserialize, Serialize};

/// Named quota policy as returned by `/quotas/{id}` and
/// `/applications/{id}/quota/`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Per-API restrictions, in the order the manager reports them
    #[serde(default)]
    pub restrictions: Vec<QuotaRestriction>,

    /// Marks the manager-wide default policies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<bool>,
}

/// One per-API restriction inside a quota policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaRestriction {
    /// Target API identifier
    pub api: String,

    /// HTTP method the restriction applies to, `*` for all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Restriction kind (throttle, throttlemb)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub restriction_type: Option<String>,

    /// Rate parameters (messages, period, per, mb) as the manager reports them
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub config: serde_json::Map<String, serde_json::Value>,
}
