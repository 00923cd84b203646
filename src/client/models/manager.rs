//! Manager instance metadata models

use serde::{Deserialize, Serialize};

/// Account the client is authenticated as, from `/currentuser`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub login_name: String,

    /// Manager role (user, oadmin, admin)
    pub role: String,
}

impl CurrentUser {
    /// Whether the account holds the API administrator role
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Manager instance configuration, from `/config`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerConfig {
    /// Product version, e.g. `7.7 SP2`
    pub product_version: String,
}
