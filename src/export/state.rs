//! Composite API state record

use serde::Serialize;

use crate::client::models::{ApiDefinition, ApiIcon, ApiProxy, ClientApplication, QuotaPolicy};

/// Everything known about one front-end API, assembled for export.
///
/// `valid` is true only after the proxy was found and its definition fetched;
/// a lookup miss yields an invalid state with every attachment empty.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiState {
    /// Proxy configuration as registered in the manager
    #[serde(flatten)]
    pub proxy: Option<ApiProxy>,

    /// Original definition document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<ApiDefinition>,

    /// Icon bytes, when the API carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<ApiIcon>,

    /// Names of organizations granted access
    pub client_organizations: Vec<String>,

    /// Applications subscribed to the API, with quotas attached
    pub applications: Vec<ClientApplication>,

    /// System default quota narrowed to this API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_quota: Option<QuotaPolicy>,

    /// Application default quota narrowed to this API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_quota: Option<QuotaPolicy>,

    pub valid: bool,
}

impl ApiState {
    /// State recording that no API is registered under the requested path
    pub fn not_found() -> Self {
        Self {
            proxy: None,
            definition: None,
            icon: None,
            client_organizations: Vec::new(),
            applications: Vec::new(),
            system_quota: None,
            application_quota: None,
            valid: false,
        }
    }
}
