//! API-Manager REST client

use async_trait::async_trait;

use crate::error::Result;

pub mod manager;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod version;

pub use manager::ApiManagerClient;
pub use models::{
    ApiAccess, ApiDefinition, ApiIcon, ClientApplication, CurrentUser, ManagerConfig, Organization,
    QuotaPolicy,
};
pub use version::ManagerVersion;

/// Versioned path prefix every management call is issued under
pub const API_BASE_PATH: &str = "/api/portal/v1.3";

/// Well-known identifier of the system default quota policy
pub const SYSTEM_QUOTA_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Well-known identifier of the application default quota policy
pub const APPLICATION_DEFAULT_QUOTA_ID: &str = "00000000-0000-0000-0000-000000000001";

/// API-Manager client trait
///
/// Every operation maps to one GET against the manager. Failures propagate
/// immediately; nothing is retried.
#[async_trait]
pub trait ApiManagerApi: Send + Sync {
    /// Look up the front-end API registered under the given path.
    ///
    /// Returns the raw proxy JSON, or `None` when no API is registered there.
    async fn find_front_end_api(&self, api_path: &str) -> Result<Option<serde_json::Value>>;

    /// Download the original definition document of a back-end API
    async fn get_original_definition(&self, api_id: &str) -> Result<ApiDefinition>;

    /// Fetch the icon of a front-end API; `None` when no icon is set
    async fn get_api_icon(&self, proxy_id: &str) -> Result<Option<ApiIcon>>;

    /// Fetch a quota policy by identifier
    async fn get_quota(&self, quota_id: &str) -> Result<QuotaPolicy>;

    /// Fetch the quota assigned to one client application
    async fn get_application_quota(&self, app_id: &str) -> Result<QuotaPolicy>;

    /// List every organization known to the manager
    async fn list_organizations(&self) -> Result<Vec<Organization>>;

    /// List API-access grants of an organization
    async fn get_organization_access(&self, org_id: &str) -> Result<Vec<ApiAccess>>;

    /// List every registered client application
    async fn list_applications(&self) -> Result<Vec<ClientApplication>>;

    /// List API-access grants of a client application
    async fn get_application_access(&self, app_id: &str) -> Result<Vec<ApiAccess>>;

    /// List applications subscribed to an API (bulk endpoint, 7.7 and newer)
    async fn list_subscribed_applications(&self, api_id: &str)
    -> Result<Vec<ClientApplication>>;

    /// Account the client is authenticated as
    async fn current_user(&self) -> Result<CurrentUser>;

    /// Manager instance configuration, including the product version
    async fn manager_config(&self) -> Result<ManagerConfig>;
}
