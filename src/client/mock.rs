//! Mock API-Manager client for testing
//!
//! Provides a fixture-backed implementation of [`ApiManagerApi`] for unit
//! testing the export logic without a server.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::ApiManagerApi;
use super::models::{
    ApiAccess, ApiDefinition, ApiIcon, ClientApplication, CurrentUser, ManagerConfig, Organization,
    QuotaPolicy,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure responses via the `with_*` builder methods, then hand the mock to
/// the code under test. Call counts can be asserted afterwards.
pub struct MockApiManagerClient {
    front_end_api: Option<serde_json::Value>,
    definition: Option<ApiDefinition>,
    icon: Option<ApiIcon>,
    /// Quota policies keyed by quota identifier
    quotas: HashMap<String, QuotaPolicy>,
    /// Application quotas keyed by application identifier
    app_quotas: HashMap<String, QuotaPolicy>,
    orgs: Vec<Organization>,
    org_access: HashMap<String, Vec<ApiAccess>>,
    apps: Vec<ClientApplication>,
    app_access: HashMap<String, Vec<ApiAccess>>,
    subscribed: Vec<ClientApplication>,
    user: CurrentUser,
    product_version: String,
    calls: Arc<Mutex<CallCounts>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub find_front_end_api: usize,
    pub get_original_definition: usize,
    pub get_api_icon: usize,
    pub get_quota: usize,
    pub get_application_quota: usize,
    pub list_organizations: usize,
    pub get_organization_access: usize,
    pub list_applications: usize,
    pub get_application_access: usize,
    pub list_subscribed_applications: usize,
    pub current_user: usize,
    pub manager_config: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.find_front_end_api
            + self.get_original_definition
            + self.get_api_icon
            + self.get_quota
            + self.get_application_quota
            + self.list_organizations
            + self.get_organization_access
            + self.list_applications
            + self.get_application_access
            + self.list_subscribed_applications
            + self.current_user
            + self.manager_config
    }
}

impl Default for MockApiManagerClient {
    fn default() -> Self {
        Self {
            front_end_api: None,
            definition: Some(ApiDefinition {
                content: b"{}".to_vec(),
                content_type: Some("application/json".to_string()),
            }),
            icon: None,
            quotas: HashMap::new(),
            app_quotas: HashMap::new(),
            orgs: Vec::new(),
            org_access: HashMap::new(),
            apps: Vec::new(),
            app_access: HashMap::new(),
            subscribed: Vec::new(),
            user: CurrentUser {
                id: None,
                login_name: "apiadmin".to_string(),
                role: "admin".to_string(),
            },
            product_version: "7.7 SP2".to_string(),
            calls: Arc::new(Mutex::new(CallCounts::default())),
        }
    }
}

impl MockApiManagerClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_front_end_api(mut self, proxy: serde_json::Value) -> Self {
        self.front_end_api = Some(proxy);
        self
    }

    pub fn with_definition(mut self, definition: ApiDefinition) -> Self {
        self.definition = Some(definition);
        self
    }

    pub fn with_icon(mut self, icon: ApiIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_quota(mut self, quota_id: &str, policy: QuotaPolicy) -> Self {
        self.quotas.insert(quota_id.to_string(), policy);
        self
    }

    pub fn with_app_quota(mut self, app_id: &str, policy: QuotaPolicy) -> Self {
        self.app_quotas.insert(app_id.to_string(), policy);
        self
    }

    pub fn with_orgs(mut self, orgs: Vec<Organization>) -> Self {
        self.orgs = orgs;
        self
    }

    pub fn with_org_access(mut self, org_id: &str, access: Vec<ApiAccess>) -> Self {
        self.org_access.insert(org_id.to_string(), access);
        self
    }

    pub fn with_apps(mut self, apps: Vec<ClientApplication>) -> Self {
        self.apps = apps;
        self
    }

    pub fn with_app_access(mut self, app_id: &str, access: Vec<ApiAccess>) -> Self {
        self.app_access.insert(app_id.to_string(), access);
        self
    }

    pub fn with_subscribed(mut self, apps: Vec<ClientApplication>) -> Self {
        self.subscribed = apps;
        self
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.user.role = role.to_string();
        self
    }

    pub fn with_product_version(mut self, version: &str) -> Self {
        self.product_version = version.to_string();
        self
    }

    /// Snapshot of the call counts so far.
    pub fn calls(&self) -> CallCounts {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApiManagerApi for MockApiManagerClient {
    async fn find_front_end_api(&self, api_path: &str) -> Result<Option<serde_json::Value>> {
        self.calls.lock().unwrap().find_front_end_api += 1;
        Ok(self
            .front_end_api
            .clone()
            .filter(|proxy| proxy.get("path").and_then(|p| p.as_str()) == Some(api_path)))
    }

    async fn get_original_definition(&self, api_id: &str) -> Result<ApiDefinition> {
        self.calls.lock().unwrap().get_original_definition += 1;
        self.definition.clone().ok_or_else(|| {
            ApiError::NotFound(format!("/apirepo/{}/download", api_id)).into()
        })
    }

    async fn get_api_icon(&self, _proxy_id: &str) -> Result<Option<ApiIcon>> {
        self.calls.lock().unwrap().get_api_icon += 1;
        Ok(self.icon.clone())
    }

    async fn get_quota(&self, quota_id: &str) -> Result<QuotaPolicy> {
        self.calls.lock().unwrap().get_quota += 1;
        self.quotas
            .get(quota_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("/quotas/{}", quota_id)).into())
    }

    async fn get_application_quota(&self, app_id: &str) -> Result<QuotaPolicy> {
        self.calls.lock().unwrap().get_application_quota += 1;
        self.app_quotas
            .get(app_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("/applications/{}/quota/", app_id)).into())
    }

    async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.calls.lock().unwrap().list_organizations += 1;
        Ok(self.orgs.clone())
    }

    async fn get_organization_access(&self, org_id: &str) -> Result<Vec<ApiAccess>> {
        self.calls.lock().unwrap().get_organization_access += 1;
        Ok(self.org_access.get(org_id).cloned().unwrap_or_default())
    }

    async fn list_applications(&self) -> Result<Vec<ClientApplication>> {
        self.calls.lock().unwrap().list_applications += 1;
        Ok(self.apps.clone())
    }

    async fn get_application_access(&self, app_id: &str) -> Result<Vec<ApiAccess>> {
        self.calls.lock().unwrap().get_application_access += 1;
        Ok(self.app_access.get(app_id).cloned().unwrap_or_default())
    }

    async fn list_subscribed_applications(
        &self,
        _api_id: &str,
    ) -> Result<Vec<ClientApplication>> {
        self.calls.lock().unwrap().list_subscribed_applications += 1;
        Ok(self.subscribed.clone())
    }

    async fn current_user(&self) -> Result<CurrentUser> {
        self.calls.lock().unwrap().current_user += 1;
        Ok(self.user.clone())
    }

    async fn manager_config(&self) -> Result<ManagerConfig> {
        self.calls.lock().unwrap().manager_config += 1;
        Ok(ManagerConfig {
            product_version: self.product_version.clone(),
        })
    }
}
