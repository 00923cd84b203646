//! Export orchestration
//!
//! One export is a single sequential pass: front-end lookup, definition
//! download, icon, default quotas, granted organizations, subscribed
//! applications. Every request completes before the next is issued and any
//! failure past the lookup aborts the whole export.

use log::{debug, info};
use serde_json::Value;

use crate::client::ApiManagerApi;
use crate::client::models::ApiProxy;
use crate::error::{ExportError, Result};

pub mod access;
pub mod document;
pub mod quota;
pub mod state;

pub use document::ExportDocument;
pub use state::ApiState;

/// Assembles the exportable state of one front-end API.
pub struct Exporter<C> {
    client: C,
}

impl<C: ApiManagerApi> Exporter<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Export the API registered under `api_path`.
    ///
    /// An unknown path yields an invalid state without touching any further
    /// endpoint.
    pub async fn export(&self, api_path: &str) -> Result<ApiState> {
        let Some(raw) = self.client.find_front_end_api(api_path).await? else {
            info!("No front-end API found under '{}'", api_path);
            return Ok(ApiState::not_found());
        };

        self.assemble(raw)
            .await
            .map_err(|err| ExportError::StateInit(Box::new(err)).into())
    }

    async fn assemble(&self, raw: Value) -> Result<ApiState> {
        let proxy: ApiProxy = serde_json::from_value(raw)?;
        debug!("Assembling state for '{}' ({})", proxy.name, proxy.id);

        let definition = self
            .client
            .get_original_definition(&proxy.api_id)
            .await
            .map_err(|err| ExportError::Definition(Box::new(err)))?;

        let icon = match proxy.image {
            Some(_) => self.client.get_api_icon(&proxy.id).await?,
            None => None,
        };

        let (system, application) = quota::resolve_default_quotas(&self.client).await?;
        let system_quota = quota::narrow_to_api(&system, &proxy.id);
        let application_quota = quota::narrow_to_api(&application, &proxy.id);

        let client_organizations = access::granted_organizations(&self.client, &proxy.id)
            .await?
            .into_iter()
            .map(|org| org.name)
            .collect();
        let applications = access::granted_applications(&self.client, &proxy.id).await?;

        Ok(ApiState {
            proxy: Some(proxy),
            definition: Some(definition),
            icon,
            client_organizations,
            applications,
            system_quota,
            application_quota,
            valid: true,
        })
    }
}
