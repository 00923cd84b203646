//! Granted organization and application lookup

use log::{debug, info};

use crate::client::models::{ClientApplication, Organization};
use crate::client::{ApiManagerApi, ManagerVersion};
use crate::error::{ExportError, Result};

/// Managers from this version on expose the bulk subscriptions endpoint
const BULK_SUBSCRIPTIONS_SINCE: &str = "7.7";

/// Organizations holding an access grant for `api_id`.
pub async fn granted_organizations<C: ApiManagerApi + ?Sized>(
    client: &C,
    api_id: &str,
) -> Result<Vec<Organization>> {
    let mut granted = Vec::new();
    for org in client.list_organizations().await? {
        let access = client.get_organization_access(&org.id).await?;
        if access.iter().any(|grant| grant.api_id == api_id) {
            granted.push(org);
        }
    }
    Ok(granted)
}

/// Applications subscribed to `api_id`, with their quotas attached.
///
/// Application listings need the administrator role; a lesser account yields
/// an empty list without touching any application endpoint. An empty
/// subscriber list is legitimate and skips the quota pass.
pub async fn granted_applications<C: ApiManagerApi + ?Sized>(
    client: &C,
    api_id: &str,
) -> Result<Vec<ClientApplication>> {
    let user = client.current_user().await?;
    if !user.is_admin() {
        info!(
            "Account '{}' lacks the administrator role, skipping client applications",
            user.login_name
        );
        return Ok(Vec::new());
    }

    let config = client.manager_config().await?;
    let version = ManagerVersion::parse(&config.product_version);
    let mut applications = if version.at_least(&ManagerVersion::parse(BULK_SUBSCRIPTIONS_SINCE)) {
        subscribed_applications(client, api_id, &config.product_version).await?
    } else {
        debug!(
            "API-Manager {} predates the bulk subscriptions endpoint, walking all applications",
            config.product_version
        );
        let mut granted = Vec::new();
        for app in client.list_applications().await? {
            let access = client.get_application_access(&app.id).await?;
            if access.iter().any(|grant| grant.api_id == api_id) {
                granted.push(app);
            }
        }
        granted
    };

    if applications.is_empty() {
        // no apps subscribed to this API
        return Ok(applications);
    }

    for app in &mut applications {
        app.app_quota = Some(client.get_application_quota(&app.id).await?);
    }
    Ok(applications)
}

/// Bulk subscriber lookup via `/proxies/{apiId}/applications`.
///
/// Refuses to run against managers older than 7.7, which lack the endpoint.
pub async fn subscribed_applications<C: ApiManagerApi + ?Sized>(
    client: &C,
    api_id: &str,
    product_version: &str,
) -> Result<Vec<ClientApplication>> {
    let version = ManagerVersion::parse(product_version);
    if !version.at_least(&ManagerVersion::parse(BULK_SUBSCRIPTIONS_SINCE)) {
        return Err(ExportError::UnsupportedVersion(product_version.to_string()).into());
    }
    client.list_subscribed_applications(api_id).await
}
