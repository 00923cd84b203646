//! Default quota resolution
//!
//! The manager keeps two well-known quota policies: the system default
//! (all-zero UUID) and the application default (UUID ending in 1). Both are
//! required for an export; either one failing to load is fatal.

use crate::client::models::{QuotaPolicy, QuotaRestriction};
use crate::client::{APPLICATION_DEFAULT_QUOTA_ID, ApiManagerApi, SYSTEM_QUOTA_ID};
use crate::error::{ApiError, Error, Result};

/// Fetch the system and application default quota policies.
pub async fn resolve_default_quotas<C: ApiManagerApi + ?Sized>(
    client: &C,
) -> Result<(QuotaPolicy, QuotaPolicy)> {
    let application = client
        .get_quota(APPLICATION_DEFAULT_QUOTA_ID)
        .await
        .map_err(quota_denied)?;
    let system = client
        .get_quota(SYSTEM_QUOTA_ID)
        .await
        .map_err(quota_denied)?;
    Ok((system, application))
}

/// The quota endpoints answer 403 for accounts below the administrator role.
fn quota_denied(err: Error) -> Error {
    match err {
        Error::Api(ApiError::Forbidden(_)) => ApiError::Forbidden(
            "reading quota configuration requires the API administrator role".to_string(),
        )
        .into(),
        other => other,
    }
}

/// Find the restriction addressing `api_id`; the first match wins.
pub fn find_restriction<'a>(policy: &'a QuotaPolicy, api_id: &str) -> Option<&'a QuotaRestriction> {
    policy.restrictions.iter().find(|r| r.api == api_id)
}

/// Copy of `policy` narrowed to the single restriction addressing `api_id`,
/// `None` when the policy does not restrict that API.
pub fn narrow_to_api(policy: &QuotaPolicy, api_id: &str) -> Option<QuotaPolicy> {
    find_restriction(policy, api_id).map(|restriction| QuotaPolicy {
        id: policy.id.clone(),
        policy_type: policy.policy_type.clone(),
        name: policy.name.clone(),
        description: policy.description.clone(),
        restrictions: vec![restriction.clone()],
        system: policy.system,
    })
}
