//! Wire models for the API-Manager REST interface

pub mod access;
pub mod api;
pub mod app;
pub mod manager;
pub mod org;
pub mod quota;

pub use access::ApiAccess;
pub use api::{ApiDefinition, ApiIcon, ApiProxy};
pub use app::ClientApplication;
pub use manager::{CurrentUser, ManagerConfig};
pub use org::Organization;
pub use quota::{QuotaPolicy, QuotaRestriction};

/// Serde adapter for binary fields carried as base64 strings in JSON.
pub(crate) mod base64_bytes {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
