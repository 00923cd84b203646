//! Stage profile configuration
//!
//! Connection settings can be kept in per-stage YAML profiles so the usual
//! flags don't have to be repeated on every invocation: `--stage prod` reads
//! `env.prod.yaml`, no stage reads `env.yaml`. Profiles are searched in the
//! working directory first, then in `~/.apimex/`. Flags always win over
//! profile values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default API-Manager port
pub const DEFAULT_PORT: u16 = 8075;

/// Default API-Manager host
pub const DEFAULT_HOST: &str = "localhost";

/// Connection settings read from a stage profile file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl StageProfile {
    /// Profile file name for a stage
    pub fn file_name(stage: Option<&str>) -> String {
        match stage {
            Some(stage) => format!("env.{}.yaml", stage),
            None => "env.yaml".to_string(),
        }
    }

    /// Load the profile for `stage`.
    ///
    /// A named stage must exist somewhere on the search path; the unnamed
    /// default profile is optional and falls back to empty settings.
    pub fn load(stage: Option<&str>) -> Result<Self> {
        let file_name = Self::file_name(stage);
        for path in Self::candidate_paths(&file_name) {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        match stage {
            Some(_) => Err(ConfigError::NotFound(file_name).into()),
            None => Ok(Self::default()),
        }
    }

    /// Load a profile from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let profile = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(profile)
    }

    fn candidate_paths(file_name: &str) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(file_name)];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".apimex").join(file_name));
        }
        paths
    }
}

/// Resolved connection settings after merging flags over the stage profile
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Settings {
    /// Merge CLI flags over profile values; unset falls back to defaults.
    pub fn resolve(
        host: Option<String>,
        port: Option<u16>,
        username: Option<String>,
        password: Option<String>,
        profile: &StageProfile,
    ) -> Self {
        Self {
            host: host
                .or_else(|| profile.host.clone())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: port.or(profile.port).unwrap_or(DEFAULT_PORT),
            username: username.or_else(|| profile.username.clone()),
            password: password.or_else(|| profile.password.clone()),
        }
    }

    /// Origin the manager is reached at.
    ///
    /// A scheme-qualified host passes through verbatim (the port flag is
    /// ignored then); a bare hostname becomes `https://host:port`.
    pub fn origin(&self) -> String {
        if self.host.contains("://") {
            self.host.trim_end_matches('/').to_string()
        } else {
            format!("https://{}:{}", self.host, self.port)
        }
    }
}
