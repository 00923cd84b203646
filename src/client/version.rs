//! API-Manager product version parsing and comparison
//!
//! Product versions use a `major.minor SP<n>` textual format, e.g. `7.7 SP2`.
//! Numeric components are compared positionally; the service-pack number only
//! breaks ties.

use log::debug;

/// A parsed API-Manager product version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerVersion {
    /// Dot-separated numeric components, without the service-pack suffix
    numbers: Vec<u32>,
    /// Service-pack number, 0 when absent
    service_pack: u32,
}

impl ManagerVersion {
    /// Parse a product version string.
    ///
    /// Parsing never fails: components that don't parse are dropped, matching
    /// the manager's own tolerance for build-stamped versions.
    pub fn parse(version: &str) -> Self {
        let (numeric, service_pack) = match version.find(" SP") {
            Some(idx) => {
                let sp = version[idx + 3..].parse().unwrap_or_else(|_| {
                    debug!("Can't parse service pack in version '{}'", version);
                    0
                });
                (&version[..idx], sp)
            }
            None => (version, 0),
        };

        let mut numbers = Vec::new();
        for part in numeric.split('.') {
            match part.trim().parse() {
                Ok(n) => numbers.push(n),
                Err(_) => {
                    debug!("Can't parse version component '{}' in '{}'", part, version);
                    break;
                }
            }
        }

        Self {
            numbers,
            service_pack,
        }
    }

    /// Whether this version is at least `required`.
    pub fn at_least(&self, required: &ManagerVersion) -> bool {
        let len = self.numbers.len().max(required.numbers.len());
        for i in 0..len {
            let own = self.numbers.get(i).copied().unwrap_or(0);
            let req = required.numbers.get(i).copied().unwrap_or(0);
            if own != req {
                return own > req;
            }
        }
        self.service_pack >= required.service_pack
    }
}
