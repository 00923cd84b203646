//! Export document emission
//!
//! Import-only fields must never appear in an exported document, whatever
//! value the manager reports for them. The proxy record passes unknown
//! configuration through verbatim, so the exclusion is applied to the
//! serialized value at every depth rather than to individual model types.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use super::state::ApiState;
use crate::error::Result;

/// Fields stripped from the document before it is written
const IMPORT_ONLY_FIELDS: &[&str] = &["certFile", "useForInbound", "useForOutbound"];

/// Serialized export document, cleaned of import-only fields
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ExportDocument(Value);

impl ExportDocument {
    pub fn from_state(state: &ApiState) -> Result<Self> {
        let mut value = serde_json::to_value(state)?;
        strip_import_only(&mut value);
        Ok(Self(value))
    }

    /// Write the document as pretty-printed UTF-8 JSON.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let mut bytes = serde_json::to_vec_pretty(&self.0)?;
        bytes.push(b'\n');
        std::fs::write(path, bytes)?;
        Ok(())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

fn strip_import_only(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for field in IMPORT_ONLY_FIELDS {
                map.remove(*field);
            }
            for nested in map.values_mut() {
                strip_import_only(nested);
            }
        }
        Value::Array(items) => {
            for item in items {
                strip_import_only(item);
            }
        }
        _ => {}
    }
}
