//! Loading client configuration from files and command-line overrides
//!
//! Files are read as JSON or YAML and converted into the same script value a
//! Python caller would have passed, so the resolution rules are identical.

use crate::error::{Error, Result};
use scriptnet_core::Value;
use std::path::Path;

/// Read a configuration file into a script value
pub fn load_file(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    let is_yaml = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false);

    let document: serde_json::Value = if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "YAML".to_string(),
            reason: e.to_string(),
        })?
    } else {
        serde_json::from_str(&content).map_err(|e| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "JSON".to_string(),
            reason: e.to_string(),
        })?
    };

    tracing::debug!(path = %path.display(), "Loaded client configuration");
    Ok(Value::from(document))
}

/// Parse a `--set` value: JSON when it parses, otherwise a plain string
pub fn parse_override_value(raw: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Layer `--set` overrides on top of a loaded configuration
///
/// Overrides need a table to land in. A loaded value of any other shape is
/// returned unchanged so the client builder reports it.
pub fn apply_overrides(base: Option<Value>, overrides: &[(String, String)]) -> Option<Value> {
    if overrides.is_empty() {
        return base;
    }

    let mut table = match base {
        None | Some(Value::Nil) => Default::default(),
        Some(Value::Table(table)) => table,
        Some(other) => return Some(other),
    };

    for (key, raw) in overrides {
        table.insert(key.clone(), parse_override_value(raw));
    }

    Some(Value::Table(table))
}
