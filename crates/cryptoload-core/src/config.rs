// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Provider configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::component::{Component, LoadedSet};
use crate::error::{CryptoLoadError, Result};

/// Settings for a crypto provider.
///
/// Stored as JSON, e.g. `{ "preload": ["ssl", "digests"] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Components initialized as soon as the provider is built.  Anything
    /// not listed stays lazy until first requested.
    pub preload: Vec<Component>,
}

impl ProviderConfig {
    /// Configuration that preloads every component.
    pub fn all() -> Self {
        Self {
            preload: Component::ALL.to_vec(),
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the JSON file at `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        debug!(preload = config.preload.len(), "provider config loaded");
        Ok(config)
    }

    /// Reject a `preload` list that names the same component twice.
    pub fn validate(&self) -> Result<()> {
        let mut seen = LoadedSet::new();
        for component in &self.preload {
            if !seen.insert(*component) {
                return Err(CryptoLoadError::Config(format!(
                    "component {component} listed more than once in preload"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_is_fully_lazy() {
        assert!(ProviderConfig::default().preload.is_empty());
    }

    #[test]
    fn parses_preload_list() {
        let config = ProviderConfig::from_json_str(r#"{ "preload": ["ssl", "digests"] }"#)
            .expect("valid config");
        assert_eq!(config.preload, vec![Component::Ssl, Component::Digests]);
    }

    #[test]
    fn preload_names_are_case_insensitive() {
        let config = ProviderConfig::from_json_str(r#"{ "preload": ["SSL", "Ciphers"] }"#)
            .expect("valid config");
        assert_eq!(config.preload, vec![Component::Ssl, Component::Ciphers]);
    }

    #[test]
    fn missing_field_uses_default() {
        let config = ProviderConfig::from_json_str("{}").expect("valid config");
        assert_eq!(config, ProviderConfig::default());
    }

    #[test]
    fn duplicate_preload_is_rejected() {
        let err = ProviderConfig::from_json_str(r#"{ "preload": ["ciphers", "ciphers"] }"#)
            .unwrap_err();
        assert!(matches!(err, CryptoLoadError::Config(_)), "got {err}");
    }

    #[test]
    fn unknown_component_is_a_serialization_error() {
        let err = ProviderConfig::from_json_str(r#"{ "preload": ["engines"] }"#).unwrap_err();
        assert!(matches!(err, CryptoLoadError::Serialization(_)), "got {err}");
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{}", serde_json::to_string(&ProviderConfig::all()).unwrap()).unwrap();

        let config = ProviderConfig::from_path(file.path()).expect("read config");
        assert_eq!(config, ProviderConfig::all());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = ProviderConfig::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CryptoLoadError::Io(_)), "got {err}");
    }
}
