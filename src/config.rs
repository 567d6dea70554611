//! Picker configuration loaded from a JSON file.
//!
//! Every field is optional in the file; missing fields fall back to the
//! defaults below. Command-line flags override whatever is loaded here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PickerError, Result};
use crate::picker::default_suggestions;
use crate::tree::path::ROOT;

/// Settings a host passes when constructing a picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    /// Directory expanded when the picker opens.
    pub initial_path: String,
    /// Directory names offered as exclusion candidates. Empty disables discovery.
    pub smart_exclude_suggestions: Vec<String>,
    /// Terminal color scheme: "default", "light", or "colorblind".
    pub color_scheme: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_path: ROOT.to_string(),
            smart_exclude_suggestions: default_suggestions(),
            color_scheme: "default".to_string(),
        }
    }
}

impl PickerConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PickerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| PickerError::InvalidConfig {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.initial_path, "/");
        assert_eq!(config.smart_exclude_suggestions.len(), 8);
        assert_eq!(config.color_scheme, "default");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"initialPath": "/src"}}"#).unwrap();

        let config = PickerConfig::load(file.path()).unwrap();
        assert_eq!(config.initial_path, "/src");
        assert_eq!(config.smart_exclude_suggestions, default_suggestions());
    }

    #[test]
    fn test_empty_suggestions() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"smartExcludeSuggestions": [], "colorScheme": "light"}}"#).unwrap();

        let config = PickerConfig::load(file.path()).unwrap();
        assert!(config.smart_exclude_suggestions.is_empty());
        assert_eq!(config.color_scheme, "light");
    }

    #[test]
    fn test_invalid_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2").unwrap();

        let err = PickerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, PickerError::InvalidConfig { .. }));
    }

    #[test]
    fn test_missing_config() {
        let err = PickerConfig::load(Path::new("/no/such/pathpick.json")).unwrap_err();
        assert!(matches!(err, PickerError::Io { .. }));
    }
}
