//! Application configuration loading
//!
//! The build reads the same `app/app_config.json` the application itself
//! ships with. Only the fields that drive the build are deserialized here;
//! the rest of the document is ignored.

use serde::Deserialize;
use std::path::Path;

use crate::error::{self, Result};

pub mod mode;

pub use mode::BuildMode;

/// Application config fields that drive the build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Application name, used in the output executable name
    pub name: String,
    /// Application version, used in the output executable name
    pub version: String,
    /// Icon resource path embedded via linker flags, when present
    pub icon_path: Option<String>,
}

/// Raw document shape; `AppName` falls back to the legacy `Name` key
#[derive(Debug, Deserialize)]
struct RawAppConfig {
    #[serde(rename = "AppName", default)]
    app_name: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Version", default)]
    version: String,
    #[serde(rename = "IconPath", default)]
    icon_path: Option<String>,
}

impl AppConfig {
    /// Load and validate the application config from a JSON file
    ///
    /// Fails before any command is composed: a missing or unparsable file is
    /// a config load error, an absent or empty `AppName`/`Version` is a
    /// missing field error.
    pub fn load(path: &Path) -> Result<Self> {
        let display_path = path.display().to_string();

        if !path.exists() {
            return Err(error::config::not_found(&display_path));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| error::config::parse_failed(&display_path, e.to_string()))?;

        let raw: RawAppConfig = serde_json::from_str(&content)
            .map_err(|e| error::config::parse_failed(&display_path, e.to_string()))?;

        let name = if raw.app_name.is_empty() {
            raw.name
        } else {
            raw.app_name
        };

        if name.is_empty() {
            return Err(error::config::missing_field("AppName", &display_path));
        }
        if raw.version.is_empty() {
            return Err(error::config::missing_field("Version", &display_path));
        }

        Ok(Self {
            name,
            version: raw.version,
            icon_path: raw.icon_path.filter(|p| !p.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("app_config.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{"AppName":"Vmv","Version":"2.1.0","IconPath":"app/app.ico","Env":"prod"}"#,
        );

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.name, "Vmv");
        assert_eq!(config.version, "2.1.0");
        assert_eq!(config.icon_path, Some("app/app.ico".to_string()));
    }

    #[test]
    fn test_load_legacy_name_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"Name":"Legacy","Version":"1.0.0"}"#);

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.name, "Legacy");
    }

    #[test]
    fn test_app_name_takes_precedence_over_legacy() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{"AppName":"MainApp","Name":"Legacy","Version":"1.0.0"}"#,
        );

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.name, "MainApp");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = AppConfig::load(&dir.path().join("nope.json"));
        assert!(matches!(
            result.unwrap_err(),
            crate::error::MmakeError::ConfigNotFound { .. }
        ));
    }

    #[test]
    fn test_load_unparsable_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "not json at all");
        let result = AppConfig::load(&path);
        assert!(matches!(
            result.unwrap_err(),
            crate::error::MmakeError::ConfigParseFailed { .. }
        ));
    }

    #[test]
    fn test_load_missing_version() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"AppName":"Vmv"}"#);
        match AppConfig::load(&path).unwrap_err() {
            crate::error::MmakeError::ConfigMissingField { field, .. } => {
                assert_eq!(field, "Version");
            }
            other => panic!("Expected ConfigMissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_name() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"Version":"1.0.0"}"#);
        match AppConfig::load(&path).unwrap_err() {
            crate::error::MmakeError::ConfigMissingField { field, .. } => {
                assert_eq!(field, "AppName");
            }
            other => panic!("Expected ConfigMissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_icon_path_treated_as_absent() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{"AppName":"Vmv","Version":"1.0.0","IconPath":""}"#,
        );
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.icon_path, None);
    }
}
