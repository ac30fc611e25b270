//! Configuration management
//!
//! settings.json format (camelCase, shared with any embedding application):
//! ```json
//! {
//!   "app": { "demoMode": false, "horizonUrl": "https://horizon.stellar.org" }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default Horizon server (Stellar public network)
pub const DEFAULT_HORIZON_URL: &str = "https://horizon.stellar.org";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_mode: bool,
    #[serde(default)]
    horizon_url: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Walletd configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub demo_mode: bool,
    pub horizon_url: String,
    // Keep the raw settings for preservation when saving
    raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo_mode: false,
            horizon_url: DEFAULT_HORIZON_URL.to_string(),
            raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the walletd directory
    ///
    /// Demo mode can be enabled via:
    /// 1. Settings file (wd demo on)
    /// 2. Environment variable WALLETD_DEMO_MODE (for CI/testing)
    pub fn load(walletd_dir: &Path) -> Result<Self> {
        let settings_path = walletd_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let demo_mode = match std::env::var("WALLETD_DEMO_MODE").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.app.demo_mode,
        };

        let horizon_url = std::env::var("WALLETD_HORIZON_URL")
            .ok()
            .or_else(|| raw.app.horizon_url.clone())
            .unwrap_or_else(|| DEFAULT_HORIZON_URL.to_string());

        Ok(Self {
            demo_mode,
            horizon_url,
            raw_settings: raw,
        })
    }

    /// Save config to the walletd directory
    ///
    /// Preserves settings the CLI doesn't manage.
    pub fn save(&self, walletd_dir: &Path) -> Result<()> {
        let mut raw = self.raw_settings.clone();
        raw.app.demo_mode = self.demo_mode;
        raw.app.horizon_url = Some(self.horizon_url.clone());

        let settings_path = walletd_dir.join("settings.json");
        let content = serde_json::to_string_pretty(&raw)?;
        std::fs::write(settings_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_no_settings_file() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert!(!config.demo_mode);
        assert_eq!(config.horizon_url, DEFAULT_HORIZON_URL);
    }

    #[test]
    fn test_save_round_trips_and_preserves_unknown_keys() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"app": {"demoMode": true, "theme": "dark"}, "plugins": {}}"#,
        )
        .unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        assert!(config.demo_mode);

        config.demo_mode = false;
        config.save(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["app"]["demoMode"], false);
        assert_eq!(value["app"]["theme"], "dark");
        assert!(value.get("plugins").is_some());
    }
}
