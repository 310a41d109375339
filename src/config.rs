/// Application settings
///
/// The upload endpoint and timeout are resolved at startup from three
/// layers: built-in defaults, an optional JSON file in the user's
/// config directory, and a `STUDENT_FORM_ENDPOINT` environment
/// variable override. Nothing here is ever written back.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default record endpoint, overridable per install
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:4321/saveimage";

/// Default upload timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable that overrides the endpoint
const ENDPOINT_ENV_VAR: &str = "STUDENT_FORM_ENDPOINT";

/// Resolved runtime settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Where records are POSTed as multipart form data
    pub endpoint: String,
    /// Whole-request upload timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            endpoint: String::from(DEFAULT_ENDPOINT),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Load settings: defaults, then config file, then environment
    pub fn load() -> Self {
        let mut settings = Self::read_config_file().unwrap_or_default();

        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV_VAR) {
            println!("🌐 Endpoint overridden by {}", ENDPOINT_ENV_VAR);
            settings.endpoint = endpoint;
        }

        settings
    }

    /// Parse a settings document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the optional settings file; None when absent or invalid
    fn read_config_file() -> Option<Self> {
        let path = Self::config_path()?;
        let json = std::fs::read_to_string(&path).ok()?;

        match Self::from_json(&json) {
            Ok(settings) => {
                println!("📁 Settings loaded from {}", path.display());
                Some(settings)
            }
            Err(e) => {
                eprintln!("⚠️  Ignoring invalid settings file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Get the path where the settings file is looked up
    ///
    /// - Linux: ~/.config/student-form/settings.json
    /// - macOS: ~/Library/Application Support/student-form/settings.json
    /// - Windows: %APPDATA%\student-form\settings.json
    fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(|| dirs::home_dir())?;
        path.push("student-form");
        path.push("settings.json");
        Some(path)
    }
}
