//! Client configuration.
//!
//! Loaded from a TOML file; `VIDYAMITRA_API_URL` overrides the file either
//! way. Search order: explicit path, `./vidyamitra.toml`,
//! `~/.config/vidyamitra/config.toml`, then built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the configured API URL.
pub const API_URL_ENV: &str = "VIDYAMITRA_API_URL";

/// Configuration for the Vidyamitra API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root, prepended to every endpoint path.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_url() -> String {
    "http://127.0.0.1:8000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Load client configuration.
///
/// An explicit `path` must exist; without one, missing files fall through to
/// the next candidate and finally to defaults.
pub fn load_config(path: Option<&Path>) -> Result<ClientConfig> {
    let mut config = match path {
        Some(p) => read_config(p)
            .with_context(|| format!("failed to load config from {}", p.display()))?,
        None => {
            let mut found = None;
            for candidate in candidate_paths() {
                if candidate.exists() {
                    found = Some(read_config(&candidate).with_context(|| {
                        format!("failed to load config from {}", candidate.display())
                    })?);
                    break;
                }
            }
            found.unwrap_or_default()
        }
    };

    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            config.api_url = url;
        }
    }

    Ok(config)
}

fn read_config(path: &Path) -> Result<ClientConfig> {
    let contents = std::fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("vidyamitra.toml")];
    if let Ok(home) = std::env::var("HOME") {
        paths.push(
            PathBuf::from(home)
                .join(".config")
                .join("vidyamitra")
                .join("config.toml"),
        );
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "http://127.0.0.1:8000/api");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn parse_partial_file_fills_defaults() {
        let config: ClientConfig = toml::from_str(r#"api_url = "https://vidyamitra.app/api""#).unwrap();
        assert_eq!(config.api_url, "https://vidyamitra.app/api");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/vidyamitra.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to load config"));
    }

    #[test]
    fn explicit_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = \"http://10.0.0.5:9000/api\"\ntimeout_secs = 5\n")
            .unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.api_url, "http://10.0.0.5:9000/api");
        assert_eq!(config.timeout_secs, 5);
    }
}
