//
//  antarctica-cli
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loads and saves the CLI settings from a TOML file in the platform config
//! directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/antarctica/config.toml`
//! - **macOS**: `~/Library/Application Support/antarctica/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\antarctica\config\config.toml`
//!
//! Setting `ANTARCTICA_CONFIG_DIR` moves the file into that directory.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [server]
//! url = "https://antarctica-server.tk"
//! local = false
//!
//! [tls]
//! ca_cert = "/etc/antarctica/ca.pem"
//! identity = "/etc/antarctica/client.pem"
//!
//! [session]
//! user_id = 7
//! login = "penguin"
//! ```
//!
//! The access token is never written here; see
//! [`KeyringStore`](crate::auth::KeyringStore).

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// The public Antarctica server.
pub const DEFAULT_SERVER_URL: &str = "https://antarctica-server.tk";

/// A development server on this machine.
pub const LOCAL_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "ANTARCTICA_CONFIG_DIR";

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const KEYS: [&str; 4] = ["server.url", "server.local", "tls.ca_cert", "tls.identity"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub tls: TlsConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

/// Which server to talk to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_url")]
    pub url: String,

    /// Use [`LOCAL_SERVER_URL`] instead of `url`.
    #[serde(default)]
    pub local: bool,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            local: false,
        }
    }
}

impl ServerConfig {
    /// The base address requests go to.
    pub fn base_url(&self) -> &str {
        if self.local {
            LOCAL_SERVER_URL
        } else {
            &self.url
        }
    }
}

/// Extra TLS material applied to every request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TlsConfig {
    /// PEM file with an additional root certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,

    /// PEM file holding a client certificate and its private key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<PathBuf>,
}

impl TlsConfig {
    pub fn is_empty(&self) -> bool {
        self.ca_cert.is_none() && self.identity.is_none()
    }
}

/// The non-secret half of a persisted login.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Reads `path`, or returns the defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir).join("config.toml"));
        }
        let dirs = ProjectDirs::from("", "", "antarctica")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Looks up a setting by dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "server.url" => Some(self.server.url.clone()),
            "server.local" => Some(self.server.local.to_string()),
            "tls.ca_cert" => self.tls.ca_cert.as_ref().map(|p| p.display().to_string()),
            "tls.identity" => self.tls.identity.as_ref().map(|p| p.display().to_string()),
            _ => None,
        }
    }

    /// Changes a setting by dotted key. An empty value clears optional
    /// settings.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let optional_path = |value: &str| (!value.is_empty()).then(|| PathBuf::from(value));
        match key {
            "server.url" => self.server.url = value.trim_end_matches('/').to_string(),
            "server.local" => {
                self.server.local = value
                    .parse()
                    .with_context(|| format!("server.local must be true or false, got '{value}'"))?
            }
            "tls.ca_cert" => self.tls.ca_cert = optional_path(value),
            "tls.identity" => self.tls.identity = optional_path(value),
            _ => bail!("Unknown config key '{}'. Valid keys: {}", key, KEYS.join(", ")),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_public_server() {
        let config = Config::default();
        assert_eq!(config.server.base_url(), DEFAULT_SERVER_URL);
        assert!(config.tls.is_empty());
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn test_local_toggle() {
        let mut config = Config::default();
        config.set("server.local", "true").unwrap();
        assert_eq!(config.server.base_url(), LOCAL_SERVER_URL);
        assert!(config.set("server.local", "maybe").is_err());
    }

    #[test]
    fn test_get_and_set() {
        let mut config = Config::default();
        config.set("server.url", "https://example.org/").unwrap();
        assert_eq!(config.get("server.url").as_deref(), Some("https://example.org"));

        config.set("tls.ca_cert", "/tmp/ca.pem").unwrap();
        assert_eq!(config.get("tls.ca_cert").as_deref(), Some("/tmp/ca.pem"));
        config.set("tls.ca_cert", "").unwrap();
        assert_eq!(config.get("tls.ca_cert"), None);

        assert!(config.set("editor", "vim").is_err());
        assert_eq!(config.get("editor"), None);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.server.local = true;
        config.tls.identity = Some(PathBuf::from("/etc/antarctica/client.pem"));
        config.session.user_id = Some(7);
        config.session.login = Some("penguin".to_string());
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nlocal = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.server.local);
        assert_eq!(config.server.url, DEFAULT_SERVER_URL);
    }
}
