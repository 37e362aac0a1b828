//! Worker configuration
//!
//! TOML-backed configuration with defaults, explicit validation, and CLI
//! overrides applied on top of the file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Worker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Task API settings
    #[serde(default)]
    pub api: ApiSettings,
    /// Authentication settings
    #[serde(default)]
    pub auth: AuthSettings,
    /// HTTP transport settings
    #[serde(default)]
    pub http: HttpSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the task API
    pub base_url: String,
    /// Endpoint path serving the input payload
    pub data_endpoint: String,
    /// Endpoint path accepting the result envelope
    pub result_endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Bearer token presented on requests; a token carried by the fetched
    /// payload replaces it for the submission request
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            data_endpoint: "data".to_string(),
            result_endpoint: "result".to_string(),
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self { token: None }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            auth: AuthSettings::default(),
            http: HttpSettings::default(),
        }
    }
}

impl WorkerConfig {
    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: WorkerConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.is_empty() {
            anyhow::bail!("API base URL cannot be empty");
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            anyhow::bail!("API base URL must start with http:// or https://");
        }

        if self.api.data_endpoint.is_empty() {
            anyhow::bail!("Data endpoint cannot be empty");
        }

        if self.api.result_endpoint.is_empty() {
            anyhow::bail!("Result endpoint cannot be empty");
        }

        if self.http.timeout_secs == 0 {
            anyhow::bail!("HTTP timeout cannot be 0");
        }

        Ok(())
    }
}
