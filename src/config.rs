//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("duplicate worker name: {0}")]
    DuplicateWorker(String),
    #[error("checklist must have exactly {expected} items, found {found}")]
    ChecklistSize { expected: usize, found: usize },
    #[error("duplicate checklist item id: {0}")]
    DuplicateChecklistItem(String),
    #[error("checklist item id is reserved for another form field: {0}")]
    ReservedChecklistItem(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub port: u16,
    pub registry_path: Option<PathBuf>,
    pub checklist_path: Option<PathBuf>,
}

impl AppConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `WORKER_REGISTRY_PATH`: YAML registry; built-in crew when absent
    /// - `CHECKLIST_CONFIG_PATH`: YAML checklist items; built-in DS 44 items when absent
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            bind_addr,
            port,
            registry_path: env_path("WORKER_REGISTRY_PATH"),
            checklist_path: env_path("CHECKLIST_CONFIG_PATH"),
        })
    }

    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

// =============================================================================
// PANEL FIGURES
// =============================================================================

/// Fixed figures shown on the control panel. These are display settings, not
/// computed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    pub compliance_percent: u8,
    pub compliance_delta: i8,
    pub advisory: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            compliance_percent: 92,
            compliance_delta: 4,
            advisory: "Alerta: 1 trabajador con capacitación DS 44 pendiente".to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
