//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Everything in it is built before the server binds and only read
//! afterwards, so it is shared behind `Arc` without locks.

use std::sync::Arc;

use crate::checklist::ChecklistConfig;
use crate::config::{AppConfig, ConfigError, PanelConfig};
use crate::registry::{StaticWorkerRepository, WorkerRepository};

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn WorkerRepository>,
    pub checklist: Arc<ChecklistConfig>,
    pub panel: Arc<PanelConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(registry: Arc<dyn WorkerRepository>, checklist: ChecklistConfig, panel: PanelConfig) -> Self {
        Self { registry, checklist: Arc::new(checklist), panel: Arc::new(panel) }
    }

    /// Load the registry and checklist named by `config`, falling back to the
    /// built-in data when no path is set.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured file cannot be read or is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let registry = match &config.registry_path {
            Some(path) => StaticWorkerRepository::load(path)?,
            None => StaticWorkerRepository::builtin(),
        };
        let checklist = match &config.checklist_path {
            Some(path) => ChecklistConfig::load(path)?,
            None => ChecklistConfig::builtin(),
        };
        Ok(Self::new(Arc::new(registry), checklist, PanelConfig::default()))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
