//! Worker registry — the read-only list of sawmill personnel.
//!
//! DESIGN
//! ======
//! The registry is built once before the server binds and never mutated.
//! Views only see it through `WorkerRepository`, so the compiled-in list can
//! be swapped for a file-backed one (or a real store later) without touching
//! rendering code.
//!
//! ERROR HANDLING
//! ==============
//! The built-in registry cannot fail. Loading from YAML can, and those
//! errors abort startup rather than serving a partial registry.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

// =============================================================================
// TYPES
// =============================================================================

/// One employee row. `name` doubles as the selection key in the field checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerRecord {
    pub name: String,
    pub role: String,
    /// Government ID (RUT). Free-form, never validated.
    pub national_id: String,
}

impl WorkerRecord {
    #[must_use]
    pub fn new(name: &str, role: &str, national_id: &str) -> Self {
        Self { name: name.to_owned(), role: role.to_owned(), national_id: national_id.to_owned() }
    }
}

/// Read-only access to worker records.
pub trait WorkerRepository: Send + Sync {
    /// All records, in registry order.
    fn list(&self) -> &[WorkerRecord];

    /// Exact-match lookup by name.
    fn find_by_name(&self, name: &str) -> Option<&WorkerRecord> {
        self.list().iter().find(|w| w.name == name)
    }
}

// =============================================================================
// STATIC REGISTRY
// =============================================================================

/// Immutable in-memory registry.
#[derive(Debug, Clone)]
pub struct StaticWorkerRepository {
    workers: Vec<WorkerRecord>,
}

#[derive(Deserialize)]
struct RegistryFile {
    workers: Vec<WorkerRecord>,
}

impl StaticWorkerRepository {
    /// The compiled-in crew list.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            workers: vec![
                WorkerRecord::new("Givens Aburto", "Operador de Sierra Principal", "17.845.236-4"),
                WorkerRecord::new("Alberto Loaiza", "Jefe de Patio", "12.509.871-K"),
                WorkerRecord::new("Marcela Riquelme", "Encargada de Prevención de Riesgos", "15.332.904-1"),
                WorkerRecord::new("Juan Carlos Vidal", "Operador de Grúa Horquilla", "18.276.455-7"),
                WorkerRecord::new("Rosa Cárcamo", "Ayudante de Canteadora", "19.014.382-2"),
            ],
        }
    }

    /// Build a registry from arbitrary records.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateWorker` if two records share a name,
    /// since names are selection keys.
    pub fn from_records(workers: Vec<WorkerRecord>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for worker in &workers {
            if !seen.insert(worker.name.as_str()) {
                return Err(ConfigError::DuplicateWorker(worker.name.clone()));
            }
        }
        Ok(Self { workers })
    }

    /// Parse a YAML document of the form `workers: [{name, role, national_id}]`.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed YAML or duplicate names.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let file: RegistryFile = serde_yaml::from_str(source)?;
        Self::from_records(file.workers)
    }

    /// Read and parse a YAML registry file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_yaml(&source)
    }
}

impl WorkerRepository for StaticWorkerRepository {
    fn list(&self) -> &[WorkerRecord] {
        &self.workers
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
