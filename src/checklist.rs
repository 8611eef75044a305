//! Daily DS 44 field checklist — item definitions and submission handling.
//!
//! DESIGN
//! ======
//! Item labels are data (`ChecklistConfig`) so the regulatory wording can be
//! edited in YAML without a rebuild. A submission is a transient value: it is
//! acknowledged and dropped. Nothing is stored or forwarded to the panel.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::config::ConfigError;
use crate::registry::WorkerRepository;

pub const CHECKLIST_ITEM_COUNT: usize = 4;

/// Form field names taken by the selector and notes; items may not use them.
pub const RESERVED_FIELD_NAMES: [&str; 2] = ["worker", "notes"];

// =============================================================================
// ITEM CONFIG
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Stable key, used as the form field name.
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistConfig {
    pub items: Vec<ChecklistItem>,
}

impl ChecklistConfig {
    #[must_use]
    pub fn builtin() -> Self {
        let item = |id: &str, label: &str| ChecklistItem { id: id.to_owned(), label: label.to_owned() };
        Self {
            items: vec![
                item("epp", "Uso completo de EPP (casco, protección auditiva, lentes y calzado de seguridad)"),
                item("guards", "Protecciones y guardas de sierras instaladas y en buen estado"),
                item("lockout", "Bloqueo y etiquetado de energías verificado antes de mantención"),
                item("briefing", "Charla diaria de seguridad realizada y firmada"),
            ],
        }
    }

    /// Check item count, id uniqueness, and that no id collides with another
    /// form field.
    ///
    /// # Errors
    ///
    /// Returns an error if there are not exactly four items, ids repeat, or
    /// an id is `worker` or `notes`.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.items.len() != CHECKLIST_ITEM_COUNT {
            return Err(ConfigError::ChecklistSize { expected: CHECKLIST_ITEM_COUNT, found: self.items.len() });
        }
        let mut seen = HashSet::new();
        for item in &self.items {
            if RESERVED_FIELD_NAMES.contains(&item.id.as_str()) {
                return Err(ConfigError::ReservedChecklistItem(item.id.clone()));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(ConfigError::DuplicateChecklistItem(item.id.clone()));
            }
        }
        Ok(self)
    }

    /// Parse `items: [{id, label}]` YAML.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed YAML or an invalid item set.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_yaml::from_str(source)?;
        cfg.validate()
    }

    /// Read and parse a YAML checklist file.
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

// =============================================================================
// SUBMISSION
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ChecklistError {
    #[error("worker not in registry: {0}")]
    UnknownWorker(String),
    #[error("worker registry is empty")]
    EmptyRegistry,
}

/// One checklist submission. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSubmission {
    #[serde(default)]
    pub worker: Option<String>,
    /// Item id -> checked. Missing ids read as unchecked.
    #[serde(default)]
    pub answers: BTreeMap<String, bool>,
    #[serde(default)]
    pub notes: String,
}

impl ChecklistSubmission {
    /// Build a submission from urlencoded form fields. HTML checkboxes are
    /// only sent when checked, so presence of an item id means `true`.
    #[must_use]
    pub fn from_form(fields: &HashMap<String, String>, config: &ChecklistConfig) -> Self {
        let answers = config
            .items
            .iter()
            .map(|item| (item.id.clone(), fields.contains_key(&item.id)))
            .collect();
        Self {
            worker: fields.get("worker").filter(|w| !w.is_empty()).cloned(),
            answers,
            notes: fields.get("notes").cloned().unwrap_or_default(),
        }
    }

    /// Answer for one item id.
    #[must_use]
    pub fn is_checked(&self, item_id: &str) -> bool {
        self.answers.get(item_id).copied().unwrap_or(false)
    }
}

/// Confirmation returned for a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgment {
    pub receipt: Uuid,
    pub worker_name: String,
    pub yes_count: usize,
    pub total_items: usize,
    pub message: String,
}

/// Resolve the selected worker, build the acknowledgment, and drop the record.
///
/// # Errors
///
/// Returns `UnknownWorker` if the name is not in the registry, or
/// `EmptyRegistry` if no worker was given and there is none to default to.
pub fn submit(
    registry: &dyn WorkerRepository,
    config: &ChecklistConfig,
    submission: &ChecklistSubmission,
) -> Result<Acknowledgment, ChecklistError> {
    let worker = match submission.worker.as_deref() {
        Some(name) => registry
            .find_by_name(name)
            .ok_or_else(|| ChecklistError::UnknownWorker(name.to_owned()))?,
        None => registry.list().first().ok_or(ChecklistError::EmptyRegistry)?,
    };

    let yes_count = config
        .items
        .iter()
        .filter(|item| submission.is_checked(&item.id))
        .count();
    let total_items = config.items.len();
    let receipt = Uuid::new_v4();

    info!(%receipt, worker = %worker.name, yes_count, total_items, "field checklist acknowledged");

    Ok(Acknowledgment {
        receipt,
        worker_name: worker.name.clone(),
        yes_count,
        total_items,
        message: format!(
            "Checklist recibido para {}: {yes_count} de {total_items} ítems conformes.",
            worker.name
        ),
    })
}

#[cfg(test)]
#[path = "checklist_test.rs"]
mod tests;
