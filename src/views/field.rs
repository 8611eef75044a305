//! App Terreno — the field operator's daily checklist form.

use serde::Serialize;

use crate::checklist::{Acknowledgment, ChecklistConfig, ChecklistItem};
use crate::registry::WorkerRepository;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChecklistModel {
    /// Selector options, registry order.
    pub worker_options: Vec<String>,
    /// Pre-selected option: the acknowledged worker after a submission,
    /// otherwise the first registry entry.
    pub selected_worker: Option<String>,
    pub items: Vec<ChecklistItem>,
    pub acknowledgment: Option<Acknowledgment>,
}

#[must_use]
pub fn build(
    registry: &dyn WorkerRepository,
    checklist: &ChecklistConfig,
    acknowledgment: Option<Acknowledgment>,
) -> FieldChecklistModel {
    let worker_options: Vec<String> = registry.list().iter().map(|w| w.name.clone()).collect();
    let selected_worker = acknowledgment
        .as_ref()
        .map(|ack| ack.worker_name.clone())
        .or_else(|| worker_options.first().cloned());

    FieldChecklistModel { worker_options, selected_worker, items: checklist.items.clone(), acknowledgment }
}
