//! Panel de Control — worker summary and registry table.

use serde::Serialize;

use crate::config::PanelConfig;
use crate::registry::{WorkerRecord, WorkerRepository};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlPanelModel {
    /// Always the registry length.
    pub worker_count: usize,
    pub compliance_percent: u8,
    pub compliance_delta: i8,
    pub advisory: String,
    pub workers: Vec<WorkerRecord>,
}

impl ControlPanelModel {
    /// Delta formatted with an explicit sign, e.g. `+4%`.
    #[must_use]
    pub fn delta_display(&self) -> String {
        format!("{:+}%", self.compliance_delta)
    }
}

#[must_use]
pub fn build(registry: &dyn WorkerRepository, panel: &PanelConfig) -> ControlPanelModel {
    let workers = registry.list().to_vec();
    ControlPanelModel {
        worker_count: workers.len(),
        compliance_percent: panel.compliance_percent,
        compliance_delta: panel.compliance_delta,
        advisory: panel.advisory.clone(),
        workers,
    }
}
