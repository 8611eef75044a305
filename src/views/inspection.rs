//! Fiscalización — inspector-facing stub.
//!
//! The report control is wired to a no-op endpoint. FUF/PDF generation is
//! not implemented.

use serde::Serialize;

pub const REPORT_ACTION: &str = "/fiscalizacion/reporte";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectionReportModel {
    pub message: String,
    pub button_label: String,
    pub action: String,
}

#[must_use]
pub fn build() -> InspectionReportModel {
    InspectionReportModel {
        message: "Módulo de fiscalización DS 44/2024. Aquí se preparará el Formulario Único de Fiscalización (FUF) \
                  para la inspección."
            .to_owned(),
        button_label: "Generar Reporte FUF (PDF)".to_owned(),
        action: REPORT_ACTION.to_owned(),
    }
}
