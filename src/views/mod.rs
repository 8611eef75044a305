//! View models for the three dashboard modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigation is a three-way choice. `render` takes that choice and the
//! shared state explicitly and returns a serializable model; the HTML layer
//! and the JSON API both consume the same model. Views hold no state between
//! requests.

pub mod field;
pub mod inspection;
pub mod panel;

use serde::Serialize;

use crate::state::AppState;

/// Top-level navigation choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    ControlPanel,
    FieldChecklist,
    InspectionReport,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::ControlPanel, Page::FieldChecklist, Page::InspectionReport];

    /// URL path segment.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::ControlPanel => "panel",
            Self::FieldChecklist => "terreno",
            Self::InspectionReport => "fiscalizacion",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }

    /// Navigation label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ControlPanel => "Panel de Control",
            Self::FieldChecklist => "App Terreno",
            Self::InspectionReport => "Fiscalización",
        }
    }

    #[must_use]
    pub fn href(self) -> String {
        format!("/{}", self.slug())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewModel {
    ControlPanel(panel::ControlPanelModel),
    FieldChecklist(field::FieldChecklistModel),
    InspectionReport(inspection::InspectionReportModel),
}

impl ViewModel {
    #[must_use]
    pub fn page(&self) -> Page {
        match self {
            Self::ControlPanel(_) => Page::ControlPanel,
            Self::FieldChecklist(_) => Page::FieldChecklist,
            Self::InspectionReport(_) => Page::InspectionReport,
        }
    }
}

/// Build the model for `page` from the current state.
#[must_use]
pub fn render(page: Page, state: &AppState) -> ViewModel {
    match page {
        Page::ControlPanel => ViewModel::ControlPanel(panel::build(state.registry.as_ref(), &state.panel)),
        Page::FieldChecklist => {
            ViewModel::FieldChecklist(field::build(state.registry.as_ref(), &state.checklist, None))
        }
        Page::InspectionReport => ViewModel::InspectionReport(inspection::build()),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
