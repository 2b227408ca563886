//! Add-medication dialog state.
//!
//! # Invariants
//! - Drafts are cleared whenever the dialog is opened or closed.
//! - A rejected submit leaves the dialog open with drafts intact.

use crate::model::medication::MedicationId;
use crate::repo::medication_repo::MedicationRepository;
use crate::service::medication_service::{MedicationResult, MedicationService};

/// Visibility flag plus draft fields for the add dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddMedicationForm {
    visible: bool,
    name: String,
    time: String,
}

impl AddMedicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn open(&mut self) {
        self.reset();
        self.visible = true;
    }

    pub fn dismiss(&mut self) {
        self.reset();
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_time(&mut self, value: impl Into<String>) {
        self.time = value.into();
    }

    /// Submits drafts through the store's admission boundary.
    ///
    /// Closes the dialog only when the record was added.
    pub fn submit<R: MedicationRepository>(
        &mut self,
        service: &mut MedicationService<R>,
    ) -> MedicationResult<MedicationId> {
        let id = service.add(&self.name, &self.time)?;
        self.reset();
        Ok(id)
    }

    fn reset(&mut self) {
        self.visible = false;
        self.name.clear();
        self.time.clear();
    }
}
