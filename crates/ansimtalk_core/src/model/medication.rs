//! Medication record model.
//!
//! # Responsibility
//! - Define the canonical medication entry rendered by the schedule list.
//! - Keep the taken flag transition one-way.
//!
//! # Invariants
//! - `id` is assigned once and never reused for another record.
//! - `taken` only moves `false -> true`; there is no un-take helper.
//! - Non-empty `name`/`scheduled_time` is enforced at the store admission
//!   boundary, not by this type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a medication record.
pub type MedicationId = Uuid;

/// One scheduled medication intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationRecord {
    /// Stable ID used for mark-taken lookups.
    pub id: MedicationId,
    /// Display name, e.g. `혈압약`.
    pub name: String,
    /// Free-form time label, e.g. `18:00`. Not parsed.
    pub scheduled_time: String,
    /// Whether the intake has been confirmed today.
    pub taken: bool,
}

impl MedicationRecord {
    /// Creates an untaken record with a generated stable ID.
    pub fn new(name: impl Into<String>, scheduled_time: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, scheduled_time)
    }

    /// Creates an untaken record with a caller-provided ID.
    ///
    /// Used by seeding paths where identity already exists externally.
    pub fn with_id(
        id: MedicationId,
        name: impl Into<String>,
        scheduled_time: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            scheduled_time: scheduled_time.into(),
            taken: false,
        }
    }

    /// Builder-style helper for seeding records that were already taken.
    pub fn taken(mut self, taken: bool) -> Self {
        self.taken = taken;
        self
    }

    /// Marks the intake as taken.
    ///
    /// Returns `true` when the flag actually changed.
    pub fn mark_taken(&mut self) -> bool {
        if self.taken {
            return false;
        }
        self.taken = true;
        true
    }
}
