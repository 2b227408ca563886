//! Taken/total summary for the medication status card.

use crate::model::medication::MedicationRecord;
use serde::{Deserialize, Serialize};

/// Counts derived from a medication snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationSummary {
    pub total_count: usize,
    pub taken_count: usize,
}

/// Status card state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicationStatus {
    /// Every scheduled medication is taken.
    Complete,
    /// Some medication is pending, or nothing is scheduled.
    InProgress,
}

impl MedicationStatus {
    /// User-facing status line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Complete => "모두 복용 완료!",
            Self::InProgress => "복용 진행 중",
        }
    }
}

impl MedicationSummary {
    /// Complete only when something is scheduled and all of it is taken.
    pub fn is_complete(&self) -> bool {
        self.total_count > 0 && self.taken_count == self.total_count
    }

    pub fn status(&self) -> MedicationStatus {
        if self.is_complete() {
            MedicationStatus::Complete
        } else {
            MedicationStatus::InProgress
        }
    }

    /// Returns `taken/total`, e.g. `3/5`.
    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.taken_count, self.total_count)
    }
}

/// Summarizes any finite sequence of records.
pub fn summarize<'a>(records: impl IntoIterator<Item = &'a MedicationRecord>) -> MedicationSummary {
    records
        .into_iter()
        .fold(MedicationSummary::default(), |mut summary, record| {
            summary.total_count += 1;
            if record.taken {
                summary.taken_count += 1;
            }
            summary
        })
}
