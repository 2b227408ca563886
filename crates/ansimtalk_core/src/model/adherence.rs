//! Daily medication adherence entry for the weekly history view.

use serde::{Deserialize, Serialize};

/// Taken/total outcome for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAdherence {
    /// Display label for the day, e.g. `2025-10-10`.
    pub date: String,
    pub taken_count: u32,
    pub total_count: u32,
}

impl DailyAdherence {
    pub fn new(date: impl Into<String>, taken_count: u32, total_count: u32) -> Self {
        Self {
            date: date.into(),
            taken_count,
            total_count,
        }
    }

    /// Returns `taken/total`, e.g. `3/5`.
    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.taken_count, self.total_count)
    }

    /// A day with no scheduled medication is never complete.
    pub fn is_complete(&self) -> bool {
        self.total_count > 0 && self.taken_count == self.total_count
    }
}
