//! Weekly adherence history shown below the schedule.
//!
//! Entries are kept newest first, matching display order.

use crate::model::adherence::DailyAdherence;
use crate::summary::medication_summary::MedicationSummary;

/// Injected per-day adherence history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyLog {
    entries: Vec<DailyAdherence>,
}

impl WeeklyLog {
    /// Creates a log from entries already ordered newest first.
    pub fn new(entries: Vec<DailyAdherence>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DailyAdherence] {
        &self.entries
    }

    pub fn completed_days(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_complete()).count()
    }

    /// Inserts or replaces the entry for `date` and moves it to the front.
    pub fn record_today(&mut self, date: impl Into<String>, summary: &MedicationSummary) {
        let date = date.into();
        self.entries.retain(|entry| entry.date != date);
        self.entries.insert(
            0,
            DailyAdherence::new(
                date,
                saturating_u32(summary.taken_count),
                saturating_u32(summary.total_count),
            ),
        );
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
