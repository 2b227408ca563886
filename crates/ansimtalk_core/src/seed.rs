//! Sample session data for demos and the default FFI session.
//!
//! Nothing in the core reads these directly; callers inject them through
//! constructors.

use crate::model::adherence::DailyAdherence;
use crate::model::medication::MedicationRecord;
use crate::summary::weekly_log::WeeklyLog;

/// Today's sample schedule: three taken, two pending.
pub fn sample_medications() -> Vec<MedicationRecord> {
    vec![
        MedicationRecord::new("철분약", "08:00").taken(true),
        MedicationRecord::new("당뇨약", "08:00").taken(true),
        MedicationRecord::new("소화제", "12:00").taken(true),
        MedicationRecord::new("혈압약", "18:00"),
        MedicationRecord::new("당뇨약", "18:00"),
    ]
}

/// Sample history, newest first.
pub fn sample_weekly_log() -> WeeklyLog {
    WeeklyLog::new(vec![
        DailyAdherence::new("2025-10-10", 3, 5),
        DailyAdherence::new("2025-10-09", 5, 5),
        DailyAdherence::new("2025-10-08", 5, 5),
        DailyAdherence::new("2025-10-07", 4, 5),
        DailyAdherence::new("2025-10-06", 5, 5),
    ])
}
