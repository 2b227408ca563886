//! Core state logic for the AnsimTalk check-in app.
//! This crate is the single source of truth for medication, mood check,
//! and navigation state; rendering lives in the mobile UI.

pub mod logging;
pub mod model;
pub mod navigation;
pub mod observer;
pub mod repo;
pub mod seed;
pub mod service;
pub mod summary;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::adherence::DailyAdherence;
pub use model::medication::{MedicationId, MedicationRecord};
pub use model::mood::{parse_mood, CheckIn, Mood, MoodParseError};
pub use navigation::navigator::{Navigator, RouteChanged};
pub use navigation::route::{bottom_tabs, parse_route, BottomTab, Route, RouteError};
pub use observer::{ObserverRegistry, SubscriptionId};
pub use repo::medication_repo::{
    InMemoryMedicationRepository, MedicationRepository, RepoError, RepoResult,
};
pub use service::medication_form::AddMedicationForm;
pub use service::medication_service::{
    MedicationChange, MedicationError, MedicationEvent, MedicationField, MedicationResult,
    MedicationService,
};
pub use service::safety_check_service::{SafetyCheckError, SafetyCheckService};
pub use summary::medication_summary::{summarize, MedicationStatus, MedicationSummary};
pub use summary::weekly_log::WeeklyLog;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
