//! Process-wide UI session backing the FFI API.
//!
//! # Invariants
//! - One session per process, created lazily on first use.
//! - All access is serialized through one mutex, mirroring the UI event loop.

use ansimtalk_core::seed::{sample_medications, sample_weekly_log};
use ansimtalk_core::{MedicationService, Navigator, SafetyCheckService, WeeklyLog};
use log::{info, warn};
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard, PoisonError};

const SEED_ENV: &str = "ANSIMTALK_SEED";

static SESSION: Lazy<Mutex<AppSession>> = Lazy::new(|| Mutex::new(AppSession::from_env()));

/// Initial data selected by `ANSIMTALK_SEED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SeedMode {
    Sample,
    Empty,
}

impl SeedMode {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(|value| value.trim().to_ascii_lowercase()) {
            Some(value) if value == "empty" => Self::Empty,
            Some(value) if value.is_empty() || value == "sample" => Self::Sample,
            Some(value) => {
                warn!(
                    "event=session_seed module=ffi status=fallback requested={} applied=sample",
                    value
                );
                Self::Sample
            }
            None => Self::Sample,
        }
    }
}

/// State shared by every screen for the lifetime of the process.
pub(crate) struct AppSession {
    pub medications: MedicationService,
    pub safety_check: SafetyCheckService,
    pub navigator: Navigator,
    pub weekly_log: WeeklyLog,
}

impl AppSession {
    fn from_env() -> Self {
        let raw = std::env::var(SEED_ENV).ok();
        Self::new(SeedMode::parse(raw.as_deref()))
    }

    pub(crate) fn new(mode: SeedMode) -> Self {
        let (medications, weekly_log) = match mode {
            SeedMode::Empty => (MedicationService::in_memory(), WeeklyLog::default()),
            SeedMode::Sample => match MedicationService::with_records(sample_medications()) {
                Ok(service) => (service, sample_weekly_log()),
                Err(err) => {
                    warn!(
                        "event=session_seed module=ffi status=error reason={}",
                        err
                    );
                    (MedicationService::in_memory(), WeeklyLog::default())
                }
            },
        };
        info!(
            "event=session_init module=ffi status=ok seed={:?} medications={}",
            mode,
            medications.len()
        );

        Self {
            medications,
            safety_check: SafetyCheckService::new(),
            navigator: Navigator::new(),
            weekly_log,
        }
    }
}

/// Locks the session, recovering from poisoning instead of panicking.
pub(crate) fn lock_session() -> MutexGuard<'static, AppSession> {
    SESSION.lock().unwrap_or_else(PoisonError::into_inner)
}
