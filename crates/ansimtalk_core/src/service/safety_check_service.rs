//! Daily safety check (mood) use-case service.
//!
//! # Responsibility
//! - Hold the current mood selection for the check screen.
//! - Record confirmed check-ins and notify observers.
//!
//! # Invariants
//! - Confirmation requires a selected mood.
//! - The selected mood is never written to logs.

use crate::model::mood::{CheckIn, Mood};
use crate::observer::{ObserverRegistry, SubscriptionId};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Safety check errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyCheckError {
    NoMoodSelected,
}

impl Display for SafetyCheckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMoodSelected => write!(f, "select a mood before confirming"),
        }
    }
}

impl Error for SafetyCheckError {}

/// Mood selection and check-in history for one session.
#[derive(Debug, Default)]
pub struct SafetyCheckService {
    selected: Option<Mood>,
    last_check_in: Option<CheckIn>,
    observers: ObserverRegistry<CheckIn>,
}

impl SafetyCheckService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a previously confirmed check-in.
    pub fn with_last_check_in(check_in: CheckIn) -> Self {
        Self {
            last_check_in: Some(check_in),
            ..Self::default()
        }
    }

    /// Replaces the current selection.
    pub fn select(&mut self, mood: Mood) {
        self.selected = Some(mood);
    }

    pub fn selected(&self) -> Option<Mood> {
        self.selected
    }

    /// Whether the confirm button should be enabled.
    pub fn can_confirm(&self) -> bool {
        self.selected.is_some()
    }

    /// Confirms the selected mood at `now_ms` (Unix epoch milliseconds).
    pub fn confirm(&mut self, now_ms: i64) -> Result<CheckIn, SafetyCheckError> {
        let Some(mood) = self.selected else {
            warn!("event=safety_confirm module=safety_check status=rejected reason=no_mood");
            return Err(SafetyCheckError::NoMoodSelected);
        };

        let check_in = CheckIn {
            mood,
            confirmed_at_ms: now_ms,
        };
        self.last_check_in = Some(check_in);
        info!(
            "event=safety_confirm module=safety_check status=ok confirmed_at_ms={}",
            now_ms
        );
        self.observers.notify(&check_in);
        Ok(check_in)
    }

    pub fn last_check_in(&self) -> Option<CheckIn> {
        self.last_check_in
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&CheckIn) + Send + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
