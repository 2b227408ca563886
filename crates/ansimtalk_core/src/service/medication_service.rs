//! Medication use-case service.
//!
//! # Responsibility
//! - Enforce the admission boundary for new records (non-blank name/time).
//! - Delegate storage to a `MedicationRepository`.
//! - Notify observers after every state-changing mutation.
//!
//! # Invariants
//! - Rejected input never reaches the repository.
//! - Observers are notified only when state actually changed, and always
//!   before the mutating call returns.
//! - Medication names are never written to logs.

use crate::model::medication::{MedicationId, MedicationRecord};
use crate::observer::{ObserverRegistry, SubscriptionId};
use crate::repo::medication_repo::{InMemoryMedicationRepository, MedicationRepository, RepoError};
use crate::summary::medication_summary::{summarize, MedicationSummary};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Form field rejected at the admission boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedicationField {
    Name,
    ScheduledTime,
}

impl MedicationField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ScheduledTime => "scheduled_time",
        }
    }
}

/// Service error for medication use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MedicationError {
    /// Name or time is empty after trimming.
    InvalidInput { field: MedicationField },
    /// Target record does not exist.
    NotFound(MedicationId),
    /// Seed data reused an ID already in the store.
    DuplicateId(MedicationId),
}

impl Display for MedicationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field } => {
                write!(f, "invalid input: `{}` must not be blank", field.as_str())
            }
            Self::NotFound(id) => write!(f, "medication not found: {id}"),
            Self::DuplicateId(id) => write!(f, "medication id already exists: {id}"),
        }
    }
}

impl Error for MedicationError {}

impl From<RepoError> for MedicationError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            RepoError::DuplicateId(id) => Self::DuplicateId(id),
        }
    }
}

pub type MedicationResult<T> = Result<T, MedicationError>;

/// Kind of state change carried by a [`MedicationEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedicationChange {
    Added,
    MarkedTaken,
}

/// Notification delivered to observers after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedicationEvent {
    pub change: MedicationChange,
    pub id: MedicationId,
    /// Summary recomputed after the mutation.
    pub summary: MedicationSummary,
}

/// Medication store facade over repository implementations.
pub struct MedicationService<R: MedicationRepository = InMemoryMedicationRepository> {
    repo: R,
    observers: ObserverRegistry<MedicationEvent>,
}

impl MedicationService<InMemoryMedicationRepository> {
    /// Creates an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryMedicationRepository::new())
    }

    /// Creates an in-memory store seeded with `records` in the given order.
    pub fn with_records(records: Vec<MedicationRecord>) -> MedicationResult<Self> {
        Self::with_seed(InMemoryMedicationRepository::new(), records)
    }
}

impl<R: MedicationRepository> MedicationService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            observers: ObserverRegistry::new(),
        }
    }

    /// Creates a service and admits `records` through the same boundary as
    /// `add`, keeping their IDs and taken flags.
    pub fn with_seed(repo: R, records: Vec<MedicationRecord>) -> MedicationResult<Self> {
        let mut service = Self::new(repo);
        for record in records {
            let name = admit_text(&record.name, MedicationField::Name)?;
            let scheduled_time = admit_text(&record.scheduled_time, MedicationField::ScheduledTime)?;
            service.repo.insert(MedicationRecord {
                name,
                scheduled_time,
                ..record
            })?;
        }
        info!(
            "event=medication_seed module=medication status=ok count={}",
            service.repo.len()
        );
        Ok(service)
    }

    /// Admits a new untaken record at the end of the list.
    ///
    /// # Errors
    /// - `InvalidInput` when `name` or `scheduled_time` is blank; the store is
    ///   left unchanged.
    pub fn add(&mut self, name: &str, scheduled_time: &str) -> MedicationResult<MedicationId> {
        let admitted = admit_text(name, MedicationField::Name)
            .and_then(|name| {
                admit_text(scheduled_time, MedicationField::ScheduledTime)
                    .map(|time| (name, time))
            });
        let (name, scheduled_time) = match admitted {
            Ok(values) => values,
            Err(err) => {
                warn!(
                    "event=medication_add module=medication status=rejected reason={}",
                    err
                );
                return Err(err);
            }
        };

        let id = self
            .repo
            .insert(MedicationRecord::new(name, scheduled_time))?;
        info!(
            "event=medication_add module=medication status=ok id={} total={}",
            id,
            self.repo.len()
        );
        self.emit(MedicationChange::Added, id);
        Ok(id)
    }

    /// Marks one record as taken. Idempotent for already-taken records.
    ///
    /// # Errors
    /// - `NotFound` when `id` is not in the store; the store is unchanged.
    pub fn mark_taken(&mut self, id: MedicationId) -> MedicationResult<()> {
        let changed = match self.repo.mark_taken(id) {
            Ok(changed) => changed,
            Err(err) => {
                warn!(
                    "event=medication_mark_taken module=medication status=not_found id={}",
                    id
                );
                return Err(err.into());
            }
        };

        if changed {
            info!(
                "event=medication_mark_taken module=medication status=ok id={}",
                id
            );
            self.emit(MedicationChange::MarkedTaken, id);
        }
        Ok(())
    }

    /// Read-only snapshot in insertion order.
    pub fn list(&self) -> Vec<MedicationRecord> {
        self.repo.list()
    }

    pub fn get(&self, id: MedicationId) -> Option<MedicationRecord> {
        self.repo.get(id)
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// Summary of the current snapshot.
    pub fn summarize(&self) -> MedicationSummary {
        summarize(&self.repo.list())
    }

    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&MedicationEvent) + Send + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn emit(&mut self, change: MedicationChange, id: MedicationId) {
        let event = MedicationEvent {
            change,
            id,
            summary: self.summarize(),
        };
        self.observers.notify(&event);
    }
}

/// Trims and collapses whitespace; rejects values that end up empty.
fn admit_text(value: &str, field: MedicationField) -> MedicationResult<String> {
    let normalized = WHITESPACE_RE.replace_all(value, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return Err(MedicationError::InvalidInput { field });
    }
    Ok(trimmed.to_string())
}
