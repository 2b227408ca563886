//! Medication repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the canonical ordered set of medication records for a session.
//! - Resolve records by stable ID instead of list position.
//!
//! # Invariants
//! - `order` and `records` always contain exactly the same IDs.
//! - `order` reflects insertion order; position carries no other meaning.
//! - Records are never removed.

use crate::model::medication::{MedicationId, MedicationRecord};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for medication storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(MedicationId),
    DuplicateId(MedicationId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "medication not found: {id}"),
            Self::DuplicateId(id) => write!(f, "medication id already exists: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Storage interface for medication records.
pub trait MedicationRepository {
    /// Appends one record at the end of display order.
    fn insert(&mut self, record: MedicationRecord) -> RepoResult<MedicationId>;
    /// Sets `taken = true`; returns whether the flag changed.
    fn mark_taken(&mut self, id: MedicationId) -> RepoResult<bool>;
    fn get(&self, id: MedicationId) -> Option<MedicationRecord>;
    /// Snapshot in insertion order.
    fn list(&self) -> Vec<MedicationRecord>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-scoped repository keyed by stable ID.
#[derive(Debug, Default, Clone)]
pub struct InMemoryMedicationRepository {
    records: HashMap<MedicationId, MedicationRecord>,
    order: Vec<MedicationId>,
}

impl InMemoryMedicationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MedicationRepository for InMemoryMedicationRepository {
    fn insert(&mut self, record: MedicationRecord) -> RepoResult<MedicationId> {
        let id = record.id;
        if self.records.contains_key(&id) {
            return Err(RepoError::DuplicateId(id));
        }

        self.records.insert(id, record);
        self.order.push(id);
        Ok(id)
    }

    fn mark_taken(&mut self, id: MedicationId) -> RepoResult<bool> {
        let record = self.records.get_mut(&id).ok_or(RepoError::NotFound(id))?;
        Ok(record.mark_taken())
    }

    fn get(&self, id: MedicationId) -> Option<MedicationRecord> {
        self.records.get(&id).cloned()
    }

    fn list(&self) -> Vec<MedicationRecord> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryMedicationRepository, MedicationRepository, RepoError};
    use crate::model::medication::MedicationRecord;
    use uuid::Uuid;

    #[test]
    fn insert_preserves_insertion_order() {
        let mut repo = InMemoryMedicationRepository::new();
        let first = repo.insert(MedicationRecord::new("a", "08:00")).unwrap();
        let second = repo.insert(MedicationRecord::new("b", "07:00")).unwrap();

        let ids = repo.list().into_iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut repo = InMemoryMedicationRepository::new();
        let id = Uuid::new_v4();
        repo.insert(MedicationRecord::with_id(id, "a", "08:00"))
            .unwrap();

        let err = repo
            .insert(MedicationRecord::with_id(id, "b", "09:00"))
            .unwrap_err();
        assert_eq!(err, RepoError::DuplicateId(id));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn mark_taken_reports_whether_flag_changed() {
        let mut repo = InMemoryMedicationRepository::new();
        let id = repo.insert(MedicationRecord::new("a", "08:00")).unwrap();

        assert!(repo.mark_taken(id).unwrap());
        assert!(!repo.mark_taken(id).unwrap());
        assert!(repo.get(id).unwrap().taken);
    }

    #[test]
    fn mark_taken_unknown_id_is_not_found() {
        let mut repo = InMemoryMedicationRepository::new();
        let missing = Uuid::new_v4();
        assert_eq!(repo.mark_taken(missing), Err(RepoError::NotFound(missing)));
    }
}
