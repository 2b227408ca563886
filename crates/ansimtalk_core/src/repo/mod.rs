//! Repository layer abstractions and in-memory storage.
//!
//! # Responsibility
//! - Define the storage contract the medication service depends on.
//! - Keep lookup-by-ID and display-order bookkeeping out of the service.
//!
//! # Invariants
//! - Repositories do not validate user text; admission checks live in the
//!   service layer.
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`).

pub mod medication_repo;
