//! Domain model for the check-in app.
//!
//! # Responsibility
//! - Define plain data records shared by services, FFI, and tests.
//!
//! # Invariants
//! - Every medication record is identified by a stable `MedicationId`.
//! - Records are never hard-deleted during a session.

pub mod adherence;
pub mod medication;
pub mod mood;
