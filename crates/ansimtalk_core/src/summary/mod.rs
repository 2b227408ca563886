//! Derived read models computed from store snapshots.
//!
//! # Responsibility
//! - Compute taken/total counts for the status card.
//! - Hold the injected weekly adherence history.
//!
//! # Invariants
//! - Summaries are recomputed on every read; nothing is cached.

pub mod medication_summary;
pub mod weekly_log;
