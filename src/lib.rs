//! Acuity: a deterministic patient-intake triage and differential-scoring
//! engine.
//!
//! The engine turns one fully materialized [`IntakeRecord`] into one
//! structured [`TriageResult`]: an urgency classification, danger-sign
//! reasons, named risk buckets, a ranked differential, grouped suggestions,
//! prompts for missing data, and a clinician-readable explanation. It is
//! decision support feeding a clinician review step; it never issues a
//! diagnosis.
//!
//! All reference data lives in a versioned [`knowledge::KnowledgeBase`],
//! validated fail-fast at load. Evaluation is a pure synchronous function:
//! no I/O, no shared mutable state, safe to call concurrently.
//!
//! ```no_run
//! use acuity::{IntakeRecord, KnowledgeBase, TriageEngine};
//!
//! # fn main() -> Result<(), acuity::TriageError> {
//! let engine = TriageEngine::new(KnowledgeBase::builtin()?);
//! let report = engine.run(&IntakeRecord::default())?;
//! println!("{}", report.result.status.as_str());
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod error;
pub mod knowledge;
pub mod models;

pub use engine::TriageEngine;
pub use error::TriageError;
pub use knowledge::KnowledgeBase;
pub use models::{IntakeRecord, TriageReport, TriageResult};
