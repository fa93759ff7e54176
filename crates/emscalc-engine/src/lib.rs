#![deny(warnings)]
//! Clinical calculation and classification engine.
//!
//! Every calculator in the EMS reference tool follows the same pipeline:
//! validate raw inputs against a declared field contract, evaluate the
//! domain formula on unrounded values, map the result onto ordered clinical
//! severity bands, and emit a category-specific list of recommended actions.
//! This crate implements that pipeline once, parameterized by a
//! [`ClinicalCalculator`] per clinical tool, with a capacity-bounded history
//! ledger per calculator session.
//!
//! Classification always operates on the unrounded computed value; rounding
//! and formatting live in [`display`] and are a presentation concern only.

/// Ordered severity bands and the exactly-one-band classifier
pub mod band;
/// Built-in clinical calculators, one module per tool
pub mod calculators;
/// Named clinical constants (fixed BSA, adult average weight, ...)
pub mod constants;
/// Presentation-side rounding and duration formatting
pub mod display;
/// Engine entry points: calculator trait, registry and sessions
pub mod engine;
/// Structured error types for validation and classification failures
pub mod error;
/// Field contracts and the total input validator
pub mod field;
/// Bounded most-recent-first computation history
pub mod history;
/// Category-keyed recommendation lists
pub mod recommend;
/// Computation results and secondary values
pub mod result;

pub use band::{Band, ClassificationTable};
pub use engine::{CalculatorSession, ClinicalCalculator, Engine};
pub use error::{EngineError, FieldIssue, IssueReason};
pub use field::{FieldKind, FieldSpec, ValidatedInputs, validate};
pub use history::{HistoryEntry, HistoryLedger};
pub use recommend::RecommendationTable;
pub use result::{ComputationResult, SecondaryValue};

// Re-export the shared value types so downstream callers need only this crate.
pub use emscalc_types::{InputSet, RawValue};
