//! Emscalc Prelude
//!
//! This crate re-exports the most frequently used public items from the
//! emscalc ecosystem (currently `emscalc-engine` and `emscalc-types`).
//! Down-stream applications can depend on `emscalc-prelude` to avoid long
//! import lists and to stay insulated from internal module reshuffles.

#![deny(warnings)]
#![deny(missing_docs)]

// Re-export engine entry points & value types -------------------------------------------------

pub use emscalc_engine::{
    CalculatorSession, ClinicalCalculator, Engine,
    // Validation and field contracts
    FieldKind, FieldSpec, ValidatedInputs, validate,
    // Classification
    Band, ClassificationTable,
    // Results and history
    ComputationResult, HistoryEntry, HistoryLedger, SecondaryValue,
    // Errors
    EngineError, FieldIssue, IssueReason,
};

pub use emscalc_types::{InputSet, RawValue};

// Commonly used built-in calculators ----------------------------------------------------------

pub use emscalc_engine::calculators::glasgow_coma::GlasgowComaCalculator;
pub use emscalc_engine::calculators::shock_index::ShockIndexCalculator;

// When new crates expose stable public APIs, add re-exports here in a backwards-compatible
// manner.
