//! Structured error handling for the emscalc engine.
//!
//! Errors are recoverable and surfaced to the caller: a failed validation
//! lists every offending field so a form can show all problems at once, and
//! a classification gap is reported as a configuration defect rather than
//! silently defaulting to a generic category.

use std::fmt;
use thiserror::Error;

/// Error type for engine operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// One or more raw input fields failed validation. The computation was
    /// not attempted; `issues` holds every offending field, not just the
    /// first one encountered.
    #[error("invalid input: {}", format_issues(.issues))]
    InvalidInput {
        /// Every field-level problem found in the input set
        issues: Vec<FieldIssue>,
    },

    /// A computed value fell outside every declared classification band.
    /// This indicates a defect in the classification table (or a malformed
    /// component sum), never a patient state.
    #[error("unclassified result: {measure} = {value} matches no declared band")]
    UnclassifiedResult {
        /// Name of the classified measure (e.g. "anion gap")
        measure: String,
        /// The unrounded value that matched no band
        value: f64,
    },

    /// The requested calculator is not registered with the engine.
    #[error("unknown calculator '{name}'")]
    UnknownCalculator {
        /// The calculator id that was requested
        name: String,
    },
}

impl EngineError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            EngineError::InvalidInput { .. } => "invalid_input",
            EngineError::UnclassifiedResult { .. } => "unclassified_result",
            EngineError::UnknownCalculator { .. } => "unknown_calculator",
        }
    }

    /// Whether resubmitting corrected inputs can succeed. Classification
    /// gaps are table defects and cannot be fixed by the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidInput { .. } | EngineError::UnknownCalculator { .. }
        )
    }
}

/// A single field-level validation problem
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIssue {
    /// Declared field name
    pub field: String,
    /// What was wrong with the supplied value
    pub reason: IssueReason,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Reason a field failed validation
#[derive(Debug, Clone, PartialEq)]
pub enum IssueReason {
    /// Required field absent or blank
    Missing,
    /// Value could not be interpreted as a number
    NotNumeric {
        /// The raw value's type name
        supplied: String,
    },
    /// Numeric value outside the declared valid range
    OutOfRange {
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
        /// The value that was supplied
        actual: f64,
    },
    /// Value is not one of the declared choices
    UnknownChoice {
        /// The declared options, in order
        options: Vec<String>,
    },
    /// Value is not a boolean finding
    NotBoolean {
        /// The raw value's type name
        supplied: String,
    },
}

impl fmt::Display for IssueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueReason::Missing => write!(f, "required field is missing"),
            IssueReason::NotNumeric { supplied } => {
                write!(f, "expected a number, got {supplied}")
            }
            IssueReason::OutOfRange { min, max, actual } => {
                write!(f, "value {actual} outside valid range [{min}, {max}]")
            }
            IssueReason::UnknownChoice { options } => {
                write!(f, "expected one of: {}", options.join(", "))
            }
            IssueReason::NotBoolean { supplied } => {
                write!(f, "expected a boolean finding, got {supplied}")
            }
        }
    }
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_lists_every_issue() {
        let err = EngineError::InvalidInput {
            issues: vec![
                FieldIssue { field: "sodium".into(), reason: IssueReason::Missing },
                FieldIssue {
                    field: "chloride".into(),
                    reason: IssueReason::OutOfRange { min: 0.0, max: 150.0, actual: 180.0 },
                },
            ],
        };
        let text = err.to_string();
        assert!(text.contains("sodium"));
        assert!(text.contains("chloride"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn unclassified_is_not_recoverable() {
        let err = EngineError::UnclassifiedResult { measure: "total score".into(), value: 2.0 };
        assert_eq!(err.category(), "unclassified_result");
        assert!(!err.is_recoverable());
    }
}
