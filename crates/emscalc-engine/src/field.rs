//! Field contracts and the input validator.
//!
//! Each calculator publishes an ordered list of [`FieldSpec`]s. The
//! validator checks a raw [`InputSet`] against that contract and produces a
//! typed [`ValidatedInputs`] record, or fails with every offending field
//! listed. Validation is total: all fields are checked before reporting, so
//! a caller can surface the complete error list in one pass.

use crate::error::{EngineError, FieldIssue, IssueReason};
use emscalc_types::{InputSet, RawValue};
use std::collections::HashMap;
use tracing::debug;

/// What kind of value a field accepts
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// A numeric value within an inclusive range. Invariant: `min < max`.
    Number {
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
    /// A boolean checklist finding
    Flag,
    /// One of a fixed set of options (tank size, drop factor, unit system)
    Choice {
        /// Accepted options, in declared order
        options: &'static [&'static str],
    },
    /// Free text carried through unvalidated (e.g. symptom onset time)
    Text,
}

/// Declaration of a single input field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Field name as it appears in the input set
    pub name: &'static str,
    /// Display unit, empty when unitless
    pub unit: &'static str,
    /// Accepted value kind
    pub kind: FieldKind,
    /// Whether the field must be present and non-blank
    pub required: bool,
}

impl FieldSpec {
    /// Required numeric field with an inclusive valid range
    pub const fn number(name: &'static str, unit: &'static str, min: f64, max: f64) -> Self {
        Self { name, unit, kind: FieldKind::Number { min, max }, required: true }
    }

    /// Optional numeric field with an inclusive valid range
    pub const fn optional_number(
        name: &'static str,
        unit: &'static str,
        min: f64,
        max: f64,
    ) -> Self {
        Self { name, unit, kind: FieldKind::Number { min, max }, required: false }
    }

    /// Required numeric field that only has to be positive (no clinical
    /// upper bound published for it)
    pub const fn positive(name: &'static str, unit: &'static str) -> Self {
        Self {
            name,
            unit,
            kind: FieldKind::Number { min: f64::MIN_POSITIVE, max: f64::MAX },
            required: true,
        }
    }

    /// Required boolean finding
    pub const fn flag(name: &'static str) -> Self {
        Self { name, unit: "", kind: FieldKind::Flag, required: true }
    }

    /// Required enumerated selection
    pub const fn choice(name: &'static str, options: &'static [&'static str]) -> Self {
        Self { name, unit: "", kind: FieldKind::Choice { options }, required: true }
    }

    /// Optional free text
    pub const fn optional_text(name: &'static str) -> Self {
        Self { name, unit: "", kind: FieldKind::Text, required: false }
    }
}

/// A typed value that passed validation
#[derive(Debug, Clone, PartialEq)]
enum TypedValue {
    Number(f64),
    Flag(bool),
    Choice(&'static str),
    Text(String),
}

/// Typed inputs produced by [`validate`]. Getters return plain values for
/// required fields and `Option` for optional ones; validation guarantees a
/// declared required field is present.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInputs {
    values: HashMap<&'static str, TypedValue>,
}

impl ValidatedInputs {
    /// Numeric value of a required field. Undeclared names read as 0.0.
    pub fn number(&self, name: &str) -> f64 {
        match self.values.get(name) {
            Some(TypedValue::Number(n)) => *n,
            _ => 0.0,
        }
    }

    /// Numeric value of an optional field, `None` when absent
    pub fn optional_number(&self, name: &str) -> Option<f64> {
        match self.values.get(name) {
            Some(TypedValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Boolean finding, `false` when absent
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(TypedValue::Flag(true)))
    }

    /// Selected option of a choice field
    pub fn choice(&self, name: &str) -> &'static str {
        match self.values.get(name) {
            Some(TypedValue::Choice(c)) => c,
            _ => "",
        }
    }

    /// Free text value, `None` when absent
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(TypedValue::Text(t)) => Some(t.as_str()),
            _ => None,
        }
    }
}

/// Validate a raw input set against a field contract.
///
/// Pure function. Fields not declared in `fields` are ignored (form layers
/// routinely submit extra UI state). All declared fields are checked before
/// reporting so the returned `InvalidInput` carries the complete issue list.
pub fn validate(fields: &[FieldSpec], inputs: &InputSet) -> Result<ValidatedInputs, EngineError> {
    let mut values = HashMap::with_capacity(fields.len());
    let mut issues = Vec::new();

    for spec in fields {
        let raw = inputs.get(spec.name).filter(|v| !v.is_empty());
        let Some(raw) = raw else {
            if spec.required {
                issues.push(FieldIssue { field: spec.name.to_string(), reason: IssueReason::Missing });
            }
            continue;
        };

        match &spec.kind {
            FieldKind::Number { min, max } => match raw.as_f64() {
                Some(n) if n.is_finite() => {
                    if n < *min || n > *max {
                        issues.push(FieldIssue {
                            field: spec.name.to_string(),
                            reason: IssueReason::OutOfRange { min: *min, max: *max, actual: n },
                        });
                    } else {
                        values.insert(spec.name, TypedValue::Number(n));
                    }
                }
                _ => issues.push(FieldIssue {
                    field: spec.name.to_string(),
                    reason: IssueReason::NotNumeric { supplied: raw.type_name().to_string() },
                }),
            },
            FieldKind::Flag => match raw.as_bool() {
                Some(b) => {
                    values.insert(spec.name, TypedValue::Flag(b));
                }
                None => issues.push(FieldIssue {
                    field: spec.name.to_string(),
                    reason: IssueReason::NotBoolean { supplied: raw.type_name().to_string() },
                }),
            },
            FieldKind::Choice { options } => {
                let selected = match raw {
                    RawValue::Text(s) => options.iter().find(|o| **o == s.trim()),
                    // Numeric choices (drop factors) may arrive as numbers.
                    other => other
                        .as_f64()
                        .and_then(|n| options.iter().find(|o| o.parse::<f64>() == Ok(n))),
                };
                match selected {
                    Some(option) => {
                        values.insert(spec.name, TypedValue::Choice(option));
                    }
                    None => issues.push(FieldIssue {
                        field: spec.name.to_string(),
                        reason: IssueReason::UnknownChoice {
                            options: options.iter().map(ToString::to_string).collect(),
                        },
                    }),
                }
            }
            FieldKind::Text => {
                values.insert(spec.name, TypedValue::Text(raw.to_string()));
            }
        }
    }

    if issues.is_empty() {
        Ok(ValidatedInputs { values })
    } else {
        debug!(issue_count = issues.len(), "input validation failed");
        Err(EngineError::InvalidInput { issues })
    }
}
