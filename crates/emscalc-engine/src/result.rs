//! Computation results.

use serde::Serialize;

/// The outcome of one successful computation. Immutable once produced;
/// identical inputs always produce an identical result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputationResult {
    /// Id of the calculator that produced this result
    pub calculator: &'static str,
    /// The primary unrounded value (anion gap, GCS total, total fluid, ...)
    pub primary_value: f64,
    /// Unit of the primary value
    pub primary_unit: &'static str,
    /// Named secondary values, in the calculator's declared order
    pub secondary_values: Vec<SecondaryValue>,
    /// Category key of the selected band
    pub category: &'static str,
    /// Human-readable interpretation of the selected band
    pub interpretation: &'static str,
    /// Ordered clinical recommendations for this category and context
    pub recommendations: Vec<String>,
}

/// A named secondary value attached to a result (cardiac index, hourly
/// fluid rate, remaining tank volume, ...). Some secondary measures carry
/// their own classification against their own band table, independent of
/// the primary value's category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecondaryValue {
    /// Value name
    pub name: &'static str,
    /// Unrounded value
    pub value: f64,
    /// Display unit
    pub unit: &'static str,
    /// Category of this value's own band, when classified separately
    pub category: Option<&'static str>,
    /// Interpretation of that band
    pub interpretation: Option<&'static str>,
}

impl SecondaryValue {
    /// An unclassified secondary value
    pub const fn new(name: &'static str, value: f64, unit: &'static str) -> Self {
        Self { name, value, unit, category: None, interpretation: None }
    }

    /// A secondary value classified against its own band table
    pub const fn classified(
        name: &'static str,
        value: f64,
        unit: &'static str,
        category: &'static str,
        interpretation: &'static str,
    ) -> Self {
        Self { name, value, unit, category: Some(category), interpretation: Some(interpretation) }
    }
}

impl ComputationResult {
    /// Look up a secondary value by name
    pub fn secondary(&self, name: &str) -> Option<f64> {
        self.secondary_values.iter().find(|s| s.name == name).map(|s| s.value)
    }

    /// Look up a secondary value's own category, if it has one
    pub fn secondary_category(&self, name: &str) -> Option<&'static str> {
        self.secondary_values.iter().find(|s| s.name == name).and_then(|s| s.category)
    }
}
