//! Ordered clinical severity bands and the classifier.
//!
//! A [`ClassificationTable`] is an ascending, contiguous, non-overlapping
//! list of [`Band`]s covering the full range the formula can produce.
//! Adjacent bands share an edge (`band.lower == previous.upper`); the
//! `upper_inclusive` flag decides which side owns a value landing exactly on
//! the edge. Anion gap declares normal as 8–12 with an inclusive upper, so
//! 12.0 is normal and 12.000001 is high, while the low band's exclusive
//! upper puts exactly 8.0 in the normal band.
//!
//! The classifier selects exactly one band or fails with
//! `UnclassifiedResult`. A gap in a table is a configuration defect and is
//! surfaced, never papered over with a default category.

use crate::error::EngineError;
use serde::Serialize;

/// A contiguous numeric interval mapped to one clinical category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Band {
    /// Lower edge; shared with the previous band's upper edge
    pub lower: f64,
    /// Upper edge; shared with the next band's lower edge
    pub upper: f64,
    /// Whether a value exactly on `upper` belongs to this band (`true`) or
    /// to the next one (`false`)
    pub upper_inclusive: bool,
    /// Machine-readable category key (e.g. "normal", "high", "severe")
    pub category: &'static str,
    /// Human-readable interpretation for this band
    pub label: &'static str,
}

impl Band {
    pub(crate) const fn new(
        lower: f64,
        upper: f64,
        upper_inclusive: bool,
        category: &'static str,
        label: &'static str,
    ) -> Self {
        Self { lower, upper, upper_inclusive, category, label }
    }

    /// Whether `value` lies within this band's closed interval. Used by the
    /// band-containment property tests; selection itself is ordered.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// An ordered set of bands for one measure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationTable {
    /// Name of the classified measure, used in error reports
    pub measure: &'static str,
    /// Unit of the classified measure
    pub unit: &'static str,
    /// Bands in ascending order
    pub bands: &'static [Band],
}

impl ClassificationTable {
    /// Select the single band containing `value`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnclassifiedResult`] when the value is NaN,
    /// falls below the first band, or exceeds the last band's upper edge.
    pub fn classify(&self, value: f64) -> Result<&'static Band, EngineError> {
        if value.is_nan() || value < self.bands[0].lower {
            return Err(self.unclassified(value));
        }
        for band in self.bands {
            if value < band.upper || (band.upper_inclusive && value == band.upper) {
                return Ok(band);
            }
        }
        Err(self.unclassified(value))
    }

    fn unclassified(&self, value: f64) -> EngineError {
        EngineError::UnclassifiedResult { measure: self.measure.to_string(), value }
    }

    /// Check the table invariants: ascending, contiguous, non-overlapping.
    /// Exercised by tests for every built-in table.
    pub fn is_contiguous(&self) -> bool {
        self.bands.windows(2).all(|w| w[0].upper == w[1].lower && w[0].upper > w[0].lower)
            && self.bands.last().is_some_and(|b| b.upper >= b.lower)
    }
}
