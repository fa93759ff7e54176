//! APGAR Score Calculator
//!
//! Five newborn criteria (appearance, pulse, grimace, activity,
//! respiratory effort) scored 0-2 each, summed to a 0-10 total.

use crate::band::{Band, ClassificationTable};
use crate::engine::ClinicalCalculator;
use crate::error::EngineError;
use crate::field::{FieldSpec, ValidatedInputs};
use crate::recommend::RecommendationTable;
use crate::result::ComputationResult;

static FIELDS: &[FieldSpec] = &[
    FieldSpec::number("appearance", "", 0.0, 2.0),
    FieldSpec::number("pulse", "", 0.0, 2.0),
    FieldSpec::number("grimace", "", 0.0, 2.0),
    FieldSpec::number("activity", "", 0.0, 2.0),
    FieldSpec::number("respiratory", "", 0.0, 2.0),
];

static BANDS: &[Band] = &[
    Band::new(0.0, 4.0, false, "severely_abnormal", "Severely Abnormal"),
    Band::new(4.0, 8.0, false, "moderately_abnormal", "Moderately Abnormal"),
    Band::new(8.0, 10.0, true, "normal", "Normal"),
];

static TABLE: ClassificationTable =
    ClassificationTable { measure: "APGAR total", unit: "", bands: BANDS };

// Scored for documentation; the source tool attaches no recommendations.
static RECOMMENDATIONS: RecommendationTable = RecommendationTable::new(&[]);

/// Newborn assessment score
pub struct ApgarCalculator;

impl ClinicalCalculator for ApgarCalculator {
    fn name(&self) -> &'static str {
        "apgar"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ValidatedInputs) -> Result<ComputationResult, EngineError> {
        let total = inputs.number("appearance")
            + inputs.number("pulse")
            + inputs.number("grimace")
            + inputs.number("activity")
            + inputs.number("respiratory");
        let band = TABLE.classify(total)?;
        Ok(ComputationResult {
            calculator: self.name(),
            primary_value: total,
            primary_unit: "",
            secondary_values: Vec::new(),
            category: band.category,
            interpretation: band.label,
            recommendations: RECOMMENDATIONS.base(band.category),
        })
    }
}
