//! Glasgow Coma Scale Calculator
//!
//! total = eye (1–4) + verbal (1–5) + motor (1–6), range [3, 15].
//!
//! The component ranges make totals below 3 or above 15 impossible, so the
//! table declares no band for them; a malformed sum surfaces as an
//! `UnclassifiedResult` instead of a reachable "Invalid" category.

use crate::band::{Band, ClassificationTable};
use crate::engine::ClinicalCalculator;
use crate::error::EngineError;
use crate::field::{FieldSpec, ValidatedInputs};
use crate::recommend::RecommendationTable;
use crate::result::ComputationResult;

static FIELDS: &[FieldSpec] = &[
    FieldSpec::number("eye", "", 1.0, 4.0),
    FieldSpec::number("verbal", "", 1.0, 5.0),
    FieldSpec::number("motor", "", 1.0, 6.0),
];

static BANDS: &[Band] = &[
    Band::new(3.0, 8.0, true, "Severe", "Severe brain injury"),
    Band::new(8.0, 12.0, true, "Moderate", "Moderate brain injury"),
    Band::new(12.0, 15.0, true, "Mild", "Mild brain injury"),
];

static TABLE: ClassificationTable =
    ClassificationTable { measure: "GCS total", unit: "", bands: BANDS };

static RECOMMENDATIONS: RecommendationTable = RecommendationTable::new(&[
    (
        "Mild",
        &[
            "Continue monitoring",
            "Assess for other injuries",
            "Document neurological status",
            "Consider discharge planning",
        ],
    ),
    (
        "Moderate",
        &[
            "Frequent neurological checks",
            "Consider CT scan",
            "Monitor for deterioration",
            "Prepare for possible intervention",
        ],
    ),
    (
        "Severe",
        &[
            "Immediate intubation consideration",
            "Emergency CT scan",
            "Neurosurgical consultation",
            "Intensive care monitoring",
        ],
    ),
]);

/// Three-component consciousness score
pub struct GlasgowComaCalculator;

impl ClinicalCalculator for GlasgowComaCalculator {
    fn name(&self) -> &'static str {
        "glasgow_coma"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ValidatedInputs) -> Result<ComputationResult, EngineError> {
        let total = inputs.number("eye") + inputs.number("verbal") + inputs.number("motor");
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
