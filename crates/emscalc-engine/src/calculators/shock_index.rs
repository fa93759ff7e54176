//! Shock Index Calculator
//!
//! SI = heart rate / systolic blood pressure. Values climb as compensation
//! fails, so the bands track shock stages rather than a normal window.

use crate::band::{Band, ClassificationTable};
use crate::engine::ClinicalCalculator;
use crate::error::EngineError;
use crate::field::{FieldSpec, ValidatedInputs};
use crate::recommend::RecommendationTable;
use crate::result::ComputationResult;

static FIELDS: &[FieldSpec] = &[
    FieldSpec::number("heart_rate", "bpm", 1.0, 300.0),
    FieldSpec::number("systolic_bp", "mmHg", 1.0, 300.0),
];

static BANDS: &[Band] = &[
    Band::new(0.0, 0.6, false, "normal", "Normal - No significant shock"),
    Band::new(0.6, 0.8, false, "mild", "Mild shock - Early compensated stage"),
    Band::new(0.8, 1.0, false, "moderate", "Moderate shock - Compensated stage"),
    Band::new(1.0, f64::INFINITY, true, "severe", "Severe shock - Decompensated stage"),
];

static TABLE: ClassificationTable =
    ClassificationTable { measure: "shock index", unit: "", bands: BANDS };

static RECOMMENDATIONS: RecommendationTable = RecommendationTable::new(&[
    (
        "normal",
        &[
            "Continue routine monitoring",
            "Maintain current treatment plan",
            "Reassess vital signs regularly",
        ],
    ),
    (
        "mild",
        &[
            "Increase monitoring frequency",
            "Evaluate for underlying causes",
            "Consider fluid resuscitation",
            "Prepare for potential deterioration",
        ],
    ),
    (
        "moderate",
        &[
            "Initiate aggressive fluid resuscitation",
            "Consider blood products if hemorrhagic",
            "Frequent vital sign monitoring",
            "Prepare for advanced interventions",
        ],
    ),
    (
        "severe",
        &[
            "Immediate aggressive resuscitation",
            "Consider vasopressors",
            "Blood product administration",
            "Urgent surgical consultation if trauma",
            "Continuous monitoring required",
        ],
    ),
]);

/// Heart rate to systolic pressure ratio
pub struct ShockIndexCalculator;

impl ClinicalCalculator for ShockIndexCalculator {
    fn name(&self) -> &'static str {
        "shock_index"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ValidatedInputs) -> Result<ComputationResult, EngineError> {
        let index = inputs.number("heart_rate") / inputs.number("systolic_bp");
        let band = TABLE.classify(index)?;
        Ok(ComputationResult {
            calculator: self.name(),
            primary_value: index,
            primary_unit: "",
            secondary_values: Vec::new(),
            category: band.category,
            interpretation: band.label,
            recommendations: RECOMMENDATIONS.base(band.category),
        })
    }
}
