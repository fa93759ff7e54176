//! Cardiac Output Calculator
//!
//! CO (L/min) = HR × SV / 1000
//! CI = CO / BSA, SVI = SV / BSA with BSA fixed at 1.7 m² (documented
//! simplification, see [`crate::constants::hemodynamics`]).
//! MAP = (SBP + 2 × DBP) / 3 only when both pressures are supplied,
//! otherwise reported as 0.
//!
//! CO, CI and MAP each classify against their own band table; the result's
//! category reflects CO, and the cardiac index and MAP bands ride on their
//! secondary values. A MAP of 0 from missing pressures stays unclassified.

use crate::band::{Band, ClassificationTable};
use crate::constants::hemodynamics::ADULT_BSA_M2;
use crate::engine::ClinicalCalculator;
use crate::error::EngineError;
use crate::field::{FieldSpec, ValidatedInputs};
use crate::recommend::RecommendationTable;
use crate::result::{ComputationResult, SecondaryValue};

static FIELDS: &[FieldSpec] = &[
    FieldSpec::positive("heart_rate", "bpm"),
    FieldSpec::positive("stroke_volume", "mL"),
    FieldSpec::optional_number("systolic_bp", "mmHg", 0.0, 300.0),
    FieldSpec::optional_number("diastolic_bp", "mmHg", 0.0, 300.0),
];

static CO_BANDS: &[Band] = &[
    Band::new(0.0, 4.0, false, "Low", "Low cardiac output"),
    Band::new(4.0, 8.0, true, "Normal", "Normal cardiac output"),
    Band::new(8.0, f64::INFINITY, true, "High", "High cardiac output"),
];

static CO_TABLE: ClassificationTable =
    ClassificationTable { measure: "cardiac output", unit: "L/min", bands: CO_BANDS };

static CI_BANDS: &[Band] = &[
    Band::new(0.0, 2.5, false, "Low", "Low cardiac index"),
    Band::new(2.5, 4.0, true, "Normal", "Normal cardiac index"),
    Band::new(4.0, f64::INFINITY, true, "High", "High cardiac index"),
];

static CI_TABLE: ClassificationTable =
    ClassificationTable { measure: "cardiac index", unit: "L/min/m²", bands: CI_BANDS };

static MAP_BANDS: &[Band] = &[
    Band::new(0.0, 70.0, false, "Low", "Low mean arterial pressure"),
    Band::new(70.0, 100.0, true, "Normal", "Normal mean arterial pressure"),
    Band::new(100.0, f64::INFINITY, true, "High", "High mean arterial pressure"),
];

static MAP_TABLE: ClassificationTable =
    ClassificationTable { measure: "mean arterial pressure", unit: "mmHg", bands: MAP_BANDS };

// The source tool shows the same clinical considerations for every band.
static CONSIDERATIONS: &[&str] = &[
    "Cardiac output depends on heart rate, stroke volume, and venous return",
    "Normal resting cardiac output: 4-8 L/min",
    "Cardiac index accounts for body surface area",
    "Consider patient's clinical condition and other vital signs",
];

static RECOMMENDATIONS: RecommendationTable = RecommendationTable::new(&[
    ("Low", CONSIDERATIONS),
    ("Normal", CONSIDERATIONS),
    ("High", CONSIDERATIONS),
]);

/// Hemodynamic parameters from heart rate and stroke volume
pub struct CardiacOutputCalculator;

impl ClinicalCalculator for CardiacOutputCalculator {
    fn name(&self) -> &'static str {
        "cardiac_output"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ValidatedInputs) -> Result<ComputationResult, EngineError> {
        let heart_rate = inputs.number("heart_rate");
        let stroke_volume = inputs.number("stroke_volume");

        let cardiac_output = heart_rate * stroke_volume / 1000.0;
        let cardiac_index = cardiac_output / ADULT_BSA_M2;
        let stroke_volume_index = stroke_volume / ADULT_BSA_M2;

        let co_band = CO_TABLE.classify(cardiac_output)?;
        let ci_band = CI_TABLE.classify(cardiac_index)?;

        let map_value = match (
            inputs.optional_number("systolic_bp"),
            inputs.optional_number("diastolic_bp"),
        ) {
            (Some(sbp), Some(dbp)) => {
                let map = (sbp + 2.0 * dbp) / 3.0;
                let map_band = MAP_TABLE.classify(map)?;
                SecondaryValue::classified(
                    "mean_arterial_pressure",
                    map,
                    "mmHg",
                    map_band.category,
                    map_band.label,
                )
            }
            // Without both pressures the sentinel 0 is reported but never
            // classified.
            _ => SecondaryValue::new("mean_arterial_pressure", 0.0, "mmHg"),
        };

        Ok(ComputationResult {
            calculator: self.name(),
            primary_value: cardiac_output,
            primary_unit: "L/min",
            secondary_values: vec![
                SecondaryValue::classified(
                    "cardiac_index",
                    cardiac_index,
                    "L/min/m²",
                    ci_band.category,
                    ci_band.label,
                ),
                map_value,
                SecondaryValue::new("stroke_volume_index", stroke_volume_index, "mL/m²"),
            ],
            category: co_band.category,
            interpretation: co_band.label,
            recommendations: RECOMMENDATIONS.base(co_band.category),
        })
    }
}
