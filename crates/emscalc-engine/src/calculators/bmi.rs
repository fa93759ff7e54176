//! BMI Calculator
//!
//! BMI = weight (kg) / height (m)². Imperial entries are converted on the
//! way in and the healthy-weight figures are converted back to pounds on
//! the way out. The healthy range spans BMI 18.5 to 24.9.

use crate::band::{Band, ClassificationTable};
use crate::engine::ClinicalCalculator;
use crate::error::{EngineError, FieldIssue, IssueReason};
use crate::field::{FieldSpec, ValidatedInputs};
use crate::recommend::RecommendationTable;
use crate::result::{ComputationResult, SecondaryValue};

const LB_TO_KG: f64 = 0.453592;
const IN_TO_M: f64 = 0.0254;
const KG_TO_LB: f64 = 2.20462;

const HEALTHY_BMI_MIN: f64 = 18.5;
const HEALTHY_BMI_MAX: f64 = 24.9;

static FIELDS: &[FieldSpec] = &[
    FieldSpec::choice("unit_system", &["metric", "imperial"]),
    FieldSpec::positive("weight", ""),
    FieldSpec::optional_number("height", "cm", 0.0, 300.0),
    FieldSpec::optional_number("feet", "ft", 0.0, 8.0),
    FieldSpec::optional_number("inches", "in", 0.0, 12.0),
];

static BANDS: &[Band] = &[
    Band::new(0.0, 18.5, false, "Underweight", "Underweight"),
    Band::new(18.5, 25.0, false, "Normal weight", "Normal weight"),
    Band::new(25.0, 30.0, false, "Overweight", "Overweight"),
    Band::new(30.0, f64::INFINITY, true, "Obese", "Obese"),
];

static TABLE: ClassificationTable =
    ClassificationTable { measure: "BMI", unit: "kg/m²", bands: BANDS };

// The source tool publishes health considerations in the UI only, not as
// per-result recommendations.
static RECOMMENDATIONS: RecommendationTable = RecommendationTable::new(&[]);

/// Body mass index with healthy weight range
pub struct BmiCalculator;

impl ClinicalCalculator for BmiCalculator {
    fn name(&self) -> &'static str {
        "bmi"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ValidatedInputs) -> Result<ComputationResult, EngineError> {
        let imperial = inputs.choice("unit_system") == "imperial";

        let (weight_kg, height_m) = if imperial {
            let total_inches = inputs.optional_number("feet").unwrap_or(0.0) * 12.0
                + inputs.optional_number("inches").unwrap_or(0.0);
            (inputs.number("weight") * LB_TO_KG, total_inches * IN_TO_M)
        } else {
            (inputs.number("weight"), inputs.optional_number("height").unwrap_or(0.0) / 100.0)
        };

        // Height is split across unit-dependent optional fields, so the
        // declarative contract cannot require it; enforce it here.
        if height_m <= 0.0 {
            let field = if imperial { "feet" } else { "height" };
            return Err(EngineError::InvalidInput {
                issues: vec![FieldIssue { field: field.to_string(), reason: IssueReason::Missing }],
            });
        }

        let bmi = weight_kg / (height_m * height_m);

        let min_healthy_kg = HEALTHY_BMI_MIN * height_m * height_m;
        let max_healthy_kg = HEALTHY_BMI_MAX * height_m * height_m;
        let to_display = |kg: f64| if imperial { kg * KG_TO_LB } else { kg };
        let display_unit = if imperial { "lb" } else { "kg" };

        let current = to_display(weight_kg);
        let weight_to_lose =
            if bmi >= 25.0 { current - to_display(max_healthy_kg) } else { 0.0 };
        let weight_to_gain =
            if bmi < HEALTHY_BMI_MIN { to_display(min_healthy_kg) - current } else { 0.0 };

        let band = TABLE.classify(bmi)?;
        Ok(ComputationResult {
            calculator: self.name(),
            primary_value: bmi,
            primary_unit: "kg/m²",
            secondary_values: vec![
                SecondaryValue::new("healthy_weight_min", to_display(min_healthy_kg), display_unit),
                SecondaryValue::new("healthy_weight_max", to_display(max_healthy_kg), display_unit),
                SecondaryValue::new("weight_to_lose", weight_to_lose, display_unit),
                SecondaryValue::new("weight_to_gain", weight_to_gain, display_unit),
            ],
            category: band.category,
            interpretation: band.label,
            recommendations: RECOMMENDATIONS.base(band.category),
        })
    }
}
