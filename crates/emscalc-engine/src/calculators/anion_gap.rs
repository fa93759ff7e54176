//! Anion Gap Calculator
//!
//! AG = Na − (Cl + HCO3)
//!
//! When serum albumin is supplied, the corrected gap
//! AG + 2.5 × (4.0 − albumin) is classified instead; hypoalbuminemia
//! otherwise masks an elevated gap.

use crate::band::{Band, ClassificationTable};
use crate::constants::laboratory::NORMAL_ALBUMIN_G_DL;
use crate::engine::ClinicalCalculator;
use crate::error::EngineError;
use crate::field::{FieldSpec, ValidatedInputs};
use crate::recommend::RecommendationTable;
use crate::result::{ComputationResult, SecondaryValue};

static FIELDS: &[FieldSpec] = &[
    FieldSpec::number("sodium", "mEq/L", 0.0, 200.0),
    FieldSpec::number("chloride", "mEq/L", 0.0, 150.0),
    FieldSpec::number("bicarbonate", "mEq/L", 0.0, 50.0),
    FieldSpec::optional_number("albumin", "g/dL", 0.0, 6.0),
];

static BANDS: &[Band] = &[
    Band::new(f64::NEG_INFINITY, 8.0, false, "low", "Low anion gap - Unusual finding"),
    Band::new(8.0, 12.0, true, "normal", "Normal anion gap"),
    Band::new(12.0, f64::INFINITY, true, "high", "High anion gap - Metabolic acidosis likely"),
];

static TABLE: ClassificationTable =
    ClassificationTable { measure: "anion gap", unit: "mEq/L", bands: BANDS };

static RECOMMENDATIONS: RecommendationTable = RecommendationTable::new(&[
    (
        "low",
        &[
            "Verify laboratory values",
            "Check protein levels",
            "Assess medication history",
            "Consider repeat testing",
        ],
    ),
    (
        "normal",
        &[
            "Continue routine monitoring",
            "Assess overall acid-base status",
            "Monitor for changes",
        ],
    ),
    (
        "high",
        &[
            "Assess for diabetic ketoacidosis",
            "Check blood glucose and ketones",
            "Evaluate for shock/hypoperfusion",
            "Consider toxic ingestion",
            "Monitor renal function",
            "Urgent medical evaluation needed",
        ],
    ),
]);

/// Serum anion gap with optional albumin correction
pub struct AnionGapCalculator;

impl ClinicalCalculator for AnionGapCalculator {
    fn name(&self) -> &'static str {
        "anion_gap"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ValidatedInputs) -> Result<ComputationResult, EngineError> {
        let sodium = inputs.number("sodium");
        let chloride = inputs.number("chloride");
        let bicarbonate = inputs.number("bicarbonate");

        let gap = sodium - (chloride + bicarbonate);
        let corrected = match inputs.optional_number("albumin") {
            Some(albumin) if albumin > 0.0 => gap + 2.5 * (NORMAL_ALBUMIN_G_DL - albumin),
            _ => gap,
        };

        let band = TABLE.classify(corrected)?;
        Ok(ComputationResult {
            calculator: self.name(),
            primary_value: gap,
            primary_unit: "mEq/L",
            secondary_values: vec![SecondaryValue::new("corrected_gap", corrected, "mEq/L")],
            category: band.category,
            interpretation: band.label,
            recommendations: RECOMMENDATIONS.base(band.category),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::validate;
    use emscalc_types::{InputSet, RawValue};

    fn run(values: &[(&str, f64)]) -> ComputationResult {
        let inputs: InputSet =
            values.iter().map(|(k, v)| (k.to_string(), RawValue::Number(*v))).collect();
        let validated = validate(FIELDS, &inputs).unwrap();
        AnionGapCalculator.compute(&validated).unwrap()
    }

    #[test]
    fn uncorrected_gap() {
        let result = run(&[("sodium", 140.0), ("chloride", 100.0), ("bicarbonate", 24.0)]);
        assert_eq!(result.primary_value, 16.0);
        assert_eq!(result.secondary("corrected_gap"), Some(16.0));
        assert_eq!(result.category, "high");
        assert_eq!(result.interpretation, "High anion gap - Metabolic acidosis likely");
    }

    #[test]
    fn albumin_correction_applies_when_supplied() {
        let result = run(&[
            ("sodium", 140.0),
            ("chloride", 100.0),
            ("bicarbonate", 24.0),
            ("albumin", 2.0),
        ]);
        assert_eq!(result.primary_value, 16.0);
        // 16 + 2.5 * (4.0 - 2.0) = 21.0
        assert_eq!(result.secondary("corrected_gap"), Some(21.0));
        assert_eq!(result.category, "high");
    }

    #[test]
    fn upper_boundary_is_inclusive() {
        let result = run(&[("sodium", 132.0), ("chloride", 100.0), ("bicarbonate", 20.0)]);
        assert_eq!(result.primary_value, 12.0);
        assert_eq!(result.category, "normal");

        let result = run(&[("sodium", 132.1), ("chloride", 100.0), ("bicarbonate", 20.0)]);
        assert!(result.primary_value > 12.0);
        assert_eq!(result.category, "high");
    }

    #[test]
    fn low_gap() {
        let result = run(&[("sodium", 120.0), ("chloride", 100.0), ("bicarbonate", 18.0)]);
        assert_eq!(result.primary_value, 2.0);
        assert_eq!(result.category, "low");
        assert_eq!(result.recommendations[0], "Verify laboratory values");
    }

    #[test]
    fn table_is_contiguous() {
        assert!(TABLE.is_contiguous());
    }
}
