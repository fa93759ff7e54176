//! Pediatric Weight Estimator
//!
//! Age-banded formulas:
//! - 0–6 months: 3.5 + 0.7 × months
//! - 6–12 months: 7.7 + 0.5 × (months − 6)
//! - 1–10 years: age × 2 + 8 (APLS)
//! - 11–14 years: age × 3 + 7
//! - 15+ years: adult average of 70 kg
//!
//! The interpretation carries the formula used rather than the band label,
//! so a responder can see which estimate is in play.

use crate::band::{Band, ClassificationTable};
use crate::constants::weight::ADULT_AVERAGE_WEIGHT_KG;
use crate::engine::ClinicalCalculator;
use crate::error::EngineError;
use crate::field::{FieldSpec, ValidatedInputs};
use crate::recommend::RecommendationTable;
use crate::result::{ComputationResult, SecondaryValue};

const KG_TO_LB: f64 = 2.2;

static FIELDS: &[FieldSpec] = &[
    FieldSpec::positive("age", ""),
    FieldSpec::choice("age_unit", &["years", "months"]),
];

static BANDS: &[Band] = &[
    Band::new(0.0, 1.0, false, "Infant", "Infant weight estimate"),
    Band::new(1.0, 10.0, true, "Child", "Child weight estimate"),
    Band::new(10.0, 14.0, true, "Adolescent", "Adolescent weight estimate"),
    Band::new(14.0, f64::INFINITY, true, "Adult", "Adult weight estimate"),
];

static TABLE: ClassificationTable =
    ClassificationTable { measure: "age", unit: "years", bands: BANDS };

static RECOMMENDATIONS: RecommendationTable = RecommendationTable::new(&[
    (
        "Infant",
        &[
            "Verify with parent/caregiver if possible",
            "Use length-based tape if available",
            "Consider gestational age for premature infants",
            "Monitor for dehydration signs",
        ],
    ),
    (
        "Child",
        &[
            "Verify with parent/caregiver if possible",
            "Use Broselow tape if available",
            "Consider nutritional status",
            "Adjust for obesity/malnutrition if obvious",
        ],
    ),
    (
        "Adolescent",
        &[
            "Consider growth spurt variations",
            "Verify with patient if conscious",
            "Use visual estimation as backup",
            "Consider body habitus",
        ],
    ),
    (
        "Adult",
        &[
            "Use visual estimation for body habitus",
            "Consider patient history if available",
            "Adjust for obvious obesity/underweight",
            "Use standard adult dosing",
        ],
    ),
]);

/// Age-based weight estimate for drug dosing
pub struct PediatricWeightCalculator;

impl ClinicalCalculator for PediatricWeightCalculator {
    fn name(&self) -> &'static str {
        "pediatric_weight"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ValidatedInputs) -> Result<ComputationResult, EngineError> {
        let age = inputs.number("age");
        let (age_years, age_months) = match inputs.choice("age_unit") {
            "months" => (age / 12.0, age),
            _ => (age, age * 12.0),
        };

        let (weight_kg, method): (f64, &'static str) = if age_years < 1.0 {
            if age_months <= 6.0 {
                (3.5 + 0.7 * age_months, "Infant formula (0-6 months)")
            } else {
                (7.7 + 0.5 * (age_months - 6.0), "Infant formula (6-12 months)")
            }
        } else if age_years <= 10.0 {
            (2.0 * age_years + 8.0, "APLS formula (Age × 2 + 8)")
        } else if age_years <= 14.0 {
            (3.0 * age_years + 7.0, "Modified formula (Age × 3 + 7)")
        } else {
            (ADULT_AVERAGE_WEIGHT_KG, "Adult average (70 kg)")
        };

        let band = TABLE.classify(age_years)?;
        Ok(ComputationResult {
            calculator: self.name(),
            primary_value: weight_kg,
            primary_unit: "kg",
            secondary_values: vec![SecondaryValue::new("weight_lb", weight_kg * KG_TO_LB, "lb")],
            category: band.category,
            interpretation: method,
            recommendations: RECOMMENDATIONS.base(band.category),
        })
    }
}
