//! Parkland Formula Calculator
//!
//! Total 24-hour fluid (mL) = 4 × weight (kg) × %TBSA burned, with half
//! given in the first 8 hours from time of burn and a quarter in each of
//! the next two 8-hour blocks. Severity is banded on the burn percentage.

use crate::band::{Band, ClassificationTable};
use crate::engine::ClinicalCalculator;
use crate::error::EngineError;
use crate::field::{FieldSpec, ValidatedInputs};
use crate::recommend::{append_triggered, RecommendationTable};
use crate::result::{ComputationResult, SecondaryValue};

static FIELDS: &[FieldSpec] = &[
    FieldSpec::number("weight", "kg", 0.0, 300.0),
    FieldSpec::number("burn_percentage", "%TBSA", 0.0, 100.0),
    FieldSpec::number("time_since_burn", "hr", 0.0, 24.0),
];

static BANDS: &[Band] = &[
    Band::new(0.0, 10.0, false, "Minor", "Minor burn"),
    Band::new(10.0, 20.0, false, "Moderate", "Moderate burn"),
    Band::new(20.0, 50.0, false, "Major", "Major burn"),
    Band::new(50.0, 100.0, true, "Critical", "Critical burn"),
];

static TABLE: ClassificationTable =
    ClassificationTable { measure: "burn percentage", unit: "%TBSA", bands: BANDS };

static BASE: &[&str] = &[
    "Use lactated Ringer's solution as primary fluid",
    "Monitor urine output (goal: 0.5-1 mL/kg/hr)",
    "Assess for compartment syndrome",
    "Consider escharotomy if circulation compromised",
    "Monitor for signs of fluid overload",
];

static RECOMMENDATIONS: RecommendationTable = RecommendationTable::new(&[
    ("Minor", BASE),
    ("Moderate", BASE),
    ("Major", BASE),
    ("Critical", BASE),
]);

/// Burn fluid resuscitation plan
pub struct ParklandCalculator;

impl ClinicalCalculator for ParklandCalculator {
    fn name(&self) -> &'static str {
        "parkland"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ValidatedInputs) -> Result<ComputationResult, EngineError> {
        let weight = inputs.number("weight");
        let burn_pct = inputs.number("burn_percentage");
        let time_since_burn = inputs.number("time_since_burn");

        let total = 4.0 * weight * burn_pct;
        let first_8h = total * 0.5;
        let second_8h = total * 0.25;
        let third_8h = total * 0.25;
        let hourly_rate = first_8h / 8.0;

        let band = TABLE.classify(burn_pct)?;
        let mut recommendations = RECOMMENDATIONS.base(band.category);
        append_triggered(
            &mut recommendations,
            &[
                (
                    burn_pct >= 20.0,
                    &[
                        "Consider transfer to burn center",
                        "Aggressive fluid resuscitation required",
                    ],
                ),
                (
                    burn_pct >= 50.0,
                    &[
                        "High mortality risk - intensive care required",
                        "Consider early intubation",
                    ],
                ),
                (
                    time_since_burn > 2.0,
                    &[
                        "Delayed resuscitation - adjust fluid calculations",
                        "Consider increased fluid requirements",
                    ],
                ),
            ],
        );

        Ok(ComputationResult {
            calculator: self.name(),
            primary_value: total,
            primary_unit: "mL",
            secondary_values: vec![
                SecondaryValue::new("first_8h", first_8h, "mL"),
                SecondaryValue::new("second_8h", second_8h, "mL"),
                SecondaryValue::new("third_8h", third_8h, "mL"),
                SecondaryValue::new("hourly_rate_first_8h", hourly_rate, "mL/hr"),
            ],
            category: band.category,
            interpretation: band.label,
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::validate;
    use emscalc_types::{InputSet, RawValue};

    fn run(weight: f64, burn_pct: f64, hours: f64) -> ComputationResult {
        let inputs: InputSet = [
            ("weight".to_string(), RawValue::Number(weight)),
            ("burn_percentage".to_string(), RawValue::Number(burn_pct)),
            ("time_since_burn".to_string(), RawValue::Number(hours)),
        ]
        .into_iter()
        .collect();
        let validated = validate(FIELDS, &inputs).unwrap();
        ParklandCalculator.compute(&validated).unwrap()
    }

    #[test]
    fn seventy_kilos_twenty_percent() {
        let result = run(70.0, 20.0, 1.0);
        assert_eq!(result.primary_value, 5600.0);
        assert_eq!(result.secondary("first_8h"), Some(2800.0));
        assert_eq!(result.secondary("second_8h"), Some(1400.0));
        assert_eq!(result.secondary("third_8h"), Some(1400.0));
        assert_eq!(result.secondary("hourly_rate_first_8h"), Some(350.0));
        assert_eq!(result.category, "Major");
    }

    #[test]
    fn major_burn_triggers_transfer_advice() {
        let result = run(70.0, 20.0, 1.0);
        assert!(result.recommendations.contains(&"Consider transfer to burn center".to_string()));
        assert!(!result
            .recommendations
            .contains(&"High mortality risk - intensive care required".to_string()));
    }

    #[test]
    fn critical_burn_adds_mortality_advice() {
        let result = run(80.0, 60.0, 1.0);
        assert_eq!(result.category, "Critical");
        assert!(result
            .recommendations
            .contains(&"High mortality risk - intensive care required".to_string()));
        assert!(result.recommendations.contains(&"Consider early intubation".to_string()));
    }

    #[test]
    fn delayed_presentation_adds_adjustment_advice() {
        let result = run(70.0, 5.0, 3.0);
        assert_eq!(result.category, "Minor");
        assert!(result
            .recommendations
            .contains(&"Delayed resuscitation - adjust fluid calculations".to_string()));

        let prompt = run(70.0, 5.0, 2.0);
        assert!(!prompt
            .recommendations
            .contains(&"Delayed resuscitation - adjust fluid calculations".to_string()));
    }

    #[test]
    fn severity_band_edges() {
        assert_eq!(run(70.0, 9.9, 1.0).category, "Minor");
        assert_eq!(run(70.0, 10.0, 1.0).category, "Moderate");
        assert_eq!(run(70.0, 50.0, 1.0).category, "Critical");
        assert_eq!(run(70.0, 100.0, 1.0).category, "Critical");
    }

    #[test]
    fn table_is_contiguous() {
        assert!(TABLE.is_contiguous());
    }
}
