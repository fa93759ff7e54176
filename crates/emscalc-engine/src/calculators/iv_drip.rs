//! IV Drip Rate Calculator
//!
//! gtt/min = volume (mL) × drop factor (gtt/mL) / time (min)
//!
//! Time may be entered in hours or minutes; drop factor is one of the
//! standard macro/micro tubing sets (10, 15, 20, 60 gtt/mL).

use crate::band::{Band, ClassificationTable};
use crate::engine::ClinicalCalculator;
use crate::error::EngineError;
use crate::field::{FieldSpec, ValidatedInputs};
use crate::recommend::RecommendationTable;
use crate::result::{ComputationResult, SecondaryValue};

static FIELDS: &[FieldSpec] = &[
    FieldSpec::positive("volume", "mL"),
    FieldSpec::positive("time", ""),
    FieldSpec::choice("time_unit", &["hours", "minutes"]),
    FieldSpec::choice("drop_factor", &["10", "15", "20", "60"]),
];

static BANDS: &[Band] = &[
    Band::new(0.0, 10.0, false, "Very Slow", "Very slow drip rate"),
    Band::new(10.0, 30.0, false, "Slow", "Slow drip rate"),
    Band::new(30.0, 60.0, false, "Moderate", "Moderate drip rate"),
    Band::new(60.0, 100.0, false, "Fast", "Fast drip rate"),
    Band::new(100.0, f64::INFINITY, true, "Very Fast", "Very fast drip rate"),
];

static TABLE: ClassificationTable =
    ClassificationTable { measure: "drip rate", unit: "gtt/min", bands: BANDS };

static GUIDANCE: &[&str] = &[
    "Monitor patient regularly during infusion",
    "Adjust rate if patient shows signs of fluid overload",
    "Verify drop factor with IV tubing packaging",
    "Consider patient condition and fluid tolerance",
];

static RECOMMENDATIONS: RecommendationTable = RecommendationTable::new(&[
    ("Very Slow", GUIDANCE),
    ("Slow", GUIDANCE),
    ("Moderate", GUIDANCE),
    ("Fast", GUIDANCE),
    ("Very Fast", GUIDANCE),
]);

/// Gravity infusion drip rate
pub struct IvDripCalculator;

impl ClinicalCalculator for IvDripCalculator {
    fn name(&self) -> &'static str {
        "iv_drip"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ValidatedInputs) -> Result<ComputationResult, EngineError> {
        let volume = inputs.number("volume");
        let time = inputs.number("time");
        let minutes = match inputs.choice("time_unit") {
            "hours" => time * 60.0,
            _ => time,
        };
        // Validation guarantees the option is one of the declared factors.
        let factor = match inputs.choice("drop_factor") {
            "10" => 10.0,
            "15" => 15.0,
            "20" => 20.0,
            _ => 60.0,
        };

        let drip_rate = volume * factor / minutes;
        let flow_per_min = volume / minutes;
        let flow_per_hr = flow_per_min * 60.0;

        let band = TABLE.classify(drip_rate)?;
        Ok(ComputationResult {
            calculator: self.name(),
            primary_value: drip_rate,
            primary_unit: "gtt/min",
            secondary_values: vec![
                SecondaryValue::new("flow_ml_per_min", flow_per_min, "mL/min"),
                SecondaryValue::new("infusion_ml_per_hr", flow_per_hr, "mL/hr"),
                SecondaryValue::new("total_minutes", minutes, "min"),
            ],
            category: band.category,
            interpretation: band.label,
            recommendations: RECOMMENDATIONS.base(band.category),
        })
    }
}
