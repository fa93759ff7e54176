//! Minute Ventilation Calculator
//!
//! MV (L/min) = tidal volume (mL) × respiratory rate / 1000
//!
//! With a patient weight the weight-normalized value (L/kg/min) is
//! classified against per-kilogram norms; without one the absolute MV is
//! classified against adult resting norms.

use crate::band::{Band, ClassificationTable};
use crate::engine::ClinicalCalculator;
use crate::error::EngineError;
use crate::field::{FieldSpec, ValidatedInputs};
use crate::recommend::RecommendationTable;
use crate::result::{ComputationResult, SecondaryValue};

static FIELDS: &[FieldSpec] = &[
    FieldSpec::number("tidal_volume", "mL", 0.0, 3000.0),
    FieldSpec::number("respiratory_rate", "breaths/min", 0.0, 60.0),
    FieldSpec::optional_number("weight", "kg", 0.0, 300.0),
];

static NORMALIZED_BANDS: &[Band] = &[
    Band::new(0.0, 0.06, false, "low", "Low minute ventilation - Hypoventilation"),
    Band::new(0.06, 0.15, true, "normal", "Normal minute ventilation"),
    Band::new(0.15, f64::INFINITY, true, "high", "High minute ventilation - Hyperventilation"),
];

static NORMALIZED_TABLE: ClassificationTable = ClassificationTable {
    measure: "normalized minute ventilation",
    unit: "L/kg/min",
    bands: NORMALIZED_BANDS,
};

static ABSOLUTE_BANDS: &[Band] = &[
    Band::new(0.0, 4.0, false, "low", "Low minute ventilation - Hypoventilation"),
    Band::new(4.0, 10.0, true, "normal", "Normal minute ventilation"),
    Band::new(10.0, f64::INFINITY, true, "high", "High minute ventilation - Hyperventilation"),
];

static ABSOLUTE_TABLE: ClassificationTable = ClassificationTable {
    measure: "minute ventilation",
    unit: "L/min",
    bands: ABSOLUTE_BANDS,
};

static NORMALIZED_RECOMMENDATIONS: RecommendationTable = RecommendationTable::new(&[
    (
        "low",
        &[
            "Assess for respiratory depression",
            "Consider assisted ventilation",
            "Check airway patency",
            "Monitor oxygen saturation",
            "Evaluate for narcotic overdose",
        ],
    ),
    (
        "normal",
        &[
            "Continue current monitoring",
            "Maintain spontaneous breathing",
            "Regular assessment of work of breathing",
            "Monitor for changes",
        ],
    ),
    (
        "high",
        &[
            "Assess for anxiety/pain",
            "Consider metabolic acidosis",
            "Evaluate for hypoxemia",
            "Monitor for respiratory fatigue",
            "Consider sedation if appropriate",
        ],
    ),
]);

static ABSOLUTE_GUIDANCE: &[&str] = &[
    "Consider patient weight for more accurate assessment",
    "Evaluate clinical context",
    "Monitor respiratory effort",
    "Assess for underlying causes",
];

static ABSOLUTE_RECOMMENDATIONS: RecommendationTable = RecommendationTable::new(&[
    ("low", ABSOLUTE_GUIDANCE),
    ("normal", ABSOLUTE_GUIDANCE),
    ("high", ABSOLUTE_GUIDANCE),
]);

/// Minute ventilation with optional weight normalization
pub struct MinuteVentilationCalculator;

impl ClinicalCalculator for MinuteVentilationCalculator {
    fn name(&self) -> &'static str {
        "minute_ventilation"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ValidatedInputs) -> Result<ComputationResult, EngineError> {
        let tidal_volume = inputs.number("tidal_volume");
        let rate = inputs.number("respiratory_rate");
        let minute_ventilation = tidal_volume * rate / 1000.0;

        let weight = inputs.optional_number("weight").filter(|w| *w > 0.0);
        let (band, secondary, recommendations) = match weight {
            Some(weight) => {
                let normalized = minute_ventilation / weight;
                let band = NORMALIZED_TABLE.classify(normalized)?;
                (
                    band,
                    vec![SecondaryValue::new("normalized_mv", normalized, "L/kg/min")],
                    NORMALIZED_RECOMMENDATIONS.base(band.category),
                )
            }
            None => {
                let band = ABSOLUTE_TABLE.classify(minute_ventilation)?;
                (band, Vec::new(), ABSOLUTE_RECOMMENDATIONS.base(band.category))
            }
        };

        Ok(ComputationResult {
            calculator: self.name(),
            primary_value: minute_ventilation,
            primary_unit: "L/min",
            secondary_values: secondary,
            category: band.category,
            interpretation: band.label,
            recommendations,
        })
    }
}
