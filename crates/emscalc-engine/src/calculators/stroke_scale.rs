//! Stroke Assessment Scales
//!
//! FAST (face, arms, speech) and the extended BE-FAST (balance, eyes,
//! face, arms, speech) checklists. The score is the count of positive
//! findings; any positive finding classifies the assessment as positive
//! for stroke. Time of onset is carried through as free text.

use crate::band::{Band, ClassificationTable};
use crate::engine::ClinicalCalculator;
use crate::error::EngineError;
use crate::field::{FieldSpec, ValidatedInputs};
use crate::recommend::RecommendationTable;
use crate::result::ComputationResult;

static FAST_FIELDS: &[FieldSpec] = &[
    FieldSpec::flag("face"),
    FieldSpec::flag("arms"),
    FieldSpec::flag("speech"),
    FieldSpec::optional_text("onset_time"),
];

static BEFAST_FIELDS: &[FieldSpec] = &[
    FieldSpec::flag("balance"),
    FieldSpec::flag("eyes"),
    FieldSpec::flag("face"),
    FieldSpec::flag("arms"),
    FieldSpec::flag("speech"),
    FieldSpec::optional_text("onset_time"),
];

static FAST_BANDS: &[Band] = &[
    Band::new(0.0, 1.0, false, "negative", "Negative for stroke"),
    Band::new(1.0, 3.0, true, "positive", "Positive for stroke"),
];

static FAST_TABLE: ClassificationTable =
    ClassificationTable { measure: "FAST score", unit: "", bands: FAST_BANDS };

static BEFAST_BANDS: &[Band] = &[
    Band::new(0.0, 1.0, false, "negative", "Negative for stroke"),
    Band::new(1.0, 5.0, true, "positive", "Positive for stroke"),
];

static BEFAST_TABLE: ClassificationTable =
    ClassificationTable { measure: "BE-FAST score", unit: "", bands: BEFAST_BANDS };

static FAST_RECOMMENDATIONS: RecommendationTable = RecommendationTable::new(&[
    (
        "positive",
        &[
            "Activate stroke protocol immediately",
            "Note exact time of onset",
            "Prepare for rapid transport",
            "Notify receiving facility",
            "Consider stroke center destination",
        ],
    ),
    (
        "negative",
        &[
            "Continue assessment for other causes",
            "Monitor for symptom development",
            "Document findings thoroughly",
            "Consider other neurological causes",
        ],
    ),
]);

static BEFAST_RECOMMENDATIONS: RecommendationTable = RecommendationTable::new(&[
    (
        "positive",
        &[
            "Activate stroke protocol immediately",
            "Note exact time of onset",
            "Prepare for rapid transport to stroke center",
            "Notify receiving facility with findings",
            "Consider advanced stroke center if available",
        ],
    ),
    (
        "negative",
        &[
            "Continue comprehensive assessment",
            "Monitor for symptom development",
            "Document all findings",
            "Consider other neurological causes",
        ],
    ),
]);

fn score(inputs: &ValidatedInputs, flags: &[&str]) -> f64 {
    flags.iter().filter(|f| inputs.flag(f)).count() as f64
}

fn assess(
    name: &'static str,
    flags: &[&str],
    table: &ClassificationTable,
    recommendations: &RecommendationTable,
    inputs: &ValidatedInputs,
) -> Result<ComputationResult, EngineError> {
    let total = score(inputs, flags);
    let band = table.classify(total)?;
    Ok(ComputationResult {
        calculator: name,
        primary_value: total,
        primary_unit: "",
        secondary_values: Vec::new(),
        category: band.category,
        interpretation: band.label,
        recommendations: recommendations.base(band.category),
    })
}

/// Three-item FAST checklist
pub struct FastCalculator;

impl ClinicalCalculator for FastCalculator {
    fn name(&self) -> &'static str {
        "stroke_fast"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FAST_FIELDS
    }

    fn compute(&self, inputs: &ValidatedInputs) -> Result<ComputationResult, EngineError> {
        assess(self.name(), &["face", "arms", "speech"], &FAST_TABLE, &FAST_RECOMMENDATIONS, inputs)
    }
}

/// Five-item BE-FAST checklist
pub struct BeFastCalculator;

impl ClinicalCalculator for BeFastCalculator {
    fn name(&self) -> &'static str {
        "stroke_befast"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        BEFAST_FIELDS
    }

    fn compute(&self, inputs: &ValidatedInputs) -> Result<ComputationResult, EngineError> {
        assess(
            self.name(),
            &["balance", "eyes", "face", "arms", "speech"],
            &BEFAST_TABLE,
            &BEFAST_RECOMMENDATIONS,
            inputs,
        )
    }
}
