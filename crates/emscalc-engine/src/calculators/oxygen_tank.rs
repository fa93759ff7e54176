//! Oxygen Tank Duration Calculator
//!
//! remaining volume (L) = gauge pressure / service pressure × rated capacity
//! remaining time (min) = remaining volume / flow rate
//!
//! Tank data covers the standard portable (D, E) and stationary
//! (M, G, H, K) cylinder sizes at a 2200 psi service pressure.

use crate::band::{Band, ClassificationTable};
use crate::engine::ClinicalCalculator;
use crate::error::EngineError;
use crate::field::{FieldSpec, ValidatedInputs};
use crate::recommend::RecommendationTable;
use crate::result::{ComputationResult, SecondaryValue};

/// Rated specification of one cylinder size
struct TankSpec {
    size: &'static str,
    capacity_l: f64,
    service_pressure_psi: f64,
}

static TANKS: &[TankSpec] = &[
    TankSpec { size: "D", capacity_l: 425.0, service_pressure_psi: 2200.0 },
    TankSpec { size: "E", capacity_l: 680.0, service_pressure_psi: 2200.0 },
    TankSpec { size: "M", capacity_l: 3000.0, service_pressure_psi: 2200.0 },
    TankSpec { size: "G", capacity_l: 5300.0, service_pressure_psi: 2200.0 },
    TankSpec { size: "H", capacity_l: 6900.0, service_pressure_psi: 2200.0 },
    TankSpec { size: "K", capacity_l: 6900.0, service_pressure_psi: 2200.0 },
];

static SIZES: &[&str] = &["D", "E", "M", "G", "H", "K"];

static FIELDS: &[FieldSpec] = &[
    FieldSpec::choice("tank_size", SIZES),
    FieldSpec::positive("pressure", "psi"),
    FieldSpec::positive("flow_rate", "L/min"),
];

static BANDS: &[Band] = &[
    Band::new(0.0, 15.0, false, "Critical", "Critical oxygen supply"),
    Band::new(15.0, 30.0, false, "Low", "Low oxygen supply"),
    Band::new(30.0, 60.0, false, "Moderate", "Moderate oxygen supply"),
    Band::new(60.0, f64::INFINITY, true, "Good", "Adequate oxygen supply"),
];

static TABLE: ClassificationTable =
    ClassificationTable { measure: "remaining time", unit: "min", bands: BANDS };

static USAGE: &[&str] = &[
    "Monitor patient response and adjust flow rate as needed",
    "Keep backup oxygen supply available",
    "Document oxygen administration and consumption",
];

static RECOMMENDATIONS: RecommendationTable = RecommendationTable::new(&[
    (
        "Critical",
        &[
            "Replace or refill tank soon",
            "Critical - immediate replacement needed",
            "Monitor patient response and adjust flow rate as needed",
            "Keep backup oxygen supply available",
            "Document oxygen administration and consumption",
        ],
    ),
    (
        "Low",
        &[
            "Replace or refill tank soon",
            "Monitor patient response and adjust flow rate as needed",
            "Keep backup oxygen supply available",
            "Document oxygen administration and consumption",
        ],
    ),
    ("Moderate", USAGE),
    ("Good", USAGE),
]);

/// Remaining cylinder supply at a given flow rate
pub struct OxygenTankCalculator;

impl ClinicalCalculator for OxygenTankCalculator {
    fn name(&self) -> &'static str {
        "oxygen_tank"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ValidatedInputs) -> Result<ComputationResult, EngineError> {
        let size = inputs.choice("tank_size");
        // Validation guarantees the size is one of the declared options,
        // and TANKS covers every option.
        let spec = TANKS.iter().find(|t| t.size == size).unwrap_or(&TANKS[0]);

        let pressure = inputs.number("pressure");
        let flow_rate = inputs.number("flow_rate");

        let remaining_volume = (pressure / spec.service_pressure_psi) * spec.capacity_l;
        let remaining_minutes = remaining_volume / flow_rate;

        let band = TABLE.classify(remaining_minutes)?;
        Ok(ComputationResult {
            calculator: self.name(),
            primary_value: remaining_minutes,
            primary_unit: "min",
            secondary_values: vec![
                SecondaryValue::new("remaining_volume", remaining_volume, "L"),
                SecondaryValue::new("tank_capacity", spec.capacity_l, "L"),
                SecondaryValue::new("service_pressure", spec.service_pressure_psi, "psi"),
            ],
            category: band.category,
            interpretation: band.label,
            recommendations: RECOMMENDATIONS.base(band.category),
        })
    }
}
