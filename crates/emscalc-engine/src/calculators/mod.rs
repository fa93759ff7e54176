//! Built-in clinical calculators.
//!
//! One module per clinical tool. Each module declares its field contract,
//! classification table and recommendation lists as statics, and implements
//! [`ClinicalCalculator`] with a pure `compute`.

use crate::engine::ClinicalCalculator;

pub mod anion_gap;
pub mod apgar;
pub mod bmi;
pub mod cardiac_output;
pub mod glasgow_coma;
pub mod iv_drip;
pub mod minute_ventilation;
pub mod oxygen_tank;
pub mod parkland;
pub mod pediatric_weight;
pub mod shock_index;
pub mod stroke_scale;

/// Every built-in calculator, in registration order
pub fn all() -> Vec<Box<dyn ClinicalCalculator>> {
    vec![
        Box::new(anion_gap::AnionGapCalculator),
        Box::new(glasgow_coma::GlasgowComaCalculator),
        Box::new(cardiac_output::CardiacOutputCalculator),
        Box::new(iv_drip::IvDripCalculator),
        Box::new(minute_ventilation::MinuteVentilationCalculator),
        Box::new(oxygen_tank::OxygenTankCalculator),
        Box::new(parkland::ParklandCalculator),
        Box::new(pediatric_weight::PediatricWeightCalculator),
        Box::new(bmi::BmiCalculator),
        Box::new(stroke_scale::FastCalculator),
        Box::new(stroke_scale::BeFastCalculator),
        Box::new(shock_index::ShockIndexCalculator),
        Box::new(apgar::ApgarCalculator),
    ]
}
