//! Named clinical constants used throughout the emscalc engine.
//!
//! These are deliberate simplifying assumptions of the source protocols,
//! surfaced as named constants so they read as visible invariants rather
//! than magic numbers inside formulas.

/// Hemodynamic normalization constants
pub mod hemodynamics {
    /// Body surface area assumed for cardiac index and stroke volume index
    /// when no patient-specific BSA is available (average adult, m²).
    pub const ADULT_BSA_M2: f64 = 1.7;
}

/// Weight estimation constants
pub mod weight {
    /// Average adult weight used for patients aged 15 and over (kg)
    pub const ADULT_AVERAGE_WEIGHT_KG: f64 = 70.0;
}

/// Laboratory reference constants
pub mod laboratory {
    /// Normal serum albumin used by the anion gap correction (g/dL)
    pub const NORMAL_ALBUMIN_G_DL: f64 = 4.0;
}

/// History ledger limits
pub mod history {
    /// Number of most-recent computations retained per calculator session
    pub const HISTORY_CAPACITY: usize = 5;
}
