//! Presentation-side formatting.
//!
//! Formulas and the classifier work exclusively on unrounded values; every
//! rounding decision lives here so display precision can never shift a value
//! across a band boundary.

/// Round to one decimal place for display
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places for display
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a duration given in minutes the way the oxygen tank calculator
/// displays it: whole minutes below an hour, `"3h 52m"` above.
#[must_use]
pub fn format_minutes(minutes: f64) -> String {
    // Round the total before splitting so 119.6 carries into "2h 0m"
    // instead of "1h 60m".
    let total = minutes.round() as i64;
    if total < 60 {
        format!("{total} min")
    } else {
        format!("{}h {}m", total / 60, total % 60)
    }
}
