//! Category-keyed recommendation lists.
//!
//! Each calculator maps a clinical category to an ordered list of
//! recommended actions. Context-triggered items (burn percentage over a
//! threshold, delayed resuscitation, low tank time) are appended after the
//! base list in the order their checks are declared; they are never
//! substituted for the base list, never sorted and never deduplicated.

/// Mapping from category key to an ordered base recommendation list
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationTable {
    entries: &'static [(&'static str, &'static [&'static str])],
}

impl RecommendationTable {
    /// Build a table from category → list pairs
    pub const fn new(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    /// Base recommendations for a category, in declared order. Categories
    /// without an entry get an empty list (some calculators publish no
    /// recommendation text).
    pub fn base(&self, category: &str) -> Vec<String> {
        self.entries
            .iter()
            .find(|(key, _)| *key == category)
            .map(|(_, items)| items.iter().map(ToString::to_string).collect())
            .unwrap_or_default()
    }
}

/// Append context-triggered items to a base list. `triggers` pairs each
/// context condition with the items it contributes; fired triggers append in
/// declaration order.
pub(crate) fn append_triggered(
    base: &mut Vec<String>,
    triggers: &[(bool, &[&str])],
) {
    for (fired, items) in triggers {
        if *fired {
            base.extend(items.iter().map(ToString::to_string));
        }
    }
}
