//! Engine entry points.
//!
//! [`ClinicalCalculator`] is the seam each clinical tool implements: a
//! published field contract plus a pure computation over validated inputs.
//! [`Engine`] is the registry of built-in calculators;
//! [`CalculatorSession`] pairs one calculator with its own history ledger,
//! the only mutable state in the system.

use crate::calculators;
use crate::error::EngineError;
use crate::field::{FieldSpec, ValidatedInputs, validate};
use crate::history::{HistoryEntry, HistoryLedger};
use crate::result::ComputationResult;
use chrono::Utc;
use emscalc_types::InputSet;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// A clinical calculator: a field contract and a pure computation.
///
/// Implementations are stateless and thread-safe; all mutable state lives in
/// the session that owns the history ledger.
pub trait ClinicalCalculator: Send + Sync {
    /// Stable id used to look the calculator up in the registry
    fn name(&self) -> &'static str;

    /// The ordered field contract this calculator publishes
    fn fields(&self) -> &'static [FieldSpec];

    /// Evaluate the formula on validated inputs, classify the unrounded
    /// result and assemble recommendations.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnclassifiedResult`] if a computed value
    /// matches no declared band.
    fn compute(&self, inputs: &ValidatedInputs) -> Result<ComputationResult, EngineError>;
}

/// Registry of built-in calculators
pub struct Engine {
    calculators: HashMap<&'static str, Box<dyn ClinicalCalculator>>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine with every built-in calculator registered
    pub fn new() -> Self {
        let mut engine = Self { calculators: HashMap::new() };
        for calculator in calculators::all() {
            engine.register(calculator);
        }
        engine
    }

    /// Register a calculator, replacing any previous one with the same name
    pub fn register(&mut self, calculator: Box<dyn ClinicalCalculator>) {
        self.calculators.insert(calculator.name(), calculator);
    }

    /// Look up a registered calculator
    pub fn get(&self, name: &str) -> Option<&dyn ClinicalCalculator> {
        self.calculators.get(name).map(|c| c.as_ref())
    }

    /// Registered calculator names, unordered
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.calculators.keys().copied()
    }

    /// Validate raw inputs and run one computation.
    ///
    /// Pure apart from tracing: no history is touched, and re-running with
    /// identical inputs yields an identical result.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownCalculator`] for an unregistered name,
    /// [`EngineError::InvalidInput`] when validation fails, or
    /// [`EngineError::UnclassifiedResult`] on a classification gap.
    #[instrument(skip(self, inputs), fields(calculator = name))]
    pub fn compute(
        &self,
        name: &str,
        inputs: &InputSet,
    ) -> Result<ComputationResult, EngineError> {
        let calculator = self
            .get(name)
            .ok_or_else(|| EngineError::UnknownCalculator { name: name.to_string() })?;
        let validated = validate(calculator.fields(), inputs)?;
        let result = calculator.compute(&validated)?;
        debug!(
            category = result.category,
            primary_value = result.primary_value,
            "computation complete"
        );
        Ok(result)
    }

    /// Open a session for one calculator, owning its history ledger.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownCalculator`] for an unregistered name.
    pub fn session<'a>(&'a self, name: &str) -> Result<CalculatorSession<'a>, EngineError> {
        let calculator = self
            .get(name)
            .ok_or_else(|| EngineError::UnknownCalculator { name: name.to_string() })?;
        Ok(CalculatorSession { calculator, history: HistoryLedger::new() })
    }
}

/// One calculator plus its own bounded history. Sessions are independent:
/// no state is shared across calculators or across sessions of the same
/// calculator.
pub struct CalculatorSession<'a> {
    calculator: &'a dyn ClinicalCalculator,
    history: HistoryLedger,
}

impl<'a> CalculatorSession<'a> {
    /// The session's calculator
    pub fn calculator(&self) -> &'a dyn ClinicalCalculator {
        self.calculator
    }

    /// Validate, compute, and on success record the computation in this
    /// session's history. A failed validation or classification never
    /// appends to the ledger.
    ///
    /// # Errors
    ///
    /// Same as [`Engine::compute`], minus the registry lookup.
    pub fn run(&mut self, inputs: &InputSet) -> Result<ComputationResult, EngineError> {
        let validated = validate(self.calculator.fields(), inputs)?;
        let result = self.calculator.compute(&validated)?;
        self.history.record(HistoryEntry {
            timestamp: Utc::now(),
            inputs: inputs.clone(),
            result: result.clone(),
        });
        Ok(result)
    }

    /// This session's history, newest first
    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }
}
