// src/calculator.rs

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info};

use crate::classify::{classify, OperationType};
use crate::config::CalculatorConfig;
use crate::error::CalcError;
use crate::format::format_result;
use crate::history::{History, HistoryEntry};
use crate::normalizer::normalize;
use crate::outcome::EvaluationOutcome;
use crate::parser::parse_with_depth;
use crate::registry::Registry;
use crate::validator::validate;

/// One calculator session: the shared registry plus this session's history.
///
/// A session is meant to be owned by one caller at a time. Hosts that need
/// to share one across threads should wrap it in a `Mutex`.
#[derive(Debug)]
pub struct Calculator {
    registry: &'static Registry,
    config: CalculatorConfig,
    history: History,
    last_result: Option<f64>,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Calculator::with_config(CalculatorConfig::default())
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Calculator {
            registry: Registry::standard(),
            config,
            history: History::new(),
            last_result: None,
        }
    }

    /// Runs the whole pipeline without touching the history.
    pub fn compute(&self, expression: &str) -> Result<f64, CalcError> {
        validate(expression)?;

        let normalized = normalize(expression, self.registry);
        if self.config.verbose {
            info!("Processing expression: {}", normalized);
        } else {
            debug!("normalized {:?} -> {:?}", expression, normalized);
        }

        let ast = parse_with_depth(&normalized, self.registry, self.config.max_depth)?;
        debug!("parsed: {}", ast);

        Ok(ast.eval(self.registry)?)
    }

    /// Evaluates one expression and records the attempt, success or not.
    pub fn evaluate(&mut self, expression: &str) -> EvaluationOutcome {
        let outcome = EvaluationOutcome::from(self.compute(expression));
        debug!("{:?} => {}", expression, outcome);

        if let Some(value) = outcome.value() {
            self.last_result = Some(value);
        }
        self.history.record(expression, outcome.clone());
        outcome
    }

    /// Evaluates each expression in order. A failure only affects its own slot.
    pub fn evaluate_batch<I, S>(&mut self, expressions: I) -> Vec<EvaluationOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        expressions
            .into_iter()
            .map(|expression| self.evaluate(expression.as_ref()))
            .collect()
    }

    pub fn history(&self, limit: Option<usize>) -> &[HistoryEntry] {
        self.history.entries(limit)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.last_result = None;
    }

    /// Value of the most recent successful evaluation since the last clear.
    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    pub fn registered_constants(&self) -> BTreeMap<&'static str, f64> {
        self.registry.constants()
    }

    pub fn registered_functions(&self) -> BTreeSet<&'static str> {
        self.registry.function_names()
    }

    pub fn format_result(&self, outcome: &EvaluationOutcome) -> String {
        format_result(outcome, self.config.decimal_places)
    }

    pub fn operation_type(&self, expression: &str) -> OperationType {
        classify(expression, self.registry)
    }
}
