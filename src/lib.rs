// src/lib.rs

// --- Module Declarations ---
pub mod ast;
pub mod calculator;
pub mod classify;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod history;
pub mod lexer;
pub mod math;
pub mod normalizer;
pub mod outcome;
pub mod parser;
pub mod registry;
pub mod validator;

// --- Public API Re-exports ---
pub use ast::{BinaryOp, Expr};
pub use calculator::Calculator;
pub use classify::OperationType;
pub use config::CalculatorConfig;
pub use error::{CalcError, EvalError, ParseError, ParseErrorKind, ValidationError};
pub use format::{format_result, format_value};
pub use history::HistoryEntry;
pub use outcome::{ErrorKind, EvaluationOutcome};
pub use registry::{FunctionCategory, Registry};

/// One-off evaluation against the standard registry with default settings.
pub fn evaluate_expression(expression: &str) -> Result<f64, CalcError> {
    Calculator::new().compute(expression)
}
