// src/outcome.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Flat category of a failed evaluation, for callers that branch on the
/// kind of failure rather than on the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyExpression,
    UnbalancedParentheses,
    InvalidCharacter,
    SyntaxError,
    DivisionByZero,
    DomainError,
    UnknownFunction,
    UnknownIdentifier,
    NumericOverflow,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::EmptyExpression => "EmptyExpression",
            ErrorKind::UnbalancedParentheses => "UnbalancedParentheses",
            ErrorKind::InvalidCharacter => "InvalidCharacter",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::DivisionByZero => "DivisionByZero",
            ErrorKind::DomainError => "DomainError",
            ErrorKind::UnknownFunction => "UnknownFunction",
            ErrorKind::UnknownIdentifier => "UnknownIdentifier",
            ErrorKind::NumericOverflow => "NumericOverflow",
        };
        write!(f, "{}", name)
    }
}

/// What a caller gets back from the calculator: either a finite value or a
/// categorized error. Serializes as `{"result": 5.0}` or
/// `{"error": {"kind": "division_by_zero", "message": "..."}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EvaluationOutcome {
    #[serde(rename = "result")]
    Value(f64),
    #[serde(rename = "error")]
    Error { kind: ErrorKind, message: String },
}

impl EvaluationOutcome {
    pub fn value(&self) -> Option<f64> {
        match self {
            EvaluationOutcome::Value(v) => Some(*v),
            EvaluationOutcome::Error { .. } => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            EvaluationOutcome::Value(_) => None,
            EvaluationOutcome::Error { kind, .. } => Some(*kind),
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, EvaluationOutcome::Value(_))
    }

    pub fn is_error(&self) -> bool {
        !self.is_value()
    }
}

impl From<Result<f64, CalcError>> for EvaluationOutcome {
    fn from(result: Result<f64, CalcError>) -> Self {
        match result {
            Ok(v) => EvaluationOutcome::Value(v),
            Err(e) => EvaluationOutcome::Error { kind: e.kind(), message: e.to_string() },
        }
    }
}

impl fmt::Display for EvaluationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationOutcome::Value(v) => write!(f, "{}", v),
            EvaluationOutcome::Error { message, .. } => write!(f, "Error: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;

    #[test]
    fn test_from_result() {
        assert_eq!(EvaluationOutcome::from(Ok(2.5)), EvaluationOutcome::Value(2.5));

        let outcome = EvaluationOutcome::from(Err(CalcError::Eval(EvalError::DivisionByZero)));
        assert_eq!(outcome.error_kind(), Some(ErrorKind::DivisionByZero));
        assert_eq!(outcome.value(), None);
        assert_eq!(outcome.to_string(), "Error: Division by zero.");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&EvaluationOutcome::Value(5.0)).unwrap();
        assert_eq!(json, r#"{"result":5.0}"#);

        let outcome = EvaluationOutcome::Error {
            kind: ErrorKind::DomainError,
            message: "bad".to_string(),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"error":{"kind":"domain_error","message":"bad"}}"#);
    }
}
