// src/error.rs

use thiserror::Error;

use crate::outcome::ErrorKind;

/// Structural problems found before the expression is even tokenized.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Empty expression provided.")]
    EmptyExpression,
    #[error("Unbalanced parentheses: {open} '(' vs {close} ')'.")]
    UnbalancedParentheses { open: usize, close: usize },
    #[error("Invalid character '{ch}' at position {position}.")]
    InvalidCharacter { ch: char, position: usize },
}

/// A malformed token sequence. `position` is a character offset into the
/// normalized expression.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Syntax error at position {position}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("missing closing parenthesis")]
    MissingCloseParen,
    #[error("empty parentheses")]
    EmptyGroup,
    #[error("function '{0}' called without an argument")]
    MissingArgument(String),
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("trailing input '{0}' after a complete expression")]
    TrailingInput(String),
    #[error("maximum nesting depth of {0} exceeded")]
    TooDeep(usize),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Division by zero.")]
    DivisionByZero,
    #[error("Invalid mathematical operation - {function} is undefined for {operand}.")]
    Domain { function: String, operand: f64 },
    #[error("Unknown function: '{0}'.")]
    UnknownFunction(String),
    #[error("Numeric overflow in {0}: result is not a finite number.")]
    NumericOverflow(String),
    #[error("Malformed expression: an operator is missing its operand.")]
    MissingOperand,
}

/// Any failure of the validate → normalize → parse → evaluate pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Syntax(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Validation(ValidationError::EmptyExpression) => ErrorKind::EmptyExpression,
            CalcError::Validation(ValidationError::UnbalancedParentheses { .. }) => {
                ErrorKind::UnbalancedParentheses
            }
            CalcError::Validation(ValidationError::InvalidCharacter { .. }) => {
                ErrorKind::InvalidCharacter
            }
            // Name lookups happen in the parser but are reported as their own categories.
            CalcError::Syntax(ParseError { kind: ParseErrorKind::UnknownIdentifier(_), .. }) => {
                ErrorKind::UnknownIdentifier
            }
            CalcError::Syntax(ParseError { kind: ParseErrorKind::UnknownFunction(_), .. }) => {
                ErrorKind::UnknownFunction
            }
            CalcError::Syntax(_) => ErrorKind::SyntaxError,
            CalcError::Eval(EvalError::DivisionByZero) => ErrorKind::DivisionByZero,
            CalcError::Eval(EvalError::Domain { .. }) => ErrorKind::DomainError,
            CalcError::Eval(EvalError::UnknownFunction(_)) => ErrorKind::UnknownFunction,
            CalcError::Eval(EvalError::NumericOverflow(_)) => ErrorKind::NumericOverflow,
            CalcError::Eval(EvalError::MissingOperand) => ErrorKind::SyntaxError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_mention_the_details() {
        let err = ValidationError::InvalidCharacter { ch: '@', position: 2 };
        assert_eq!(err.to_string(), "Invalid character '@' at position 2.");

        let err = ParseError { kind: ParseErrorKind::MissingCloseParen, position: 4 };
        assert_eq!(err.to_string(), "Syntax error at position 4: missing closing parenthesis");

        let err = EvalError::Domain { function: "sqrt".to_string(), operand: -1.0 };
        assert!(err.to_string().contains("sqrt"));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_kind_mapping() {
        let err: CalcError = ValidationError::EmptyExpression.into();
        assert_eq!(err.kind(), ErrorKind::EmptyExpression);

        let err: CalcError = ParseError {
            kind: ParseErrorKind::UnknownIdentifier("x".to_string()),
            position: 0,
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::UnknownIdentifier);

        let err: CalcError = ParseError { kind: ParseErrorKind::EmptyGroup, position: 0 }.into();
        assert_eq!(err.kind(), ErrorKind::SyntaxError);

        let err: CalcError = EvalError::DivisionByZero.into();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);

        let err: CalcError = EvalError::MissingOperand.into();
        assert_eq!(err.kind(), ErrorKind::SyntaxError);
    }
}
