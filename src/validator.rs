// src/validator.rs

use crate::error::ValidationError;

// Characters an expression may contain, compared after lower-casing.
fn is_allowed(c: char) -> bool {
    c.is_ascii_digit()
        || c.is_ascii_lowercase()
        || matches!(c, '+' | '-' | '*' | '/' | '%' | '^' | '.' | '(' | ')' | '_' | ' ')
}

/// Structural pre-checks run on the raw input. Knows nothing about which
/// names exist; that is the parser's job.
pub fn validate(input: &str) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::EmptyExpression);
    }

    let open = input.chars().filter(|&c| c == '(').count();
    let close = input.chars().filter(|&c| c == ')').count();
    if open != close {
        return Err(ValidationError::UnbalancedParentheses { open, close });
    }

    for (position, ch) in input.chars().enumerate() {
        if !ch.to_lowercase().all(is_allowed) {
            return Err(ValidationError::InvalidCharacter { ch, position });
        }
    }

    Ok(())
}
