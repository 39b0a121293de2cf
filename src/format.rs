// src/format.rs

use crate::outcome::EvaluationOutcome;

/// Display form of a value: integral values without a fractional part,
/// everything else with exactly `decimal_places` decimals.
pub fn format_value(value: f64, decimal_places: usize) -> String {
    if value == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }
    if value.is_finite() && value.fract() == 0.0 {
        return format!("{:.0}", value);
    }
    format!("{:.*}", decimal_places, value)
}

pub fn format_result(outcome: &EvaluationOutcome, decimal_places: usize) -> String {
    match outcome {
        EvaluationOutcome::Value(v) => format_value(*v, decimal_places),
        EvaluationOutcome::Error { .. } => outcome.to_string(),
    }
}
