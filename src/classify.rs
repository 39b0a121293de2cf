// src/classify.rs

use std::fmt;

use crate::registry::{FunctionCategory, Registry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    Arithmetic,
    Trigonometric,
    Logarithmic,
    Hyperbolic,
    Power,
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationType::Arithmetic => "arithmetic",
            OperationType::Trigonometric => "trigonometric",
            OperationType::Logarithmic => "logarithmic",
            OperationType::Hyperbolic => "hyperbolic",
            OperationType::Power => "power",
        };
        write!(f, "{}", name)
    }
}

/// Rough category of an expression, for display. Looks at whole identifiers
/// only, so `sinh` counts as hyperbolic and not trigonometric. Never fails,
/// even on input the calculator would reject.
pub fn classify(expression: &str, registry: &Registry) -> OperationType {
    let lowered = expression.to_lowercase();
    let categories: Vec<FunctionCategory> = lowered
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter_map(|word| registry.function(word))
        .map(|def| def.category)
        .collect();

    if categories.contains(&FunctionCategory::Trigonometric) {
        OperationType::Trigonometric
    } else if categories.contains(&FunctionCategory::Logarithmic) {
        OperationType::Logarithmic
    } else if categories.contains(&FunctionCategory::Hyperbolic) {
        OperationType::Hyperbolic
    } else if lowered.contains('^') || lowered.contains("**") {
        OperationType::Power
    } else {
        OperationType::Arithmetic
    }
}
