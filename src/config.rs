// src/config.rs

use serde::{Deserialize, Serialize};

use crate::parser::DEFAULT_MAX_DEPTH;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Deepest expression tree the parser will build before giving up.
    pub max_depth: usize,
    /// Decimals shown for non-integral results.
    pub decimal_places: usize,
    /// Log each normalized expression at info level instead of debug.
    pub verbose: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig { max_depth: DEFAULT_MAX_DEPTH, decimal_places: 2, verbose: false }
    }
}

impl CalculatorConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_decimal_places(mut self, decimal_places: usize) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
