// src/registry.rs

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use paste::paste;

use crate::error::EvalError;
use crate::math;

// The signature shared by every function callable from an expression.
pub type UnaryFn = fn(f64) -> Result<f64, EvalError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FunctionCategory {
    Trigonometric,
    Hyperbolic,
    Logarithmic,
    PowerRoot,
    Rounding,
    Conversion,
    Combinatorial,
}

impl fmt::Display for FunctionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FunctionCategory::Trigonometric => "trigonometric",
            FunctionCategory::Hyperbolic => "hyperbolic",
            FunctionCategory::Logarithmic => "logarithmic",
            FunctionCategory::PowerRoot => "power/root",
            FunctionCategory::Rounding => "rounding",
            FunctionCategory::Conversion => "conversion",
            FunctionCategory::Combinatorial => "combinatorial",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FunctionDef {
    pub name: &'static str,
    pub category: FunctionCategory,
    pub func: UnaryFn,
}

impl FunctionDef {
    pub fn apply(&self, x: f64) -> Result<f64, EvalError> {
        (self.func)(x)
    }
}

// --- Macro Template System ---

macro_rules! define_functions {
    (
        // Defined for every finite operand
        total: [$(($t_name:literal, $t_cat:ident, $t_func:path)),* $(,)?],
        // Operand must pass the predicate, otherwise a domain error
        restricted: [$(($r_name:literal, $r_cat:ident, $r_func:path, $r_valid:path)),* $(,)?]
    ) => {
        paste! {
            // 1. Wrappers for total functions.
            $(
                fn [<builtin_ $t_name>](x: f64) -> Result<f64, EvalError> {
                    Ok($t_func(x))
                }
            )*

            // 2. Wrappers for domain-restricted functions.
            $(
                fn [<builtin_ $r_name>](x: f64) -> Result<f64, EvalError> {
                    if $r_valid(x) {
                        Ok($r_func(x))
                    } else {
                        Err(EvalError::Domain { function: $r_name.to_string(), operand: x })
                    }
                }
            )*

            // 3. The static lookup table used by the parser and evaluator.
            static FUNCTIONS: phf::Map<&'static str, FunctionDef> = phf::phf_map! {
                $( $t_name => FunctionDef {
                    name: $t_name,
                    category: FunctionCategory::$t_cat,
                    func: [<builtin_ $t_name>],
                }, )*
                $( $r_name => FunctionDef {
                    name: $r_name,
                    category: FunctionCategory::$r_cat,
                    func: [<builtin_ $r_name>],
                }, )*
            };
        }
    };
}

define_functions! {
    total: [
        ("sin", Trigonometric, f64::sin),
        ("cos", Trigonometric, f64::cos),
        ("tan", Trigonometric, f64::tan),
        ("atan", Trigonometric, f64::atan),
        ("sinh", Hyperbolic, f64::sinh),
        ("cosh", Hyperbolic, f64::cosh),
        ("tanh", Hyperbolic, f64::tanh),
        ("exp", PowerRoot, f64::exp),
        ("abs", Rounding, f64::abs),
        ("floor", Rounding, f64::floor),
        ("ceil", Rounding, f64::ceil),
        ("round", Rounding, math::round_half_even),
        ("degrees", Conversion, f64::to_degrees),
        ("radians", Conversion, f64::to_radians),
    ],
    restricted: [
        ("asin", Trigonometric, f64::asin, math::is_unit_interval),
        ("acos", Trigonometric, f64::acos, math::is_unit_interval),
        ("sqrt", PowerRoot, f64::sqrt, math::is_non_negative),
        // `log` is base 10; `ln` is the natural logarithm.
        ("log", Logarithmic, f64::log10, math::is_positive),
        ("log10", Logarithmic, f64::log10, math::is_positive),
        ("ln", Logarithmic, f64::ln, math::is_positive),
        ("factorial", Combinatorial, math::factorial, math::is_non_negative_integer),
    ]
}

static CONSTANTS: phf::Map<&'static str, f64> = phf::phf_map! {
    "pi" => math::PI,
    "e" => math::E,
    "phi" => math::PHI,
    "tau" => math::TAU,
};

static STANDARD: Registry = Registry { constants: &CONSTANTS, functions: &FUNCTIONS };

/// Fixed table of named constants and unary functions. There is no way to
/// add or rebind an entry once built, so a given input always evaluates the
/// same way.
pub struct Registry {
    constants: &'static phf::Map<&'static str, f64>,
    functions: &'static phf::Map<&'static str, FunctionDef>,
}

impl Registry {
    /// The process-wide registry every calculator shares.
    pub fn standard() -> &'static Registry {
        &STANDARD
    }

    pub fn constant(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    pub fn is_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn constants(&self) -> BTreeMap<&'static str, f64> {
        self.constants.entries().map(|(k, v)| (*k, *v)).collect()
    }

    pub fn function_names(&self) -> BTreeSet<&'static str> {
        self.functions.keys().copied().collect()
    }

    pub fn functions_in(&self, category: FunctionCategory) -> BTreeSet<&'static str> {
        self.functions
            .values()
            .filter(|def| def.category == category)
            .map(|def| def.name)
            .collect()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("constants", &self.constants())
            .field("functions", &self.function_names())
            .finish()
    }
}
