// src/math.rs

// Stateless numeric kernels. Domain checks live in the registry, these only compute.

// Mathematical constants
pub const PI: f64 = std::f64::consts::PI;
pub const E: f64 = std::f64::consts::E;
pub const TAU: f64 = std::f64::consts::TAU; // 2π
pub const PHI: f64 = 1.618_033_988_749_894_8; // (1 + √5) / 2

/// Largest n for which n! is still a finite f64.
pub const MAX_FACTORIAL: f64 = 170.0;

// --- Domain predicates ---

pub fn is_non_negative(x: f64) -> bool { x >= 0.0 }
pub fn is_positive(x: f64) -> bool { x > 0.0 }
pub fn is_unit_interval(x: f64) -> bool { (-1.0..=1.0).contains(&x) }
pub fn is_non_negative_integer(x: f64) -> bool { x >= 0.0 && x.is_finite() && x.fract() == 0.0 }

// --- Unary kernels ---

pub fn round_half_even(x: f64) -> f64 { x.round_ties_even() }

/// n! for a non-negative integral `n`. Returns infinity past `MAX_FACTORIAL`
/// so the evaluator reports an overflow instead of looping.
pub fn factorial(n: f64) -> f64 {
    if n > MAX_FACTORIAL {
        return f64::INFINITY;
    }
    let mut acc = 1.0;
    let mut k = 2.0;
    while k <= n {
        acc *= k;
        k += 1.0;
    }
    acc
}

// --- Binary kernels ---

/// Floored modulo: the result takes the sign of the divisor.
pub fn floored_mod(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0.0), 1.0);
        assert_eq!(factorial(1.0), 1.0);
        assert_eq!(factorial(5.0), 120.0);
        assert_eq!(factorial(10.0), 3628800.0);
        assert!(factorial(170.0).is_finite());
        assert!(factorial(171.0).is_infinite());
    }

    #[test]
    fn test_floored_mod() {
        assert_eq!(floored_mod(10.0, 3.0), 1.0);
        assert_eq!(floored_mod(-7.0, 3.0), 2.0);
        assert_eq!(floored_mod(7.0, -3.0), -2.0);
        assert_eq!(floored_mod(-6.0, 3.0), 0.0);
        assert!((floored_mod(5.5, 2.0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(0.5), 0.0);
        assert_eq!(round_half_even(1.5), 2.0);
        assert_eq!(round_half_even(2.5), 2.0);
        assert_eq!(round_half_even(-2.5), -2.0);
        assert_eq!(round_half_even(2.6), 3.0);
    }

    #[test]
    fn test_predicates() {
        assert!(is_unit_interval(1.0));
        assert!(!is_unit_interval(1.0001));
        assert!(is_non_negative_integer(3.0));
        assert!(!is_non_negative_integer(3.5));
        assert!(!is_non_negative_integer(-1.0));
        assert!(!is_positive(0.0));
    }

    #[test]
    fn test_phi() {
        assert!((PHI - (1.0 + 5f64.sqrt()) / 2.0).abs() < 1e-15);
    }
}
