// tests/session_tests.rs

use adv_calc::{Calculator, CalculatorConfig, ErrorKind, EvaluationOutcome, OperationType};

#[cfg(test)]
mod history_tests {
    use super::*;

    #[test]
    fn test_history_order() {
        let mut calc = Calculator::new();
        calc.evaluate("2+3");
        calc.evaluate("5*2");

        let history: Vec<(&str, EvaluationOutcome)> = calc
            .history(None)
            .iter()
            .map(|e| (e.input.as_str(), e.outcome.clone()))
            .collect();
        assert_eq!(
            history,
            vec![
                ("2+3", EvaluationOutcome::Value(5.0)),
                ("5*2", EvaluationOutcome::Value(10.0)),
            ]
        );

        calc.clear_history();
        assert!(calc.history(None).is_empty());
    }

    #[test]
    fn test_history_limit_returns_most_recent() {
        let mut calc = Calculator::new();
        for i in 1..=5 {
            calc.evaluate(&format!("{} * 10", i));
        }
        let recent: Vec<&str> = calc.history(Some(2)).iter().map(|e| e.input.as_str()).collect();
        assert_eq!(recent, vec!["4 * 10", "5 * 10"]);
    }

    #[test]
    fn test_huge_flat_expression_is_recorded() {
        let mut calc = Calculator::new();
        let chain = vec!["1"; 100_000].join("+");

        assert_eq!(calc.evaluate(&chain), EvaluationOutcome::Value(100_000.0));
        assert_eq!(calc.last_result(), Some(100_000.0));
        assert_eq!(calc.history(None)[0].input, chain);

        let under_limit = vec!["2"; 1_000].join("*");
        assert_eq!(calc.evaluate(&under_limit), EvaluationOutcome::Value(2f64.powi(1_000)));
    }

    #[test]
    fn test_failures_are_recorded() {
        let mut calc = Calculator::new();
        calc.evaluate("(2+3");
        let entry = &calc.history(None)[0];
        assert_eq!(entry.input, "(2+3");
        assert_eq!(entry.outcome.error_kind(), Some(ErrorKind::UnbalancedParentheses));
    }

    #[test]
    fn test_retry_reproduces_outcome() {
        let mut calc = Calculator::new();
        let first = calc.evaluate("sqrt(-1)");
        let second = calc.evaluate("sqrt(-1)");
        assert_eq!(first, second);
        assert_eq!(calc.history(None).len(), 2);
    }
}

#[cfg(test)]
mod batch_tests {
    use super::*;

    #[test]
    fn test_batch_results() {
        let mut calc = Calculator::new();
        let results = calc.evaluate_batch(["2 + 3", "4 * 5", "sqrt(16)"]);
        assert_eq!(
            results,
            vec![
                EvaluationOutcome::Value(5.0),
                EvaluationOutcome::Value(20.0),
                EvaluationOutcome::Value(4.0),
            ]
        );
        assert_eq!(calc.history(None).len(), 3);
    }

    #[test]
    fn test_batch_failure_is_isolated() {
        let mut calc = Calculator::new();
        let results = calc.evaluate_batch(vec!["1/0".to_string(), "1+1".to_string()]);
        assert_eq!(results[0].error_kind(), Some(ErrorKind::DivisionByZero));
        assert_eq!(results[1], EvaluationOutcome::Value(2.0));
        assert_eq!(calc.last_result(), Some(2.0));
    }

    #[test]
    fn test_batch_matches_individual_evaluation() {
        let inputs = ["2^10", "sin(", "log(1000)", "x", "7 % 4"];
        let batched = Calculator::new().evaluate_batch(inputs);
        let individual: Vec<EvaluationOutcome> =
            inputs.iter().map(|e| Calculator::new().evaluate(e)).collect();
        assert_eq!(batched, individual);
    }
}

#[cfg(test)]
mod host_facing_tests {
    use super::*;

    #[test]
    fn test_format_result() {
        let calc = Calculator::new();
        assert_eq!(calc.format_result(&EvaluationOutcome::Value(5.0)), "5");
        assert_eq!(calc.format_result(&EvaluationOutcome::Value(5.5)), "5.50");
        let mut calc = Calculator::with_config(CalculatorConfig::default().with_decimal_places(4));
        let outcome = calc.evaluate("pi");
        assert_eq!(calc.format_result(&outcome), "3.1416");
        let outcome = calc.evaluate("1/0");
        assert_eq!(calc.format_result(&outcome), "Error: Division by zero.");
    }

    #[test]
    fn test_operation_type() {
        let calc = Calculator::new();
        assert_eq!(calc.operation_type("sin(x)"), OperationType::Trigonometric);
        assert_eq!(calc.operation_type("log(x)"), OperationType::Logarithmic);
        assert_eq!(calc.operation_type("2 ** 3"), OperationType::Power);
        assert_eq!(calc.operation_type("2 + 3"), OperationType::Arithmetic);
    }

    #[test]
    fn test_registry_listing() {
        let calc = Calculator::new();
        let constants = calc.registered_constants();
        assert_eq!(constants.len(), 4);
        assert!((constants["tau"] - std::f64::consts::TAU).abs() < 1e-12);
        let functions = calc.registered_functions();
        assert!(functions.contains("ln"));
        assert!(functions.contains("log10"));
        assert!(!functions.contains("pi"));
    }

    #[test]
    fn test_outcome_json() {
        let mut calc = Calculator::new();
        let ok = serde_json::to_value(calc.evaluate("2+2")).unwrap();
        assert_eq!(ok, serde_json::json!({ "result": 4.0 }));

        let err = serde_json::to_value(calc.evaluate("sqrt(-4)")).unwrap();
        assert_eq!(err["error"]["kind"], "domain_error");
        assert!(err["error"]["message"].as_str().unwrap().contains("sqrt"));
    }

    #[test]
    fn test_shared_session_behind_mutex() {
        use std::sync::{Arc, Mutex};

        let calc = Arc::new(Mutex::new(Calculator::new()));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let calc = Arc::clone(&calc);
                std::thread::spawn(move || {
                    calc.lock().unwrap().evaluate(&format!("{} + 1", i));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(calc.lock().unwrap().history(None).len(), 4);
    }
}
