// src/evaluator.rs

use crate::ast::{BinaryOp, Expr};
use crate::error::EvalError;
use crate::math;
use crate::registry::Registry;

// A finite operand went in and a non-finite value came out.
fn finite(value: f64, context: impl FnOnce() -> String) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NumericOverflow(context()))
    }
}

pub fn apply_binary(op: BinaryOp, a: f64, b: f64) -> Result<f64, EvalError> {
    let value = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            a / b
        }
        BinaryOp::Mod => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            math::floored_mod(a, b)
        }
        BinaryOp::Pow => {
            if a == 0.0 && b < 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            if a < 0.0 && b.fract() != 0.0 {
                return Err(EvalError::Domain { function: "^".to_string(), operand: a });
            }
            a.powf(b)
        }
    };
    finite(value, || format!("{} {} {}", a, op, b))
}

// --- The Evaluator ---

// Work items for the post-order walk. Operators wait on the stack until
// their operands have been pushed onto the value stack.
enum Step<'a> {
    Visit(&'a Expr),
    Negate,
    Apply(BinaryOp),
    Call(&'a str),
}

fn pop_operand(values: &mut Vec<f64>) -> Result<f64, EvalError> {
    values.pop().ok_or(EvalError::MissingOperand)
}

impl Expr {
    /// Post-order walk: children first, then the operator or function.
    /// Runs on explicit stacks, so a long operator chain costs heap, not call depth.
    pub fn eval(&self, registry: &Registry) -> Result<f64, EvalError> {
        let mut steps = vec![Step::Visit(self)];
        let mut values: Vec<f64> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Expr::Literal(n)) => values.push(finite(*n, || n.to_string())?),
                Step::Visit(Expr::Negate(inner)) => {
                    steps.push(Step::Negate);
                    steps.push(Step::Visit(inner));
                }
                // Left is pushed last so it is evaluated, and fails, first.
                Step::Visit(Expr::Binary(op, left, right)) => {
                    steps.push(Step::Apply(*op));
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                }
                Step::Visit(Expr::Call(name, arg)) => {
                    steps.push(Step::Call(name));
                    steps.push(Step::Visit(arg));
                }

                Step::Negate => {
                    let x = pop_operand(&mut values)?;
                    values.push(-x);
                }
                Step::Apply(op) => {
                    let b = pop_operand(&mut values)?;
                    let a = pop_operand(&mut values)?;
                    values.push(apply_binary(op, a, b)?);
                }
                Step::Call(name) => {
                    let x = pop_operand(&mut values)?;
                    // The parser only builds calls to registered names.
                    let def = registry
                        .function(name)
                        .ok_or_else(|| EvalError::UnknownFunction(name.to_string()))?;
                    let value = def.apply(x)?;
                    values.push(finite(value, || format!("{}({})", name, x))?);
                }
            }
        }
        pop_operand(&mut values)
    }
}
