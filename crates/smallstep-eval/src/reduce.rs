//! One-step reduction rules.
//!
//! Each call rewrites exactly one redex and returns the new term together
//! with the (possibly updated) environment. Compound kinds follow a
//! left-to-right congruence: reduce the left child if it is reducible, else
//! the right child, else compute. Binding the assigned value in `Assign` is
//! the only step that changes the environment; congruence steps pass the
//! child's environment upward untouched.

use crate::env::Environment;
use crate::error::{EvalError, EvalResult};
use smallstep_syntax::Term;

/// The result of one reduction step: a new term and the environment it
/// should continue under. Kinds that do not write the environment return it
/// unchanged, so callers never special-case the shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub term: Term,
    pub env: Environment,
}

impl Reduction {
    pub fn new(term: Term, env: Environment) -> Self {
        Self { term, env }
    }
}

/// Perform one reduction step on `term` under `env`.
///
/// Calling this on an irreducible term (`Number`, `Boolean`, `NoOp`) is a
/// contract violation and returns [`EvalError::IrreducibleTerm`]; check
/// [`Term::is_reducible`] first, as the machine does.
pub fn reduce(term: &Term, env: &Environment) -> EvalResult<Reduction> {
    match term {
        Term::Number(_) | Term::Boolean(_) | Term::NoOp => {
            Err(EvalError::IrreducibleTerm(term.to_string()))
        }

        Term::Variable(name) => env
            .get(name)
            .cloned()
            .map(|value| Reduction::new(value, env.clone()))
            .ok_or_else(|| EvalError::UnboundVariable(name.clone())),

        Term::Add(left, right) => reduce_binary("+", left, right, env, Term::add, |a, b| {
            a.checked_add(b)
                .map(Term::Number)
                .ok_or_else(|| EvalError::ArithmeticOverflow(format!("{a} + {b}")))
        }),
        Term::Multiply(left, right) => {
            reduce_binary("*", left, right, env, Term::multiply, |a, b| {
                a.checked_mul(b)
                    .map(Term::Number)
                    .ok_or_else(|| EvalError::ArithmeticOverflow(format!("{a} * {b}")))
            })
        }
        Term::LessThan(left, right) => reduce_binary("<", left, right, env, Term::less_than, |a, b| {
            Ok(Term::Boolean(a < b))
        }),

        Term::Assign(name, expression) => {
            if expression.is_reducible() {
                let step = reduce(expression, env)?;
                Ok(Reduction::new(Term::assign(name.clone(), step.term), step.env))
            } else {
                // The single side-effecting step: the RHS is a value, so
                // bind it and leave a no-op behind.
                Ok(Reduction::new(
                    Term::NoOp,
                    env.bind(name.clone(), (**expression).clone()),
                ))
            }
        }

        Term::If(condition, consequence, alternative) => {
            if condition.is_reducible() {
                let step = reduce(condition, env)?;
                Ok(Reduction::new(
                    Term::if_else(step.term, (**consequence).clone(), (**alternative).clone()),
                    step.env,
                ))
            } else {
                // The untaken branch is discarded without ever reducing.
                match condition.as_ref() {
                    Term::Boolean(true) => {
                        Ok(Reduction::new((**consequence).clone(), env.clone()))
                    }
                    Term::Boolean(false) => {
                        Ok(Reduction::new((**alternative).clone(), env.clone()))
                    }
                    other => Err(EvalError::TypeMismatch(format!(
                        "if condition must be a boolean, got {other}"
                    ))),
                }
            }
        }
    }
}

/// Congruence for the three binary operator kinds, then the compute step
/// once both children are values.
fn reduce_binary(
    symbol: &str,
    left: &Term,
    right: &Term,
    env: &Environment,
    rebuild: fn(Term, Term) -> Term,
    compute: fn(i64, i64) -> EvalResult<Term>,
) -> EvalResult<Reduction> {
    if left.is_reducible() {
        let step = reduce(left, env)?;
        Ok(Reduction::new(rebuild(step.term, right.clone()), step.env))
    } else if right.is_reducible() {
        let step = reduce(right, env)?;
        Ok(Reduction::new(rebuild(left.clone(), step.term), step.env))
    } else {
        let a = number_operand(symbol, left)?;
        let b = number_operand(symbol, right)?;
        Ok(Reduction::new(compute(a, b)?, env.clone()))
    }
}

fn number_operand(symbol: &str, term: &Term) -> EvalResult<i64> {
    match term {
        Term::Number(n) => Ok(*n),
        other => Err(EvalError::TypeMismatch(format!(
            "cannot apply '{symbol}' to {other}"
        ))),
    }
}
