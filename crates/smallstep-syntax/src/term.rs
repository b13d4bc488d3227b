//! The term language: one closed node type for every expression and
//! statement kind.
//!
//! Terms are immutable after construction — a reduction step builds a new
//! tree rather than mutating in place, so earlier trace snapshots stay
//! valid. Recursive children are boxed to keep the enum size reasonable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A syntax-tree node. Values (`Number`, `Boolean`) and `NoOp` are
/// irreducible; every other kind admits exactly one more rewrite step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    /// Integer value. Irreducible.
    Number(i64),
    /// Boolean value. Irreducible.
    Boolean(bool),
    /// Variable reference — reduces to its binding in the environment.
    Variable(String),
    /// `left + right`
    Add(Box<Term>, Box<Term>),
    /// `left * right`
    Multiply(Box<Term>, Box<Term>),
    /// `left < right`
    LessThan(Box<Term>, Box<Term>),
    /// `name = expression` — the only environment-writing statement.
    Assign(String, Box<Term>),
    /// `if condition then consequence else alternative`
    If(Box<Term>, Box<Term>, Box<Term>),
    /// Terminal statement left behind once an assignment has applied.
    NoOp,
}

// ══════════════════════════════════════════════════════════════════════════════
// Construction
// ══════════════════════════════════════════════════════════════════════════════

/// Constructor helpers so tree literals read close to the rendered form.
impl Term {
    pub fn number(n: i64) -> Self {
        Term::Number(n)
    }

    pub fn boolean(b: bool) -> Self {
        Term::Boolean(b)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Term::Variable(name.into())
    }

    pub fn add(left: Term, right: Term) -> Self {
        Term::Add(Box::new(left), Box::new(right))
    }

    pub fn multiply(left: Term, right: Term) -> Self {
        Term::Multiply(Box::new(left), Box::new(right))
    }

    pub fn less_than(left: Term, right: Term) -> Self {
        Term::LessThan(Box::new(left), Box::new(right))
    }

    pub fn assign(name: impl Into<String>, expression: Term) -> Self {
        Term::Assign(name.into(), Box::new(expression))
    }

    pub fn if_else(condition: Term, consequence: Term, alternative: Term) -> Self {
        Term::If(
            Box::new(condition),
            Box::new(consequence),
            Box::new(alternative),
        )
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Reducibility & rendering
// ══════════════════════════════════════════════════════════════════════════════

impl Term {
    /// Whether a further rewrite step applies to this node.
    ///
    /// Compound kinds report `true` even when their children are already
    /// values — the node itself is not a value until the compute step
    /// replaces it with one.
    pub fn is_reducible(&self) -> bool {
        match self {
            Term::Number(_) | Term::Boolean(_) | Term::NoOp => false,
            Term::Variable(_)
            | Term::Add(_, _)
            | Term::Multiply(_, _)
            | Term::LessThan(_, _)
            | Term::Assign(_, _)
            | Term::If(_, _, _) => true,
        }
    }

    /// Debug rendering: the infix form wrapped in angle brackets.
    pub fn inspect(&self) -> String {
        format!("<{self}>")
    }
}

/// Flat infix rendering, used for tracing and test assertions. Not meant to
/// be parsed back; no precedence parentheses.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Number(n) => write!(f, "{n}"),
            Term::Boolean(b) => write!(f, "{b}"),
            Term::Variable(name) => write!(f, "{name}"),
            Term::Add(left, right) => write!(f, "{left} + {right}"),
            Term::Multiply(left, right) => write!(f, "{left} * {right}"),
            Term::LessThan(left, right) => write!(f, "{left} < {right}"),
            Term::Assign(name, expression) => write!(f, "{name} = {expression}"),
            Term::If(condition, consequence, alternative) => {
                write!(f, "if {condition} then {consequence} else {alternative}")
            }
            Term::NoOp => write!(f, "no-op"),
        }
    }
}
