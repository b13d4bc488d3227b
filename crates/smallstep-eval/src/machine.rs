//! The driving loop: apply one reduction at a time until the current
//! statement is irreducible.

use crate::env::Environment;
use crate::error::EvalResult;
use crate::reduce::reduce;
use serde::{Deserialize, Serialize};
use smallstep_syntax::Term;
use std::fmt;

/// One trace record: the (statement, environment) pair at a point in the
/// run. Snapshots own their data, so they stay valid after later steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub term: Term,
    pub env: Environment,
}

/// Renders as `statement, environment`, e.g. `x = 3, {}`.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.term, self.env)
    }
}

/// Holds the current (statement, environment) pair and drives reduction.
///
/// There is no step bound and no cycle detection: a diverging program loops
/// forever. Callers that need to bound execution wrap [`Machine::step`]
/// with their own counter or deadline.
#[derive(Debug, Clone)]
pub struct Machine {
    term: Term,
    env: Environment,
}

impl Machine {
    pub fn new(term: Term, env: Environment) -> Self {
        Self { term, env }
    }

    /// The current statement.
    pub fn term(&self) -> &Term {
        &self.term
    }

    /// The current environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Whether the current statement admits another step.
    pub fn is_reducible(&self) -> bool {
        self.term.is_reducible()
    }

    /// Replace the current pair with its one-step reduction.
    pub fn step(&mut self) -> EvalResult<()> {
        let step = reduce(&self.term, &self.env)?;
        self.term = step.term;
        self.env = step.env;
        Ok(())
    }

    /// Run to the first irreducible statement, collecting every
    /// intermediate (statement, environment) pair plus the final one.
    ///
    /// The first error aborts the run and is returned as-is.
    pub fn run(mut self) -> EvalResult<Vec<Snapshot>> {
        let mut trace = Vec::new();
        while self.is_reducible() {
            trace.push(self.snapshot());
            self.step()?;
        }
        trace.push(self.snapshot());
        Ok(trace)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            term: self.term.clone(),
            env: self.env.clone(),
        }
    }
}
