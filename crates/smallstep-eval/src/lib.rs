//! Small-step reduction engine.
//!
//! Takes a term built with `smallstep-syntax` and an initial environment,
//! and rewrites the term one atomic step at a time until it is irreducible,
//! threading the environment through each step. [`Machine::run`] returns
//! the full trace of (statement, environment) pairs.

mod env;
mod error;
mod machine;
mod reduce;

pub use env::Environment;
pub use error::{EvalError, EvalResult};
pub use machine::{Machine, Snapshot};
pub use reduce::{reduce, Reduction};
