//! Term language for the smallstep interpreter.
//!
//! This crate defines the closed set of syntax-tree node kinds, their
//! reducibility predicate, and their text rendering. Reduction itself lives
//! in `smallstep-eval`.

mod term;

pub use term::Term;
