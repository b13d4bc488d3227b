//! Immutable variable environment.

use serde::{Deserialize, Serialize};
use smallstep_syntax::Term;
use std::collections::BTreeMap;
use std::fmt;

/// A mapping from variable name to its bound value term.
///
/// The environment is never mutated in place: [`Environment::bind`] returns
/// a new environment with one binding added or overwritten, leaving the old
/// one intact. Earlier trace snapshots therefore remain valid after later
/// assignment steps.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Environment {
    bindings: BTreeMap<String, Term>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Look up a variable.
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.bindings.get(name)
    }

    /// Return a new environment equal to this one with `name` bound to
    /// `value`. An existing binding for `name` is overwritten.
    pub fn bind(&self, name: impl Into<String>, value: Term) -> Self {
        let mut bindings = self.bindings.clone();
        bindings.insert(name.into(), value);
        Self { bindings }
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}

impl FromIterator<(String, Term)> for Environment {
    fn from_iter<I: IntoIterator<Item = (String, Term)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

/// Renders as `{x: 3, y: true}`, in binding-name order.
impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .bindings
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}
