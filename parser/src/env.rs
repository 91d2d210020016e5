//! Variables available to expressions.

use crate::{
    alloc::{BTreeMap, String},
    NumLiteral,
};

/// Whitelist of variables that may be used in expressions, together with their values.
///
/// Variable names are case-sensitive. An identifier not present in the environment causes
/// an [`UnknownVariable`](crate::FailureReason::UnknownVariable) failure.
///
/// # Examples
///
/// ```
/// use arithmetic_explain::{evaluate, Environment};
///
/// let mut env = Environment::from_names(["x", "y"]);
/// env.insert("x", 2.0_f32);
/// assert_eq!(env.get("y"), Some(0.0));
/// assert_eq!(evaluate("x * 3 - y", &env).unwrap(), 6.0);
/// assert!(evaluate("X", &env).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Environment<T> {
    variables: BTreeMap<String, T>,
}

impl<T> Default for Environment<T> {
    fn default() -> Self {
        Self {
            variables: BTreeMap::new(),
        }
    }
}

impl<T: NumLiteral> Environment<T> {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment with the specified variables, each bound to zero.
    pub fn from_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        names
            .into_iter()
            .map(|name| (name, T::zero()))
            .collect()
    }

    /// Adds a variable to this environment and returns the modified environment.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: T) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a variable into this environment, returning the previous value if the variable
    /// was already present.
    pub fn insert(&mut self, name: impl Into<String>, value: T) -> Option<T> {
        self.variables.insert(name.into(), value)
    }

    /// Gets the value of the variable with the specified name.
    pub fn get(&self, name: &str) -> Option<T> {
        self.variables.get(name).copied()
    }

    /// Checks whether the specified variable is whitelisted.
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Iterates over variable names in the alphabetic order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.variables.keys().map(String::as_str)
    }

    /// Iterates over variables and their values in the alphabetic order of names.
    pub fn variables(&self) -> impl Iterator<Item = (&str, T)> + '_ {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    /// Returns the number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Checks whether this environment has no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl<S: Into<String>, T: NumLiteral> FromIterator<(S, T)> for Environment<T> {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut env = Self::new();
        env.extend(iter);
        env
    }
}

impl<S: Into<String>, T: NumLiteral> Extend<(S, T)> for Environment<T> {
    fn extend<I: IntoIterator<Item = (S, T)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
