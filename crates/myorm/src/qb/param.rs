//! Positional parameter storage.

use crate::value::Scalar;

/// The ordered values bound to the `?` placeholders of one statement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamList {
    params: Vec<Scalar>,
}

impl ParamList {
    /// Create a new empty parameter list.
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Add a parameter.
    pub fn push(&mut self, value: impl Into<Scalar>) {
        self.params.push(value.into());
    }

    /// Get the current parameter count.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn as_slice(&self) -> &[Scalar] {
        &self.params
    }

    /// Extend this list with another list's parameters.
    pub fn extend(&mut self, other: ParamList) {
        self.params.extend(other.params);
    }

    /// Extend this list with parameters from an iterator.
    pub fn extend_params(&mut self, params: impl IntoIterator<Item = Scalar>) {
        self.params.extend(params);
    }

    pub fn into_vec(self) -> Vec<Scalar> {
        self.params
    }
}

/// `?, ?, ?` for `n` placeholders.
pub(crate) fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}
