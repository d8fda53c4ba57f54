//! Validation error records and the per-subject error collection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::text::humanize;

/// One failed check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Name of the property the failure concerns. `None` means the failure
    /// applies to the subject as a whole.
    pub property: Option<String>,
    /// Human-readable explanation, resolved at settlement time.
    pub message: String,
}

impl ValidationError {
    /// Create an error scoped to one property.
    pub fn on(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property: Some(property.into()),
            message: message.into(),
        }
    }

    /// Create a subject-wide error.
    pub fn subject_wide(message: impl Into<String>) -> Self {
        Self {
            property: None,
            message: message.into(),
        }
    }

    /// Humanized display name for the property, `None` for subject-wide
    /// errors.
    pub fn property_name(&self) -> Option<String> {
        self.property.as_deref().map(humanize)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.property_name() {
            Some(name) => write!(f, "{} {}", name, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Ordered collection of validation errors for one subject.
///
/// Insertion order is significant (it controls display order) and duplicates
/// are allowed: the same property may carry several errors at once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCollection {
    errors: Vec<ValidationError>,
}

impl ErrorCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one error.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Append many errors, preserving their order.
    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    /// All errors, in insertion order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// All errors for one property, in insertion order.
    pub fn on(&self, property: &str) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.property.as_deref() == Some(property))
            .collect()
    }

    /// All subject-wide errors (those with no property).
    pub fn unscoped(&self) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.property.is_none()).collect()
    }

    /// Remove all errors for one property, leaving the rest untouched.
    pub fn clear_on(&mut self, property: &str) {
        self.errors
            .retain(|e| e.property.as_deref() != Some(property));
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Number of errors held.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if the collection holds no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if the collection holds any errors.
    pub fn has_errors(&self) -> bool {
        !self.is_empty()
    }

    /// Iterate over all errors in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }
}

impl fmt::Display for ErrorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ErrorCollection {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
