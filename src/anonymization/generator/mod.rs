//! Fake value generation
//!
//! The anonymizer never talks to a fake-data library directly. It asks a
//! [`Generator`] for a value by `namespace.method`, using the faker.js naming
//! that field directives are written in (`faker.internet.email`).

pub mod faker;
pub mod locale;

use crate::domain::Result;
use chrono::{DateTime, Utc};
use std::fmt;

pub use faker::FakerGenerator;
pub use locale::Locale;

/// A `namespace.method` generator reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorCall {
    pub namespace: String,
    pub method: String,
}

impl GeneratorCall {
    pub fn new(namespace: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            method: method.into(),
        }
    }
}

impl fmt::Display for GeneratorCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.method)
    }
}

/// A value produced by a generator
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
}

impl GeneratedValue {
    /// Lower-case text values, leaving other kinds untouched
    pub fn to_lowercase(self) -> Self {
        match self {
            GeneratedValue::Text(text) => GeneratedValue::Text(text.to_lowercase()),
            other => other,
        }
    }
}

/// Source of fake values
///
/// Implementations carry their own configuration (locale, random state);
/// calls are independent of each other.
pub trait Generator: Send {
    /// Produce a value for `call`
    ///
    /// # Errors
    ///
    /// Returns [`AnonymizerError::UnknownGenerator`](crate::domain::AnonymizerError::UnknownGenerator)
    /// when the namespace or method is not supported.
    fn generate(&mut self, call: &GeneratorCall) -> Result<GeneratedValue>;
}
