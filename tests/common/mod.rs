//! Shared helpers for integration tests

#![allow(dead_code)]

use mongodb_anonymizer::anonymization::{GeneratedValue, Generator, GeneratorCall};
use mongodb_anonymizer::domain::{AnonymizerError, Result};
use std::sync::{Arc, Mutex};

/// Deterministic generator that records every call
///
/// `random.number` returns 42, `unknown.*` fails, everything else returns
/// the call as text (`"internet.email"`).
#[derive(Clone, Default)]
pub struct RecordingGenerator {
    calls: Arc<Mutex<Vec<GeneratorCall>>>,
}

impl RecordingGenerator {
    pub fn calls(&self) -> Vec<GeneratorCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Generator for RecordingGenerator {
    fn generate(&mut self, call: &GeneratorCall) -> Result<GeneratedValue> {
        self.calls.lock().unwrap().push(call.clone());
        match (call.namespace.as_str(), call.method.as_str()) {
            ("random", "number") => Ok(GeneratedValue::Integer(42)),
            ("unknown", method) => Err(AnonymizerError::unknown_generator("unknown", method)),
            _ => Ok(GeneratedValue::Text(call.to_string())),
        }
    }
}
