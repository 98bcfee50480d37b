//! Value anonymizer
//!
//! [`ValueAnonymizer`] turns a field key plus an optional directive into a
//! replacement BSON value, and applies a [`RuleSet`] to whole documents.
//!
//! # Examples
//!
//! ```
//! use mongodb_anonymizer::anonymization::generator::{FakerGenerator, Locale};
//! use mongodb_anonymizer::anonymization::rules::{FieldSpec, RuleSet};
//! use mongodb_anonymizer::anonymization::ValueAnonymizer;
//! use bson::{doc, Bson};
//!
//! # fn example() -> mongodb_anonymizer::domain::Result<()> {
//! let mut anonymizer = ValueAnonymizer::new(Box::new(FakerGenerator::with_seed(Locale::En, 1)));
//! let rules = RuleSet::compile(&FieldSpec::parse_list("email,status:active"), "users");
//!
//! let document = doc! { "Email": "a@x.com", "status": "banned", "age": 30 };
//! let anonymized = anonymizer.anonymize_document(document, &rules)?;
//!
//! assert_ne!(anonymized.get_str("Email").unwrap(), "a@x.com");
//! assert_eq!(anonymized.get_str("status").unwrap(), "active");
//! assert_eq!(anonymized.get("age"), Some(&Bson::Int32(30)));
//! # Ok(())
//! # }
//! ```

use super::directive::Directive;
use super::generator::{GeneratedValue, Generator};
use super::heuristics;
use super::rules::RuleSet;
use crate::domain::{AnonymizerError, Result};
use bson::{Bson, Document};

/// Resolves replacement values for anonymized fields
pub struct ValueAnonymizer {
    generator: Box<dyn Generator>,
}

impl ValueAnonymizer {
    pub fn new(generator: Box<dyn Generator>) -> Self {
        Self { generator }
    }

    /// Replacement value for a lower-cased field key
    ///
    /// With a directive the directive decides; without one the field name is
    /// matched against the heuristic table.
    ///
    /// # Errors
    ///
    /// - [`AnonymizerError::MalformedDirective`] for an unparsable JSON directive
    /// - [`AnonymizerError::UnknownGenerator`] for a generator call the
    ///   generator does not support
    pub fn anonymize(&mut self, field_key: &str, directive: Option<&str>) -> Result<Bson> {
        let Some(text) = directive else {
            let rule = heuristics::rule_for(field_key);
            let value = self.generator.generate(&rule.call())?;
            let value = if rule.lowercase {
                value.to_lowercase()
            } else {
                value
            };
            return Ok(to_bson(value));
        };

        match Directive::parse(field_key, text)? {
            Directive::GeneratorCall(call) => Ok(to_bson(self.generator.generate(&call)?)),
            Directive::EmptyArray => Ok(Bson::Array(Vec::new())),
            Directive::EmptyObject => Ok(Bson::Document(Document::new())),
            Directive::Json(value) => {
                bson::to_bson(&value).map_err(|e| AnonymizerError::MalformedDirective {
                    field: field_key.to_string(),
                    directive: text.to_string(),
                    reason: e.to_string(),
                })
            }
            Directive::Null => Ok(Bson::Null),
            Directive::Literal(literal) => Ok(Bson::String(literal)),
        }
    }

    /// Apply `rules` to the top-level fields of `document`
    ///
    /// Keys keep their original casing and position; fields without a rule
    /// are copied unchanged.
    pub fn anonymize_document(&mut self, document: Document, rules: &RuleSet) -> Result<Document> {
        if rules.is_empty() {
            return Ok(document);
        }

        let mut anonymized = Document::new();
        for (key, value) in document {
            let value = match rules.lookup(&key) {
                Some(rule) => self.anonymize(&rule.field, rule.replacement.as_deref())?,
                None => value,
            };
            anonymized.insert(key, value);
        }
        Ok(anonymized)
    }

    /// Apply `rules` to every document of a collection, stopping at the first error
    pub fn anonymize_collection(
        &mut self,
        documents: Vec<Document>,
        rules: &RuleSet,
    ) -> Result<Vec<Document>> {
        documents
            .into_iter()
            .map(|document| self.anonymize_document(document, rules))
            .collect()
    }
}

/// Convert a generated value into BSON
pub fn to_bson(value: GeneratedValue) -> Bson {
    match value {
        GeneratedValue::Text(text) => Bson::String(text),
        GeneratedValue::Integer(n) => Bson::Int64(n),
        GeneratedValue::Float(f) => Bson::Double(f),
        GeneratedValue::Boolean(b) => Bson::Boolean(b),
        GeneratedValue::DateTime(dt) => {
            Bson::DateTime(bson::DateTime::from_millis(dt.timestamp_millis()))
        }
    }
}
