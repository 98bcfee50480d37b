//! Replacement directives
//!
//! The text after the `:` of a field specification says how to replace the
//! field. Parsing is total except for JSON literals, which may be malformed.
//!
//! | Directive text            | Result                                  |
//! |---------------------------|-----------------------------------------|
//! | `faker.internet.email`    | generator call `internet.email`         |
//! | `[]` / `{}`               | empty array / empty document            |
//! | `[...]` / `{...}`         | percent-decoded JSON value              |
//! | `null`                    | null                                    |
//! | anything else             | the text itself                         |

use super::generator::GeneratorCall;
use crate::domain::{AnonymizerError, Result};
use serde_json::Value;

/// Marker that introduces a generator call
pub const GENERATOR_MARKER: &str = "faker";

/// A parsed replacement directive
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    GeneratorCall(GeneratorCall),
    EmptyArray,
    EmptyObject,
    Json(Value),
    Null,
    Literal(String),
}

impl Directive {
    /// Parse directive text for `field`
    ///
    /// A generator directive with fewer than two components after the marker
    /// (`faker.internet`) is kept as a literal.
    ///
    /// # Errors
    ///
    /// Returns [`AnonymizerError::MalformedDirective`] when a JSON literal
    /// cannot be percent-decoded or parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use mongodb_anonymizer::anonymization::directive::Directive;
    ///
    /// assert_eq!(Directive::parse("status", "null").unwrap(), Directive::Null);
    /// assert_eq!(
    ///     Directive::parse("status", "active").unwrap(),
    ///     Directive::Literal("active".to_string())
    /// );
    /// assert!(Directive::parse("tags", "[invalid").is_err());
    /// ```
    pub fn parse(field: &str, text: &str) -> Result<Self> {
        if text.starts_with(GENERATOR_MARKER) {
            return Ok(parse_generator_call(text));
        }

        match text {
            "[]" => Ok(Directive::EmptyArray),
            "{}" => Ok(Directive::EmptyObject),
            "null" => Ok(Directive::Null),
            _ if text.starts_with('[') || text.starts_with('{') => parse_json(field, text),
            _ => Ok(Directive::Literal(text.to_string())),
        }
    }
}

fn parse_generator_call(text: &str) -> Directive {
    let mut parts = text.split('.').skip(1);
    match (parts.next(), parts.next()) {
        (Some(namespace), Some(method)) if !namespace.is_empty() && !method.is_empty() => {
            Directive::GeneratorCall(GeneratorCall::new(namespace, method))
        }
        _ => {
            tracing::debug!(directive = %text, "Incomplete generator directive, using it as a literal");
            Directive::Literal(text.to_string())
        }
    }
}

fn parse_json(field: &str, text: &str) -> Result<Directive> {
    let malformed = |reason: String| AnonymizerError::MalformedDirective {
        field: field.to_string(),
        directive: text.to_string(),
        reason,
    };

    check_percent_escapes(text).map_err(malformed)?;
    let decoded = urlencoding::decode(text).map_err(|e| malformed(e.to_string()))?;
    let value = serde_json::from_str(&decoded).map_err(|e| malformed(e.to_string()))?;
    Ok(Directive::Json(value))
}

/// Every `%` must start a two hex digit escape
fn check_percent_escapes(text: &str) -> std::result::Result<(), String> {
    let bytes = text.as_bytes();
    for (idx, _) in text.match_indices('%') {
        let escape = bytes.get(idx + 1..idx + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            return Err(format!("invalid percent escape at byte {idx}"));
        }
    }
    Ok(())
}
