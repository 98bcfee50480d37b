//! Field selection and value anonymization
//!
//! # Architecture
//!
//! - **Rules**: field specifications compiled per collection ([`rules`])
//! - **Directives**: explicit replacement instructions ([`directive`])
//! - **Heuristics**: category inference from field names ([`heuristics`])
//! - **Generators**: fake value sources ([`generator`])
//! - **Engine**: value and document replacement ([`engine`])
//!
//! # Usage
//!
//! ```rust,ignore
//! use mongodb_anonymizer::anonymization::{FieldSpec, RuleSet, ValueAnonymizer};
//!
//! let specs = FieldSpec::parse_list("email,users.age:faker.random.number");
//! let rules = RuleSet::compile(&specs, "users");
//! let anonymized = anonymizer.anonymize_document(document, &rules)?;
//! ```

pub mod directive;
pub mod engine;
pub mod generator;
pub mod heuristics;
pub mod rules;

pub use directive::Directive;
pub use engine::ValueAnonymizer;
pub use generator::{FakerGenerator, GeneratedValue, Generator, GeneratorCall, Locale};
pub use rules::{CompiledRule, FieldSpec, RuleSet};
