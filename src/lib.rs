// MongoDB Anonymizer - Anonymized MongoDB to MongoDB copy
// Copyright (c) 2025 MongoDB Anonymizer Contributors
// Licensed under the MIT License

//! # MongoDB Anonymizer
//!
//! Copies every collection of a source MongoDB database into a target
//! database, replacing configured fields with realistic fake values so that
//! production data can be used in development and staging.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Migration orchestration across collections
//! - [`anonymization`] - Field rules, directives, heuristics and generators
//! - [`adapters`] - Document store abstraction and the MongoDB driver
//! - [`domain`] - Error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Field Specifications
//!
//! Fields are selected with comma separated tokens of the form
//! `[collection.]field[:directive]`:
//!
//! | Token | Effect |
//! |-------|--------|
//! | `email` | every `email` field, value inferred from the name |
//! | `users.age:faker.random.number` | `age` in `users`, generated number |
//! | `status:active` | the literal string `active` |
//! | `tags:[]` / `meta:{}` / `notes:null` | empty array, empty document, null |
//! | `prefs:{%22lang%22:%22en%22}` | JSON value, percent-encoded |
//!
//! Keys match case-insensitively and keep their original casing in the
//! output. Fields without a rule are copied unchanged.
//!
//! ## Quick Start
//!
//! ```rust
//! use mongodb_anonymizer::anonymization::{FakerGenerator, FieldSpec, Locale, RuleSet, ValueAnonymizer};
//! use bson::doc;
//!
//! # fn main() -> mongodb_anonymizer::domain::Result<()> {
//! let specs = FieldSpec::parse_list("email,users.age:faker.random.number");
//! let rules = RuleSet::compile(&specs, "users");
//!
//! let mut anonymizer = ValueAnonymizer::new(Box::new(FakerGenerator::with_seed(Locale::En, 7)));
//! let document = anonymizer.anonymize_document(doc! { "email": "a@x.com", "age": 30 }, &rules)?;
//!
//! assert_ne!(document.get_str("email").unwrap(), "a@x.com");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All errors are [`domain::AnonymizerError`]. Every error aborts the run;
//! the CLI maps it to an exit code with
//! [`AnonymizerError::exit_code`](domain::AnonymizerError::exit_code).

pub mod adapters;
pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
