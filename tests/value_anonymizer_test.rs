//! Integration tests for value resolution: directives, heuristics and documents

mod common;

use bson::{doc, Bson, Document};
use common::RecordingGenerator;
use mongodb_anonymizer::anonymization::{
    FakerGenerator, FieldSpec, GeneratorCall, Locale, RuleSet, ValueAnonymizer,
};
use mongodb_anonymizer::domain::AnonymizerError;
use test_case::test_case;

fn anonymizer() -> (ValueAnonymizer, RecordingGenerator) {
    let generator = RecordingGenerator::default();
    (ValueAnonymizer::new(Box::new(generator.clone())), generator)
}

#[test]
fn test_generator_directive_wins_over_heuristic() {
    let (mut anonymizer, generator) = anonymizer();

    let value = anonymizer
        .anonymize("contact", Some("faker.internet.email"))
        .unwrap();

    assert_eq!(value, Bson::String("internet.email".to_string()));
    assert_eq!(generator.calls(), vec![GeneratorCall::new("internet", "email")]);
}

#[test_case("lastname", "name", "lastName" ; "specific rule before catch-all name")]
#[test_case("username", "name", "findName" ; "ends with name")]
#[test_case("firstname", "name", "firstName" ; "first name")]
#[test_case("workemail", "internet", "email" ; "contains email")]
#[test_case("description", "lorem", "sentence" ; "exact description")]
#[test_case("billingaddress", "address", "streetAddress" ; "ends with address")]
#[test_case("birthdate", "date", "past" ; "ends with date")]
#[test_case("nickname", "name", "findName" ; "nickname")]
#[test_case("score", "random", "word" ; "fallback")]
fn test_heuristic_resolution(key: &str, namespace: &str, method: &str) {
    let (mut anonymizer, generator) = anonymizer();

    anonymizer.anonymize(key, None).unwrap();

    assert_eq!(generator.calls(), vec![GeneratorCall::new(namespace, method)]);
}

#[test]
fn test_literal_directive() {
    let (mut anonymizer, generator) = anonymizer();

    let value = anonymizer.anonymize("status", Some("active")).unwrap();

    assert_eq!(value, Bson::String("active".to_string()));
    assert!(generator.calls().is_empty());
}

#[test]
fn test_structured_directives() {
    let (mut anonymizer, _) = anonymizer();

    assert_eq!(anonymizer.anonymize("tags", Some("[]")).unwrap(), Bson::Array(vec![]));
    assert_eq!(
        anonymizer.anonymize("meta", Some("{}")).unwrap(),
        Bson::Document(Document::new())
    );
    assert_eq!(anonymizer.anonymize("notes", Some("null")).unwrap(), Bson::Null);
}

#[test]
fn test_url_encoded_json_directive() {
    let (mut anonymizer, _) = anonymizer();

    let value = anonymizer
        .anonymize("prefs", Some("{%22lang%22:%22en%22%2C%22beta%22:true}"))
        .unwrap();

    assert_eq!(value, Bson::Document(doc! { "beta": true, "lang": "en" }));
}

#[test]
fn test_malformed_json_directive_fails() {
    let (mut anonymizer, _) = anonymizer();

    let err = anonymizer.anonymize("tags", Some("[invalid")).unwrap_err();

    assert!(matches!(err, AnonymizerError::MalformedDirective { .. }));
    assert_eq!(err.exit_code(), 5);
}

#[test]
fn test_bare_percent_in_json_directive_fails() {
    let (mut anonymizer, _) = anonymizer();

    let err = anonymizer.anonymize("tags", Some("[\"50%off\"]")).unwrap_err();

    assert!(matches!(err, AnonymizerError::MalformedDirective { .. }));
}

#[test]
fn test_incomplete_generator_directive_is_literal() {
    let (mut anonymizer, generator) = anonymizer();

    let value = anonymizer.anonymize("code", Some("faker.internet")).unwrap();

    assert_eq!(value, Bson::String("faker.internet".to_string()));
    assert!(generator.calls().is_empty());
}

#[test]
fn test_unknown_generator_propagates() {
    let (mut anonymizer, _) = anonymizer();

    let err = anonymizer.anonymize("x", Some("faker.unknown.thing")).unwrap_err();

    assert!(matches!(err, AnonymizerError::UnknownGenerator { .. }));
}

#[test]
fn test_unknown_faker_method_is_an_error() {
    let mut anonymizer = ValueAnonymizer::new(Box::new(FakerGenerator::with_seed(Locale::En, 3)));

    let err = anonymizer
        .anonymize("x", Some("faker.internet.carrierPigeon"))
        .unwrap_err();

    assert_eq!(err.to_string(), "Unknown generator: internet.carrierPigeon");
}

#[test]
fn test_document_keys_match_case_insensitively() {
    let (mut anonymizer, _) = anonymizer();
    let rules = RuleSet::compile(&FieldSpec::parse_list("email"), "users");

    for key in ["email", "Email", "EMAIL"] {
        let mut document = Document::new();
        document.insert(key, "a@x.com");

        let anonymized = anonymizer.anonymize_document(document, &rules).unwrap();

        assert_eq!(anonymized.get_str(key).unwrap(), "internet.email");
    }
}

#[test]
fn test_unmatched_fields_are_copied_unchanged() {
    let (mut anonymizer, _) = anonymizer();
    let rules = RuleSet::compile(&FieldSpec::parse_list("email"), "users");
    let document = doc! {
        "_id": 1,
        "email": "a@x.com",
        "profile": { "email": "nested@x.com" },
        "age": 30,
    };

    let anonymized = anonymizer.anonymize_document(document, &rules).unwrap();

    assert_eq!(anonymized.get("_id"), Some(&Bson::Int32(1)));
    assert_eq!(
        anonymized.get_document("profile").unwrap(),
        &doc! { "email": "nested@x.com" }
    );
    assert_eq!(anonymized.get("age"), Some(&Bson::Int32(30)));
    let keys: Vec<&String> = anonymized.keys().collect();
    assert_eq!(keys, vec!["_id", "email", "profile", "age"]);
}

#[test]
fn test_faker_generator_values() {
    let mut anonymizer = ValueAnonymizer::new(Box::new(FakerGenerator::with_seed(Locale::FrFr, 11)));

    let email = anonymizer.anonymize("email", None).unwrap();
    let number = anonymizer.anonymize("age", Some("faker.random.number")).unwrap();
    let date = anonymizer.anonymize("birthdate", None).unwrap();

    let email = email.as_str().unwrap().to_string();
    assert!(email.contains('@'));
    assert_eq!(email, email.to_lowercase());
    assert!(matches!(number, Bson::Int64(n) if (0..=99_999).contains(&n)));
    assert!(matches!(date, Bson::DateTime(_)));
}
