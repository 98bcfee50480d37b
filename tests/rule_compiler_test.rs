//! Integration tests for field specification parsing and per-collection compilation

use mongodb_anonymizer::anonymization::{FieldSpec, RuleSet};
use test_case::test_case;

#[test_case("users" ; "users")]
#[test_case("orders" ; "orders")]
#[test_case("Audit_Log" ; "mixed case collection")]
fn test_unscoped_spec_applies_everywhere(collection: &str) {
    let specs = FieldSpec::parse_list("email,phone:000");

    let rules = RuleSet::compile(&specs, collection);

    assert_eq!(rules.fields(), vec!["email", "phone"]);
}

#[test]
fn test_scoped_spec_only_applies_to_its_collection() {
    let specs = FieldSpec::parse_list("users.age:faker.random.number,email");

    let users = RuleSet::compile(&specs, "users");
    let orders = RuleSet::compile(&specs, "orders");

    assert!(users.lookup("age").is_some());
    assert!(orders.lookup("age").is_none());
    assert!(orders.lookup("email").is_some());
}

#[test]
fn test_scope_is_case_sensitive() {
    let specs = FieldSpec::parse_list("Users.age");

    assert!(RuleSet::compile(&specs, "users").is_empty());
    assert_eq!(RuleSet::compile(&specs, "Users").len(), 1);
}

#[test]
fn test_field_names_are_lowercased() {
    let rules = RuleSet::compile(&FieldSpec::parse_list("FirstName,users.LastName"), "users");

    assert_eq!(rules.fields(), vec!["firstname", "lastname"]);
    assert!(rules.lookup("FIRSTNAME").is_some());
    assert!(rules.lookup("lastName").is_some());
}

#[test]
fn test_directive_keeps_text_after_first_colon() {
    let specs = FieldSpec::parse_list("users.homepage:http://example.com");
    let rules = RuleSet::compile(&specs, "users");

    assert_eq!(
        rules.lookup("homepage").unwrap().replacement.as_deref(),
        Some("http://example.com")
    );
}

#[test]
fn test_escaped_colon_stays_in_field_name() {
    let specs = FieldSpec::parse_list(r"meta\:owner:nobody");

    assert_eq!(specs[0].field, "meta:owner");
    assert_eq!(specs[0].directive.as_deref(), Some("nobody"));
}

#[test]
fn test_later_rule_overrides_earlier_one() {
    let specs = FieldSpec::parse_list("email,users.email:hidden");

    let users = RuleSet::compile(&specs, "users");
    let orders = RuleSet::compile(&specs, "orders");

    assert_eq!(users.len(), 1);
    assert_eq!(users.lookup("email").unwrap().replacement.as_deref(), Some("hidden"));
    assert_eq!(orders.lookup("email").unwrap().replacement, None);
}

#[test]
fn test_blank_tokens_and_empty_directives() {
    let specs = FieldSpec::parse_list(" email , ,:orphan,name:");

    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0].field, "email");
    assert_eq!(specs[1].field, "name");
    assert_eq!(specs[1].directive, None);
}

#[test]
fn test_dotted_prefix_with_symbols_is_not_a_scope() {
    let spec = FieldSpec::parse("my-coll.email").unwrap();

    assert_eq!(spec.scope, None);
    assert_eq!(spec.field, "my-coll.email");
}

#[test_case("fs.files", "fs.files.filename", "filename" ; "dotted collection")]
#[test_case("user-profiles", "user-profiles.email", "email" ; "dashed collection")]
#[test_case("v2.users", "v2.users.Phone:000", "phone" ; "dotted collection with directive")]
fn test_collection_prefix_is_stripped(collection: &str, list: &str, field: &str) {
    let specs = FieldSpec::parse_list(list);

    let rules = RuleSet::compile(&specs, collection);

    assert_eq!(rules.fields(), vec![field]);
}

#[test]
fn test_dotted_collection_scope_skips_other_collections() {
    let specs = FieldSpec::parse_list("fs.files.filename");

    assert!(RuleSet::compile(&specs, "fs.chunks").is_empty());
    assert!(RuleSet::compile(&specs, "files").is_empty());
}
