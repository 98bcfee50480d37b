//! Field-name heuristics for fields without a directive
//!
//! Rules are evaluated top to bottom and the first match wins: `lastname`
//! also ends with `name` but resolves to `name.lastName`.

use super::generator::GeneratorCall;

/// How a rule matches a lower-cased field key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMatch {
    Contains(&'static str),
    Equals(&'static str),
    EndsWith(&'static str),
}

impl KeyMatch {
    pub fn matches(self, key: &str) -> bool {
        match self {
            KeyMatch::Contains(needle) => key.contains(needle),
            KeyMatch::Equals(expected) => key == expected,
            KeyMatch::EndsWith(suffix) => key.ends_with(suffix),
        }
    }
}

/// One row of the heuristic table
#[derive(Debug, Clone, Copy)]
pub struct HeuristicRule {
    pub matcher: KeyMatch,
    pub namespace: &'static str,
    pub method: &'static str,
    /// Lower-case the generated text
    pub lowercase: bool,
}

impl HeuristicRule {
    pub fn call(&self) -> GeneratorCall {
        GeneratorCall::new(self.namespace, self.method)
    }
}

const fn rule(matcher: KeyMatch, namespace: &'static str, method: &'static str) -> HeuristicRule {
    HeuristicRule {
        matcher,
        namespace,
        method,
        lowercase: false,
    }
}

/// Ordered heuristic table
pub const HEURISTICS: &[HeuristicRule] = &[
    HeuristicRule {
        lowercase: true,
        ..rule(KeyMatch::Contains("email"), "internet", "email")
    },
    rule(KeyMatch::Contains("firstname"), "name", "firstName"),
    rule(KeyMatch::Contains("lastname"), "name", "lastName"),
    rule(KeyMatch::Equals("description"), "lorem", "sentence"),
    rule(KeyMatch::EndsWith("address"), "address", "streetAddress"),
    rule(KeyMatch::EndsWith("city"), "address", "city"),
    rule(KeyMatch::EndsWith("country"), "address", "country"),
    rule(KeyMatch::EndsWith("phone"), "phone", "phoneNumber"),
    rule(KeyMatch::EndsWith("comment"), "lorem", "sentence"),
    rule(KeyMatch::EndsWith("date"), "date", "past"),
    rule(KeyMatch::EndsWith("name"), "name", "findName"),
];

/// Used when no rule matches
pub const FALLBACK: HeuristicRule = rule(KeyMatch::Contains(""), "random", "word");

/// Pick the rule for a lower-cased field key
pub fn rule_for(key: &str) -> &'static HeuristicRule {
    HEURISTICS
        .iter()
        .find(|rule| rule.matcher.matches(key))
        .unwrap_or(&FALLBACK)
}

/// Generator call for a lower-cased field key
pub fn infer(key: &str) -> GeneratorCall {
    rule_for(key).call()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("email", "internet", "email" ; "exact email")]
    #[test_case("workemail", "internet", "email" ; "email substring")]
    #[test_case("email_lastname", "internet", "email" ; "email beats lastname")]
    #[test_case("firstname", "name", "firstName" ; "first name")]
    #[test_case("lastname", "name", "lastName" ; "last name before catch all")]
    #[test_case("description", "lorem", "sentence" ; "description exact")]
    #[test_case("shortdescription", "random", "word" ; "description must be exact")]
    #[test_case("billingaddress", "address", "streetAddress" ; "address suffix")]
    #[test_case("city", "address", "city" ; "city")]
    #[test_case("country", "address", "country" ; "country")]
    #[test_case("mobilephone", "phone", "phoneNumber" ; "phone suffix")]
    #[test_case("comment", "lorem", "sentence" ; "comment")]
    #[test_case("birthdate", "date", "past" ; "date suffix")]
    #[test_case("username", "name", "findName" ; "name catch all")]
    #[test_case("name", "name", "findName" ; "plain name")]
    #[test_case("age", "random", "word" ; "fallback")]
    fn test_infer(key: &str, namespace: &str, method: &str) {
        assert_eq!(infer(key), GeneratorCall::new(namespace, method));
    }

    #[test]
    fn test_only_email_is_lowercased() {
        assert!(rule_for("email").lowercase);
        assert!(!rule_for("firstname").lowercase);
        assert!(!rule_for("age").lowercase);
    }

    #[test]
    fn test_key_match_variants() {
        assert!(KeyMatch::Contains("mail").matches("email"));
        assert!(KeyMatch::Equals("city").matches("city"));
        assert!(!KeyMatch::Equals("city").matches("homecity"));
        assert!(KeyMatch::EndsWith("city").matches("homecity"));
        assert!(!KeyMatch::EndsWith("city").matches("cityname"));
    }
}
