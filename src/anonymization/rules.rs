//! Field specifications and per-collection rule compilation
//!
//! A field specification is a token of the form `[collection.]field[:directive]`.
//! Tokens are parsed once per run; for every collection they are compiled into
//! a [`RuleSet`] holding only the rules that apply to that collection.
//!
//! A token applies to a collection when it has no word-character scope, or
//! when it starts with the collection name followed by a dot. The matched
//! prefix is stripped, so `fs.files.filename` compiles to `filename` for the
//! `fs.files` collection and `user-profiles.email` to `email` for
//! `user-profiles`.
//!
//! # Examples
//!
//! ```
//! use mongodb_anonymizer::anonymization::rules::{FieldSpec, RuleSet};
//!
//! let specs = FieldSpec::parse_list("email,users.Age:faker.random.number,orders.total:0");
//! let rules = RuleSet::compile(&specs, "users");
//!
//! assert_eq!(rules.fields(), vec!["email", "age"]);
//! assert!(rules.lookup("EMAIL").is_some());
//! assert!(rules.lookup("total").is_none());
//! ```

/// A parsed field specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Collection qualifier, `None` for rules that apply everywhere
    pub scope: Option<String>,

    /// Field name as written by the user (casing preserved)
    pub field: String,

    /// Raw directive text after the first unescaped `:`
    pub directive: Option<String>,

    token: String,
}

impl FieldSpec {
    /// Parse a single token
    ///
    /// Returns `None` for blank tokens and tokens without a field name.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        let (scope, rest) = match split_scope(token) {
            Some((scope, rest)) => (Some(scope.to_string()), rest),
            None => (None, token),
        };

        let (field, directive) = split_directive(rest);
        if field.is_empty() {
            return None;
        }

        Some(Self {
            scope,
            field,
            directive,
            token: token.to_string(),
        })
    }

    /// Parse a comma-separated list of tokens, skipping unusable ones
    pub fn parse_list(list: &str) -> Vec<Self> {
        list.split(',')
            .filter_map(|token| {
                let spec = Self::parse(token);
                if spec.is_none() && !token.trim().is_empty() {
                    tracing::warn!(token = %token.trim(), "Ignoring field specification without a field name");
                }
                spec
            })
            .collect()
    }

    /// Whether this spec applies to the given collection
    pub fn applies_to(&self, collection: &str) -> bool {
        self.resolve(collection).is_some()
    }

    /// Field and directive of this spec as seen from `collection`
    ///
    /// Returns `None` when the spec is scoped to another collection.
    pub fn resolve(&self, collection: &str) -> Option<(String, Option<String>)> {
        let prefix = format!("{collection}.");
        if let Some(rest) = self.token.strip_prefix(&prefix) {
            let (field, directive) = split_directive(rest);
            return (!field.is_empty()).then_some((field, directive));
        }

        self.scope
            .is_none()
            .then(|| (self.field.clone(), self.directive.clone()))
    }
}

/// A field specification resolved against one collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRule {
    /// Lower-cased field name
    pub field: String,

    /// Raw directive text, parsed lazily when the field is anonymized
    pub replacement: Option<String>,
}

/// The rules that apply to a single collection
///
/// Field names are unique; when two specs name the same field the later one
/// replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Compile the specs that apply to `collection`
    pub fn compile(specs: &[FieldSpec], collection: &str) -> Self {
        let mut rules: Vec<CompiledRule> = Vec::new();

        for (field, replacement) in specs.iter().filter_map(|spec| spec.resolve(collection)) {
            let rule = CompiledRule {
                field: field.to_lowercase(),
                replacement,
            };

            match rules.iter_mut().find(|existing| existing.field == rule.field) {
                Some(existing) => *existing = rule,
                None => rules.push(rule),
            }
        }

        Self { rules }
    }

    /// Find the rule for a document key, ignoring case
    pub fn lookup(&self, key: &str) -> Option<&CompiledRule> {
        let key = key.to_lowercase();
        self.rules.iter().find(|rule| rule.field == key)
    }

    /// Compiled field names in declaration order
    pub fn fields(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.field.as_str()).collect()
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Split `collection.rest` when the token starts with a word followed by a dot
fn split_scope(token: &str) -> Option<(&str, &str)> {
    let (prefix, rest) = token.split_once('.')?;
    let is_word = !prefix.is_empty() && prefix.chars().all(|c| c.is_alphanumeric() || c == '_');
    is_word.then_some((prefix, rest))
}

/// Split `field:directive` at the first `:` not escaped with a backslash
fn split_directive(text: &str) -> (String, Option<String>) {
    let mut escaped = false;
    for (idx, ch) in text.char_indices() {
        if ch == ':' && !escaped {
            let field = unescape_field(&text[..idx]);
            let directive = &text[idx + 1..];
            // An empty directive behaves like no directive at all
            let directive = (!directive.is_empty()).then(|| directive.to_string());
            return (field, directive);
        }
        escaped = ch == '\\';
    }
    (unescape_field(text), None)
}

fn unescape_field(field: &str) -> String {
    field.replace("\\:", ":")
}
