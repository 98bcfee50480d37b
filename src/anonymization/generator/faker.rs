//! [`Generator`] backed by the `fake` crate
//!
//! Method names follow faker.js so existing directive lists keep working:
//! `faker.name.findName`, `faker.address.streetAddress`, `faker.date.past`, ...

use super::{GeneratedValue, Generator, GeneratorCall, Locale};
use crate::domain::{AnonymizerError, Result};
use chrono::{DateTime, Duration, Utc};
use fake::faker::address::raw::{
    BuildingNumber, CityName, CountryCode, CountryName, SecondaryAddress, StateAbbr, StateName,
    StreetName, TimeZone, ZipCode,
};
use fake::faker::chrono::raw::DateTimeBetween;
use fake::faker::company::raw::{Buzzword, CompanyName, Industry};
use fake::faker::internet::raw::{
    DomainSuffix, FreeEmail, IPv4, IPv6, MACAddress, Password, SafeEmail, UserAgent, Username,
};
use fake::faker::job::raw::Title as JobTitle;
use fake::faker::lorem::raw::{Paragraph, Paragraphs, Sentence, Sentences, Word, Words};
use fake::faker::name::raw::{FirstName, LastName, Name, Suffix, Title};
use fake::faker::phone_number::raw::{CellNumber, PhoneNumber};
use fake::locales::{AR_SA, EN, FR_FR, JA_JP, PT_BR, ZH_CN, ZH_TW};
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Every `namespace.method` pair [`FakerGenerator`] understands
pub const CATALOG: &[(&str, &str)] = &[
    ("address", "streetAddress"),
    ("address", "streetName"),
    ("address", "buildingNumber"),
    ("address", "secondaryAddress"),
    ("address", "city"),
    ("address", "country"),
    ("address", "countryCode"),
    ("address", "zipCode"),
    ("address", "state"),
    ("address", "stateAbbr"),
    ("address", "timeZone"),
    ("company", "companyName"),
    ("company", "industry"),
    ("company", "buzzword"),
    ("date", "past"),
    ("date", "future"),
    ("date", "recent"),
    ("date", "soon"),
    ("internet", "email"),
    ("internet", "exampleEmail"),
    ("internet", "userName"),
    ("internet", "password"),
    ("internet", "ip"),
    ("internet", "ipv6"),
    ("internet", "mac"),
    ("internet", "userAgent"),
    ("internet", "domainSuffix"),
    ("lorem", "word"),
    ("lorem", "words"),
    ("lorem", "sentence"),
    ("lorem", "sentences"),
    ("lorem", "paragraph"),
    ("lorem", "paragraphs"),
    ("name", "firstName"),
    ("name", "lastName"),
    ("name", "findName"),
    ("name", "prefix"),
    ("name", "suffix"),
    ("name", "jobTitle"),
    ("phone", "phoneNumber"),
    ("phone", "cellNumber"),
    ("random", "word"),
    ("random", "words"),
    ("random", "number"),
    ("random", "float"),
    ("random", "boolean"),
    ("random", "uuid"),
    ("random", "alphaNumeric"),
];

const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Dispatch a `fake` faker over the runtime locale
macro_rules! localized {
    ($gen:ident, $out:ty, $faker:ident $(, $arg:expr)*) => {{
        let value: $out = match $gen.locale {
            Locale::En => $faker(EN $(, $arg)*).fake_with_rng(&mut $gen.rng),
            Locale::FrFr => $faker(FR_FR $(, $arg)*).fake_with_rng(&mut $gen.rng),
            Locale::PtBr => $faker(PT_BR $(, $arg)*).fake_with_rng(&mut $gen.rng),
            Locale::ZhCn => $faker(ZH_CN $(, $arg)*).fake_with_rng(&mut $gen.rng),
            Locale::ZhTw => $faker(ZH_TW $(, $arg)*).fake_with_rng(&mut $gen.rng),
            Locale::JaJp => $faker(JA_JP $(, $arg)*).fake_with_rng(&mut $gen.rng),
            Locale::ArSa => $faker(AR_SA $(, $arg)*).fake_with_rng(&mut $gen.rng),
        };
        value
    }};
}

/// Locale-aware fake data generator
pub struct FakerGenerator {
    locale: Locale,
    rng: StdRng,
}

impl FakerGenerator {
    /// Create a generator seeded from system entropy
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator that produces the same sequence on every run
    pub fn with_seed(locale: Locale, seed: u64) -> Self {
        Self {
            locale,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn text(&mut self, call: &GeneratorCall) -> Option<String> {
        let text = match (call.namespace.as_str(), call.method.as_str()) {
            ("address", "streetAddress") => {
                let number = localized!(self, String, BuildingNumber);
                let street = localized!(self, String, StreetName);
                format!("{number} {street}")
            }
            ("address", "streetName") => localized!(self, String, StreetName),
            ("address", "buildingNumber") => localized!(self, String, BuildingNumber),
            ("address", "secondaryAddress") => localized!(self, String, SecondaryAddress),
            ("address", "city") => localized!(self, String, CityName),
            ("address", "country") => localized!(self, String, CountryName),
            ("address", "countryCode") => localized!(self, String, CountryCode),
            ("address", "zipCode") => localized!(self, String, ZipCode),
            ("address", "state") => localized!(self, String, StateName),
            ("address", "stateAbbr") => localized!(self, String, StateAbbr),
            ("address", "timeZone") => localized!(self, String, TimeZone),

            ("company", "companyName") => localized!(self, String, CompanyName),
            ("company", "industry") => localized!(self, String, Industry),
            ("company", "buzzword") => localized!(self, String, Buzzword),

            ("internet", "email") => localized!(self, String, FreeEmail),
            ("internet", "exampleEmail") => localized!(self, String, SafeEmail),
            ("internet", "userName") => localized!(self, String, Username),
            ("internet", "password") => localized!(self, String, Password, 10..16),
            ("internet", "ip") => localized!(self, String, IPv4),
            ("internet", "ipv6") => localized!(self, String, IPv6),
            ("internet", "mac") => localized!(self, String, MACAddress),
            ("internet", "userAgent") => localized!(self, String, UserAgent),
            ("internet", "domainSuffix") => localized!(self, String, DomainSuffix),

            ("lorem", "word") | ("random", "word") => localized!(self, String, Word),
            ("lorem", "words") | ("random", "words") => {
                localized!(self, Vec<String>, Words, 3..4).join(" ")
            }
            ("lorem", "sentence") => localized!(self, String, Sentence, 4..10),
            ("lorem", "sentences") => localized!(self, Vec<String>, Sentences, 2..6).join(" "),
            ("lorem", "paragraph") => localized!(self, String, Paragraph, 3..6),
            ("lorem", "paragraphs") => {
                localized!(self, Vec<String>, Paragraphs, 3..4).join("\n \r")
            }

            ("name", "firstName") => localized!(self, String, FirstName),
            ("name", "lastName") => localized!(self, String, LastName),
            ("name", "findName") => localized!(self, String, Name),
            ("name", "prefix") => localized!(self, String, Title),
            ("name", "suffix") => localized!(self, String, Suffix),
            ("name", "jobTitle") => localized!(self, String, JobTitle),

            ("phone", "phoneNumber") => localized!(self, String, PhoneNumber),
            ("phone", "cellNumber") => localized!(self, String, CellNumber),

            ("random", "uuid") => {
                uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid().to_string()
            }
            ("random", "alphaNumeric") => {
                let idx = self.rng.gen_range(0..ALPHANUMERIC.len());
                char::from(ALPHANUMERIC[idx]).to_string()
            }
            _ => return None,
        };
        Some(text)
    }

    fn date_between(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> DateTime<Utc> {
        DateTimeBetween(EN, start, end).fake_with_rng(&mut self.rng)
    }
}

impl Generator for FakerGenerator {
    fn generate(&mut self, call: &GeneratorCall) -> Result<GeneratedValue> {
        let now = Utc::now();
        let value = match (call.namespace.as_str(), call.method.as_str()) {
            ("date", "past") => {
                GeneratedValue::DateTime(self.date_between(now - Duration::days(365), now))
            }
            ("date", "future") => {
                GeneratedValue::DateTime(self.date_between(now, now + Duration::days(365)))
            }
            ("date", "recent") => {
                GeneratedValue::DateTime(self.date_between(now - Duration::days(1), now))
            }
            ("date", "soon") => {
                GeneratedValue::DateTime(self.date_between(now, now + Duration::days(1)))
            }
            ("random", "number") => GeneratedValue::Integer(self.rng.gen_range(0..=99_999)),
            ("random", "float") => {
                let raw: f64 = self.rng.gen_range(0.0..99_999.0);
                GeneratedValue::Float((raw * 100.0).round() / 100.0)
            }
            ("random", "boolean") => GeneratedValue::Boolean(self.rng.gen_bool(0.5)),
            _ => match self.text(call) {
                Some(text) => GeneratedValue::Text(text),
                None => {
                    return Err(AnonymizerError::unknown_generator(
                        call.namespace.as_str(),
                        call.method.as_str(),
                    ))
                }
            },
        };

        tracing::trace!(generator = %call, locale = %self.locale, "Generated value");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_entry_generates() {
        for locale in [
            Locale::En,
            Locale::FrFr,
            Locale::PtBr,
            Locale::ZhCn,
            Locale::ZhTw,
            Locale::JaJp,
            Locale::ArSa,
        ] {
            let mut generator = FakerGenerator::with_seed(locale, 7);
            for (namespace, method) in CATALOG {
                let call = GeneratorCall::new(*namespace, *method);
                assert!(
                    generator.generate(&call).is_ok(),
                    "{call} failed for locale {locale}"
                );
            }
        }
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        let mut generator = FakerGenerator::with_seed(Locale::En, 1);
        let err = generator
            .generate(&GeneratorCall::new("internet", "teleport"))
            .unwrap_err();
        assert!(matches!(err, AnonymizerError::UnknownGenerator { .. }));
    }

    #[test]
    fn test_unknown_namespace_is_rejected() {
        let mut generator = FakerGenerator::with_seed(Locale::En, 1);
        let err = generator
            .generate(&GeneratorCall::new("galaxy", "star"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown generator: galaxy.star");
    }

    #[test]
    fn test_seeded_generators_are_reproducible() {
        let call = GeneratorCall::new("name", "findName");
        let mut a = FakerGenerator::with_seed(Locale::En, 42);
        let mut b = FakerGenerator::with_seed(Locale::En, 42);
        for _ in 0..5 {
            assert_eq!(a.generate(&call).unwrap(), b.generate(&call).unwrap());
        }
    }

    #[test]
    fn test_email_looks_like_email() {
        let mut generator = FakerGenerator::with_seed(Locale::En, 3);
        match generator.generate(&GeneratorCall::new("internet", "email")).unwrap() {
            GeneratedValue::Text(email) => assert!(email.contains('@')),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_past_date_is_in_the_past() {
        let mut generator = FakerGenerator::with_seed(Locale::En, 3);
        match generator.generate(&GeneratorCall::new("date", "past")).unwrap() {
            GeneratedValue::DateTime(date) => {
                assert!(date <= Utc::now());
                assert!(date >= Utc::now() - Duration::days(366));
            }
            other => panic!("expected date, got {other:?}"),
        }
    }

    #[test]
    fn test_random_number_range() {
        let mut generator = FakerGenerator::with_seed(Locale::En, 9);
        for _ in 0..50 {
            match generator.generate(&GeneratorCall::new("random", "number")).unwrap() {
                GeneratedValue::Integer(n) => assert!((0..=99_999).contains(&n)),
                other => panic!("expected integer, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_street_address_has_number_and_street() {
        let mut generator = FakerGenerator::with_seed(Locale::En, 5);
        match generator
            .generate(&GeneratorCall::new("address", "streetAddress"))
            .unwrap()
        {
            GeneratedValue::Text(address) => assert!(address.contains(' ')),
            other => panic!("expected text, got {other:?}"),
        }
    }
}
