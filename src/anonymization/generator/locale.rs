//! Generator locales

use std::fmt;

/// Locales supported by [`FakerGenerator`](super::FakerGenerator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    FrFr,
    PtBr,
    ZhCn,
    ZhTw,
    JaJp,
    ArSa,
}

impl Locale {
    /// Parse a faker-style locale name (`en`, `fr`, `pt_BR`, `zh-CN`, ...)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().replace('-', "_").to_lowercase().as_str() {
            "en" | "en_us" | "en_gb" => Some(Self::En),
            "fr" | "fr_fr" => Some(Self::FrFr),
            "pt_br" => Some(Self::PtBr),
            "zh_cn" => Some(Self::ZhCn),
            "zh_tw" => Some(Self::ZhTw),
            "ja" | "ja_jp" => Some(Self::JaJp),
            "ar" | "ar_sa" => Some(Self::ArSa),
            _ => None,
        }
    }

    /// Resolve a locale, falling back to English for unknown names
    pub fn resolve(value: Option<&str>) -> Self {
        match value {
            None => Self::default(),
            Some(name) => Self::parse(name).unwrap_or_else(|| {
                tracing::warn!(locale = %name, "Unsupported faker locale, falling back to en");
                Self::default()
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::FrFr => "fr",
            Self::PtBr => "pt_BR",
            Self::ZhCn => "zh_CN",
            Self::ZhTw => "zh_TW",
            Self::JaJp => "ja",
            Self::ArSa => "ar",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
