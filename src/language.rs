// 🌐 Display languages
// Closed set of language codes; anything unsupported falls back to English

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Es,
    Fr,
    De,
}

impl LanguageCode {
    pub const DEFAULT: LanguageCode = LanguageCode::En;

    pub const ALL: [LanguageCode; 4] = [
        LanguageCode::En,
        LanguageCode::Es,
        LanguageCode::Fr,
        LanguageCode::De,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Es => "es",
            LanguageCode::Fr => "fr",
            LanguageCode::De => "de",
        }
    }

    /// Native display name
    pub fn name(&self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Es => "Español",
            LanguageCode::Fr => "Français",
            LanguageCode::De => "Deutsch",
        }
    }

    /// Exact lookup; accepts region tags like "es-MX"
    pub fn from_code(code: &str) -> Option<LanguageCode> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        LanguageCode::ALL.iter().copied().find(|l| l.code() == primary)
    }

    /// Lookup that never fails: unsupported codes become the default
    pub fn parse_or_default(code: &str) -> LanguageCode {
        LanguageCode::from_code(code).unwrap_or_else(|| {
            debug!(code, "unsupported language code, using default");
            LanguageCode::DEFAULT
        })
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        LanguageCode::DEFAULT
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
