use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strsim::levenshtein;

/// Languages accepted when no explicit list is configured.
pub const DEFAULT_SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "en", "es", "fr", "de", "ja", "ko", "pt", "ru", "zh", "zh-CN", "zh-TW", "zh-HK",
];

/// The ordered set of language codes a localizer accepts.
///
/// Used both to validate explicit language requests and to filter the
/// language reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportedLanguages(Vec<String>);

impl SupportedLanguages {
    /// Create a set from language codes. Duplicates are dropped, first
    /// occurrence wins.
    pub fn new(codes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut languages: Vec<String> = Vec::new();
        for code in codes {
            let code = code.into();
            if !languages.contains(&code) {
                languages.push(code);
            }
        }
        Self(languages)
    }

    pub fn contains(&self, language: &str) -> bool {
        self.0.iter().any(|code| code == language)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Supported codes that look like a mistyped `language`.
    ///
    /// Matches on case-insensitive equality, on the primary subtag
    /// (`fr-CA` suggests `fr`), and on an edit distance of one.
    pub fn suggestions(&self, language: &str) -> Vec<String> {
        let primary = language.split(['-', '_']).next().unwrap_or(language);
        self.0
            .iter()
            .filter(|code| {
                code.eq_ignore_ascii_case(language)
                    || code.eq_ignore_ascii_case(primary)
                    || levenshtein(code, language) <= 1
            })
            .cloned()
            .collect()
    }
}

impl Default for SupportedLanguages {
    fn default() -> Self {
        Self::new(DEFAULT_SUPPORTED_LANGUAGES.iter().copied())
    }
}

impl<S: Into<String>> FromIterator<S> for SupportedLanguages {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Layer ids that are never rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExcludedLayerIds(BTreeSet<String>);

impl ExcludedLayerIds {
    pub fn new(ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(ids.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExcludedLayerIds {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
