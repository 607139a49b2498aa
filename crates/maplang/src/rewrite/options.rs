use bon::Builder;

use crate::rewrite::LanguageError;
use crate::rewrite::synthesizer::LabelDisplay;
use crate::types::{ExcludedLayerIds, SupportedLanguages};

/// Construction-time configuration for a localizer.
///
/// # Example
///
/// ```
/// use maplang::{ExcludedLayerIds, LanguageOptions};
///
/// let options = LanguageOptions::builder()
///     .default_language("fr")
///     .excluded_layer_ids(ExcludedLayerIds::new(["road-label"]))
///     .build();
///
/// assert_eq!(options.supported_languages.len(), 13);
/// assert!(options.excluded_layer_ids.contains("road-label"));
/// ```
#[derive(Debug, Clone, Builder)]
pub struct LanguageOptions {
    /// Languages accepted by `set_language`. Defaults to
    /// [`DEFAULT_SUPPORTED_LANGUAGES`](crate::DEFAULT_SUPPORTED_LANGUAGES).
    #[builder(default)]
    pub supported_languages: SupportedLanguages,

    /// Language applied on style load when none was set explicitly.
    #[builder(into)]
    pub default_language: Option<String>,

    /// Layers whose labels are never rewritten.
    #[builder(default)]
    pub excluded_layer_ids: ExcludedLayerIds,

    /// How the synthesized label combines localized and native names.
    #[builder(default)]
    pub label_display: LabelDisplay,
}

impl Default for LanguageOptions {
    fn default() -> Self {
        LanguageOptions::builder().build()
    }
}

impl LanguageOptions {
    pub(crate) fn validate(&self) -> Result<(), LanguageError> {
        if self.supported_languages.is_empty() {
            return Err(LanguageError::Construction {
                reason: "the supported language list is empty".to_string(),
            });
        }
        match &self.default_language {
            Some(default) if !self.supported_languages.contains(default) => {
                Err(LanguageError::Construction {
                    reason: format!("default language '{default}' is not a supported language"),
                })
            }
            _ => Ok(()),
        }
    }
}
