use std::borrow::Cow;
use std::sync::Arc;

use tracing::debug;

use crate::rewrite::layer::rewrite_layer;
use crate::rewrite::synthesizer::language_expression_with;
use crate::rewrite::{LanguageError, LanguageOptions};
use crate::types::{StyleDocument, SupportedLanguages};

/// Rewrites whole style documents for a target language.
///
/// The localizer is stateless apart from its options: the same document and
/// language always produce the same output, and localizing an already
/// localized document for the same language changes nothing.
///
/// # Example
///
/// ```
/// use maplang::{LanguageOptions, StyleDocument, StyleLocalizer};
///
/// let style = StyleDocument::from_json_str(r#"{
///     "version": 8,
///     "layers": [
///         { "id": "place-city", "type": "symbol", "layout": { "text-field": ["get", "name"] } }
///     ]
/// }"#).unwrap();
///
/// let localizer = StyleLocalizer::new(LanguageOptions::default()).unwrap();
/// let french = localizer.localize(&style, "fr").unwrap();
///
/// let layer = french.layer("place-city").unwrap();
/// assert_eq!(layer.layout_property("text-line-height"), Some(&serde_json::json!(1.35)));
/// assert!(localizer.localize(&style, "xx").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct StyleLocalizer {
    options: LanguageOptions,
}

impl StyleLocalizer {
    /// Create a localizer, rejecting inconsistent options.
    pub fn new(options: LanguageOptions) -> Result<Self, LanguageError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &LanguageOptions {
        &self.options
    }

    pub fn supported_languages(&self) -> &SupportedLanguages {
        &self.options.supported_languages
    }

    /// Fail with [`LanguageError::UnsupportedLanguage`] unless `language` is
    /// supported.
    pub fn check_supported(&self, language: &str) -> Result<(), LanguageError> {
        if self.options.supported_languages.contains(language) {
            return Ok(());
        }
        Err(LanguageError::UnsupportedLanguage {
            language: language.to_string(),
            suggestions: self.options.supported_languages.suggestions(language),
        })
    }

    /// Return a copy of `style` whose name labels show `language`.
    ///
    /// Layer order and every non-layer key are preserved. Layers that are
    /// not rewritten are shared with `style`.
    pub fn localize(
        &self,
        style: &StyleDocument,
        language: &str,
    ) -> Result<StyleDocument, LanguageError> {
        self.check_supported(language)?;

        let expression = language_expression_with(language, self.options.label_display);
        let mut rewritten = 0usize;
        let layers = style
            .layers
            .iter()
            .map(|layer| {
                match rewrite_layer(layer, &expression, &self.options.excluded_layer_ids) {
                    Cow::Borrowed(_) => Arc::clone(layer),
                    Cow::Owned(localized) => {
                        rewritten += 1;
                        Arc::new(localized)
                    }
                }
            })
            .collect();

        debug!(
            language,
            rewritten,
            total = style.layers.len(),
            "localized style document"
        );

        Ok(StyleDocument {
            metadata: style.metadata.clone(),
            layers,
        })
    }
}
