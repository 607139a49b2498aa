//! Localizer options shared by several commands.

use maplang::{ExcludedLayerIds, LabelDisplay, LanguageOptions, SupportedLanguages};

/// Options that configure the localizer.
#[derive(Debug, clap::Args)]
pub struct LanguageOptionArgs {
    /// Supported language codes (comma-separated). Defaults to the built-in list.
    #[arg(long, value_delimiter = ',', env = "MAPLANG_SUPPORTED")]
    pub supported: Vec<String>,

    /// Layer ids that must not be rewritten (comma-separated, repeatable)
    #[arg(long = "exclude", value_delimiter = ',', env = "MAPLANG_EXCLUDE")]
    pub exclude: Vec<String>,

    /// Show the native name on a second line under the localized name
    #[arg(long)]
    pub dual: bool,
}

impl LanguageOptionArgs {
    /// Build localizer options, optionally with a default language.
    pub fn to_options(&self, default_language: Option<String>) -> LanguageOptions {
        let supported_languages = if self.supported.is_empty() {
            SupportedLanguages::default()
        } else {
            SupportedLanguages::new(self.supported.iter().cloned())
        };
        let label_display = if self.dual {
            LabelDisplay::LocalizedWithNative
        } else {
            LabelDisplay::Localized
        };
        LanguageOptions::builder()
            .supported_languages(supported_languages)
            .maybe_default_language(default_language)
            .excluded_layer_ids(ExcludedLayerIds::new(self.exclude.iter().cloned()))
            .label_display(label_display)
            .build()
    }
}
