//! Style rewriting: classification of label expressions, synthesis of the
//! localized name expression, and per-layer and per-document rewriting.

mod classifier;
mod error;
mod layer;
mod localizer;
mod options;
mod preference;
mod synthesizer;

pub use classifier::{is_language_field, is_name_attribute};
pub use error::{LanguageError, StyleError};
pub use layer::{LOCALIZED_LINE_HEIGHT, TEXT_LINE_HEIGHT, is_localizable_text_field, rewrite_layer};
pub use localizer::StyleLocalizer;
pub use options::LanguageOptions;
pub use preference::{host_language, resolve_initial_language};
pub use synthesizer::{
    LEGACY_ROC_NAMES, LabelDisplay, NAME_ATTRIBUTE, TAIWAN_SHORT_NAME, candidate_attributes,
    chinese_script, language_expression, language_expression_with,
};
