pub mod eval;
pub mod plugin;
pub mod rewrite;
pub mod types;

pub use plugin::{ControlContainer, HostEvent, LanguageSession, MapHost, MapLanguage};
pub use rewrite::{
    LabelDisplay, LanguageError, LanguageOptions, StyleError, StyleLocalizer, is_language_field,
    language_expression, resolve_initial_language, rewrite_layer,
};
pub use types::{
    DEFAULT_SUPPORTED_LANGUAGES, ExcludedLayerIds, Expression, LayerDefinition, Layout, Stop,
    StopTable, StyleDocument, SupportedLanguages,
};
