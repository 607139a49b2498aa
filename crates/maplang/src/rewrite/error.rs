//! Error types for style localization.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while choosing or applying a map language.
#[derive(Debug, Error)]
pub enum LanguageError {
    /// The requested language is not in the configured supported set.
    #[error("language '{language}' is not supported{}", format_suggestions(suggestions))]
    UnsupportedLanguage {
        language: String,
        suggestions: Vec<String>,
    },

    /// Options rejected when building a localizer or plugin.
    #[error("invalid language options: {reason}")]
    Construction { reason: String },

    /// A language was requested before the host delivered a style.
    #[error("no style document has been loaded yet")]
    StyleNotLoaded,

    /// The plugin is not attached to a map host.
    #[error("plugin is not attached to a map")]
    Detached,
}

/// Errors reading or writing style documents on disk.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path}: invalid style JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}
