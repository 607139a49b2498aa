//! Miette diagnostic wrapper for style JSON errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::fs::read_to_string;
use std::path::Path;

use maplang::StyleDocument;
use miette::{miette, Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for malformed style documents.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid style document: {message}")]
#[diagnostic(code(maplang::style))]
pub struct StyleDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl StyleDiagnostic {
    /// Create a diagnostic from a JSON error with source context.
    pub fn from_json_error(path: &Path, content: &str, err: &serde_json::Error) -> Self {
        let (line, column) = (err.line(), err.column());

        // serde_json reports 1-based lines and columns.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        let help = err
            .is_data()
            .then(|| "the JSON is well-formed but a layer or expression has an unexpected shape".to_string());

        StyleDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: err.to_string(),
            help,
        }
    }
}

/// Read and parse a style document, rendering parse failures with source
/// context.
pub fn load_style(path: &Path) -> miette::Result<StyleDocument> {
    let content = read_to_string(path)
        .map_err(|e| miette!("Cannot read style file {}: {}", path.display(), e))?;
    StyleDocument::from_json_str(&content)
        .map_err(|e| StyleDiagnostic::from_json_error(path, &content, &e).into())
}
