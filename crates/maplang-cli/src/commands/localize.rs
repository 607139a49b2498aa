//! Implementation of the `maplang localize` command.

use std::path::PathBuf;
use std::sync::Arc;

use maplang::{LanguageError, StyleLocalizer};
use miette::{miette, IntoDiagnostic};
use owo_colors::{OwoColorize, Stream};
use tracing::info;

use super::options::LanguageOptionArgs;
use crate::output::load_style;

/// Arguments for the localize command.
#[derive(Debug, clap::Args)]
pub struct LocalizeArgs {
    /// Style document to rewrite (.json)
    pub style: PathBuf,

    /// Target language code (e.g., fr, ja, zh-TW)
    #[arg(long, required = true, env = "MAPLANG_LANGUAGE")]
    pub lang: String,

    /// Write the rewritten style here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub options: LanguageOptionArgs,
}

/// Run the localize command.
pub fn run_localize(args: LocalizeArgs) -> miette::Result<i32> {
    let style = load_style(&args.style)?;
    let localizer = StyleLocalizer::new(args.options.to_options(None))
        .map_err(|e| miette!("Invalid options: {}", e))?;

    let localized = match localizer.localize(&style, &args.lang) {
        Ok(localized) => localized,
        Err(e @ LanguageError::UnsupportedLanguage { .. }) => {
            eprintln!("{}", e);
            return Ok(exitcode::USAGE);
        }
        Err(e) => return Err(miette!("Localization failed: {}", e)),
    };

    let rewritten = style
        .layers
        .iter()
        .zip(&localized.layers)
        .filter(|(before, after)| !Arc::ptr_eq(before, after))
        .count();
    info!(rewritten, language = %args.lang, "rewrote label layers");

    match &args.output {
        Some(path) => {
            localized
                .write_to_path(path)
                .map_err(|e| miette!("Cannot write style: {}", e))?;
            eprintln!(
                "{} {} of {} layers to '{}' in {}",
                "Localized".if_supports_color(Stream::Stderr, |t| t.green()),
                rewritten,
                style.layers.len(),
                args.lang,
                path.display()
            );
        }
        None => {
            println!("{}", localized.to_json_pretty().into_diagnostic()?);
        }
    }
    Ok(exitcode::OK)
}
