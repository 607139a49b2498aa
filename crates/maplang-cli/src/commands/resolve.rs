//! Implementation of the `maplang resolve` command.

use maplang::resolve_initial_language;
use miette::miette;
use serde::Serialize;

use super::options::LanguageOptionArgs;

/// Arguments for the resolve command.
#[derive(Debug, clap::Args)]
pub struct ResolveArgs {
    /// Language set by an earlier explicit choice
    #[arg(long)]
    pub previous: Option<String>,

    /// Configured default language
    #[arg(long = "default", env = "MAPLANG_DEFAULT_LANGUAGE")]
    pub default_language: Option<String>,

    /// Host-reported preferred languages, most preferred first (comma-separated)
    #[arg(long, value_delimiter = ',', env = "MAPLANG_PREFERRED_LANGUAGES")]
    pub prefer: Vec<String>,

    #[command(flatten)]
    pub options: LanguageOptionArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for resolve results.
#[derive(Serialize)]
struct ResolveResult {
    language: Option<String>,
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> miette::Result<i32> {
    let options = args.options.to_options(args.default_language.clone());
    let localizer = maplang::StyleLocalizer::new(options.clone())
        .map_err(|e| miette!("Invalid options: {}", e))?;

    let language = resolve_initial_language(
        args.previous.as_deref(),
        options.default_language.as_deref(),
        &args.prefer,
        localizer.supported_languages(),
    );

    if args.json {
        let output = ResolveResult {
            language: language.clone(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        match &language {
            Some(language) => println!("{}", language),
            None => println!("No supported language resolved"),
        }
    }

    match language {
        Some(language) if localizer.check_supported(&language).is_err() => {
            eprintln!("Warning: '{}' is not a supported language", language);
            Ok(exitcode::DATAERR)
        }
        Some(_) => Ok(exitcode::OK),
        None => Ok(exitcode::DATAERR),
    }
}
