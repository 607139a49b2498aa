//! maplang CLI entry point.
//!
//! Provides command-line tools for working with map style documents:
//! - `maplang localize` - Rewrite a style so labels use one language
//! - `maplang scan` - List label layers and whether they would be rewritten
//! - `maplang preview` - Show the label a feature gets in a language
//! - `maplang resolve` - Show which language a map would start in

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_localize, run_preview, run_resolve, run_scan, LocalizeArgs, PreviewArgs, ResolveArgs,
    ScanArgs,
};
use tracing_subscriber::EnvFilter;

/// Map style localization tools.
#[derive(Debug, Parser)]
#[command(name = "maplang")]
#[command(about = "Map style localization tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrite a style document for a language
    Localize(LocalizeArgs),
    /// List label layers in a style document
    Scan(ScanArgs),
    /// Evaluate the localized label for a feature
    Preview(PreviewArgs),
    /// Resolve the initial map language
    Resolve(ResolveArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install the tracing subscriber. `RUST_LOG` wins over `--verbose`.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "maplang=debug" } else { "maplang=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Localize(args) => run_localize(args),
        Commands::Scan(args) => run_scan(args),
        Commands::Preview(args) => run_preview(args),
        Commands::Resolve(args) => run_resolve(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
