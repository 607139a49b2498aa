//! Implementation of the `maplang scan` command.

use std::path::PathBuf;

use maplang::rewrite::is_localizable_text_field;
use maplang::ExcludedLayerIds;
use miette::IntoDiagnostic;

use crate::output::load_style;
use crate::output::table::{format_label_table, LabelLayer};

/// Arguments for the scan command.
#[derive(Debug, clap::Args)]
pub struct ScanArgs {
    /// Style document to inspect (.json)
    pub style: PathBuf,

    /// Layer ids that must not be rewritten (comma-separated, repeatable)
    #[arg(long = "exclude", value_delimiter = ',', env = "MAPLANG_EXCLUDE")]
    pub exclude: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the scan command.
pub fn run_scan(args: ScanArgs) -> miette::Result<i32> {
    let style = load_style(&args.style)?;
    let excluded = ExcludedLayerIds::new(args.exclude.iter().cloned());

    let layers: Vec<LabelLayer> = style
        .layers
        .iter()
        .filter_map(|layer| {
            let text_field = layer.text_field()?;
            Some(LabelLayer {
                id: layer.id.clone(),
                text_field: text_field.to_string(),
                language_field: is_localizable_text_field(text_field),
                excluded: excluded.contains(&layer.id),
            })
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&layers).into_diagnostic()?);
    } else if layers.is_empty() {
        println!("No layers with a text-field in {}", args.style.display());
    } else {
        println!("{}", format_label_table(&layers));
        let rewritten = layers.iter().filter(|layer| layer.rewritten()).count();
        println!(
            "\n{} of {} label layers would be localized ({} layers total)",
            rewritten,
            layers.len(),
            style.layers.len()
        );
    }
    Ok(exitcode::OK)
}
