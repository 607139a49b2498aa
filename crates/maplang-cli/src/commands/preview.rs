//! Implementation of the `maplang preview` command.

use maplang::eval::{display_text, Feature};
use maplang::rewrite::language_expression_with;
use maplang::{LabelDisplay, SupportedLanguages};
use serde::Serialize;
use serde_json::{Map, Value};

/// Arguments for the preview command.
#[derive(Debug, clap::Args)]
pub struct PreviewArgs {
    /// Language code to preview (e.g., en, de, zh-HK)
    #[arg(long, required = true, env = "MAPLANG_LANGUAGE")]
    pub lang: String,

    /// Feature attributes in name=value format (repeatable)
    #[arg(short = 'p', long = "prop", value_parser = parse_key_val)]
    pub properties: Vec<(String, String)>,

    /// Zoom level of the feature
    #[arg(long, default_value_t = 0.0)]
    pub zoom: f64,

    /// Show the native name on a second line under the localized name
    #[arg(long)]
    pub dual: bool,

    /// Print the label expression as well
    #[arg(long)]
    pub show_expression: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for preview results.
#[derive(Serialize)]
pub struct PreviewResult {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<Value>,
}

/// Parse a key=value attribute string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid attribute format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Run the preview command.
pub fn run_preview(args: PreviewArgs) -> miette::Result<i32> {
    let supported = SupportedLanguages::default();
    if !supported.contains(&args.lang) {
        eprintln!(
            "Warning: '{}' is not one of the default supported languages",
            args.lang
        );
    }

    let display = if args.dual {
        LabelDisplay::LocalizedWithNative
    } else {
        LabelDisplay::Localized
    };
    let expression = language_expression_with(&args.lang, display);

    // Numbers become JSON numbers, everything else a string
    let properties: Map<String, Value> = args
        .properties
        .into_iter()
        .map(|(k, v)| {
            let value = match v.parse::<i64>() {
                Ok(n) => Value::from(n),
                Err(_) => Value::from(v),
            };
            (k, value)
        })
        .collect();
    let feature = Feature::builder()
        .properties(properties)
        .zoom(args.zoom)
        .build();

    match display_text(&expression, &feature) {
        Ok(label) => {
            if args.json {
                let output = PreviewResult {
                    label,
                    expression: args.show_expression.then(|| Value::from(expression)),
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                if args.show_expression {
                    println!("{}", expression);
                }
                println!("{}", label);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            eprintln!("Evaluation error: {}", e);
            Ok(exitcode::DATAERR)
        }
    }
}
