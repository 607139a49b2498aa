//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;

/// Scan result for a single layer with a `text-field`.
#[derive(Debug, Serialize)]
pub struct LabelLayer {
    /// Layer id.
    pub id: String,
    /// The `text-field` value as compact JSON.
    pub text_field: String,
    /// Whether the label selects a name attribute.
    pub language_field: bool,
    /// Whether the layer is in the exclusion list.
    pub excluded: bool,
}

impl LabelLayer {
    pub fn rewritten(&self) -> bool {
        self.language_field && !self.excluded
    }
}

/// Longest text-field rendering shown in a table cell.
const MAX_FIELD_WIDTH: usize = 48;

/// Format scanned label layers as an ASCII table.
pub fn format_label_table(layers: &[LabelLayer]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Layer", "Text field", "Name field", "Rewritten"]);

    for layer in layers {
        table.add_row(vec![
            layer.id.clone(),
            truncate(&layer.text_field),
            yes_no(layer.language_field).to_string(),
            if layer.excluded {
                "excluded".to_string()
            } else {
                yes_no(layer.rewritten()).to_string()
            },
        ]);
    }

    table
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_FIELD_WIDTH {
        return text.to_string();
    }
    let mut short: String = text.chars().take(MAX_FIELD_WIDTH - 1).collect();
    short.push('…');
    short
}
