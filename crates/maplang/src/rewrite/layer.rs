//! Per-layer label replacement.

use std::borrow::Cow;

use serde_json::Value;
use tracing::debug;

use crate::rewrite::classifier::is_language_field;
use crate::types::{ExcludedLayerIds, Expression, LayerDefinition, Layout};

/// Layout key set on every layer whose label is replaced.
pub const TEXT_LINE_HEIGHT: &str = "text-line-height";

/// Line height applied together with a replaced label.
pub const LOCALIZED_LINE_HEIGHT: f64 = 1.35;

/// Whether a `text-field` value should be replaced by a localized name.
///
/// A stop table qualifies when any stop output is a language field; the
/// whole table is then replaced, not the individual stops.
pub fn is_localizable_text_field(text_field: &Expression) -> bool {
    match text_field {
        Expression::Stops(table) => table.outputs().any(is_language_field),
        other => is_language_field(other),
    }
}

/// Produce the localized version of `layer`.
///
/// Returns [`Cow::Borrowed`] with the input itself when the layer is
/// excluded, has no `text-field`, or its `text-field` does not select a name
/// attribute. Otherwise returns a new layer whose `text-field` is
/// `language_expression` and whose layout also sets
/// [`TEXT_LINE_HEIGHT`] to [`LOCALIZED_LINE_HEIGHT`]. The input is never
/// modified.
pub fn rewrite_layer<'a>(
    layer: &'a LayerDefinition,
    language_expression: &Expression,
    excluded: &ExcludedLayerIds,
) -> Cow<'a, LayerDefinition> {
    if excluded.contains(&layer.id) {
        return Cow::Borrowed(layer);
    }
    let Some(layout) = &layer.layout else {
        return Cow::Borrowed(layer);
    };
    let Some(text_field) = &layout.text_field else {
        return Cow::Borrowed(layer);
    };
    if !is_localizable_text_field(text_field) {
        return Cow::Borrowed(layer);
    }

    debug!(layer = %layer.id, "replacing text-field with localized name");

    let mut properties = layout.properties.clone();
    properties.insert(TEXT_LINE_HEIGHT.to_string(), Value::from(LOCALIZED_LINE_HEIGHT));
    Cow::Owned(LayerDefinition {
        id: layer.id.clone(),
        layout: Some(Layout {
            text_field: Some(language_expression.clone()),
            properties,
        }),
        properties: layer.properties.clone(),
    })
}
