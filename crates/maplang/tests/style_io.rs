//! Tests for reading and writing style documents.

use std::fs;

use maplang::{LanguageOptions, StyleDocument, StyleError, StyleLocalizer};
use serde_json::{Value, json};
use tempfile::tempdir;

const STYLE_JSON: &str = r#"{
    "version": 8,
    "name": "Basic",
    "sources": { "streets": { "type": "vector", "url": "mapbox://mapbox.streets" } },
    "layers": [
        { "id": "water", "type": "fill", "source": "streets", "source-layer": "water" },
        {
            "id": "place-label",
            "type": "symbol",
            "source": "streets",
            "layout": { "text-field": "{name_en}", "text-font": ["Open Sans Regular"] },
            "paint": { "text-halo-width": 1 }
        }
    ],
    "sprite": "mapbox://sprites/basic"
}"#;

#[test]
fn parses_layers_and_metadata() {
    let style = StyleDocument::from_json_str(STYLE_JSON).unwrap();

    assert_eq!(style.layers.len(), 2);
    assert_eq!(style.metadata["version"], json!(8));
    assert_eq!(style.metadata["sprite"], json!("mapbox://sprites/basic"));
    assert!(!style.metadata.contains_key("layers"));

    let label = style.layer("place-label").unwrap();
    assert_eq!(label.properties["type"], json!("symbol"));
    assert_eq!(label.layout_property("text-font"), Some(&json!(["Open Sans Regular"])));
}

#[test]
fn serialization_preserves_content() {
    let style = StyleDocument::from_json_str(STYLE_JSON).unwrap();
    let written: Value = serde_json::from_str(&style.to_json_pretty().unwrap()).unwrap();
    let original: Value = serde_json::from_str(STYLE_JSON).unwrap();
    assert_eq!(written, original);
}

#[test]
fn localized_style_round_trips_through_disk() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("style.json");
    let output = dir.path().join("style.fr.json");
    fs::write(&input, STYLE_JSON).unwrap();

    let style = StyleDocument::from_path(&input).unwrap();
    let localizer = StyleLocalizer::new(LanguageOptions::default()).unwrap();
    let french = localizer.localize(&style, "fr").unwrap();
    french.write_to_path(&output).unwrap();

    let reloaded = StyleDocument::from_path(&output).unwrap();
    assert_eq!(reloaded, french);
    assert_eq!(localizer.localize(&reloaded, "fr").unwrap(), french);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = StyleDocument::from_path(&path).unwrap_err();
    assert!(matches!(err, StyleError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn malformed_json_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{ "layers": [ { "id": "a" }, ] }"#).unwrap();
    let err = StyleDocument::from_path(&path).unwrap_err();
    assert!(matches!(err, StyleError::Json { .. }));
}
