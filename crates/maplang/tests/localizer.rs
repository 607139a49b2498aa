//! Tests for whole-document localization.

use std::sync::Arc;

use maplang::rewrite::TEXT_LINE_HEIGHT;
use maplang::{
    ExcludedLayerIds, LabelDisplay, LanguageError, LanguageOptions, StyleDocument,
    StyleLocalizer, SupportedLanguages, language_expression,
};
use serde_json::json;

fn sample_style() -> StyleDocument {
    serde_json::from_value(json!({
        "version": 8,
        "name": "Streets",
        "sources": { "composite": { "type": "vector", "url": "mapbox://mapbox.streets" } },
        "glyphs": "mapbox://fonts/{fontstack}/{range}.pbf",
        "layers": [
            { "id": "background", "type": "background", "paint": { "background-color": "#fff" } },
            { "id": "road-label", "type": "symbol", "layout": { "text-field": ["get", "name_en"] } },
            { "id": "road-shield", "type": "symbol", "layout": { "text-field": "{ref}" } },
            { "id": "country-label", "type": "symbol", "layout": { "text-field": "{name}" } },
            {
                "id": "place-city",
                "type": "symbol",
                "layout": {
                    "text-field": ["coalesce", ["get", "name_en"], ["get", "name"]],
                    "text-size": 16
                }
            }
        ]
    }))
    .unwrap()
}

fn localizer() -> StyleLocalizer {
    StyleLocalizer::new(LanguageOptions::default()).unwrap()
}

// =========================================================================
// Construction
// =========================================================================

#[test]
fn rejects_empty_supported_set() {
    let options = LanguageOptions::builder()
        .supported_languages(SupportedLanguages::new(Vec::<String>::new()))
        .build();
    let err = StyleLocalizer::new(options).unwrap_err();
    assert!(matches!(err, LanguageError::Construction { .. }));
}

#[test]
fn rejects_unsupported_default_language() {
    let options = LanguageOptions::builder()
        .supported_languages(SupportedLanguages::new(["en", "fr"]))
        .default_language("de")
        .build();
    let err = StyleLocalizer::new(options).unwrap_err();
    assert!(err.to_string().contains("'de'"));
}

// =========================================================================
// Rewriting
// =========================================================================

#[test]
fn end_to_end_single_layer() {
    let style: StyleDocument = serde_json::from_value(json!({
        "layers": [{ "id": "place-city", "layout": { "text-field": ["get", "name"] } }]
    }))
    .unwrap();

    let french = localizer().localize(&style, "fr").unwrap();
    let layer = french.layer("place-city").unwrap();

    assert_eq!(layer.text_field(), Some(&language_expression("fr")));
    assert_eq!(layer.layout_property(TEXT_LINE_HEIGHT), Some(&json!(1.35)));
    let rendered = layer.text_field().unwrap().to_string();
    assert!(rendered.contains(r#"["get","name_fr"]"#));
    assert!(rendered.contains(r#"["get","name:fr"]"#));
    assert!(rendered.contains(r#"["get","name"]"#));
}

#[test]
fn preserves_layer_order_and_metadata() {
    let style = sample_style();
    let localized = localizer().localize(&style, "de").unwrap();

    assert_eq!(
        localized.layer_ids().collect::<Vec<_>>(),
        style.layer_ids().collect::<Vec<_>>()
    );
    assert_eq!(localized.metadata, style.metadata);
    assert_eq!(localized.metadata["glyphs"], json!("mapbox://fonts/{fontstack}/{range}.pbf"));
}

#[test]
fn only_name_labels_are_rewritten() {
    let style = sample_style();
    let localized = localizer().localize(&style, "de").unwrap();
    let expression = language_expression("de");

    assert_eq!(localized.layer("road-label").unwrap().text_field(), Some(&expression));
    assert_eq!(localized.layer("country-label").unwrap().text_field(), Some(&expression));
    assert_eq!(localized.layer("place-city").unwrap().text_field(), Some(&expression));
    assert_eq!(
        localized.layer("road-shield").unwrap().text_field(),
        style.layer("road-shield").unwrap().text_field()
    );
}

#[test]
fn unchanged_layers_share_their_allocation() {
    let style = sample_style();
    let localized = localizer().localize(&style, "de").unwrap();

    assert!(Arc::ptr_eq(&style.layers[0], &localized.layers[0]));
    assert!(Arc::ptr_eq(&style.layers[2], &localized.layers[2]));
    assert!(!Arc::ptr_eq(&style.layers[1], &localized.layers[1]));
}

#[test]
fn excluded_layers_are_reference_identical() {
    let options = LanguageOptions::builder()
        .excluded_layer_ids(ExcludedLayerIds::new(["road-label", "place-city"]))
        .build();
    let style = sample_style();
    let localized = StyleLocalizer::new(options).unwrap().localize(&style, "fr").unwrap();

    assert!(Arc::ptr_eq(&style.layers[1], &localized.layers[1]));
    assert!(Arc::ptr_eq(&style.layers[4], &localized.layers[4]));
    assert!(!Arc::ptr_eq(&style.layers[3], &localized.layers[3]));
}

#[test]
fn localizing_twice_is_idempotent() {
    let style = sample_style();
    let localizer = localizer();

    for language in ["en", "zh-TW", "ar"] {
        let once = localizer.localize(&style, language).unwrap();
        let twice = localizer.localize(&once, language).unwrap();
        assert_eq!(once, twice, "language {language}");
        assert_eq!(localizer.localize(&style, language).unwrap(), once);
    }
}

#[test]
fn switching_languages_rewrites_previous_output() {
    let style = sample_style();
    let localizer = localizer();

    let japanese = localizer.localize(&style, "ja").unwrap();
    let korean = localizer.localize(&japanese, "ko").unwrap();
    assert_eq!(korean, localizer.localize(&style, "ko").unwrap());
}

#[test]
fn dual_display_option_is_applied() {
    let options = LanguageOptions::builder()
        .label_display(LabelDisplay::LocalizedWithNative)
        .build();
    let localized = StyleLocalizer::new(options)
        .unwrap()
        .localize(&sample_style(), "en")
        .unwrap();
    let rendered = localized.layer("road-label").unwrap().text_field().unwrap().to_string();
    assert!(rendered.contains(r#""format""#));
}

// =========================================================================
// Unsupported languages
// =========================================================================

#[test]
fn unsupported_language_is_rejected() {
    let err = localizer().localize(&sample_style(), "xx").unwrap_err();
    match err {
        LanguageError::UnsupportedLanguage { language, .. } => assert_eq!(language, "xx"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unsupported_language_suggests_close_codes() {
    let err = localizer().localize(&sample_style(), "zh-tw").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("not supported"));
    assert!(msg.contains("did you mean"), "{msg}");
    match err {
        LanguageError::UnsupportedLanguage { suggestions, .. } => {
            assert!(suggestions.contains(&"zh-TW".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unsupported_language_without_suggestions() {
    let err = localizer().localize(&sample_style(), "xx").unwrap_err();
    assert!(!err.to_string().contains("did you mean"));
}
