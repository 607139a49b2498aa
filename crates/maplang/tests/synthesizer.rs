//! Tests for the localized label expression.

use maplang::eval::{Feature, evaluate};
use maplang::rewrite::{
    LEGACY_ROC_NAMES, TAIWAN_SHORT_NAME, candidate_attributes, chinese_script,
    language_expression_with,
};
use maplang::{Expression, LabelDisplay, language_expression};
use serde_json::{Value, json};

fn feature(properties: Value) -> Feature {
    Feature::with_properties(properties.as_object().cloned().unwrap_or_default())
}

// =========================================================================
// Candidate attributes
// =========================================================================

#[test]
fn plain_language_candidates() {
    assert_eq!(candidate_attributes("fr"), ["name_fr", "name:fr"]);
    assert_eq!(candidate_attributes("en"), ["name_en", "name:en"]);
}

#[test]
fn traditional_chinese_candidates() {
    assert_eq!(
        candidate_attributes("zh-TW"),
        ["name_zh-Hant", "name_zh", "name:zh"]
    );
    assert_eq!(
        candidate_attributes("zh-HK"),
        ["name_zh-Hant", "name_zh", "name:zh"]
    );
}

#[test]
fn simplified_chinese_candidates() {
    assert_eq!(
        candidate_attributes("zh"),
        ["name_zh-Hans", "name_zh", "name:zh"]
    );
    assert_eq!(
        candidate_attributes("zh-CN"),
        ["name_zh-Hans", "name_zh", "name:zh"]
    );
}

#[test]
fn chinese_script_only_for_chinese() {
    assert_eq!(chinese_script("zh-TW"), Some("Hant"));
    assert_eq!(chinese_script("zh-SG"), Some("Hans"));
    assert_eq!(chinese_script("ja"), None);
}

// =========================================================================
// Expression shape
// =========================================================================

#[test]
fn french_expression_shape() {
    insta::assert_snapshot!(
        language_expression("fr").to_string(),
        @r#"["case",["!",["any",["has","name_fr"],["has","name:fr"]]],["get","name"],["case",["==",["coalesce",["get","name_fr"],["get","name:fr"]],"中華民國"],"台灣",["==",["coalesce",["get","name_fr"],["get","name:fr"]],"中華民国"],"台灣",["coalesce",["get","name_fr"],["get","name:fr"]]]]"#
    );
}

#[test]
fn expression_round_trips_through_json() {
    let expression = language_expression("zh-TW");
    let json = Value::from(expression.clone());
    assert_eq!(Expression::from(json), expression);
}

#[test]
fn default_display_is_localized_only() {
    assert_eq!(LabelDisplay::default(), LabelDisplay::Localized);
    assert_eq!(
        language_expression("de"),
        language_expression_with("de", LabelDisplay::Localized)
    );
}

// =========================================================================
// Evaluated behavior
// =========================================================================

#[test]
fn falls_back_to_generic_name_when_no_candidate_exists() {
    let label = evaluate(
        &language_expression("fr"),
        &feature(json!({ "name": "München", "name_de": "München" })),
    )
    .unwrap();
    assert_eq!(label, json!("München"));
}

#[test]
fn prefers_underscore_attribute_over_colon_attribute() {
    let label = evaluate(
        &language_expression("fr"),
        &feature(json!({ "name": "London", "name_fr": "Londres", "name:fr": "Londres (fr)" })),
    )
    .unwrap();
    assert_eq!(label, json!("Londres"));
}

#[test]
fn uses_colon_attribute_when_underscore_missing() {
    let label = evaluate(
        &language_expression("es"),
        &feature(json!({ "name": "London", "name:es": "Londres" })),
    )
    .unwrap();
    assert_eq!(label, json!("Londres"));
}

#[test]
fn script_specific_attribute_wins_for_chinese() {
    let properties = json!({
        "name": "Beijing",
        "name_zh": "北京",
        "name_zh-Hant": "北京市",
    });
    let label = evaluate(&language_expression("zh-HK"), &feature(properties.clone())).unwrap();
    assert_eq!(label, json!("北京市"));

    let label = evaluate(&language_expression("zh-CN"), &feature(properties)).unwrap();
    assert_eq!(label, json!("北京"));
}

#[test]
fn legacy_republic_of_china_names_are_corrected() {
    for language in ["zh", "zh-CN", "zh-TW", "zh-HK"] {
        for legacy in LEGACY_ROC_NAMES {
            let label = evaluate(
                &language_expression(language),
                &feature(json!({ "name": "Taiwan", "name_zh": legacy })),
            )
            .unwrap();
            assert_eq!(label, json!(TAIWAN_SHORT_NAME), "language {language}, name {legacy}");
        }
    }
}

#[test]
fn other_chinese_names_are_not_corrected() {
    let label = evaluate(
        &language_expression("zh-TW"),
        &feature(json!({ "name": "Taipei", "name_zh-Hant": "臺北市" })),
    )
    .unwrap();
    assert_eq!(label, json!("臺北市"));
}

// =========================================================================
// Dual display
// =========================================================================

#[test]
fn dual_display_shows_both_names() {
    let expression = language_expression_with("en", LabelDisplay::LocalizedWithNative);
    let label = evaluate(
        &expression,
        &feature(json!({ "name": "Москва", "name_en": "Moscow" })),
    )
    .unwrap();
    assert_eq!(label, json!("Moscow\nМосква"));
}

#[test]
fn dual_display_collapses_overlapping_names() {
    let expression = language_expression_with("en", LabelDisplay::LocalizedWithNative);
    let label = evaluate(
        &expression,
        &feature(json!({ "name": "Paris", "name_en": "Paris" })),
    )
    .unwrap();
    assert_eq!(label, json!("Paris"));

    let label = evaluate(
        &expression,
        &feature(json!({ "name": "Bruxelles - Brussel", "name_en": "Brussel" })),
    )
    .unwrap();
    assert_eq!(label, json!("Brussel"));
}

#[test]
fn dual_display_falls_back_to_native_name() {
    let expression = language_expression_with("en", LabelDisplay::LocalizedWithNative);
    let label = evaluate(&expression, &feature(json!({ "name": "Roma" }))).unwrap();
    assert_eq!(label, json!("Roma"));
}
