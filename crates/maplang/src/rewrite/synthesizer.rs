//! Construction of the localized label expression.
//!
//! The synthesized expression picks, per feature, the first localized name
//! attribute that is present and falls back to the generic `name` attribute
//! when none of them exist.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::types::Expression;

/// Generic, non-localized name attribute.
pub const NAME_ATTRIBUTE: &str = "name";

/// Legacy spellings of "Republic of China" that are displayed as
/// [`TAIWAN_SHORT_NAME`] instead.
pub const LEGACY_ROC_NAMES: [&str; 2] = ["中華民國", "中華民国"];

/// Replacement for [`LEGACY_ROC_NAMES`].
pub const TAIWAN_SHORT_NAME: &str = "台灣";

/// How the synthesized label presents localized and native names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelDisplay {
    /// Show the localized name when one exists, otherwise the native name.
    #[default]
    Localized,

    /// Show the localized name followed by the native name on a second,
    /// smaller line, unless the two are the same or one contains the other.
    LocalizedWithNative,
}

/// Chinese script subtag for a `zh*` language code.
///
/// `zh-TW` and `zh-HK` use Traditional characters; every other Chinese code
/// uses Simplified. Returns `None` for non-Chinese codes.
pub fn chinese_script(language: &str) -> Option<&'static str> {
    if !language.starts_with("zh") {
        return None;
    }
    match language {
        "zh-TW" | "zh-HK" => Some("Hant"),
        _ => Some("Hans"),
    }
}

/// Feature attributes that may hold a name in `language`, highest priority
/// first.
///
/// # Example
///
/// ```
/// use maplang::rewrite::candidate_attributes;
///
/// assert_eq!(candidate_attributes("fr"), ["name_fr", "name:fr"]);
/// assert_eq!(
///     candidate_attributes("zh-TW"),
///     ["name_zh-Hant", "name_zh", "name:zh"]
/// );
/// ```
pub fn candidate_attributes(language: &str) -> Vec<String> {
    let script = chinese_script(language);
    let language = if script.is_some() { "zh" } else { language };

    let mut attributes = Vec::with_capacity(3);
    if let Some(script) = script {
        attributes.push(format!("name_zh-{script}"));
    }
    attributes.push(format!("name_{language}"));
    attributes.push(format!("name:{language}"));
    attributes
}

/// Build the default ([`LabelDisplay::Localized`]) label expression.
pub fn language_expression(language: &str) -> Expression {
    language_expression_with(language, LabelDisplay::Localized)
}

/// Build the label expression for `language`.
///
/// The result is a `case` chain: when none of the candidate attributes
/// exist the feature's `name` is shown, otherwise the first available
/// candidate, with [`LEGACY_ROC_NAMES`] replaced by [`TAIWAN_SHORT_NAME`].
pub fn language_expression_with(language: &str, display: LabelDisplay) -> Expression {
    let candidates = candidate_attributes(language);

    let any_present = Expression::call(
        "any",
        candidates
            .iter()
            .map(|attribute| Expression::call("has", [Expression::string(attribute.as_str())])),
    );
    let first_available = Expression::call(
        "coalesce",
        candidates.iter().map(|attribute| Expression::get(attribute.as_str())),
    );
    let localized = corrected_name(first_available);
    let native = Expression::get(NAME_ATTRIBUTE);
    let missing = Expression::call("!", [any_present.clone()]);

    match display {
        LabelDisplay::Localized => Expression::call("case", [missing, native, localized]),
        LabelDisplay::LocalizedWithNative => {
            let overlapping = Expression::call(
                "any",
                [
                    Expression::call("==", [localized.clone(), native.clone()]),
                    Expression::call("in", [localized.clone(), native.clone()]),
                    Expression::call("in", [native.clone(), localized.clone()]),
                ],
            );
            let two_lines = Expression::call(
                "format",
                [
                    localized.clone(),
                    empty_options(),
                    Expression::string("\n"),
                    empty_options(),
                    native.clone(),
                    Expression::Literal(json!({ "font-scale": 0.8 })),
                ],
            );
            Expression::call(
                "case",
                [
                    missing,
                    native,
                    Expression::call("all", [any_present, overlapping]),
                    localized,
                    two_lines,
                ],
            )
        }
    }
}

/// Wrap `name` so legacy "Republic of China" spellings display as the
/// short place name.
fn corrected_name(name: Expression) -> Expression {
    let mut operands = Vec::with_capacity(LEGACY_ROC_NAMES.len() * 2 + 1);
    for legacy in LEGACY_ROC_NAMES {
        operands.push(Expression::call(
            "==",
            [name.clone(), Expression::string(legacy)],
        ));
        operands.push(Expression::string(TAIWAN_SHORT_NAME));
    }
    operands.push(name);
    Expression::call("case", operands)
}

fn empty_options() -> Expression {
    Expression::Literal(Value::Object(Map::new()))
}
