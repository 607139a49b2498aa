//! Detection of label expressions that already select a place name.

use serde_json::Value;

use crate::types::Expression;

/// Whether `text` names a name attribute or token: an optional `{` followed
/// by `name` (`name`, `name_en`, `name:fr`, `{name}`, `{name_zh-Hans}`).
pub fn is_name_attribute(text: &str) -> bool {
    text.strip_prefix('{').unwrap_or(text).starts_with("name")
}

/// Whether an expression derives its value from a name attribute.
///
/// Attribute gets and string literals are tested directly. Calls and lists
/// qualify when any operand does, at any depth, so a `case` or `coalesce`
/// that mentions a name attribute anywhere counts. Stop tables are not
/// inspected here; see
/// [`is_localizable_text_field`](crate::rewrite::is_localizable_text_field).
///
/// # Example
///
/// ```
/// use maplang::{Expression, is_language_field};
/// use serde_json::json;
///
/// assert!(is_language_field(&Expression::from(json!(["get", "name:fr"]))));
/// assert!(!is_language_field(&Expression::string("Main Street")));
/// ```
pub fn is_language_field(expression: &Expression) -> bool {
    match expression {
        Expression::Get(attribute) => is_name_attribute(attribute),
        Expression::Literal(Value::String(text)) => is_name_attribute(text),
        Expression::Literal(_) | Expression::Stops(_) => false,
        Expression::Call { operands, .. } | Expression::List(operands) => {
            operands.iter().any(is_language_field)
        }
    }
}
