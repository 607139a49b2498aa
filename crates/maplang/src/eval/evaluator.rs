use std::iter;

use serde_json::Value;

use crate::eval::{EvalError, Feature};
use crate::types::{Expression, StopTable};

/// Maximum nesting depth before evaluation gives up.
const MAX_DEPTH: usize = 64;

/// Evaluate an expression for one feature.
///
/// # Example
///
/// ```
/// use maplang::eval::{Feature, evaluate};
/// use maplang::rewrite::language_expression;
/// use serde_json::json;
///
/// let feature = Feature::with_properties(
///     json!({ "name": "Köln", "name_en": "Cologne" }).as_object().unwrap().clone(),
/// );
/// let label = evaluate(&language_expression("en"), &feature).unwrap();
/// assert_eq!(label, json!("Cologne"));
/// ```
pub fn evaluate(expression: &Expression, feature: &Feature) -> Result<Value, EvalError> {
    Evaluator { feature, depth: 0 }.eval(expression)
}

/// Evaluate a `text-field` value to the text that would be displayed.
///
/// Unlike [`evaluate`], a top-level string is treated as a legacy token
/// template, so `"{name_en}"` displays the feature's `name_en` attribute.
/// Missing values display as an empty string.
pub fn display_text(expression: &Expression, feature: &Feature) -> Result<String, EvalError> {
    match expression {
        Expression::Literal(Value::String(template)) => Ok(interpolate_tokens(template, feature)),
        Expression::Stops(table) => match select_stop(table, feature.zoom) {
            Some(output) => display_text(output, feature),
            None => Ok(String::new()),
        },
        other => evaluate(other, feature).map(|value| to_display_string(&value)),
    }
}

struct Evaluator<'a> {
    feature: &'a Feature,
    depth: usize,
}

impl Evaluator<'_> {
    fn eval(&mut self, expression: &Expression) -> Result<Value, EvalError> {
        if self.depth >= MAX_DEPTH {
            return Err(EvalError::MaxDepthExceeded);
        }
        self.depth += 1;
        let result = self.eval_inner(expression);
        self.depth -= 1;
        result
    }

    fn eval_inner(&mut self, expression: &Expression) -> Result<Value, EvalError> {
        match expression {
            Expression::Literal(value) => Ok(value.clone()),
            Expression::Get(attribute) => Ok(self.property(attribute)),
            Expression::List(items) => items
                .iter()
                .map(|item| self.eval(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            Expression::Stops(table) => match select_stop(table, self.feature.zoom) {
                Some(output) => self.eval(output),
                None => Ok(Value::Null),
            },
            Expression::Call { operator, operands } => self.call(operator, operands),
        }
    }

    fn call(&mut self, operator: &str, operands: &[Expression]) -> Result<Value, EvalError> {
        match operator {
            "get" => {
                let [attribute] = operands else {
                    return Err(arity(operator, "1 operand", operands));
                };
                let attribute = self.eval_string(operator, attribute)?;
                Ok(self.property(&attribute))
            }
            "has" => {
                let [attribute] = operands else {
                    return Err(arity(operator, "1 operand", operands));
                };
                let attribute = self.eval_string(operator, attribute)?;
                Ok(Value::Bool(self.feature.properties.contains_key(&attribute)))
            }
            "!" => {
                let [operand] = operands else {
                    return Err(arity(operator, "1 operand", operands));
                };
                Ok(Value::Bool(!self.eval_bool(operator, operand)?))
            }
            "any" => {
                for operand in operands {
                    if self.eval_bool(operator, operand)? {
                        return Ok(Value::Bool(true));
                    }
                }
                Ok(Value::Bool(false))
            }
            "all" => {
                for operand in operands {
                    if !self.eval_bool(operator, operand)? {
                        return Ok(Value::Bool(false));
                    }
                }
                Ok(Value::Bool(true))
            }
            "==" | "!=" => {
                let [left, right] = operands else {
                    return Err(arity(operator, "2 operands", operands));
                };
                let equal = self.eval(left)? == self.eval(right)?;
                Ok(Value::Bool(equal == (operator == "==")))
            }
            "in" => {
                let [needle, haystack] = operands else {
                    return Err(arity(operator, "2 operands", operands));
                };
                let needle = self.eval(needle)?;
                match self.eval(haystack)? {
                    Value::String(text) => match needle {
                        Value::String(part) => Ok(Value::Bool(text.contains(part.as_str()))),
                        other => Err(type_mismatch(operator, "string", &other)),
                    },
                    Value::Array(items) => Ok(Value::Bool(items.contains(&needle))),
                    Value::Null => Ok(Value::Bool(false)),
                    other => Err(type_mismatch(operator, "string or array", &other)),
                }
            }
            "case" => {
                let Some((fallback, branches)) = operands.split_last() else {
                    return Err(arity(operator, "an odd number of at least 3 operands", operands));
                };
                if branches.is_empty() || branches.len() % 2 != 0 {
                    return Err(arity(operator, "an odd number of at least 3 operands", operands));
                }
                for branch in branches.chunks_exact(2) {
                    if self.eval_bool(operator, &branch[0])? {
                        return self.eval(&branch[1]);
                    }
                }
                self.eval(fallback)
            }
            "coalesce" => {
                for operand in operands {
                    let value = self.eval(operand)?;
                    if !value.is_null() {
                        return Ok(value);
                    }
                }
                Ok(Value::Null)
            }
            "match" => {
                let expected = "an input, label/output pairs and a fallback";
                let (Some((input, rest)), Some((fallback, _))) =
                    (operands.split_first(), operands.split_last())
                else {
                    return Err(arity(operator, expected, operands));
                };
                let arms = &rest[..rest.len().saturating_sub(1)];
                if arms.is_empty() || arms.len() % 2 != 0 {
                    return Err(arity(operator, expected, operands));
                }
                let input = self.eval(input)?;
                for arm in arms.chunks_exact(2) {
                    if match_labels(&arm[0]).contains(&input) {
                        return self.eval(&arm[1]);
                    }
                }
                self.eval(fallback)
            }
            "concat" => {
                let mut text = String::new();
                for operand in operands {
                    text.push_str(&to_display_string(&self.eval(operand)?));
                }
                Ok(Value::String(text))
            }
            "format" => {
                let mut text = String::new();
                for operand in operands {
                    // Section options such as {"font-scale": 0.8}.
                    if matches!(operand, Expression::Literal(Value::Object(_))) {
                        continue;
                    }
                    text.push_str(&to_display_string(&self.eval(operand)?));
                }
                Ok(Value::String(text))
            }
            "literal" => {
                let [operand] = operands else {
                    return Err(arity(operator, "1 operand", operands));
                };
                Ok(Value::from(operand.clone()))
            }
            "to-string" => {
                let [operand] = operands else {
                    return Err(arity(operator, "1 operand", operands));
                };
                Ok(Value::String(to_display_string(&self.eval(operand)?)))
            }
            _ => Err(EvalError::UnknownOperator {
                operator: operator.to_string(),
            }),
        }
    }

    fn property(&self, attribute: &str) -> Value {
        self.feature
            .property(attribute)
            .cloned()
            .unwrap_or(Value::Null)
    }

    fn eval_bool(&mut self, operator: &str, operand: &Expression) -> Result<bool, EvalError> {
        match self.eval(operand)? {
            Value::Bool(value) => Ok(value),
            other => Err(type_mismatch(operator, "boolean", &other)),
        }
    }

    fn eval_string(&mut self, operator: &str, operand: &Expression) -> Result<String, EvalError> {
        match self.eval(operand)? {
            Value::String(value) => Ok(value),
            other => Err(type_mismatch(operator, "string", &other)),
        }
    }
}

/// The output of the last stop whose input is at or below `zoom`, or of the
/// first stop when `zoom` is below every stop.
fn select_stop(table: &StopTable, zoom: f64) -> Option<&Expression> {
    let mut selected = table.stops.first()?;
    for stop in &table.stops {
        match stop.input.as_f64() {
            Some(input) if input <= zoom => selected = stop,
            _ => break,
        }
    }
    Some(&selected.output)
}

/// Values a `match` label accepts. A label array such as `["FR", "BE"]`
/// parses as a call, so its operator counts as a value too.
fn match_labels(label: &Expression) -> Vec<Value> {
    match label {
        Expression::Literal(value) => vec![value.clone()],
        Expression::Get(attribute) => vec![Value::from("get"), Value::String(attribute.clone())],
        Expression::Call { operator, operands } => iter::once(Value::String(operator.clone()))
            .chain(operands.iter().cloned().map(Value::from))
            .collect(),
        Expression::List(items) => items.iter().cloned().map(Value::from).collect(),
        Expression::Stops(_) => Vec::new(),
    }
}

/// Replace `{attribute}` tokens with the feature's attribute values.
fn interpolate_tokens(template: &str, feature: &Feature) -> String {
    let mut output = String::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let Some(length) = rest[start..].find('}') else {
            break;
        };
        output.push_str(&rest[..start]);
        let attribute = &rest[start + 1..start + length];
        if let Some(value) = feature.property(attribute) {
            output.push_str(&to_display_string(value));
        }
        rest = &rest[start + length + 1..];
    }
    output.push_str(rest);
    output
}

fn to_display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn arity(operator: &str, expected: &'static str, operands: &[Expression]) -> EvalError {
    EvalError::Arity {
        operator: operator.to_string(),
        expected,
        got: operands.len(),
    }
}

fn type_mismatch(operator: &str, expected: &'static str, found: &Value) -> EvalError {
    EvalError::TypeMismatch {
        operator: operator.to_string(),
        expected,
        found: json_type(found),
    }
}
