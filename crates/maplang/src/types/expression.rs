use std::fmt::{Display, Formatter, Result as FmtResult};
use std::iter;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A style property value in the map style expression language.
///
/// Expressions arrive as untyped JSON. Converting from JSON is total: every
/// JSON value maps onto exactly one variant, and converting back reproduces
/// the original shape.
///
/// - `"Main Street"`, `"{name_en}"`, `12`, `{}` become [`Expression::Literal`]
/// - `["get", "name"]` becomes [`Expression::Get`]
/// - `["coalesce", ["get", "name_fr"], "?"]` becomes [`Expression::Call`]
/// - `[1, 2]` becomes [`Expression::List`]
/// - `{"stops": [[8, "{name}"], [12, "{name_en}"]]}` becomes [`Expression::Stops`]
///
/// # Example
///
/// ```
/// use maplang::Expression;
/// use serde_json::json;
///
/// let expr = Expression::from(json!(["get", "name:fr"]));
/// assert_eq!(expr, Expression::get("name:fr"));
/// assert_eq!(expr.as_attribute_get(), Some("name:fr"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Expression {
    /// A JSON scalar or object. Never an array and never a stop table.
    Literal(Value),

    /// Feature attribute access: `["get", "<attribute>"]`.
    Get(String),

    /// A call: an array whose first element is a string operator tag.
    Call {
        operator: String,
        operands: Vec<Expression>,
    },

    /// An array that does not start with an operator tag.
    List(Vec<Expression>),

    /// A zoom-dependent function: `{"stops": [[input, output], ...]}`.
    Stops(StopTable),
}

/// A legacy zoom or property function with a `stops` array.
///
/// Keys other than `stops` (`base`, `type`, `property`, ...) are kept
/// verbatim in `properties`.
#[derive(Debug, Clone, PartialEq)]
pub struct StopTable {
    pub stops: Vec<Stop>,
    pub properties: Map<String, Value>,
}

/// One `[input, output]` entry of a [`StopTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Usually a zoom level; an object for composite functions.
    pub input: Value,
    pub output: Expression,
}

impl Expression {
    /// Build `["get", attribute]`.
    pub fn get(attribute: impl Into<String>) -> Self {
        Expression::Get(attribute.into())
    }

    /// Build `[operator, operands...]`.
    pub fn call(
        operator: impl Into<String>,
        operands: impl IntoIterator<Item = Expression>,
    ) -> Self {
        Expression::Call {
            operator: operator.into(),
            operands: operands.into_iter().collect(),
        }
    }

    /// Build a string literal.
    pub fn string(text: impl Into<String>) -> Self {
        Expression::Literal(Value::String(text.into()))
    }

    /// The attribute name if this is a plain `["get", "<attribute>"]`.
    pub fn as_attribute_get(&self) -> Option<&str> {
        match self {
            Expression::Get(attribute) => Some(attribute),
            _ => None,
        }
    }

    /// The text if this is a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Expression::Literal(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The operator tag, for calls and attribute gets.
    pub fn operator(&self) -> Option<&str> {
        match self {
            Expression::Get(_) => Some("get"),
            Expression::Call { operator, .. } => Some(operator),
            _ => None,
        }
    }

    /// Nested expressions of a call or list. Empty for every other variant.
    pub fn operands(&self) -> &[Expression] {
        match self {
            Expression::Call { operands, .. } | Expression::List(operands) => operands,
            Expression::Literal(_) | Expression::Get(_) | Expression::Stops(_) => &[],
        }
    }

    /// Convert a JSON array, recognizing `get` and operator calls.
    fn from_array(items: Vec<Value>) -> Self {
        let mut items = items.into_iter();
        match items.next() {
            Some(Value::String(operator)) => {
                let operands: Vec<Value> = items.collect();
                if let ("get", [Value::String(attribute)]) = (operator.as_str(), operands.as_slice())
                {
                    return Expression::Get(attribute.clone());
                }
                Expression::Call {
                    operator,
                    operands: operands.into_iter().map(Expression::from).collect(),
                }
            }
            Some(first) => {
                Expression::List(iter::once(first).chain(items).map(Expression::from).collect())
            }
            None => Expression::List(Vec::new()),
        }
    }
}

impl StopTable {
    /// Interpret a JSON object as a stop table.
    ///
    /// Gives the object back unchanged when it has no `stops` array or when
    /// any entry is not an `[input, output]` pair.
    pub fn from_object(object: Map<String, Value>) -> Result<StopTable, Map<String, Value>> {
        let well_formed = match object.get("stops") {
            Some(Value::Array(entries)) => entries
                .iter()
                .all(|entry| matches!(entry, Value::Array(pair) if pair.len() == 2)),
            _ => false,
        };
        if !well_formed {
            return Err(object);
        }

        let mut stops = Vec::new();
        let mut properties = Map::new();
        for (key, value) in object {
            match value {
                Value::Array(entries) if key == "stops" => {
                    stops.extend(entries.into_iter().filter_map(Stop::from_pair));
                }
                value => {
                    properties.insert(key, value);
                }
            }
        }
        Ok(StopTable { stops, properties })
    }

    /// The stop outputs in order.
    pub fn outputs(&self) -> impl Iterator<Item = &Expression> {
        self.stops.iter().map(|stop| &stop.output)
    }

    fn into_object(self) -> Map<String, Value> {
        let mut object = self.properties;
        let stops = self
            .stops
            .into_iter()
            .map(|stop| Value::Array(vec![stop.input, stop.output.into()]))
            .collect();
        object.insert("stops".to_string(), Value::Array(stops));
        object
    }
}

impl Stop {
    fn from_pair(entry: Value) -> Option<Stop> {
        let Value::Array(pair) = entry else {
            return None;
        };
        let mut pair = pair.into_iter();
        let input = pair.next()?;
        let output = pair.next()?;
        Some(Stop {
            input,
            output: output.into(),
        })
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Expression::from_array(items),
            Value::Object(object) => match StopTable::from_object(object) {
                Ok(table) => Expression::Stops(table),
                Err(object) => Expression::Literal(Value::Object(object)),
            },
            scalar => Expression::Literal(scalar),
        }
    }
}

impl From<Expression> for Value {
    fn from(expression: Expression) -> Self {
        match expression {
            Expression::Literal(value) => value,
            Expression::Get(attribute) => {
                Value::Array(vec![Value::from("get"), Value::String(attribute)])
            }
            Expression::Call { operator, operands } => Value::Array(
                iter::once(Value::String(operator))
                    .chain(operands.into_iter().map(Value::from))
                    .collect(),
            ),
            Expression::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Expression::Stops(table) => Value::Object(table.into_object()),
        }
    }
}

impl Display for Expression {
    /// Compact JSON, as it would appear in a style document.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", Value::from(self.clone()))
    }
}
