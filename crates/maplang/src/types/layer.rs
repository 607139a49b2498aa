use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Expression;

/// One named rendering unit of a style document.
///
/// Only `id` and the label property inside `layout` are interpreted; every
/// other key (`type`, `source`, `paint`, `filter`, ...) is carried verbatim.
///
/// # Example
///
/// ```
/// use maplang::{Expression, LayerDefinition, Layout};
///
/// let layer = LayerDefinition::builder()
///     .id("place-city")
///     .layout(Layout::builder().text_field(Expression::get("name")).build())
///     .build();
///
/// assert_eq!(layer.text_field(), Some(&Expression::get("name")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct LayerDefinition {
    #[builder(into)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,

    /// Every other layer key, in document order.
    #[serde(flatten)]
    #[builder(default)]
    pub properties: Map<String, Value>,
}

/// Layout properties of a layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
pub struct Layout {
    /// The label expression, if the layer draws text.
    #[serde(
        rename = "text-field",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub text_field: Option<Expression>,

    /// Every other layout property, in document order.
    #[serde(flatten)]
    #[builder(default)]
    pub properties: Map<String, Value>,
}

impl LayerDefinition {
    /// The layer's `text-field` layout property, if any.
    pub fn text_field(&self) -> Option<&Expression> {
        self.layout.as_ref()?.text_field.as_ref()
    }

    /// A layout property other than `text-field`.
    pub fn layout_property(&self, key: &str) -> Option<&Value> {
        self.layout.as_ref()?.properties.get(key)
    }
}
