use bon::Builder;
use serde_json::{Map, Value};

/// The data an expression is evaluated against: one feature's attributes
/// and the current zoom level.
///
/// # Example
///
/// ```
/// use maplang::eval::Feature;
/// use serde_json::json;
///
/// let feature = Feature::builder()
///     .properties(json!({ "name": "Paris", "name_fr": "Paris" }).as_object().unwrap().clone())
///     .zoom(10.0)
///     .build();
/// assert_eq!(feature.property("name"), Some(&json!("Paris")));
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct Feature {
    #[builder(default)]
    pub properties: Map<String, Value>,

    #[builder(default)]
    pub zoom: f64,
}

impl Feature {
    /// A feature at zoom 0 with the given attributes.
    pub fn with_properties(properties: Map<String, Value>) -> Self {
        Feature::builder().properties(properties).build()
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}
