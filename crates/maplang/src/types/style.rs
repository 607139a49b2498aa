use std::fs;
use std::path::Path;
use std::sync::Arc;

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::LayerDefinition;
use crate::rewrite::StyleError;

/// A complete map style document.
///
/// Layers are shared behind [`Arc`] so that a rewritten document can reuse
/// every layer it did not change: an untouched layer in the output is the
/// same allocation as in the input (see [`Arc::ptr_eq`]).
///
/// Everything except `layers` (`version`, `sources`, `sprite`, `glyphs`,
/// ...) is kept verbatim in `metadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
pub struct StyleDocument {
    /// Every non-layer key, in document order.
    #[serde(flatten)]
    #[builder(default)]
    pub metadata: Map<String, Value>,

    #[serde(default)]
    #[builder(default)]
    pub layers: Vec<Arc<LayerDefinition>>,
}

impl StyleDocument {
    /// Parse a style document from JSON text.
    pub fn from_json_str(json: &str) -> Result<StyleDocument, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse a style document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<StyleDocument, StyleError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content).map_err(|source| StyleError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the document as pretty-printed JSON.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<(), StyleError> {
        let path = path.as_ref();
        let json = self.to_json_pretty().map_err(|source| StyleError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Look up a layer by id.
    pub fn layer(&self, id: &str) -> Option<&LayerDefinition> {
        self.layers
            .iter()
            .find(|layer| layer.id == id)
            .map(Arc::as_ref)
    }

    /// Layer ids in document order.
    pub fn layer_ids(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(|layer| layer.id.as_str())
    }
}
