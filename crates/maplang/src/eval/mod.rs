//! Evaluation of label expressions against a single feature.
//!
//! Supports the operators the synthesized label expressions use (`get`,
//! `has`, `!`, `any`, `all`, `==`, `!=`, `in`, `case`, `coalesce`, `match`,
//! `concat`, `format`, `literal`, `to-string`), legacy `{token}` strings and
//! zoom stop tables. It exists to preview and check what a rewritten style
//! displays for a given feature; it is not a renderer.

mod error;
mod evaluator;
mod feature;

pub use error::EvalError;
pub use evaluator::{display_text, evaluate};
pub use feature::Feature;
