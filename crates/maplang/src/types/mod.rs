mod expression;
mod language;
mod layer;
mod style;

pub use expression::{Expression, Stop, StopTable};
pub use language::{DEFAULT_SUPPORTED_LANGUAGES, ExcludedLayerIds, SupportedLanguages};
pub use layer::{LayerDefinition, Layout};
pub use style::StyleDocument;
