use crate::modifiers::{ColorModifier, Morph};
use thiserror::Error;

/// Failures raised while decoding or checking catalog entries.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON array of emoji entries")]
    NotAList,
    #[error("missing required field '{field}'")]
    FieldMissing { field: &'static str },
    #[error("field '{field}' must be {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
    #[error("unsupported {field} modifier '{value}'")]
    UnsupportedModifier { field: &'static str, value: String },
    #[error("{short}: morph {morph:?} cannot be combined with color {color:?}")]
    InvalidModifierCombo {
        short: String,
        morph: Option<Morph>,
        color: Option<ColorModifier>,
    },
    #[error("entry {index}: {source}")]
    Entry {
        index: usize,
        #[source]
        source: Box<CatalogError>,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    /// The underlying per-field error, unwrapping any entry context.
    pub fn root_cause(&self) -> &CatalogError {
        match self {
            CatalogError::Entry { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
