use thiserror::Error;

/// Errors emitted while parsing a visibility wire name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisibilityParseError {
    #[error("unknown visibility name: {0}")]
    UnknownName(String),
}

/// Errors emitted while building a translation catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON failed")]
    Json(#[from] serde_json::Error),
    #[error("catalog root must be a JSON object, found {0}")]
    InvalidShape(&'static str),
}
