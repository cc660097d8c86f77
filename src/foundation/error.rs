/// Convenience result type used across pixmatrix.
pub type PixmatrixResult<T> = Result<T, PixmatrixError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Errors are reserved for invalid configuration. Painting never fails: degenerate space
/// clamps to an empty buffer instead.
#[derive(thiserror::Error, Debug)]
pub enum PixmatrixError {
    /// A font name that is not present in the catalog. Lookups are case-sensitive.
    #[error("unknown font: {0}")]
    FontNotFound(String),

    /// Invalid widget parameters (diameters, pie weights, tree depth, frame limits).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing scene descriptions.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixmatrixError {
    /// Build a [`PixmatrixError::FontNotFound`] value.
    pub fn font_not_found(name: impl Into<String>) -> Self {
        Self::FontNotFound(name.into())
    }

    /// Build a [`PixmatrixError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PixmatrixError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
