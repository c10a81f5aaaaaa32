/// Convenience result type used across photostrip.
pub type CollageResult<T> = Result<T, CollageError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Unknown filter ids and unknown layout tags are deliberately *not* errors:
/// both resolve to a documented fallback and are reported through `tracing`.
#[derive(thiserror::Error, Debug)]
pub enum CollageError {
    /// Precondition failure on caller-supplied data (empty image sequence,
    /// zero-dimension image, malformed color tag).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The output surface could not be produced (canvas too large for the
    /// backing store). No partial surface is returned.
    #[error("surface error: {0}")]
    Surface(String),

    /// Wrapped lower-level error from dependencies or caller-side IO
    /// (decode, encode).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CollageError {
    /// Build a [`CollageError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`CollageError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
