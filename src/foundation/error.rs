/// Convenience result type used across texfx.
pub type TexfxResult<T> = Result<T, TexfxError>;

/// Top-level error taxonomy used by effect and asset APIs.
#[derive(thiserror::Error, Debug)]
pub enum TexfxError {
    /// Caller contract violation: bad dimensions, factor out of range, malformed config.
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal failures while running an effect (size overflow, thread pool setup).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TexfxError {
    /// Build a [`TexfxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TexfxError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// True for caller contract violations.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
