/// Convenience result type used across the engine.
pub type WaveResult<T> = Result<T, WaveError>;

/// Top-level error taxonomy for the fallible edges of the engine.
///
/// The per-frame path never fails; errors only come from configuration, pixel mappings and the
/// persisted options store.
#[derive(thiserror::Error, Debug)]
pub enum WaveError {
    /// Invalid configuration or mapping data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while loading or persisting user options.
    #[error("options error: {0}")]
    Options(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WaveError {
    /// Build a [`WaveError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WaveError::Options`] value.
    pub fn options(msg: impl Into<String>) -> Self {
        Self::Options(msg.into())
    }

    /// Build a [`WaveError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
