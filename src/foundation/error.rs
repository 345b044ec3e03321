/// Convenience result type used across glyphloom.
pub type GlyphloomResult<T> = Result<T, GlyphloomError>;

/// Top-level error taxonomy used by generation APIs.
#[derive(thiserror::Error, Debug)]
pub enum GlyphloomError {
    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Font bytes could not be read or parsed.
    #[error("font asset error: {0}")]
    AssetLoad(String),

    /// Font data was valid but a face could not be built for the requested size.
    #[error("font face error: {0}")]
    FaceCreation(String),

    /// Errors while writing PNG/GIF output.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphloomError {
    /// Build a [`GlyphloomError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlyphloomError::AssetLoad`] value.
    pub fn asset_load(msg: impl Into<String>) -> Self {
        Self::AssetLoad(msg.into())
    }

    /// Build a [`GlyphloomError::FaceCreation`] value.
    pub fn face_creation(msg: impl Into<String>) -> Self {
        Self::FaceCreation(msg.into())
    }

    /// Build a [`GlyphloomError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
