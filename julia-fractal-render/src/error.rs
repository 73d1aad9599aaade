use thiserror::Error;

/// Errors originating from the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render cancelled")]
    Cancelled,

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),

    #[error(transparent)]
    Core(#[from] julia_fractal_core::CoreError),
}

impl RenderError {
    /// `true` when the caller passed a rejected argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::Core(julia_fractal_core::CoreError::InvalidArgument { .. })
        )
    }
}
