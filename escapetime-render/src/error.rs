use thiserror::Error;

/// Errors originating from the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render cancelled")]
    Cancelled,

    #[error(transparent)]
    Core(#[from] escapetime_core::CoreError),
}
