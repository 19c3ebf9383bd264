use thiserror::Error;

/// Errors originating from the core escape-time engine.
///
/// All of these are configuration errors: they are raised before any pixel
/// is computed and are not recoverable inside the core. The caller fixes the
/// configuration and retries.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid iteration cap: {0} (must be >= 1)")]
    InvalidIterationCap(u32),

    #[error("invalid escape bound: {0} (must be finite and > 0.0)")]
    InvalidEscapeBound(f32),

    #[error("invalid viewport: {reason}")]
    InvalidViewport { reason: String },

    #[error("invalid raster dimensions: {width}×{height} (both must be > 0)")]
    InvalidRaster { width: u32, height: u32 },
}
