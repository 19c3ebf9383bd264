pub mod error;
pub mod escape;
pub mod raster;
pub mod viewport;

// Re-export primary types for convenience.
pub use error::CoreError;
pub use escape::{EscapeParams, EscapeResult, EscapeTime};
pub use raster::RasterSize;
pub use viewport::Viewport;

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
