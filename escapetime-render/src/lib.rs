pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod renderer;
pub mod sink;

pub use color::{hsv_to_rgb, ColorPolicy, Rgb};
pub use config::RenderConfig;
pub use error::RenderError;
pub use frame::FrameBuffer;
pub use renderer::{render, render_to_sink, RenderCancel, RenderResult};
pub use sink::FrameSink;

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
