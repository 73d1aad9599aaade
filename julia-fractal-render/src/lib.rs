pub mod colorize;
pub mod error;
pub mod escape_image;
pub mod export;
pub mod renderer;

pub use colorize::{colorize, Tint};
pub use error::RenderError;
pub use escape_image::EscapeImage;
pub use export::{encode_png, ExportMetadata};
pub use renderer::{generate, generate_request, render, RenderCancel, RenderResult};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
