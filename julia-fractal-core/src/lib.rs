pub mod complex;
pub mod error;
pub mod julia;
pub mod params;
pub mod request;
pub mod viewport;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use error::{Argument, CoreError};
pub use julia::Julia;
pub use params::EscapeParams;
pub use request::{GenerateRequest, Scale};
pub use viewport::Viewport;

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
