//! Formatting of references into styled text

pub mod formatter;
mod renderer;
mod syntax;

// Re-export all public symbols
pub use renderer::*;
pub use syntax::*;
