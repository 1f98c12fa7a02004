// Program wide top-level error handling

mod messages;
mod present;

// Re-export all public symbols
pub use present::*;
