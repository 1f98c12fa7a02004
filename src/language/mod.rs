// Types representing parsed and resolved scripture references

mod error;
mod range;
mod types;

// Re-export all public symbols
pub use error::*;
pub use range::*;
pub use types::*;
