//! Parsing and resolution of free-text scripture references such as
//! `Gen 1:1-10, 3:5, Lev 2` into an enumerable tree of books, chapters, and
//! verses.

#[macro_use]
mod regex;

pub mod catalog;
pub mod formatting;
pub mod language;
pub mod lookup;
pub mod parsing;
pub mod rendering;
mod resolving;
pub mod traversal;

pub use language::Reference;
pub use parsing::resolve_reference;
