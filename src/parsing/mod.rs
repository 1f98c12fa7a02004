//! Parser for scripture references

use std::str::FromStr;
use tracing::debug;

use crate::catalog::BookCatalog;
use crate::language::{Reference, ReferenceError};
use crate::resolving;

mod draft;
mod parser;
mod scanner;

pub(crate) use draft::{Draft, DraftBook, DraftChapter, Slot};

/// Settings that relax or tighten how leniently reference text is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Read the closing number of "20-4" as 24 rather than rejecting it.
    pub borrow_leading_digits: bool,
    /// Accept and discard one letter after a verse number, as in "10a".
    pub footnote_letters: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            borrow_leading_digits: true,
            footnote_letters: true,
        }
    }
}

/// Parse and resolve text against the standard catalog with the default
/// options.
pub fn resolve_reference(text: &str) -> Result<Reference<'static>, ReferenceError> {
    parse(text, BookCatalog::standard(), Options::default())
}

/// Parse text into a resolved Reference whose books borrow from the given
/// catalog, or return the first error encountered.
pub fn parse<'c>(
    text: &str,
    catalog: &'c BookCatalog,
    options: Options,
) -> Result<Reference<'c>, ReferenceError> {
    if text
        .trim()
        .is_empty()
    {
        return Err(ReferenceError::EmptyReference);
    }

    match parser::parse_draft(text, catalog, options) {
        Ok(draft) => {
            let reference = resolving::resolve(draft, catalog);
            debug!(
                "Resolved '{}' to {} verse{}",
                text,
                reference.verse_count(),
                if reference.verse_count() == 1 { "" } else { "s" }
            );
            Ok(reference)
        }
        Err(error) => {
            debug!(?error);
            Err(error)
        }
    }
}

impl FromStr for Reference<'static> {
    type Err = ReferenceError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        resolve_reference(text)
    }
}
