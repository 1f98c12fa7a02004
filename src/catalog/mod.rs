//! The ordered registry of canonical books, with the verse count of every
//! chapter and the abbreviations by which each book may be written.
//!
//! A catalog is built once and only ever read afterwards, so a single
//! instance can be shared by any number of concurrent parses.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

use crate::language::CatalogError;

mod canon;

/// One book as supplied by a catalog data source. The canonical name is
/// added to the abbreviations if it isn't already listed there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookRecord {
    pub name: String,
    #[serde(default)]
    pub abbreviations: Vec<String>,
    /// If given, must agree with the length of `verses`.
    #[serde(default)]
    pub chapter_count: Option<u16>,
    /// Verse count of each chapter, in chapter order.
    pub verses: Vec<u16>,
}

impl BookRecord {
    fn validate(&self) -> Result<(), CatalogError> {
        let actual = self
            .verses
            .len();
        if actual == 0 {
            return Err(CatalogError::NoChapters(
                self.name
                    .clone(),
            ));
        }
        if actual > u16::MAX as usize {
            return Err(CatalogError::TooManyChapters(
                self.name
                    .clone(),
                actual,
            ));
        }
        if let Some(declared) = self.chapter_count {
            if declared as usize != actual {
                return Err(CatalogError::ChapterCountMismatch(
                    self.name
                        .clone(),
                    declared,
                    actual,
                ));
            }
        }
        match self
            .verses
            .iter()
            .position(|count| *count == 0)
        {
            Some(index) => Err(CatalogError::EmptyChapter(
                self.name
                    .clone(),
                index as u16 + 1,
            )),
            None => Ok(()),
        }
    }
}

/// A canonical book as held by a [`BookCatalog`].
#[derive(Debug, PartialEq, Eq)]
pub struct BookEntry {
    name: String,
    abbreviations: Vec<String>,
    verses: Vec<u16>,
    index: usize,
}

impl BookEntry {
    /// The canonical identifier of this book, for example "1 John".
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abbreviations(&self) -> &[String] {
        &self.abbreviations
    }

    pub fn chapter_count(&self) -> u16 {
        self.verses
            .len() as u16
    }

    /// Number of verses in the given (one-origin) chapter, or None if the
    /// book has no such chapter.
    pub fn verse_count(&self, chapter: u16) -> Option<u16> {
        if chapter == 0 {
            return None;
        }
        self.verses
            .get(chapter as usize - 1)
            .copied()
    }

    /// Zero-origin position of this book within the catalog it came from.
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug)]
pub struct BookCatalog {
    books: Vec<BookEntry>,
    aliases: HashMap<String, usize>,
}

impl BookCatalog {
    /// The embedded 66-book canon, built on first use.
    pub fn standard() -> &'static BookCatalog {
        static STANDARD: OnceLock<BookCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let records = canon::CANON
                .iter()
                .map(|(name, abbreviations, verses)| BookRecord {
                    name: name.to_string(),
                    abbreviations: abbreviations
                        .iter()
                        .map(|abbreviation| abbreviation.to_string())
                        .collect(),
                    chapter_count: None,
                    verses: verses.to_vec(),
                })
                .collect();
            BookCatalog::assemble(records)
        })
    }

    /// Build a catalog from records in canonical order. Every record must
    /// list at least one chapter, and every chapter at least one verse.
    /// Where two books claim the same abbreviation the earlier book keeps it.
    pub fn from_records(records: Vec<BookRecord>) -> Result<BookCatalog, CatalogError> {
        for record in &records {
            record.validate()?;
        }
        Ok(BookCatalog::assemble(records))
    }

    fn assemble(records: Vec<BookRecord>) -> BookCatalog {
        let mut books = Vec::with_capacity(records.len());
        let mut aliases = HashMap::new();

        for (index, record) in records
            .into_iter()
            .enumerate()
        {
            let mut abbreviations = record.abbreviations;
            if !abbreviations
                .iter()
                .any(|abbreviation| *abbreviation == record.name)
            {
                abbreviations.insert(0, record.name.clone());
            }

            for abbreviation in &abbreviations {
                aliases
                    .entry(normalize(abbreviation))
                    .or_insert(index);
            }

            books.push(BookEntry {
                name: record.name,
                abbreviations,
                verses: record.verses,
                index,
            });
        }

        debug!("Catalog of {} books, {} aliases", books.len(), aliases.len());

        BookCatalog { books, aliases }
    }

    /// Resolve a book as written in a reference. Matching ignores case, a
    /// trailing period, and runs of whitespace, so "1  pet." finds 1 Peter.
    pub fn lookup(&self, token: &str) -> Option<&BookEntry> {
        self.aliases
            .get(&normalize(token))
            .map(|&index| &self.books[index])
    }

    /// Find a book by its exact canonical name.
    pub fn get(&self, name: &str) -> Option<&BookEntry> {
        self.books
            .iter()
            .find(|book| book.name == name)
    }

    pub fn books(&self) -> std::slice::Iter<'_, BookEntry> {
        self.books
            .iter()
    }

    pub fn len(&self) -> usize {
        self.books
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.books
            .is_empty()
    }

    pub fn order_index(&self, book: &BookEntry) -> usize {
        book.index
    }

    pub fn successor(&self, book: &BookEntry) -> Option<&BookEntry> {
        self.books
            .get(book.index + 1)
    }

    /// Every book from `from` through `to` inclusive, in catalog order. Empty
    /// if `to` comes before `from`.
    pub fn span(&self, from: &BookEntry, to: &BookEntry) -> &[BookEntry] {
        if to.index < from.index || to.index >= self.books.len() {
            return &[];
        }
        &self.books[from.index..=to.index]
    }

    pub fn last_chapter(&self, book: &BookEntry) -> u16 {
        book.chapter_count()
    }

    pub fn last_verse(&self, book: &BookEntry, chapter: u16) -> Option<u16> {
        book.verse_count(chapter)
    }

    pub fn chapter_count(&self, book: &BookEntry) -> u16 {
        book.chapter_count()
    }

    /// Books having an abbreviation that starts the same way as the given
    /// token. Used to offer alternatives when a book isn't recognized.
    pub fn suggest(&self, token: &str) -> Vec<&BookEntry> {
        let token = normalize(token);
        let width = if token.starts_with(|c: char| c.is_ascii_digit()) {
            3
        } else {
            2
        };
        let prefix: String = token
            .chars()
            .take(width)
            .collect();

        if prefix.is_empty() {
            return Vec::new();
        }

        self.books
            .iter()
            .filter(|book| {
                book.abbreviations
                    .iter()
                    .any(|abbreviation| normalize(abbreviation).starts_with(&prefix))
            })
            .take(5)
            .collect()
    }
}

fn normalize(token: &str) -> String {
    token
        .trim()
        .trim_end_matches('.')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
