//! Types representing a resolved scripture reference

use crate::catalog::BookEntry;

use super::error::{AccessShapeError, Level};
use super::range::{Numbered, RangeNode, Series};

/// A fully resolved reference. Every chapter and verse it names exists in
/// the catalog it was resolved against, and no open-ended or cross-book
/// markers remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference<'c> {
    pub(crate) books: RangeNode<BookSpec<'c>>,
}

/// A book together with the chapters selected from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSpec<'c> {
    pub(crate) entry: &'c BookEntry,
    pub(crate) chapters: RangeNode<ChapterSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSpec {
    pub(crate) number: u16,
    pub(crate) verses: RangeNode<Verse>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verse {
    pub(crate) number: u16,
}

impl<'c> Reference<'c> {
    pub fn book(&self) -> Result<&BookSpec<'c>, AccessShapeError> {
        self.books
            .single(Level::Book)
    }

    pub fn books(&self) -> Result<Series<'_, BookSpec<'c>>, AccessShapeError> {
        self.books
            .multiple(Level::Book)
    }

    /// The book level node, for callers that want to branch on its shape.
    pub fn book_node(&self) -> &RangeNode<BookSpec<'c>> {
        &self.books
    }

    pub fn is_single(&self) -> bool {
        self.books
            .is_single()
    }

    pub fn is_multiple(&self) -> bool {
        self.books
            .is_multiple()
    }

    pub fn chapter(&self) -> Result<&ChapterSpec, AccessShapeError> {
        self.book()?
            .chapter()
    }

    pub fn chapters(&self) -> Result<Series<'_, ChapterSpec>, AccessShapeError> {
        self.book()?
            .chapters()
    }

    pub fn verse(&self) -> Result<&Verse, AccessShapeError> {
        self.book()?
            .verse()
    }

    pub fn verses(&self) -> Result<Series<'_, Verse>, AccessShapeError> {
        self.book()?
            .verses()
    }
}

impl<'c> BookSpec<'c> {
    pub fn entry(&self) -> &'c BookEntry {
        self.entry
    }

    pub fn name(&self) -> &'c str {
        self.entry
            .name()
    }

    pub fn chapter(&self) -> Result<&ChapterSpec, AccessShapeError> {
        self.chapters
            .single(Level::Chapter)
    }

    pub fn chapters(&self) -> Result<Series<'_, ChapterSpec>, AccessShapeError> {
        self.chapters
            .multiple(Level::Chapter)
    }

    pub fn chapter_node(&self) -> &RangeNode<ChapterSpec> {
        &self.chapters
    }

    pub fn verse(&self) -> Result<&Verse, AccessShapeError> {
        self.chapter()?
            .verse()
    }

    pub fn verses(&self) -> Result<Series<'_, Verse>, AccessShapeError> {
        self.chapter()?
            .verses()
    }

    /// Whether every chapter of the book is selected in full.
    pub fn is_whole(&self) -> bool {
        !self
            .chapters
            .has_gaps()
            && self
                .chapters
                .numbers()
                .eq(1..=self
                    .entry
                    .chapter_count())
            && self
                .chapters
                .values()
                .all(|chapter| chapter.is_whole(self.entry))
    }
}

impl ChapterSpec {
    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn verse(&self) -> Result<&Verse, AccessShapeError> {
        self.verses
            .single(Level::Verse)
    }

    pub fn verses(&self) -> Result<Series<'_, Verse>, AccessShapeError> {
        self.verses
            .multiple(Level::Verse)
    }

    pub fn verse_node(&self) -> &RangeNode<Verse> {
        &self.verses
    }

    /// Whether every verse of this chapter of the given book is selected.
    pub fn is_whole(&self, book: &BookEntry) -> bool {
        match book.verse_count(self.number) {
            Some(count) => {
                self.verses
                    .is_multiple()
                    && !self
                        .verses
                        .has_gaps()
                    && self
                        .verses
                        .numbers()
                        .eq(1..=count)
            }
            None => false,
        }
    }
}

impl Verse {
    pub fn number(&self) -> u16 {
        self.number
    }
}

impl Numbered for ChapterSpec {
    fn number(&self) -> u16 {
        self.number
    }
}

impl Numbered for Verse {
    fn number(&self) -> u16 {
        self.number
    }
}
