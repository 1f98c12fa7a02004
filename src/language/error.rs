use std::{fmt, path::Path};

/// Problems encountered while parsing and resolving a reference. Each carries
/// the byte offset into the input where the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    EmptyReference,
    BookNotRecognized(usize, String),
    InvalidNumber(usize),
    OutOfOrderRange(usize, String, String),
    UnrecognizedToken(usize, String),
    NonexistentChapter(usize, String, u16),
    NonexistentVerse(usize, String, u16, u16),
    IllegalParserState(usize),
}

impl ReferenceError {
    pub fn offset(&self) -> usize {
        match self {
            ReferenceError::EmptyReference => 0,
            ReferenceError::BookNotRecognized(offset, _) => *offset,
            ReferenceError::InvalidNumber(offset) => *offset,
            ReferenceError::OutOfOrderRange(offset, _, _) => *offset,
            ReferenceError::UnrecognizedToken(offset, _) => *offset,
            ReferenceError::NonexistentChapter(offset, _, _) => *offset,
            ReferenceError::NonexistentVerse(offset, _, _, _) => *offset,
            ReferenceError::IllegalParserState(offset) => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ReferenceError::EmptyReference => "empty reference".to_string(),
            ReferenceError::BookNotRecognized(_, token) => {
                format!("book '{}' not recognized", token)
            }
            ReferenceError::InvalidNumber(_) => "expected a chapter or verse number".to_string(),
            ReferenceError::OutOfOrderRange(_, previous, next) => {
                format!("'{}' cannot follow '{}' in a range", next, previous)
            }
            ReferenceError::UnrecognizedToken(_, token) => {
                format!("unrecognized '{}'", token)
            }
            ReferenceError::NonexistentChapter(_, book, chapter) => {
                format!("{} has no chapter {}", book, chapter)
            }
            ReferenceError::NonexistentVerse(_, book, chapter, verse) => {
                format!("{} {} has no verse {}", book, chapter, verse)
            }
            ReferenceError::IllegalParserState(_) => "illegal parser state".to_string(),
        }
    }
}

impl fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ReferenceError {}

/// Problems with catalog records, found before any book is admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    NoChapters(String),
    EmptyChapter(String, u16),
    TooManyChapters(String, usize),
    ChapterCountMismatch(String, u16, usize),
}

impl CatalogError {
    pub fn message(&self) -> String {
        match self {
            CatalogError::NoChapters(book) => format!("{} has no chapters", book),
            CatalogError::EmptyChapter(book, chapter) => {
                format!("chapter {} of {} has no verses", chapter, book)
            }
            CatalogError::TooManyChapters(book, count) => {
                format!("{} has {} chapters, more than can be numbered", book, count)
            }
            CatalogError::ChapterCountMismatch(book, declared, actual) => format!(
                "{} declares {} chapters but lists verse counts for {}",
                book, declared, actual
            ),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CatalogError {}

/// The level of a reference tree at which an accessor was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Book,
    Chapter,
    Verse,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Book => write!(f, "book"),
            Level::Chapter => write!(f, "chapter"),
            Level::Verse => write!(f, "verse"),
        }
    }
}

/// Whether one value or a sequence of values was written at a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Single,
    Multiple,
}

/// A singular accessor was called on a node holding several values, or a
/// plural accessor on a node holding one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessShapeError {
    pub level: Level,
    pub requested: Shape,
    pub actual: Shape,
}

impl fmt::Display for AccessShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.actual {
            Shape::Single => write!(
                f,
                "requested multiple {}s but the reference has a single {}",
                self.level, self.level
            ),
            Shape::Multiple => write!(
                f,
                "requested a single {} but the reference has several",
                self.level
            ),
        }
    }
}

impl std::error::Error for AccessShapeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonError {
    /// A scalar was compared with a node holding several values.
    NotSingle,
    /// A contiguous range was compared with a node containing gaps.
    NotContiguous,
}

impl fmt::Display for ComparisonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonError::NotSingle => write!(f, "node holds more than one value"),
            ComparisonError::NotContiguous => write!(f, "node is not a contiguous range"),
        }
    }
}

impl std::error::Error for ComparisonError {}

/// Raised by a text provider when it cannot supply a verse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFailure {
    pub book: String,
    pub chapter: u16,
    pub verse: u16,
    pub problem: String,
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{}: {}",
            self.book, self.chapter, self.verse, self.problem
        )
    }
}

impl std::error::Error for LookupFailure {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}
