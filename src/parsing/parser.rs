//! State machine consuming tokens and building the draft reference tree.

use tracing::{debug, trace};

use crate::catalog::{BookCatalog, BookEntry};
use crate::language::ReferenceError;

use super::draft::{Draft, DraftBook, DraftChapter, Ordinal, Slot};
use super::scanner::{Scanner, Token};
use super::Options;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Book,
    EndBook,
    StartChapter,
    EndChapter,
    StartVerse,
    EndVerse,
}

/// A chapter or verse number along with where and how it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Numeral {
    offset: usize,
    value: u16,
    width: usize,
}

/// Run the state machine over the given text. The result still contains
/// open-ended markers and cross-book spans; see `resolving` for the pass
/// that expands them.
pub(crate) fn parse_draft<'c>(
    source: &str,
    catalog: &'c BookCatalog,
    options: Options,
) -> Result<Draft<DraftBook<'c>>, ReferenceError> {
    let mut parser = Parser {
        scanner: Scanner::new(source),
        catalog,
        options,
        books: Draft::new(),
    };
    parser.run()?;
    Ok(parser.books)
}

struct Parser<'i, 'c> {
    scanner: Scanner<'i>,
    catalog: &'c BookCatalog,
    options: Options,
    books: Draft<DraftBook<'c>>,
}

impl<'i, 'c> Parser<'i, 'c> {
    fn run(&mut self) -> Result<(), ReferenceError> {
        let mut state = State::Book;
        loop {
            trace!(?state);
            let next = match state {
                State::Book => self.book()?,
                State::EndBook => self.end_book()?,
                State::StartChapter => self.start_chapter()?,
                State::EndChapter => self.end_chapter()?,
                State::StartVerse => self.start_verse()?,
                State::EndVerse => self.end_verse()?,
            };
            match next {
                Some(next) => state = next,
                None => return Ok(()),
            }
        }
    }

    fn book(&mut self) -> Result<Option<State>, ReferenceError> {
        let (offset, entry) = self.read_book()?;

        if !self
            .books
            .is_empty()
        {
            self.books
                .push(Slot::Gap);
        }
        self.books
            .push(Slot::Value(DraftBook::new(entry, offset, false)));

        match self
            .scanner
            .peek()
        {
            Token::Dash => {
                self.advance();
                Ok(Some(State::EndBook))
            }
            Token::Comma | Token::Semicolon
                if self
                    .scanner
                    .book_ahead(1) =>
            {
                self.advance();
                Ok(Some(State::Book))
            }
            Token::End => Ok(None),
            _ => Ok(Some(State::StartChapter)),
        }
    }

    fn end_book(&mut self) -> Result<Option<State>, ReferenceError> {
        let (offset, entry) = self.read_book()?;

        let previous = match self
            .books
            .last_value()
        {
            Some(book) => book.entry,
            None => return Err(ReferenceError::IllegalParserState(offset)),
        };

        if self
            .catalog
            .order_index(entry)
            <= self
                .catalog
                .order_index(previous)
        {
            return Err(ReferenceError::OutOfOrderRange(
                offset,
                previous
                    .name()
                    .to_string(),
                entry
                    .name()
                    .to_string(),
            ));
        }

        debug!("Span from {} through {}", previous.name(), entry.name());
        self.books
            .push(Slot::Value(DraftBook::new(entry, offset, true)));

        match self
            .scanner
            .peek()
        {
            Token::Number(_) => Ok(Some(State::EndChapter)),
            Token::Comma | Token::Semicolon
                if self
                    .scanner
                    .book_ahead(1) =>
            {
                self.advance();
                Ok(Some(State::Book))
            }
            Token::End => Ok(None),
            _ => Err(self.unrecognized()),
        }
    }

    fn start_chapter(&mut self) -> Result<Option<State>, ReferenceError> {
        let numeral = self.read_number()?;
        let offset = numeral.offset;

        let book = self.current_book(offset)?;
        check_chapter(book.entry, offset, numeral.value)?;
        book.chapters
            .push(Slot::Value(DraftChapter::from_ordinal(numeral.value)));

        match self
            .scanner
            .peek()
        {
            Token::Colon | Token::Period => {
                self.advance();
                Ok(Some(State::StartVerse))
            }
            Token::Dash => {
                if self
                    .scanner
                    .book_ahead(1)
                {
                    self.advance();
                    self.current_book(offset)?
                        .chapters
                        .push(Slot::OpenEnd);
                    Ok(Some(State::EndBook))
                } else if self.end_follows() {
                    self.advance();
                    self.current_book(offset)?
                        .chapters
                        .push(Slot::OpenEnd);
                    Ok(None)
                } else {
                    self.advance();
                    Ok(Some(State::EndChapter))
                }
            }
            Token::Comma | Token::Semicolon => self.chapter_separator(offset),
            Token::End => Ok(None),
            _ => Err(self.unrecognized()),
        }
    }

    fn end_chapter(&mut self) -> Result<Option<State>, ReferenceError> {
        let numeral = self.read_number()?;
        let offset = numeral.offset;
        let borrow = self
            .options
            .borrow_leading_digits;

        let book = self.current_book(offset)?;
        let entry = book.entry;

        if book
            .chapters
            .is_empty()
        {
            // closing a span that began in an earlier book
            check_chapter(entry, offset, numeral.value)?;
            book.chapters
                .fill_to(numeral.value);
        } else if book
            .chapters
            .last_value()
            .is_some_and(|chapter| {
                chapter.number == numeral.value
                    && chapter
                        .verses
                        .ends_open()
            })
        {
            // "1:5-1:10" stays within the one chapter
            if let Some(chapter) = book
                .chapters
                .last_value_mut()
            {
                chapter
                    .verses
                    .withdraw_open_end();
            }
        } else {
            let value = closing_value(
                borrow,
                book.chapters
                    .last_number(),
                numeral,
            )?;
            check_chapter(entry, offset, value)?;
            book.chapters
                .extend_to(offset, value)?;
        }

        match self
            .scanner
            .peek()
        {
            Token::Comma | Token::Semicolon => self.chapter_separator(offset),
            Token::Colon | Token::Period => {
                self.advance();
                Ok(Some(State::EndVerse))
            }
            Token::End => Ok(None),
            _ => Err(self.unrecognized()),
        }
    }

    fn start_verse(&mut self) -> Result<Option<State>, ReferenceError> {
        let numeral = self.read_verse()?;
        let offset = numeral.offset;
        let value = numeral.value;

        let (entry, chapter) = self.current_chapter(offset)?;
        check_verse(entry, chapter.number, offset, value)?;

        let verses = &mut chapter.verses;
        if !verses.is_empty() {
            verses.push(Slot::Gap);
        }
        verses.push(Slot::Value(value));

        match self
            .scanner
            .peek()
        {
            Token::Dash => {
                if self
                    .scanner
                    .book_ahead(1)
                {
                    // verse through to another book
                    self.advance();
                    let book = self.current_book(offset)?;
                    if let Some(chapter) = book
                        .chapters
                        .last_value_mut()
                    {
                        chapter
                            .verses
                            .push(Slot::OpenEnd);
                    }
                    book.chapters
                        .push(Slot::OpenEnd);
                    Ok(Some(State::EndBook))
                } else if self.chapter_verse_follows() {
                    // verse through to another chapter
                    self.advance();
                    let (_, chapter) = self.current_chapter(offset)?;
                    chapter
                        .verses
                        .push(Slot::OpenEnd);
                    Ok(Some(State::EndChapter))
                } else if self.end_follows() {
                    self.advance();
                    let (_, chapter) = self.current_chapter(offset)?;
                    chapter
                        .verses
                        .push(Slot::OpenEnd);
                    Ok(None)
                } else {
                    self.advance();
                    Ok(Some(State::EndVerse))
                }
            }
            Token::Comma | Token::Semicolon => self.verse_separator(offset),
            Token::End => Ok(None),
            _ => Err(self.unrecognized()),
        }
    }

    fn end_verse(&mut self) -> Result<Option<State>, ReferenceError> {
        let numeral = self.read_verse()?;
        let offset = numeral.offset;
        let borrow = self
            .options
            .borrow_leading_digits;

        let (entry, chapter) = self.current_chapter(offset)?;
        let number = chapter.number;
        let verses = &mut chapter.verses;

        if verses.is_empty() {
            // closing a span that began in an earlier chapter
            check_verse(entry, number, offset, numeral.value)?;
            verses.fill_to(numeral.value);
        } else {
            let value = closing_value(borrow, verses.last_number(), numeral)?;
            check_verse(entry, number, offset, value)?;
            verses.extend_to(offset, value)?;
        }

        match self
            .scanner
            .peek()
        {
            Token::Comma | Token::Semicolon => self.verse_separator(offset),
            Token::End => Ok(None),
            _ => Err(self.unrecognized()),
        }
    }

    /// A comma or semicolon after a chapter: either a new book, or another
    /// chapter of this one.
    fn chapter_separator(&mut self, offset: usize) -> Result<Option<State>, ReferenceError> {
        self.advance();
        if self
            .scanner
            .book_ahead(0)
        {
            return Ok(Some(State::Book));
        }
        self.current_book(offset)?
            .chapters
            .push(Slot::Gap);
        Ok(Some(State::StartChapter))
    }

    /// A comma or semicolon after a verse: a new book, a new chapter and
    /// verse, or another verse of the current chapter.
    fn verse_separator(&mut self, offset: usize) -> Result<Option<State>, ReferenceError> {
        if self
            .scanner
            .book_ahead(1)
        {
            self.advance();
            Ok(Some(State::Book))
        } else if self.chapter_verse_follows() {
            self.advance();
            self.current_book(offset)?
                .chapters
                .push(Slot::Gap);
            Ok(Some(State::StartChapter))
        } else if matches!(
            self.scanner
                .peek_nth(1),
            Token::Number(_)
        ) {
            self.advance();
            Ok(Some(State::StartVerse))
        } else {
            self.advance();
            Err(self.unrecognized())
        }
    }

    fn advance(&mut self) {
        self.scanner
            .next_token();
    }

    /// Consume the next token and report it as not fitting here.
    fn unrecognized(&mut self) -> ReferenceError {
        let (offset, token) = self
            .scanner
            .next_token();
        ReferenceError::UnrecognizedToken(offset, token.to_string())
    }

    /// Whether the token after the current punctuation is the end of input.
    fn end_follows(&self) -> bool {
        self.scanner
            .peek_nth(1)
            == Token::End
    }

    /// Whether the tokens after the current punctuation are a chapter and
    /// verse pair such as "3:5".
    fn chapter_verse_follows(&self) -> bool {
        matches!(
            self.scanner
                .peek_nth(1),
            Token::Number(_)
        ) && matches!(
            self.scanner
                .peek_nth(2),
            Token::Colon | Token::Period
        ) && matches!(
            self.scanner
                .peek_nth(3),
            Token::Number(_)
        )
    }

    fn read_book(&mut self) -> Result<(usize, &'c BookEntry), ReferenceError> {
        let (offset, token) = self
            .scanner
            .next_token();
        match token {
            Token::Book(text) => match self
                .catalog
                .lookup(text)
            {
                Some(entry) => {
                    debug!("Book '{}' is {}", text, entry.name());
                    Ok((offset, entry))
                }
                None => Err(ReferenceError::BookNotRecognized(offset, text.to_string())),
            },
            other => Err(ReferenceError::UnrecognizedToken(offset, other.to_string())),
        }
    }

    fn read_number(&mut self) -> Result<Numeral, ReferenceError> {
        let (offset, token) = self
            .scanner
            .next_token();
        match token {
            Token::Number(digits) => {
                let value = digits
                    .parse::<u16>()
                    .map_err(|_| ReferenceError::InvalidNumber(offset))?;
                Ok(Numeral {
                    offset,
                    value,
                    width: digits.len(),
                })
            }
            _ => Err(ReferenceError::InvalidNumber(offset)),
        }
    }

    fn read_verse(&mut self) -> Result<Numeral, ReferenceError> {
        let numeral = self.read_number()?;
        if self
            .options
            .footnote_letters
        {
            self.scanner
                .skip_footnote();
        }
        Ok(numeral)
    }

    fn current_book(&mut self, offset: usize) -> Result<&mut DraftBook<'c>, ReferenceError> {
        self.books
            .last_value_mut()
            .ok_or(ReferenceError::IllegalParserState(offset))
    }

    fn current_chapter(
        &mut self,
        offset: usize,
    ) -> Result<(&'c BookEntry, &mut DraftChapter), ReferenceError> {
        let book = self.current_book(offset)?;
        let entry = book.entry;
        match book
            .chapters
            .last_value_mut()
        {
            Some(chapter) => Ok((entry, chapter)),
            None => Err(ReferenceError::IllegalParserState(offset)),
        }
    }
}

/// The value that closes a range. With borrowing enabled, a closing number
/// written with fewer digits than the number it follows, and smaller than
/// it, takes its missing leading digits from that number: "20-4" closes at
/// 24.
fn closing_value(
    borrow: bool,
    previous: Option<u16>,
    numeral: Numeral,
) -> Result<u16, ReferenceError> {
    let previous = match previous {
        Some(previous) if borrow => previous,
        _ => return Ok(numeral.value),
    };

    let value = borrow_digits(previous, numeral);
    if value != numeral.value {
        trace!("Borrowed leading digits: {} became {}", numeral.value, value);
        if value <= previous {
            return Err(ReferenceError::OutOfOrderRange(
                numeral.offset,
                previous.to_string(),
                value.to_string(),
            ));
        }
    }
    Ok(value)
}

fn borrow_digits(previous: u16, numeral: Numeral) -> u16 {
    let digits = previous.to_string();
    if numeral.value >= previous || numeral.width >= digits.len() {
        return numeral.value;
    }
    let prefix = &digits[..digits.len() - numeral.width];
    format!(
        "{}{:0width$}",
        prefix,
        numeral.value,
        width = numeral.width
    )
    .parse()
    .unwrap_or(numeral.value)
}

fn check_chapter(entry: &BookEntry, offset: usize, chapter: u16) -> Result<(), ReferenceError> {
    match entry.verse_count(chapter) {
        Some(_) => Ok(()),
        None => Err(ReferenceError::NonexistentChapter(
            offset,
            entry
                .name()
                .to_string(),
            chapter,
        )),
    }
}

fn check_verse(
    entry: &BookEntry,
    chapter: u16,
    offset: usize,
    verse: u16,
) -> Result<(), ReferenceError> {
    match entry.verse_count(chapter) {
        Some(count) if verse >= 1 && verse <= count => Ok(()),
        _ => Err(ReferenceError::NonexistentVerse(
            offset,
            entry
                .name()
                .to_string(),
            chapter,
            verse,
        )),
    }
}
