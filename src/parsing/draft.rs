//! The unresolved tree built up by the parser. Unlike the resolved types in
//! `language`, slots here may hold an open-ended marker, and a book may be
//! flagged as the far end of a cross-book span.

use crate::catalog::BookEntry;
use crate::language::ReferenceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Slot<T> {
    Value(T),
    Gap,
    /// Continue through to the last value defined in the enclosing scope.
    OpenEnd,
}

/// A sequence of slots along with whether the text has written more than
/// one value at this level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Draft<T> {
    pub(crate) slots: Vec<Slot<T>>,
    pub(crate) multiple: bool,
}

impl<T> Draft<T> {
    pub(crate) fn new() -> Draft<T> {
        Draft {
            slots: Vec::new(),
            multiple: false,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots
            .is_empty()
    }

    pub(crate) fn push(&mut self, slot: Slot<T>) {
        if !self
            .slots
            .is_empty()
        {
            self.multiple = true;
        }
        self.slots
            .push(slot);
    }

    /// The insertion point: the last slot, if it holds a value.
    pub(crate) fn last_value(&self) -> Option<&T> {
        match self
            .slots
            .last()
        {
            Some(Slot::Value(value)) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn last_value_mut(&mut self) -> Option<&mut T> {
        match self
            .slots
            .last_mut()
        {
            Some(Slot::Value(value)) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn ends_open(&self) -> bool {
        matches!(
            self.slots
                .last(),
            Some(Slot::OpenEnd)
        )
    }

    /// Remove a trailing open-ended marker, if there is one.
    pub(crate) fn withdraw_open_end(&mut self) {
        if self.ends_open() {
            self.slots
                .pop();
        }
    }
}

/// Chapter and verse numbers, which can be created from and compared by
/// their number alone.
pub(crate) trait Ordinal {
    fn ordinal(&self) -> u16;
    fn from_ordinal(number: u16) -> Self;
}

impl Ordinal for u16 {
    fn ordinal(&self) -> u16 {
        *self
    }

    fn from_ordinal(number: u16) -> Self {
        number
    }
}

impl<T: Ordinal> Draft<T> {
    pub(crate) fn last_number(&self) -> Option<u16> {
        self.last_value()
            .map(Ordinal::ordinal)
    }

    /// Close a range at `number`, filling in every value after the current
    /// last one. A run must strictly increase, so closing at or below the
    /// last value is an error. If there is no value to continue from,
    /// `number` is simply appended.
    pub(crate) fn extend_to(&mut self, offset: usize, number: u16) -> Result<(), ReferenceError> {
        match self.last_number() {
            Some(last) if number <= last => Err(ReferenceError::OutOfOrderRange(
                offset,
                last.to_string(),
                number.to_string(),
            )),
            Some(last) => {
                for n in (last + 1)..=number {
                    self.push(Slot::Value(T::from_ordinal(n)));
                }
                Ok(())
            }
            None => {
                self.push(Slot::Value(T::from_ordinal(number)));
                Ok(())
            }
        }
    }

    /// Populate an empty level with `1..=number`, the closing half of a span
    /// whose opening half was in an earlier chapter or book.
    pub(crate) fn fill_to(&mut self, number: u16) {
        for n in 1..=number {
            self.push(Slot::Value(T::from_ordinal(n)));
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DraftChapter {
    pub(crate) number: u16,
    /// Empty means the whole chapter.
    pub(crate) verses: Draft<u16>,
}

impl Ordinal for DraftChapter {
    fn ordinal(&self) -> u16 {
        self.number
    }

    fn from_ordinal(number: u16) -> Self {
        DraftChapter {
            number,
            verses: Draft::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DraftBook<'c> {
    pub(crate) entry: &'c BookEntry,
    /// Where the book was named in the input.
    pub(crate) offset: usize,
    /// Set when this book closes a span begun by the book before it.
    pub(crate) through: bool,
    /// Empty means the whole book.
    pub(crate) chapters: Draft<DraftChapter>,
}

impl<'c> DraftBook<'c> {
    pub(crate) fn new(entry: &'c BookEntry, offset: usize, through: bool) -> DraftBook<'c> {
        DraftBook {
            entry,
            offset,
            through,
            chapters: Draft::new(),
        }
    }
}
