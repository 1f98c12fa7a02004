//! Canonical formatter for resolved references

use std::fmt;

use crate::formatting::*;
use crate::language::*;

/// Convert a reference into tagged fragments. Books are written by their
/// canonical name; a book selected in full is written by name alone, and a
/// book whose chapters are all whole is written as chapter runs without
/// verses.
pub fn format_reference(reference: &Reference) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();

    for (i, book) in reference
        .book_node()
        .values()
        .enumerate()
    {
        if i > 0 {
            output.append(Syntax::Separator, "; ");
        }
        output.append_book(book);
    }

    output.fragments
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn append_book(&mut self, book: &BookSpec) {
        self.append(Syntax::Book, book.name());

        if book.is_whole() {
            return;
        }

        self.append(Syntax::Neutral, " ");

        let entry = book.entry();
        let chapters = book.chapter_node();

        if chapters
            .values()
            .all(|chapter| chapter.is_whole(entry))
        {
            self.append_runs(Syntax::Chapter, chapters.numbers());
            return;
        }

        for (i, chapter) in chapters
            .values()
            .enumerate()
        {
            if i > 0 {
                self.append(Syntax::Separator, ", ");
            }
            self.append(
                Syntax::Chapter,
                &chapter
                    .number()
                    .to_string(),
            );
            self.append(Syntax::Operator, ":");
            self.append_runs(
                Syntax::Verse,
                chapter
                    .verse_node()
                    .numbers(),
            );
        }
    }

    fn append_runs(&mut self, syntax: Syntax, numbers: impl Iterator<Item = u16>) {
        for (i, (lo, hi)) in runs(numbers)
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                self.append(Syntax::Separator, ", ");
            }
            self.append(syntax, &lo.to_string());
            if hi > lo {
                self.append(Syntax::Operator, "-");
                self.append(syntax, &hi.to_string());
            }
        }
    }
}

/// Collapse ascending numbers into inclusive runs of consecutive values.
fn runs(numbers: impl Iterator<Item = u16>) -> Vec<(u16, u16)> {
    let mut result: Vec<(u16, u16)> = Vec::new();
    for n in numbers {
        match result.last_mut() {
            Some((_, hi)) if n == *hi + 1 => *hi = n,
            _ => result.push((n, n)),
        }
    }
    result
}

impl fmt::Display for Reference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_reference(&Identity, self))
    }
}
