//! Walking a resolved reference in document order, book by chapter by
//! verse, optionally fetching the text of each verse along the way.

use tracing::trace;

use crate::catalog::BookEntry;
use crate::formatting::{Identity, Render, Syntax};
use crate::language::{LookupFailure, Reference};
use crate::lookup::Lookup;

/// The position of one verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate<'c> {
    pub book: &'c BookEntry,
    pub chapter: u16,
    pub verse: u16,
}

/// A verse together with its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage<'c> {
    pub text: String,
    pub book: &'c BookEntry,
    pub chapter: u16,
    pub verse: u16,
}

impl<'c> Reference<'c> {
    /// Every verse named by this reference, in order. Gaps produce nothing.
    pub fn coordinates<'a>(&'a self) -> impl Iterator<Item = Coordinate<'c>> + 'a {
        self.book_node()
            .values()
            .flat_map(|spec| {
                let book = spec.entry();
                spec.chapter_node()
                    .values()
                    .flat_map(move |chapter| {
                        let number = chapter.number();
                        chapter
                            .verse_node()
                            .values()
                            .map(move |verse| Coordinate {
                                book,
                                chapter: number,
                                verse: verse.number(),
                            })
                    })
            })
    }

    pub fn verse_count(&self) -> usize {
        self.coordinates()
            .count()
    }

    /// Fetch the text of each verse lazily, in order. Iteration continues
    /// past a failed lookup; callers wanting to stop at the first failure
    /// can collect into a Result.
    pub fn passages<'a>(&'a self, lookup: &'a dyn Lookup) -> Passages<'a, 'c> {
        Passages {
            coordinates: Box::new(self.coordinates()),
            lookup,
        }
    }

    /// Concatenate the text of every verse without markup.
    pub fn render(&self, lookup: &dyn Lookup) -> Result<String, LookupFailure> {
        self.render_with(lookup, &Identity)
    }

    /// Concatenate the text of every verse. A heading is written whenever
    /// the book or chapter changes, and a blank line wherever consecutive
    /// verses of one chapter are not adjacent. The first lookup failure
    /// ends rendering.
    pub fn render_with(
        &self,
        lookup: &dyn Lookup,
        renderer: &dyn Render,
    ) -> Result<String, LookupFailure> {
        let mut output = String::new();
        let mut previous: Option<(&BookEntry, u16, u16)> = None;

        for passage in self.passages(lookup) {
            let passage = passage?;

            let heading = match previous {
                Some((book, chapter, verse))
                    if book.index() == passage.book.index() && chapter == passage.chapter =>
                {
                    if passage.verse != verse + 1 {
                        output.push_str(&renderer.style(Syntax::Newline, "\n"));
                        output.push_str(&renderer.style(Syntax::Newline, "\n"));
                    }
                    None
                }
                Some((book, _, _)) if book.index() == passage.book.index() => {
                    Some(format!("Chapter {}", passage.chapter))
                }
                _ => Some(format!(
                    "{}, Chapter {}",
                    passage
                        .book
                        .name(),
                    passage.chapter
                )),
            };

            if let Some(heading) = heading {
                if !output.is_empty() {
                    output.push_str(&renderer.style(Syntax::Newline, "\n"));
                    output.push_str(&renderer.style(Syntax::Newline, "\n"));
                }
                output.push_str(&renderer.style(Syntax::Heading, &heading));
                output.push_str(&renderer.style(Syntax::Newline, "\n"));
                output.push_str(&renderer.style(Syntax::Newline, "\n"));
            }

            output.push_str(&renderer.style(Syntax::Text, &passage.text));
            previous = Some((passage.book, passage.chapter, passage.verse));
        }

        Ok(output)
    }
}

/// Lazily fetched verse text; see [`Reference::passages`].
pub struct Passages<'a, 'c> {
    coordinates: Box<dyn Iterator<Item = Coordinate<'c>> + 'a>,
    lookup: &'a dyn Lookup,
}

impl<'a, 'c> Iterator for Passages<'a, 'c> {
    type Item = Result<Passage<'c>, LookupFailure>;

    fn next(&mut self) -> Option<Self::Item> {
        let coordinate = self
            .coordinates
            .next()?;
        let name = coordinate
            .book
            .name();
        trace!("Looking up {} {}:{}", name, coordinate.chapter, coordinate.verse);

        let result = self
            .lookup
            .get_text(name, coordinate.chapter, coordinate.verse)
            .map(|text| Passage {
                text,
                book: coordinate.book,
                chapter: coordinate.chapter,
                verse: coordinate.verse,
            });
        Some(result)
    }
}
