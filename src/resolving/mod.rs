//! Expansion of a draft tree into a resolved Reference. Open-ended markers
//! are run out to the end of their chapter or book, cross-book spans get an
//! entry for every book in between, and books and chapters written without
//! further detail are filled in whole.

use tracing::{debug, trace};

use crate::catalog::{BookCatalog, BookEntry};
use crate::language::{BookSpec, ChapterSpec, Element, RangeNode, Reference, Verse};
use crate::parsing::{Draft, DraftBook, DraftChapter, Slot};

/// Resolve a draft against the catalog its books came from. The parser has
/// already checked every chapter and verse it saw against the catalog, so
/// this cannot fail.
pub(crate) fn resolve<'c>(draft: Draft<DraftBook<'c>>, catalog: &'c BookCatalog) -> Reference<'c> {
    let mut elements = Vec::new();
    let mut multiple = draft.multiple;
    let mut previous: Option<&'c BookEntry> = None;

    for slot in draft.slots {
        match slot {
            Slot::Value(book) => {
                if book.through {
                    if let Some(from) = previous {
                        let between = intervening(catalog, from, book.entry);
                        if !between.is_empty() {
                            debug!(
                                "Expanding {} books between {} and {}",
                                between.len(),
                                from.name(),
                                book.entry
                                    .name()
                            );
                            multiple = true;
                        }
                        for entry in between {
                            elements.push(Element::Value(whole_book(entry)));
                        }
                    }
                }
                previous = Some(book.entry);
                elements.push(Element::Value(resolve_book(book)));
            }
            Slot::Gap => elements.push(Element::Gap),
            Slot::OpenEnd => trace!("Ignoring open end at book level"),
        }
    }

    Reference {
        books: finish(elements, multiple),
    }
}

/// The books strictly between `from` and `to`.
fn intervening<'c>(
    catalog: &'c BookCatalog,
    from: &'c BookEntry,
    to: &'c BookEntry,
) -> &'c [BookEntry] {
    let span = catalog.span(from, to);
    if span.len() < 2 {
        return &[];
    }
    &span[1..span.len() - 1]
}

fn resolve_book(book: DraftBook<'_>) -> BookSpec<'_> {
    let entry = book.entry;
    if book
        .chapters
        .is_empty()
    {
        return whole_book(entry);
    }

    let mut elements = Vec::new();
    let mut previous = 0;

    for slot in book
        .chapters
        .slots
    {
        match slot {
            Slot::Value(chapter) => {
                previous = chapter.number;
                elements.push(Element::Value(resolve_chapter(entry, chapter)));
            }
            Slot::Gap => elements.push(Element::Gap),
            Slot::OpenEnd => {
                let last = entry.chapter_count();
                trace!("Chapters {} through {} of {}", previous + 1, last, entry.name());
                for number in (previous + 1)..=last {
                    elements.push(Element::Value(whole_chapter(entry, number)));
                }
                previous = last;
            }
        }
    }

    BookSpec {
        entry,
        chapters: finish(
            elements,
            book.chapters
                .multiple,
        ),
    }
}

fn resolve_chapter(entry: &BookEntry, chapter: DraftChapter) -> ChapterSpec {
    if chapter
        .verses
        .is_empty()
    {
        return whole_chapter(entry, chapter.number);
    }

    let last = entry
        .verse_count(chapter.number)
        .unwrap_or(0);
    let mut elements = Vec::new();
    let mut previous = 0;

    for slot in chapter
        .verses
        .slots
    {
        match slot {
            Slot::Value(number) => {
                previous = number;
                elements.push(Element::Value(Verse { number }));
            }
            Slot::Gap => elements.push(Element::Gap),
            Slot::OpenEnd => {
                for number in (previous + 1)..=last {
                    elements.push(Element::Value(Verse { number }));
                }
                previous = last;
            }
        }
    }

    ChapterSpec {
        number: chapter.number,
        verses: finish(
            elements,
            chapter
                .verses
                .multiple,
        ),
    }
}

fn whole_book(entry: &BookEntry) -> BookSpec<'_> {
    let elements = (1..=entry.chapter_count())
        .map(|number| Element::Value(whole_chapter(entry, number)))
        .collect();
    BookSpec {
        entry,
        chapters: RangeNode::Multiple(elements),
    }
}

fn whole_chapter(entry: &BookEntry, number: u16) -> ChapterSpec {
    let last = entry
        .verse_count(number)
        .unwrap_or(0);
    let elements = (1..=last)
        .map(|number| Element::Value(Verse { number }))
        .collect();
    ChapterSpec {
        number,
        verses: RangeNode::Multiple(elements),
    }
}

/// Settle the shape of a level: single only if exactly one value was
/// written there and nothing was added to it.
fn finish<T>(mut elements: Vec<Element<T>>, multiple: bool) -> RangeNode<T> {
    if !multiple && elements.len() == 1 {
        if let Some(Element::Value(value)) = elements.pop() {
            return RangeNode::Single(value);
        }
    }
    RangeNode::Multiple(elements)
}
