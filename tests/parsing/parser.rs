use scripture::language::{Span, Verse};
use scripture::parsing::{self, Options};
use scripture::{catalog::BookCatalog, resolve_reference, Reference};

fn book_names(reference: &Reference) -> Vec<String> {
    reference
        .book_node()
        .values()
        .map(|book| {
            book.name()
                .to_string()
        })
        .collect()
}

#[test]
fn genesis_easy() {
    let reference = resolve_reference("Gen 1:1").unwrap();

    let book = reference
        .book()
        .unwrap();
    assert_eq!(book.name(), "Genesis");
    assert_eq!(
        book.chapter()
            .unwrap()
            .number(),
        1
    );
    assert_eq!(
        reference
            .chapter()
            .unwrap()
            .verse()
            .unwrap()
            .number(),
        1
    );
}

#[test]
fn genesis_chapters() {
    let reference = resolve_reference("Gen 1-2").unwrap();
    let book = reference
        .book()
        .unwrap();

    assert_eq!(
        book.chapter_node()
            .equals_range(1..=2),
        Ok(true)
    );

    let chapters = book
        .chapters()
        .unwrap();
    assert_eq!(
        chapters
            .get(0)
            .unwrap()
            .number(),
        1
    );
    assert_eq!(
        chapters
            .get(1)
            .unwrap()
            .number(),
        2
    );
    assert!(book
        .chapter()
        .is_err());
}

#[test]
fn genesis_chapters_discontinuous() {
    let reference = resolve_reference("Gen 1-3, 5").unwrap();
    let book = reference
        .book()
        .unwrap();

    assert!(book
        .chapter_node()
        .equals_list(&[1.into(), 2.into(), 3.into(), 5.into()]));
    assert!(book
        .chapter_node()
        .equals_list(&[Span::Range(1, 3), Span::One(5)]));
    assert!(book
        .chapter_node()
        .equals_range(1..=5)
        .is_err());

    let chapters = book
        .chapters()
        .unwrap();
    assert_eq!(
        chapters
            .get(3)
            .unwrap()
            .number(),
        5
    );

    let reference = resolve_reference("Gen 1, 5").unwrap();
    assert!(reference
        .book()
        .unwrap()
        .chapter_node()
        .equals_list(&[1.into(), 5.into()]));
}

#[test]
fn genesis_verses() {
    let reference = resolve_reference("Gen 1:1-10").unwrap();
    let chapter = reference
        .chapter()
        .unwrap();
    assert_eq!(chapter.number(), 1);
    assert_eq!(
        chapter
            .verse_node()
            .equals_range(1..=10),
        Ok(true)
    );
}

#[test]
fn genesis_verses_and_chapters() {
    let reference = resolve_reference("Gen 1:1-2:2").unwrap();
    let book = reference
        .book()
        .unwrap();
    assert_eq!(
        book.chapter_node()
            .equals_range(1..=2),
        Ok(true)
    );

    let chapters = book
        .chapters()
        .unwrap();
    let first = chapters
        .get(0)
        .unwrap();
    assert_eq!(first.number(), 1);
    assert_eq!(
        first
            .verse_node()
            .equals_range(1..=31),
        Ok(true)
    );

    let second = chapters
        .get(1)
        .unwrap();
    assert_eq!(second.number(), 2);
    assert_eq!(
        second
            .verse_node()
            .equals_range(1..=2),
        Ok(true)
    );
}

#[test]
fn genesis_discontinuous_verses() {
    let reference = resolve_reference("Gen 10:1, 3, 5").unwrap();
    let chapter = reference
        .chapter()
        .unwrap();
    assert_eq!(chapter.number(), 10);
    assert!(chapter
        .verse_node()
        .equals_list(&[1.into(), 3.into(), 5.into()]));
}

#[test]
fn discontinuous_verses_and_chapters() {
    let reference = resolve_reference("Gen 1:1, 3:5").unwrap();
    let chapters = reference
        .chapters()
        .unwrap();
    assert_eq!(chapters.len(), 2);
    assert!(chapters.has_gaps());

    let first = chapters
        .get(0)
        .unwrap();
    assert_eq!(first.number(), 1);
    assert_eq!(
        first
            .verse()
            .unwrap()
            .number(),
        1
    );

    let second = chapters
        .get(1)
        .unwrap();
    assert_eq!(second.number(), 3);
    assert_eq!(
        second
            .verse()
            .unwrap()
            .number(),
        5
    );
}

#[test]
fn discontinuous_verses_and_chapters_ranged() {
    let reference = resolve_reference("Gen 1:1-10, 3:5,8").unwrap();
    let chapters = reference
        .chapters()
        .unwrap();

    assert_eq!(
        chapters
            .get(0)
            .unwrap()
            .verse_node()
            .equals_range(1..=10),
        Ok(true)
    );

    let third = chapters
        .get(1)
        .unwrap();
    assert_eq!(third.number(), 3);
    assert!(third
        .verse_node()
        .equals_list(&[5.into(), 8.into()]));
}

#[test]
fn two_books() {
    let reference = resolve_reference("Gen 1:1, Lev 1:1").unwrap();
    assert_eq!(book_names(&reference), vec!["Genesis", "Leviticus"]);

    let books = reference
        .books()
        .unwrap();
    for book in books.iter() {
        assert_eq!(
            book.chapter()
                .unwrap()
                .number(),
            1
        );
        assert_eq!(
            book.verse()
                .unwrap()
                .number(),
            1
        );
    }

    let reference = resolve_reference("Gen 3:1, Lev 12:1").unwrap();
    let books = reference
        .books()
        .unwrap();
    assert_eq!(
        books
            .get(1)
            .unwrap()
            .chapter()
            .unwrap()
            .number(),
        12
    );
}

#[test]
fn two_books_with_multiple_verses() {
    let reference = resolve_reference("Gen 1:1-5, Lev 1:10-12").unwrap();
    let books = reference
        .books()
        .unwrap();

    let genesis = books
        .get(0)
        .unwrap();
    assert_eq!(
        genesis
            .chapter()
            .unwrap()
            .verse_node()
            .equals_range(1..=5),
        Ok(true)
    );

    let leviticus = books
        .get(1)
        .unwrap();
    assert_eq!(leviticus.name(), "Leviticus");
    assert_eq!(
        leviticus
            .chapter()
            .unwrap()
            .verse_node()
            .equals_range(10..=12),
        Ok(true)
    );
}

#[test]
fn multiple_books() {
    for text in ["Gen 1 - Lev 1", "Gen 1-Lev 1", "Gen 1 -Lev 1"] {
        let reference = resolve_reference(text).unwrap();
        assert_eq!(
            book_names(&reference),
            vec!["Genesis", "Exodus", "Leviticus"],
            "books of {}",
            text
        );

        let books = reference
            .books()
            .unwrap();
        assert_eq!(
            books
                .get(0)
                .unwrap()
                .chapter_node()
                .equals_range(1..=50),
            Ok(true)
        );
        assert_eq!(
            books
                .get(1)
                .unwrap()
                .chapter_node()
                .equals_range(1..=40),
            Ok(true)
        );

        let leviticus = books
            .get(2)
            .unwrap();
        assert!(leviticus
            .chapter_node()
            .is_single());
        assert_eq!(
            leviticus
                .chapter()
                .unwrap()
                .number(),
            1
        );
    }
}

#[test]
fn multiple_books_with_verses() {
    let reference = resolve_reference("Gen 1:3-Lev 5:10").unwrap();
    assert_eq!(
        book_names(&reference),
        vec!["Genesis", "Exodus", "Leviticus"]
    );

    let books = reference
        .books()
        .unwrap();
    let genesis = books
        .get(0)
        .unwrap();
    assert_eq!(
        genesis
            .chapter_node()
            .equals_range(1..=50),
        Ok(true)
    );
    assert_eq!(
        genesis
            .chapters()
            .unwrap()
            .get(0)
            .unwrap()
            .verse_node()
            .equals_range(3..=31),
        Ok(true)
    );

    let leviticus = books
        .get(2)
        .unwrap();
    assert_eq!(
        leviticus
            .chapter_node()
            .equals_range(1..=5),
        Ok(true)
    );

    let chapters = leviticus
        .chapters()
        .unwrap();
    let expected: [u16; 5] = [17, 16, 17, 35, 10];
    for (i, last) in expected
        .iter()
        .enumerate()
    {
        assert_eq!(
            chapters
                .get(i)
                .unwrap()
                .verse_node()
                .equals_range(1..=*last),
            Ok(true),
            "chapter {}",
            i + 1
        );
    }
}

#[test]
fn multiple_books_extra_whitespace() {
    let reference = resolve_reference("Gen  1:3-Lev 1:10").unwrap();
    let books = reference
        .books()
        .unwrap();

    let leviticus = books
        .get(2)
        .unwrap();
    assert_eq!(
        leviticus
            .chapter()
            .unwrap()
            .number(),
        1
    );
    assert_eq!(
        leviticus
            .chapter()
            .unwrap()
            .verse_node()
            .equals_range(1..=10),
        Ok(true)
    );
}

#[test]
fn numbered_books() {
    let reference = resolve_reference("1 John 1:1").unwrap();
    assert_eq!(
        reference
            .book()
            .unwrap()
            .name(),
        "1 John"
    );

    let reference = resolve_reference("1 John 1:1-10").unwrap();
    assert_eq!(
        reference
            .chapter()
            .unwrap()
            .verse_node()
            .equals_range(1..=10),
        Ok(true)
    );

    let reference = resolve_reference("1 John 1 - 2").unwrap();
    assert_eq!(
        reference
            .book()
            .unwrap()
            .chapter_node()
            .equals_range(1..=2),
        Ok(true)
    );
}

#[test]
fn numbered_books_spanning() {
    let reference = resolve_reference("1 John 1 - 2 John 1").unwrap();
    assert_eq!(book_names(&reference), vec!["1 John", "2 John"]);

    let reference = resolve_reference("1 John 1, 2 John 1").unwrap();
    assert_eq!(book_names(&reference), vec!["1 John", "2 John"]);

    let reference = resolve_reference("1 Kgs - 2 Kgs").unwrap();
    assert_eq!(book_names(&reference), vec!["1 Kings", "2 Kings"]);
}

#[test]
fn spanned_books_then_another_book() {
    let reference = resolve_reference("Gen - Exo, Lev 2").unwrap();
    assert_eq!(
        book_names(&reference),
        vec!["Genesis", "Exodus", "Leviticus"]
    );
    assert!(reference
        .book_node()
        .has_gaps());

    let books = reference
        .books()
        .unwrap();
    assert!(books
        .get(0)
        .unwrap()
        .is_whole());
    assert!(books
        .get(1)
        .unwrap()
        .is_whole());

    let leviticus = books
        .get(2)
        .unwrap();
    assert_eq!(
        leviticus
            .chapter()
            .unwrap()
            .number(),
        2
    );
    assert_eq!(
        leviticus
            .chapter()
            .unwrap()
            .verse_node()
            .equals_range(1..=16),
        Ok(true)
    );
}

#[test]
fn spanned_book_then_chapter_gap() {
    let reference = resolve_reference("Gen 50 - Exo 2, 4").unwrap();
    assert_eq!(book_names(&reference), vec!["Genesis", "Exodus"]);

    let books = reference
        .books()
        .unwrap();
    let genesis = books
        .get(0)
        .unwrap();
    assert_eq!(
        genesis
            .chapter_node()
            .equals_range(50..=50),
        Ok(true)
    );

    let exodus = books
        .get(1)
        .unwrap();
    assert!(exodus
        .chapter_node()
        .equals_list(&[(1..=2).into(), 4.into()]));
    assert_eq!(
        exodus
            .chapter_node()
            .equals_range(1..=4),
        Err(scripture::language::ComparisonError::NotContiguous)
    );
}

#[test]
fn repeated_verse_after_comma() {
    let reference = resolve_reference("Gen 1:1, 1").unwrap();
    let verses = reference
        .chapter()
        .unwrap()
        .verse_node();
    assert!(verses.is_multiple());
    assert!(verses.has_gaps());
    assert!(verses.equals_list(&[1.into(), 1.into()]));
}

#[test]
fn multi_discontinuous_verse() {
    let reference = resolve_reference("2 Sam 11:1-10, 13-17").unwrap();
    assert_eq!(
        reference
            .book()
            .unwrap()
            .name(),
        "2 Samuel"
    );
    let chapter = reference
        .chapter()
        .unwrap();
    assert_eq!(chapter.number(), 11);
    assert!(chapter
        .verse_node()
        .equals_list(&[(1..=10).into(), (13..=17).into()]));
}

#[test]
fn alternate_separators() {
    for text in [
        "James 2:14-24, 26, Mark 8:34-9:1",
        "James 2.14-24, 26; Mark 8.34-9.1",
    ] {
        let reference = resolve_reference(text).unwrap();
        assert_eq!(book_names(&reference), vec!["James", "Mark"], "{}", text);

        let books = reference
            .books()
            .unwrap();
        let james = books
            .get(0)
            .unwrap();
        assert_eq!(
            james
                .chapter()
                .unwrap()
                .number(),
            2
        );
        assert!(james
            .chapter()
            .unwrap()
            .verse_node()
            .equals_list(&[(14..=24).into(), 26.into()]));

        let mark = books
            .get(1)
            .unwrap();
        assert_eq!(
            mark.chapter_node()
                .equals_range(8..=9),
            Ok(true)
        );
    }
}

#[test]
fn period_after_book_name() {
    let reference = resolve_reference("Gen. 1").unwrap();
    assert_eq!(
        reference
            .chapter()
            .unwrap()
            .number(),
        1
    );

    for text in [
        "Gen. 1.1-10",
        "1 Pt. 1.1-10",
        "1 Pet. 1.1-10",
        "1 Peter 1.1-10",
    ] {
        let reference = resolve_reference(text).unwrap();
        assert_eq!(
            reference
                .chapter()
                .unwrap()
                .number(),
            1
        );
        assert_eq!(
            reference
                .chapter()
                .unwrap()
                .verse_node()
                .equals_range(1..=10),
            Ok(true),
            "{}",
            text
        );
    }

    let reference = resolve_reference("1 Pt. 1.1-10").unwrap();
    assert_eq!(
        reference
            .book()
            .unwrap()
            .name(),
        "1 Peter"
    );
}

#[test]
fn leading_digits_borrowed() {
    let reference = resolve_reference("Gen 1:1-2, 3, 20-4, 30").unwrap();
    assert!(reference
        .chapter()
        .unwrap()
        .verse_node()
        .equals_list(&[
            (1..=2).into(),
            3.into(),
            (20..=24).into(),
            30.into()
        ]));

    let strict = Options {
        borrow_leading_digits: false,
        ..Options::default()
    };
    assert!(parsing::parse("Gen 1:20-4", BookCatalog::standard(), strict).is_err());
}

#[test]
fn footnote_letters() {
    let reference = resolve_reference("Acts 1:10a").unwrap();
    assert_eq!(
        reference
            .book()
            .unwrap()
            .name(),
        "Acts"
    );
    assert_eq!(
        reference
            .verse()
            .unwrap()
            .number(),
        10
    );

    let reference = resolve_reference("Acts 1:1a-10e").unwrap();
    assert_eq!(
        reference
            .chapter()
            .unwrap()
            .verse_node()
            .equals_range(1..=10),
        Ok(true)
    );

    let reference = resolve_reference("Acts 1:2a-10:1").unwrap();
    let book = reference
        .book()
        .unwrap();
    assert_eq!(
        book.chapter_node()
            .equals_range(1..=10),
        Ok(true)
    );
    assert_eq!(
        book.chapters()
            .unwrap()
            .get(0)
            .unwrap()
            .verse_node()
            .equals_range(2..=26),
        Ok(true)
    );
}

#[test]
fn open_ended_ranges() {
    let reference = resolve_reference("Acts 1:2-").unwrap();
    assert_eq!(
        reference
            .chapter()
            .unwrap()
            .verse_node()
            .equals_range(2..=26),
        Ok(true)
    );

    let reference = resolve_reference("Rev 20-").unwrap();
    assert_eq!(
        reference
            .book()
            .unwrap()
            .chapter_node()
            .equals_range(20..=22),
        Ok(true)
    );
}

#[test]
fn same_chapter_span() {
    let reference = resolve_reference("Gen 1:5-1:10").unwrap();
    let chapter = reference
        .chapter()
        .unwrap();
    assert_eq!(chapter.number(), 1);
    assert_eq!(
        chapter
            .verse_node()
            .equals_range(5..=10),
        Ok(true)
    );
}

#[test]
fn multiword_and_dashes() {
    let reference = resolve_reference("Song of Solomon 2:1\u{2013}3").unwrap();
    assert_eq!(
        reference
            .book()
            .unwrap()
            .name(),
        "Song of Solomon"
    );
    assert_eq!(
        reference
            .chapter()
            .unwrap()
            .verse_node()
            .equals_range(1..=3),
        Ok(true)
    );
}

#[test]
fn whole_books() {
    assert!(resolve_reference("Phil").is_ok());

    let reference = resolve_reference("Titus").unwrap();
    let book = reference
        .book()
        .unwrap();
    assert!(book.is_whole());
    assert_eq!(
        book.chapter_node()
            .equals_range(1..=3),
        Ok(true)
    );
}

#[test]
fn parsing_is_idempotent() {
    for text in ["Gen 1:1-2:2", "Gen 1:3-Lev 5:10", "James 2.14-24, 26; Mark 8.34-9.1"] {
        assert_eq!(resolve_reference(text), resolve_reference(text));
    }
}

#[test]
fn from_str() {
    let reference: Reference = "Ps 23".parse().unwrap();
    assert_eq!(
        reference
            .chapter()
            .unwrap()
            .verse_node()
            .values()
            .map(Verse::number)
            .collect::<Vec<_>>(),
        (1..=6).collect::<Vec<_>>()
    );
}

#[test]
fn canonical_display() {
    let cases = [
        ("Gen 1:1", "Genesis 1:1"),
        ("Gen 1-3, 5", "Genesis 1-3, 5"),
        ("Gen 1:1-2:2", "Genesis 1:1-31, 2:1-2"),
        ("Gen 10:1, 3, 5", "Genesis 10:1, 3, 5"),
        ("Acts - Rom", "Acts; Romans"),
        ("1 Jn 2:1-3; Jude", "1 John 2:1-3; Jude"),
    ];
    for (text, expected) in cases {
        let reference = resolve_reference(text).unwrap();
        assert_eq!(reference.to_string(), expected, "{}", text);
    }
}
