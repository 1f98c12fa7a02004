use scripture::language::LookupFailure;
use scripture::lookup::{Lookup, Lookups, Placeholder, Table};
use scripture::resolve_reference;

#[test]
fn heading_then_text() {
    let reference = resolve_reference("Gen 1:1-2").unwrap();
    assert_eq!(
        reference
            .render(&Placeholder)
            .unwrap(),
        "Genesis, Chapter 1\n\n[Genesis 1:1][Genesis 1:2]"
    );
}

#[test]
fn blank_line_between_separated_verses() {
    let reference = resolve_reference("Gen 1:1-2, 5").unwrap();
    assert_eq!(
        reference
            .render(&Placeholder)
            .unwrap(),
        "Genesis, Chapter 1\n\n[Genesis 1:1][Genesis 1:2]\n\n[Genesis 1:5]"
    );
}

#[test]
fn chapter_and_book_changes() {
    let reference = resolve_reference("Gen 1:31-2:1").unwrap();
    assert_eq!(
        reference
            .render(&Placeholder)
            .unwrap(),
        "Genesis, Chapter 1\n\n[Genesis 1:31]\n\nChapter 2\n\n[Genesis 2:1]"
    );

    let reference = resolve_reference("Gen 50:26-Exo 1:1").unwrap();
    assert_eq!(
        reference
            .render(&Placeholder)
            .unwrap(),
        "Genesis, Chapter 50\n\n[Genesis 50:26]\n\nExodus, Chapter 1\n\n[Exodus 1:1]"
    );
}

#[test]
fn table_text() {
    let table = Table::from_tsv(
        "# book\tchapter\tverse\ttext\n\
         Genesis\t1\t1\tIn the beginning. \n\
         Genesis\t1\t2\tAnd the earth.\n",
    )
    .unwrap();
    assert_eq!(table.len(), 2);

    let reference = resolve_reference("Gen 1:1-2").unwrap();
    assert_eq!(
        reference
            .render(&table)
            .unwrap(),
        "Genesis, Chapter 1\n\nIn the beginning. And the earth."
    );
}

#[test]
fn missing_text_stops_rendering() {
    let mut table = Table::new();
    table.insert("Genesis", 1, 1, "In the beginning.");

    let reference = resolve_reference("Gen 1:1-3").unwrap();
    assert_eq!(
        reference.render(&table),
        Err(LookupFailure {
            book: "Genesis".to_string(),
            chapter: 1,
            verse: 2,
            problem: "verse not present in table".to_string(),
        })
    );

    let results: Vec<_> = reference
        .passages(&table)
        .collect();
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[2].is_err());
}

#[test]
fn malformed_table() {
    assert!(Table::from_tsv("Genesis\t1\tone\ttext").is_err());
    assert!(Table::from_tsv("Genesis\t1").is_err());
}

#[test]
fn lookups_by_name() {
    let mut lookups = Lookups::new();
    lookups.register("placeholder", Box::new(Placeholder));

    let lookup = lookups
        .get("placeholder")
        .unwrap();
    assert_eq!(
        lookup
            .get_text("Ruth", 1, 1)
            .unwrap(),
        "[Ruth 1:1]"
    );
    assert!(lookups
        .get("missing")
        .is_none());
}

#[test]
fn coordinates_across_gaps() {
    let reference = resolve_reference("Gen 1:1, 3:5; Ruth 1:1").unwrap();
    let found: Vec<(&str, u16, u16)> = reference
        .coordinates()
        .map(|c| (c.book.name(), c.chapter, c.verse))
        .collect();
    assert_eq!(
        found,
        vec![("Genesis", 1, 1), ("Genesis", 3, 5), ("Ruth", 1, 1)]
    );
    assert_eq!(reference.verse_count(), 3);
}
