use scripture::catalog::BookCatalog;
use scripture::language::{AccessShapeError, Level, Shape};
use scripture::resolve_reference;

#[test]
fn singular_reference_rejects_plural_accessors() {
    let reference = resolve_reference("Gen 1:1").unwrap();
    assert!(reference.is_single());

    assert_eq!(
        reference
            .books()
            .unwrap_err(),
        AccessShapeError {
            level: Level::Book,
            requested: Shape::Multiple,
            actual: Shape::Single,
        }
    );
    assert_eq!(
        reference
            .chapters()
            .unwrap_err()
            .level,
        Level::Chapter
    );
    assert_eq!(
        reference
            .verses()
            .unwrap_err()
            .level,
        Level::Verse
    );
}

#[test]
fn plural_verses_reject_singular_accessor() {
    let reference = resolve_reference("Gen 1:1-10").unwrap();

    let error = reference
        .verse()
        .unwrap_err();
    assert_eq!(error.level, Level::Verse);
    assert_eq!(error.requested, Shape::Single);
    assert_eq!(error.actual, Shape::Multiple);

    let verses = reference
        .verses()
        .unwrap();
    assert_eq!(verses.len(), 10);
    assert_eq!(
        verses
            .last()
            .unwrap()
            .number(),
        10
    );
}

#[test]
fn spanning_books_are_multiple() {
    let reference = resolve_reference("1 Kgs - 2 Kgs").unwrap();
    assert!(reference.is_multiple());
    assert!(reference
        .book()
        .is_err());
    assert_eq!(
        reference
            .books()
            .unwrap()
            .len(),
        2
    );

    let reference = resolve_reference("Acts - Rom").unwrap();
    assert!(reference
        .book()
        .is_err());
    assert!(reference
        .chapter()
        .is_err());
}

#[test]
fn whole_book_has_multiple_chapters() {
    let reference = resolve_reference("Titus").unwrap();
    assert!(reference
        .chapter()
        .is_err());

    let chapters = reference
        .chapters()
        .unwrap();
    assert_eq!(chapters.len(), 3);
    assert!(!chapters.has_gaps());

    let reference = resolve_reference("Acts 1-2").unwrap();
    assert!(reference
        .chapter()
        .is_err());
    assert_eq!(
        reference
            .chapters()
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn whole_chapter_has_multiple_verses() {
    let reference = resolve_reference("Jude 1").unwrap();
    assert!(reference
        .verse()
        .is_err());
    assert_eq!(
        reference
            .verses()
            .unwrap()
            .len(),
        25
    );
}

#[test]
fn access_error_message() {
    let reference = resolve_reference("Gen 1-2").unwrap();
    let error = reference
        .chapter()
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "requested a single chapter but the reference has several"
    );
}

#[test]
fn catalog_is_shared() {
    let catalog = BookCatalog::standard();
    let reference = resolve_reference("Ruth 2:3").unwrap();
    let book = reference
        .book()
        .unwrap();

    assert_eq!(catalog.lookup("ruth"), Some(book.entry()));
    assert_eq!(
        catalog
            .successor(book.entry())
            .map(|entry| entry.name()),
        Some("1 Samuel")
    );
    assert_eq!(catalog.last_verse(book.entry(), 2), Some(23));
}
