use scripture::{
    catalog::BookCatalog,
    formatting::{Render, Syntax},
    language::ReferenceError,
};

/// Generate problem and detail messages for reference errors
pub fn generate_error_message(
    error: &ReferenceError,
    catalog: &BookCatalog,
    renderer: &dyn Render,
) -> (String, String) {
    match error {
        ReferenceError::EmptyReference => (
            "Empty reference".to_string(),
            "Nothing was given to parse. A reference starts with the name of a book.".to_string(),
        ),
        ReferenceError::BookNotRecognized(_, token) => {
            let suggestions = catalog.suggest(token);
            let details = if suggestions.is_empty() {
                format!(
                    "'{}' is not the name or abbreviation of any book in the catalog.",
                    token
                )
            } else {
                let names: Vec<String> = suggestions
                    .iter()
                    .map(|book| renderer.style(Syntax::Book, book.name()))
                    .collect();
                format!(
                    "'{}' is not the name or abbreviation of any book in the catalog. Did you mean {}?",
                    token,
                    names.join(", ")
                )
            };
            (format!("Book '{}' not recognized", token), details)
        }
        ReferenceError::InvalidNumber(_) => (
            "Expected a number".to_string(),
            r#"
A chapter or verse number was expected here. Chapters follow the book name,
and verses follow a chapter after a ':' or '.' separator.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ReferenceError::OutOfOrderRange(_, previous, next) => (
            "Range out of order".to_string(),
            format!(
                r#"
A range must go forwards: {} cannot be followed by {}. To name a passage
that comes earlier, separate it with a ',' or ';' instead of a '-'.
                "#,
                previous, next
            )
            .trim_ascii()
            .to_string(),
        ),
        ReferenceError::UnrecognizedToken(_, token) => (
            format!("Unexpected '{}'", token),
            r#"
The parser could not make sense of this part of the reference. Books are
followed by chapter numbers; ':' separates chapter from verse, '-' forms a
range, and ',' or ';' separates one passage from the next.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ReferenceError::NonexistentChapter(_, book, chapter) => {
            let count = catalog
                .get(book)
                .map(|entry| entry.chapter_count())
                .unwrap_or(0);
            (
                format!("{} has no chapter {}", book, chapter),
                format!(
                    "{} has {} chapter{}.",
                    renderer.style(Syntax::Book, book),
                    count,
                    if count == 1 { "" } else { "s" }
                ),
            )
        }
        ReferenceError::NonexistentVerse(_, book, chapter, verse) => {
            let count = catalog
                .get(book)
                .and_then(|entry| entry.verse_count(*chapter))
                .unwrap_or(0);
            (
                format!("{} {} has no verse {}", book, chapter, verse),
                format!(
                    "Chapter {} of {} has {} verse{}.",
                    chapter,
                    renderer.style(Syntax::Book, book),
                    count,
                    if count == 1 { "" } else { "s" }
                ),
            )
        }
        ReferenceError::IllegalParserState(_) => (
            "Illegal parser state".to_string(),
            "Internal parser error. This should not have happened! Sorry.".to_string(),
        ),
    }
}
