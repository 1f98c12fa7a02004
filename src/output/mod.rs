//! Output generation for the scripture CLI application

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::debug;

use scripture::{
    formatting::{render_reference, Render},
    Reference,
};

static SUMMARY: &str = r#"{canonical}
  books:    {books}
  chapters: {chapters}
  verses:   {verses}
"#;

#[derive(Serialize)]
struct Context {
    canonical: String,
    books: usize,
    chapters: usize,
    verses: usize,
}

/// Describe a resolved reference: its canonical form and how many books,
/// chapters, and verses it covers.
pub fn summarize(
    reference: &Reference,
    renderer: &dyn Render,
) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("summary", SUMMARY)?;

    let context = Context {
        canonical: render_reference(renderer, reference),
        books: reference
            .book_node()
            .len(),
        chapters: reference
            .book_node()
            .values()
            .map(|book| {
                book.chapter_node()
                    .len()
            })
            .sum(),
        verses: reference.verse_count(),
    };
    debug!(
        "Summary of {} books, {} chapters",
        context.books, context.chapters
    );

    tt.render("summary", &context)
}
