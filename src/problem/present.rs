use super::messages::generate_error_message;
use owo_colors::OwoColorize;
use scripture::{
    catalog::BookCatalog,
    formatting::Render,
    language::{LoadingError, LookupFailure, ReferenceError},
};

/// Format a reference error with full details, echoing the input with a
/// caret under the place the problem was found
pub fn full_reference_error(
    error: &ReferenceError,
    source: &str,
    catalog: &BookCatalog,
    renderer: &dyn Render,
) -> String {
    let (problem, details) = generate_error_message(error, catalog, renderer);
    let column = calculate_column_number(source, error.offset()) + 1;
    let width = 3;

    format!(
        r#"
{}: {}:1:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
        "#,
        "error".bright_red(),
        "<input>",
        column,
        problem.bold(),
        ' ',
        '|'.bright_blue(),
        1.bright_blue(),
        '|'.bright_blue(),
        source,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a reference error with concise single-line output
pub fn concise_reference_error(
    error: &ReferenceError,
    source: &str,
    catalog: &BookCatalog,
    renderer: &dyn Render,
) -> String {
    let (problem, _) = generate_error_message(error, catalog, renderer);
    let column = calculate_column_number(source, error.offset()) + 1;

    format!(
        "{}: {}:1:{} {}",
        "error".bright_red(),
        "<input>",
        column,
        problem.bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error(error: &LoadingError<'_>) -> String {
    let mut result = format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    );
    if !error
        .details
        .is_empty()
    {
        result.push_str(&format!(" ({})", error.details));
    }
    result
}

/// Format a LookupFailure with concise single-line output
pub fn concise_lookup_failure(failure: &LookupFailure) -> String {
    format!(
        "{}: {} {}:{} {}",
        "error".bright_red(),
        failure.book,
        failure.chapter,
        failure.verse,
        failure
            .problem
            .bold()
    )
}

fn calculate_column_number(content: &str, offset: usize) -> usize {
    let offset = offset.min(content.len());
    content
        .get(..offset)
        .map(|before| {
            before
                .chars()
                .count()
        })
        .unwrap_or(0)
}
