use crate::formatting::*;
use crate::language::Reference;

/// We do the formatting in two passes. First we convert the resolved
/// reference into a Vec of "fragments" (Syntax tag, String pairs). Then
/// second we apply the specified renderer to each pair to result in an
/// embellished/highlighted String.
pub fn render_reference(renderer: &dyn Render, reference: &Reference) -> String {
    // Pass 1: Format reference to tagged fragments
    let fragments = formatter::format_reference(reference);

    // Pass 2: Render tagged fragments to final output
    render_fragments(renderer, fragments)
}

/// Apply markup to fragments via style() and combine.
pub fn render_fragments(renderer: &dyn Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    output
}
