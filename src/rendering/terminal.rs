//! Renderers for colourizing references and passages

use crate::formatting::*;
use owo_colors::OwoColorize;

/// Embellish fragments with ANSI escapes to create highlighting in terminal
/// output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Newline => "\n".to_string(),
            Syntax::Book => content // entity.name.function - #3465a4 (blue) bold
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            Syntax::Chapter => content // constant.numeric - #ad7fa8 (purple) bold
                .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
                .bold()
                .to_string(),
            Syntax::Verse => content // constant.numeric - #ad7fa8 (purple)
                .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
                .to_string(),
            Syntax::Operator => content // keyword.operator - #cc0000 (red) bold
                .color(owo_colors::Rgb(204, 0, 0))
                .bold()
                .to_string(),
            Syntax::Separator => content // punctuation - #999999 (grey)
                .color(owo_colors::Rgb(0x99, 0x99, 0x99))
                .to_string(),
            Syntax::Heading => content // markup.heading - #000000 bold
                .bright_white()
                .bold()
                .to_string(),
            Syntax::Text => content.to_string(),
        }
    }
}
