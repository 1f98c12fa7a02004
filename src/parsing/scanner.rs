//! Lexer turning reference text into book, number, and punctuation tokens.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'i> {
    /// A candidate book name, trailing period already stripped.
    Book(&'i str),
    Number(&'i str),
    Colon,
    Period,
    Dash,
    Comma,
    Semicolon,
    Unknown(char),
    End,
}

impl<'i> fmt::Display for Token<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Book(text) => write!(f, "{}", text),
            Token::Number(digits) => write!(f, "{}", digits),
            Token::Colon => write!(f, ":"),
            Token::Period => write!(f, "."),
            Token::Dash => write!(f, "-"),
            Token::Comma => write!(f, ","),
            Token::Semicolon => write!(f, ";"),
            Token::Unknown(c) => write!(f, "{}", c),
            Token::End => write!(f, "end of input"),
        }
    }
}

/// Reads tokens left to right. Cloning a scanner is how lookahead is done:
/// the clone is advanced and discarded, leaving the original in place.
#[derive(Debug, Clone)]
pub(crate) struct Scanner<'i> {
    source: &'i str,
    offset: usize,
}

impl<'i> Scanner<'i> {
    pub(crate) fn new(source: &'i str) -> Scanner<'i> {
        Scanner { source, offset: 0 }
    }

    fn rest(&self) -> &'i str {
        &self.source[self.offset..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        self.offset += rest.len() - trimmed.len();
    }

    /// Consume the next token, returning it along with the byte offset at
    /// which it starts.
    pub(crate) fn next_token(&mut self) -> (usize, Token<'i>) {
        self.skip_whitespace();

        let start = self.offset;
        let rest = self.rest();

        let c = match rest
            .chars()
            .next()
        {
            Some(c) => c,
            None => return (start, Token::End),
        };

        if let Some(found) = regex!(r"^\d\s+[A-Za-z]+\.?").find(rest) {
            return (start, self.take_book(found.as_str()));
        }

        if c.is_ascii_digit() {
            let width = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            self.offset += width;
            return (start, Token::Number(&rest[..width]));
        }

        if let Some(found) = regex!(r"^[A-Za-z]+(?:\s+of\s+[A-Za-z]+)?\.?").find(rest) {
            return (start, self.take_book(found.as_str()));
        }

        self.offset += c.len_utf8();
        let token = match c {
            ':' => Token::Colon,
            '.' => Token::Period,
            '-' | '\u{2013}' => Token::Dash,
            ',' => Token::Comma,
            ';' => Token::Semicolon,
            _ => Token::Unknown(c),
        };
        (start, token)
    }

    fn take_book(&mut self, matched: &'i str) -> Token<'i> {
        self.offset += matched.len();
        Token::Book(matched.trim_end_matches('.'))
    }

    /// The token `n` positions ahead, without consuming anything.
    pub(crate) fn peek_nth(&self, n: usize) -> Token<'i> {
        let mut ahead = self.clone();
        for _ in 0..n {
            ahead.next_token();
        }
        let (_, token) = ahead.next_token();
        token
    }

    pub(crate) fn peek(&self) -> Token<'i> {
        self.peek_nth(0)
    }

    /// Whether the token `n` positions ahead is a candidate book name.
    pub(crate) fn book_ahead(&self, n: usize) -> bool {
        matches!(self.peek_nth(n), Token::Book(_))
    }

    /// Discard a single letter immediately following a verse number, as in
    /// "10a", provided it is not the start of a longer word.
    pub(crate) fn skip_footnote(&mut self) {
        let mut chars = self
            .rest()
            .chars();
        if let Some(c) = chars.next() {
            if c.is_ascii_alphabetic()
                && !chars
                    .next()
                    .is_some_and(|next| next.is_alphabetic())
            {
                self.offset += c.len_utf8();
            }
        }
    }
}
