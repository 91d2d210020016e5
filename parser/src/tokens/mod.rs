//! Tokens and their sequences.

use core::{fmt, ops};

mod cursor;
mod lexer;
#[cfg(test)]
mod tests;

pub use self::{
    cursor::{Cursor, Mark},
    lexer::tokenize,
};

use crate::{
    alloc::{String, Vec},
    spans::Spanned,
    BinaryOp,
};

/// Kind of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal, e.g. `42` or `1.5`.
    Number,
    /// Identifier, such as a variable name.
    Identifier,
    /// Arithmetic operator: `+`, `-`, `*`, `/` or `^`.
    Operator(BinaryOp),
    /// Opening parenthesis `(`.
    LeftParen,
    /// Closing parenthesis `)`.
    RightParen,
    /// End of input. This token has empty text.
    EndOfInput,
    /// Char not recognized by the tokenizer.
    Error,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => formatter.write_str("number"),
            Self::Identifier => formatter.write_str("identifier"),
            Self::Operator(op) => write!(formatter, "{op} operator"),
            Self::LeftParen => formatter.write_str("opening parenthesis"),
            Self::RightParen => formatter.write_str("closing parenthesis"),
            Self::EndOfInput => formatter.write_str("end of input"),
            Self::Error => formatter.write_str("unrecognized char"),
        }
    }
}

impl TokenKind {
    /// Checks whether this kind denotes a legal token, i.e., neither an [`Error`](Self::Error)
    /// nor the [end of input](Self::EndOfInput).
    pub fn is_legal(self) -> bool {
        !matches!(self, Self::EndOfInput | Self::Error)
    }
}

/// Lexical unit of an expression together with its location and the whitespace preceding it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    span: Spanned<'a, TokenKind>,
    leading_whitespace: &'a str,
}

impl<'a> Token<'a> {
    pub(crate) fn new(span: Spanned<'a, TokenKind>, leading_whitespace: &'a str) -> Self {
        Self {
            span,
            leading_whitespace,
        }
    }

    /// Returns the kind of this token.
    pub fn kind(&self) -> TokenKind {
        self.span.extra
    }

    /// Returns the token text.
    pub fn text(&self) -> &'a str {
        *self.span.fragment()
    }

    /// Returns the byte offset of this token in the input.
    pub fn source_offset(&self) -> usize {
        self.span.location_offset()
    }

    /// Returns the whitespace immediately preceding this token.
    pub fn leading_whitespace(&self) -> &'a str {
        self.leading_whitespace
    }

    /// Returns the byte length of the whitespace immediately preceding this token.
    pub fn leading_whitespace_len(&self) -> usize {
        self.leading_whitespace.len()
    }

    /// Returns the span of this token.
    pub fn span(&self) -> Spanned<'a> {
        self.span.with_no_extra()
    }

    /// Checks whether this token is legal, i.e., is not an unrecognized char
    /// or the end of input.
    pub fn is_legal(&self) -> bool {
        self.kind().is_legal()
    }
}

/// Sequence of [`Token`]s produced by [`tokenize()`]. The sequence is never empty;
/// its last token is always [`TokenKind::EndOfInput`].
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    input: &'a str,
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenStream<'a> {
    /// Returns the tokenized input.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Returns tokens in this stream, including the end of input.
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Returns the number of tokens in this stream, including the end of input.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Checks whether this stream contains no tokens besides the end of input. This is the case
    /// for empty or whitespace-only inputs.
    pub fn is_empty(&self) -> bool {
        self.tokens.len() == 1
    }

    /// Returns the terminating end-of-input token.
    pub fn end(&self) -> &Token<'a> {
        &self.tokens[self.tokens.len() - 1]
    }

    /// Returns a cursor pointing at the first token.
    pub fn cursor(&self) -> Cursor<'_, 'a> {
        Cursor::new(self)
    }

    /// Concatenates leading whitespace and text of all tokens. For a stream produced
    /// by [`tokenize()`], this reproduces the input exactly.
    pub fn render(&self) -> String {
        self.tokens
            .iter()
            .flat_map(|token| [token.leading_whitespace(), token.text()])
            .collect()
    }
}

impl<'a> ops::Index<usize> for TokenStream<'a> {
    type Output = Token<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}
