//! Cursor over a token stream.

use super::{Token, TokenKind, TokenStream};

/// Saved [`Cursor`] position, which can be restored with [`Cursor::reset()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mark(usize);

impl Mark {
    /// Returns the index of the marked token in the stream.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Position in a [`TokenStream`]. Cursors are cheap to copy, so an alternative parse
/// can be explored by forking a cursor, or by marking its position and resetting it afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'t, 'a> {
    stream: &'t TokenStream<'a>,
    position: usize,
}

impl<'t, 'a> Cursor<'t, 'a> {
    pub(super) fn new(stream: &'t TokenStream<'a>) -> Self {
        Self {
            stream,
            position: 0,
        }
    }

    /// Returns the stream this cursor walks.
    pub fn stream(&self) -> &'t TokenStream<'a> {
        self.stream
    }

    /// Returns the current token without consuming it.
    pub fn peek(&self) -> &'t Token<'a> {
        &self.stream.tokens[self.position]
    }

    /// Returns the current token and moves to the next one. The cursor never moves
    /// past the end of input.
    pub fn advance(&mut self) -> &'t Token<'a> {
        let token = self.peek();
        if token.kind() != TokenKind::EndOfInput {
            self.position += 1;
        }
        token
    }

    /// Saves the current position.
    pub fn mark(&self) -> Mark {
        Mark(self.position)
    }

    /// Restores a position previously obtained via [`Self::mark()`].
    ///
    /// # Panics
    ///
    /// Panics if the mark points outside the stream (e.g., it was obtained from
    /// a cursor over another stream).
    pub fn reset(&mut self, mark: Mark) {
        assert!(
            mark.0 < self.stream.len(),
            "mark {} is out of bounds for a stream of {} tokens",
            mark.0,
            self.stream.len()
        );
        self.position = mark.0;
    }

    /// Returns the index of the current token in the stream.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Checks whether the cursor points at the first token.
    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    /// Checks whether the cursor points at the end of input.
    pub fn is_at_end(&self) -> bool {
        self.peek().kind() == TokenKind::EndOfInput
    }

    /// Returns the part of the input preceding the current token, excluding the whitespace
    /// immediately before the token.
    pub fn consumed(&self) -> &'a str {
        let token = self.peek();
        let end = token.source_offset() - token.leading_whitespace_len();
        let input = self.stream.input;
        &input[..end]
    }
}
