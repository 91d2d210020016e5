//! Error handling.

use core::fmt;

use crate::{Cursor, Diagnosis, Environment, Mark, NumLiteral, Token, TokenStream};

/// Reason why an expression could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// The beginning of the input is a complete expression, but there are leftover tokens
    /// after it.
    Incomplete,
    /// A non-value token (e.g., `/` or `)`) was encountered where a value was expected.
    BadFactor,
    /// Input ended before a complete expression was parsed.
    PrematureEof,
    /// A specific token was expected, but another token was encountered.
    Expected {
        /// Text of the expected token, e.g. `)`.
        token: &'static str,
    },
    /// The expression uses a variable not present in the [`Environment`].
    UnknownVariable,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete => formatter.write_str("uninterpreted tokens after expression"),
            Self::BadFactor => formatter.write_str("expected a value"),
            Self::PrematureEof => formatter.write_str("unexpected end of input"),
            Self::Expected { token } => write!(formatter, "expected `{token}`"),
            Self::UnknownVariable => formatter.write_str("unknown variable"),
        }
    }
}

impl FailureReason {
    /// Returns the expected token text if this is [`Self::Expected`].
    pub fn expected_token(self) -> Option<&'static str> {
        match self {
            Self::Expected { token } => Some(token),
            _ => None,
        }
    }
}

/// Failure to parse an expression.
///
/// A failure owns the [`TokenStream`] of the input and remembers the position of the token
/// at which parsing failed. Thus, it can be [explained](Self::explain()) after the parsing
/// has returned.
#[derive(Debug, Clone)]
pub struct ParseFailure<'a> {
    reason: FailureReason,
    tokens: TokenStream<'a>,
    position: Mark,
}

impl<'a> ParseFailure<'a> {
    pub(crate) fn new(reason: FailureReason, cursor: &Cursor<'_, 'a>) -> Self {
        Self {
            reason,
            tokens: cursor.stream().clone(),
            position: cursor.mark(),
        }
    }

    /// Returns the reason of this failure.
    pub fn reason(&self) -> FailureReason {
        self.reason
    }

    /// Returns the original input.
    pub fn input(&self) -> &'a str {
        self.tokens.input()
    }

    /// Returns tokens of the input.
    pub fn tokens(&self) -> &TokenStream<'a> {
        &self.tokens
    }

    /// Returns the position of the token at which parsing has failed.
    pub fn position(&self) -> Mark {
        self.position
    }

    /// Returns a cursor pointing at the token at which parsing has failed.
    pub fn cursor(&self) -> Cursor<'_, 'a> {
        let mut cursor = self.tokens.cursor();
        cursor.reset(self.position);
        cursor
    }

    /// Returns the token at which parsing has failed.
    pub fn offending_token(&self) -> &Token<'a> {
        &self.tokens[self.position.index()]
    }

    /// Explains this failure. `env` should be the environment that was used during parsing;
    /// it is used to search for a [suggested fix](Diagnosis::suggested_fix()).
    pub fn explain<'s, T: NumLiteral>(&'s self, env: &'s Environment<T>) -> Diagnosis<'s, 'a, T> {
        Diagnosis::new(self, env)
    }
}

impl fmt::Display for ParseFailure<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.offending_token().span();
        write!(
            formatter,
            "{}:{}: {}",
            span.location_line(),
            span.get_column(),
            self.reason
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseFailure<'_> {}
