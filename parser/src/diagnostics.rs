//! Structured explanation of parse failures.

use once_cell::unsync::OnceCell;

use crate::{
    alloc::String, Corrector, Edits, Environment, FailureReason, NumLiteral, ParseFailure,
    Spanned, Token, TokenKind,
};

/// Where in the input a failure has occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location<'a> {
    /// The input is empty or consists of whitespace only.
    Empty,
    /// Failure has occurred at the very first token.
    Start {
        /// Text of the first token.
        token: &'a str,
        /// Is the token legal? An illegal token is not recognized by the tokenizer at all,
        /// while a legal one is merely meaningless at this position.
        is_legal: bool,
    },
    /// The input ended unexpectedly.
    UnexpectedEnd {
        /// Input consumed before the end, without the trailing whitespace.
        consumed: &'a str,
    },
    /// Failure has occurred at a token after the start of the input.
    Trailing {
        /// Input preceding the offending token, without the whitespace immediately before it.
        consumed: &'a str,
        /// Text of the offending token.
        token: &'a str,
        /// Is the offending token legal?
        is_legal: bool,
    },
}

impl<'a> Location<'a> {
    /// Returns the input consumed before the failure, if the failure has occurred
    /// after the start of the input.
    pub fn consumed(&self) -> Option<&'a str> {
        match self {
            Self::UnexpectedEnd { consumed } | Self::Trailing { consumed, .. } => Some(consumed),
            Self::Empty | Self::Start { .. } => None,
        }
    }
}

/// Why a failure has occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complaint<'a> {
    /// A complete expression is followed by meaningful, but uninterpreted tokens.
    Incomplete,
    /// A value was expected at the start of the input.
    ExpectedValue,
    /// A value was expected to follow the consumed part of the input.
    ExpectedValueToFollow,
    /// A specific token was expected.
    Expected {
        /// Text of the expected token.
        token: &'static str,
    },
    /// The expression uses a variable that is not whitelisted.
    UnknownVariable {
        /// Name of the variable.
        name: &'a str,
    },
}

/// Explanation of a [`ParseFailure`]: where it has occurred, why, and which input the user
/// could have meant.
///
/// A diagnosis is a read-only view; it borrows the failure and the [`Environment`] used
/// during parsing. The suggested fix is computed on the first request and then cached.
///
/// # Examples
///
/// ```
/// # use arithmetic_explain::{evaluate, Complaint, Environment, Location};
/// let env = Environment::<f64>::new();
/// let failure = evaluate("3 +", &env).unwrap_err();
/// let diagnosis = failure.explain(&env);
///
/// assert_eq!(diagnosis.location(), Location::UnexpectedEnd { consumed: "3 +" });
/// assert_eq!(diagnosis.complaint(), Some(Complaint::ExpectedValueToFollow));
/// assert_eq!(diagnosis.suggested_fix(), Some("3"));
/// ```
#[derive(Debug)]
pub struct Diagnosis<'f, 'a, T> {
    failure: &'f ParseFailure<'a>,
    corrector: Corrector<'f, T>,
    fix: OnceCell<Option<String>>,
}

impl<'f, 'a, T: NumLiteral> Diagnosis<'f, 'a, T> {
    /// Creates a diagnosis for the `failure` obtained with the specified `env`.
    pub fn new(failure: &'f ParseFailure<'a>, env: &'f Environment<T>) -> Self {
        Self {
            failure,
            corrector: Corrector::new(env),
            fix: OnceCell::new(),
        }
    }

    /// Restricts edits considered when searching for a [suggested fix](Self::suggested_fix()).
    #[must_use]
    pub fn with_edits(self, edits: Edits) -> Self {
        Self {
            failure: self.failure,
            corrector: self.corrector.with_edits(edits),
            fix: OnceCell::new(),
        }
    }

    /// Returns the explained failure.
    pub fn failure(&self) -> &'f ParseFailure<'a> {
        self.failure
    }

    /// Returns the original input.
    pub fn input(&self) -> &'a str {
        self.failure.input()
    }

    /// Returns the failure reason.
    pub fn reason(&self) -> FailureReason {
        self.failure.reason()
    }

    /// Returns the text of the expected token, if the failure is caused by a missing token.
    pub fn expected_token(&self) -> Option<&'static str> {
        self.reason().expected_token()
    }

    /// Returns the offending token, or `None` if the input is empty.
    pub fn offending_token(&self) -> Option<&'f Token<'a>> {
        if self.failure.tokens().is_empty() {
            None
        } else {
            Some(self.failure.offending_token())
        }
    }

    /// Returns the text of the offending token. The text is empty for the end of input.
    pub fn offending_token_text(&self) -> &'a str {
        self.failure.offending_token().text()
    }

    /// Checks whether the offending token is legal, i.e. it is recognized by the tokenizer
    /// and is not the end of input.
    pub fn is_offending_token_legal(&self) -> bool {
        self.failure.offending_token().is_legal()
    }

    /// Returns the span of the offending token.
    pub fn offending_span(&self) -> Spanned<'a> {
        self.failure.offending_token().span()
    }

    /// Returns the input preceding the offending token, without the whitespace immediately
    /// before the token.
    pub fn where_text(&self) -> &'a str {
        self.failure.cursor().consumed()
    }

    /// Determines where the failure has occurred.
    pub fn location(&self) -> Location<'a> {
        if self.failure.tokens().is_empty() {
            return Location::Empty;
        }

        let token = self.failure.offending_token();
        if self.failure.position().index() == 0 {
            Location::Start {
                token: token.text(),
                is_legal: token.is_legal(),
            }
        } else if token.kind() == TokenKind::EndOfInput {
            Location::UnexpectedEnd {
                consumed: self.where_text(),
            }
        } else {
            Location::Trailing {
                consumed: self.where_text(),
                token: token.text(),
                is_legal: token.is_legal(),
            }
        }
    }

    /// Determines why the failure has occurred. Returns `None` if the location is
    /// self-explanatory, i.e., the input has an unrecognized char after a complete expression.
    pub fn complaint(&self) -> Option<Complaint<'a>> {
        let at_start = self.failure.position().index() == 0;
        Some(match self.reason() {
            FailureReason::Incomplete if self.is_offending_token_legal() => Complaint::Incomplete,
            FailureReason::Incomplete => return None,
            FailureReason::BadFactor | FailureReason::PrematureEof if at_start => {
                Complaint::ExpectedValue
            }
            FailureReason::BadFactor | FailureReason::PrematureEof => {
                Complaint::ExpectedValueToFollow
            }
            FailureReason::Expected { token } => Complaint::Expected { token },
            FailureReason::UnknownVariable => Complaint::UnknownVariable {
                name: self.offending_token_text(),
            },
        })
    }

    /// Returns a corrected version of the input that evaluates successfully, if one can be found
    /// with a single edit. The fix is searched for on the first call and then cached.
    pub fn suggested_fix(&self) -> Option<&str> {
        self.fix
            .get_or_init(|| self.corrector.try_correct(self.failure))
            .as_deref()
    }
}

/// Explains the `failure` obtained with the specified `env`. Equivalent
/// to [`ParseFailure::explain()`].
pub fn explain<'f, 'a, T: NumLiteral>(
    failure: &'f ParseFailure<'a>,
    env: &'f Environment<T>,
) -> Diagnosis<'f, 'a, T> {
    Diagnosis::new(failure, env)
}
