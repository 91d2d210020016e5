//! Search for a minimal edit making malformed input evaluate.

use bitflags::bitflags;

use crate::{
    alloc::{String, Vec},
    evaluate, Environment, FailureReason, NumLiteral, ParseFailure, Token, TokenKind,
};

bitflags! {
    /// Kinds of edits attempted by a [`Corrector`]. All edits are performed at the token
    /// at which parsing has failed, or immediately before it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Edits: u32 {
        /// Insert the token the parser has expected (e.g., a closing parenthesis).
        const INSERT_EXPECTED = 1;
        /// Replace an unknown variable with the closest whitelisted name.
        const RENAME_VARIABLE = 2;
        /// Insert an operator or a closing parenthesis.
        const INSERT = 4;
        /// Delete the offending token.
        const DELETE = 8;
        /// Replace the offending token with an operator or a parenthesis.
        const SUBSTITUTE = 16;
        /// Delete the token preceding the offending one.
        const DELETE_PRECEDING = 32;
    }
}

impl Default for Edits {
    fn default() -> Self {
        Self::all()
    }
}

/// Tokens tried by [`Edits::INSERT`], in the order of preference.
const INSERTED_TOKENS: [&str; 6] = ["*", "+", "-", "/", "^", ")"];
/// Tokens tried by [`Edits::SUBSTITUTE`].
const SUBSTITUTED_TOKENS: [&str; 7] = ["+", "-", "*", "/", "^", "(", ")"];
/// Maximum edit distance between an unknown variable and its replacement.
const MAX_RENAME_DISTANCE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit<'s> {
    Insert { position: usize, text: &'s str },
    Delete { position: usize },
    Replace { position: usize, text: &'s str },
}

/// Token text together with the whitespace preceding it.
#[derive(Debug, Clone, Copy)]
struct Piece<'s> {
    whitespace: &'s str,
    text: &'s str,
}

impl<'s> From<&Token<'s>> for Piece<'s> {
    fn from(token: &Token<'s>) -> Self {
        Self {
            whitespace: token.leading_whitespace(),
            text: token.text(),
        }
    }
}

impl<'s> Edit<'s> {
    /// Renders tokens with this edit applied.
    fn apply(self, tokens: &[Token<'s>]) -> String {
        let mut pieces: Vec<Piece<'s>> = tokens.iter().map(Piece::from).collect();
        match self {
            Self::Insert { position, text } => {
                // `2 + (3 * 4` -> `2 + (3 * 4)`, but `3 4` -> `3 * 4`.
                let whitespace = if text == ")" {
                    ""
                } else {
                    pieces[position].whitespace
                };
                pieces.insert(position, Piece { whitespace, text });
            }
            Self::Delete { position } => {
                let removed = pieces.remove(position);
                if position == 0 {
                    if let Some(next) = pieces.first_mut() {
                        next.whitespace = removed.whitespace;
                    }
                }
            }
            Self::Replace { position, text } => {
                pieces[position].text = text;
            }
        }

        pieces
            .iter()
            .flat_map(|piece| [piece.whitespace, piece.text])
            .collect()
    }
}

/// Levenshtein distance between two strings, measured in chars.
fn edit_distance(lhs: &str, rhs: &str) -> usize {
    let rhs: Vec<char> = rhs.chars().collect();
    let mut prev_row: Vec<usize> = (0..=rhs.len()).collect();
    let mut row = Vec::with_capacity(prev_row.len());

    for (i, lhs_char) in lhs.chars().enumerate() {
        row.clear();
        row.push(i + 1);
        for (j, &rhs_char) in rhs.iter().enumerate() {
            let substitution = prev_row[j] + usize::from(lhs_char != rhs_char);
            let deletion = prev_row[j + 1] + 1;
            let insertion = row[j] + 1;
            row.push(substitution.min(deletion).min(insertion));
        }
        core::mem::swap(&mut prev_row, &mut row);
    }
    prev_row[rhs.len()]
}

/// Engine searching for a single edit that makes an expression evaluate.
///
/// The search is bounded and deterministic: for a given failure, a fixed list of candidate
/// edits is tried in order, and the first candidate that evaluates in the environment wins.
/// The candidates, in the order of preference, correspond to [`Edits`] flags:
///
/// 1. Insert the expected token.
/// 2. Rename an unknown variable to the closest whitelisted name (at most 2 char edits away;
///    ties are broken by the alphabetic order).
/// 3. Insert an operator or a closing parenthesis before the offending token.
/// 4. Delete the offending token.
/// 5. Replace the offending token with an operator or a parenthesis.
/// 6. Delete the token preceding the offending one.
///
/// # Examples
///
/// ```
/// use arithmetic_explain::{evaluate, Corrector, Edits, Environment};
///
/// let env = Environment::new().with_var("x", 1.0_f64);
/// let failure = evaluate("2x", &env).unwrap_err();
/// let corrector = Corrector::new(&env);
/// assert_eq!(corrector.try_correct(&failure).unwrap(), "2*x");
///
/// let corrector = corrector.with_edits(Edits::DELETE);
/// assert_eq!(corrector.try_correct(&failure).unwrap(), "2");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Corrector<'e, T> {
    env: &'e Environment<T>,
    edits: Edits,
}

impl<'e, T: NumLiteral> Corrector<'e, T> {
    /// Creates a corrector verifying fixes in the specified environment. All [`Edits`]
    /// are enabled.
    pub fn new(env: &'e Environment<T>) -> Self {
        Self {
            env,
            edits: Edits::default(),
        }
    }

    /// Restricts edits attempted by this corrector.
    #[must_use]
    pub fn with_edits(mut self, edits: Edits) -> Self {
        self.edits = edits;
        self
    }

    /// Returns edits attempted by this corrector.
    pub fn edits(&self) -> Edits {
        self.edits
    }

    /// Attempts to correct the input that has caused the `failure`. Returns `None` if no
    /// candidate edit produces an expression that evaluates successfully.
    ///
    /// The `failure` is not modified; edits are applied to a private copy of its tokens.
    pub fn try_correct(&self, failure: &ParseFailure<'_>) -> Option<String> {
        let tokens = failure.tokens().tokens();
        self.candidates(failure)
            .into_iter()
            .map(|edit| edit.apply(tokens))
            .find(|fixed| evaluate(fixed, self.env).is_ok())
    }

    fn candidates<'s>(&'s self, failure: &'s ParseFailure<'_>) -> Vec<Edit<'s>> {
        let position = failure.position().index();
        let offending = failure.offending_token();
        let expected = failure.reason().expected_token();
        let mut candidates = Vec::new();

        if self.edits.contains(Edits::INSERT_EXPECTED) {
            if let Some(text) = expected {
                candidates.push(Edit::Insert { position, text });
            }
        }

        if self.edits.contains(Edits::RENAME_VARIABLE)
            && failure.reason() == FailureReason::UnknownVariable
        {
            if let Some(text) = self.closest_name(offending.text()) {
                candidates.push(Edit::Replace { position, text });
            }
        }

        if self.edits.contains(Edits::INSERT) {
            let inserted = INSERTED_TOKENS.into_iter().filter(|&text| {
                !(self.edits.contains(Edits::INSERT_EXPECTED) && expected == Some(text))
            });
            candidates.extend(inserted.map(|text| Edit::Insert { position, text }));
        }

        let is_at_end = offending.kind() == TokenKind::EndOfInput;
        if self.edits.contains(Edits::DELETE) && !is_at_end {
            candidates.push(Edit::Delete { position });
        }
        if self.edits.contains(Edits::SUBSTITUTE) && !is_at_end {
            let substituted = SUBSTITUTED_TOKENS
                .into_iter()
                .filter(|&text| text != offending.text());
            candidates.extend(substituted.map(|text| Edit::Replace { position, text }));
        }

        if self.edits.contains(Edits::DELETE_PRECEDING) && position > 0 {
            candidates.push(Edit::Delete {
                position: position - 1,
            });
        }
        candidates
    }

    fn closest_name(&self, name: &str) -> Option<&'e str> {
        let env: &'e Environment<T> = self.env;
        env.names()
            .map(|candidate| (candidate, edit_distance(name, candidate)))
            .filter(|&(_, distance)| distance > 0 && distance <= MAX_RENAME_DISTANCE)
            .min_by_key(|&(_, distance)| distance)
            .map(|(candidate, _)| candidate)
    }
}
