//! Tokenizer implemented with the help of `nom`.

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while_m_n},
    character::complete::{anychar, char as tag_char, digit0, digit1},
    combinator::{map, map_opt, opt, recognize},
    sequence::{pair, preceded},
    Slice,
};

use super::{Token, TokenKind, TokenStream};
use crate::{
    alloc::Vec,
    spans::{with_span, InputSpan, NomResult, Spanned},
    BinaryOp,
};

/// Whitespace preceding a token. May be empty.
fn whitespace(input: InputSpan<'_>) -> NomResult<'_, InputSpan<'_>> {
    take_while(char::is_whitespace)(input)
}

/// Decimal number like `42`, `4.` or `.25`.
fn number(input: InputSpan<'_>) -> NomResult<'_, InputSpan<'_>> {
    let with_integer_part = recognize(pair(digit1, opt(preceded(tag_char('.'), digit0))));
    let fraction_only = recognize(pair(tag_char('.'), digit1));
    alt((with_integer_part, fraction_only))(input)
}

/// Identifier: a letter followed by letters or digits, like `x2` or `Foo`.
fn identifier(input: InputSpan<'_>) -> NomResult<'_, InputSpan<'_>> {
    recognize(pair(
        take_while_m_n(1, 1, char::is_alphabetic),
        take_while(char::is_alphanumeric),
    ))(input)
}

/// Classifies the next token. Fails only on empty input; any char not starting a recognized
/// token becomes a single-char [`TokenKind::Error`].
fn token_kind(input: InputSpan<'_>) -> NomResult<'_, TokenKind> {
    alt((
        map(number, |_| TokenKind::Number),
        map(identifier, |_| TokenKind::Identifier),
        map(map_opt(anychar, BinaryOp::from_char), TokenKind::Operator),
        map(tag_char('('), |_| TokenKind::LeftParen),
        map(tag_char(')'), |_| TokenKind::RightParen),
        map(anychar, |_| TokenKind::Error),
    ))(input)
}

/// Splits the input into tokens. This operation never fails; unrecognized chars are
/// converted into [`TokenKind::Error`] tokens.
///
/// # Examples
///
/// ```
/// use arithmetic_explain::{tokenize, BinaryOp, TokenKind};
///
/// let tokens = tokenize("1 +  x$");
/// let kinds: Vec<_> = tokens.tokens().iter().map(|token| token.kind()).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Number,
///         TokenKind::Operator(BinaryOp::Add),
///         TokenKind::Identifier,
///         TokenKind::Error,
///         TokenKind::EndOfInput,
///     ]
/// );
/// assert_eq!(tokens[2].leading_whitespace(), "  ");
/// assert_eq!(tokens.end().source_offset(), 7);
/// assert_eq!(tokens.render(), "1 +  x$");
/// ```
pub fn tokenize(input: &str) -> TokenStream<'_> {
    let mut tokens = Vec::new();
    let mut rest = InputSpan::new(input);
    let mut next_token = pair(whitespace, opt(with_span(token_kind)));

    while let Ok((remaining, (ws, Some(token)))) = next_token(rest) {
        tokens.push(Token::new(token, *ws.fragment()));
        rest = remaining;
    }

    // Only trailing whitespace is left at this point.
    let trailing_ws = *rest.fragment();
    let end = rest.slice(trailing_ws.len()..);
    tokens.push(Token::new(
        Spanned::new(end, TokenKind::EndOfInput),
        trailing_ws,
    ));
    TokenStream { input, tokens }
}
