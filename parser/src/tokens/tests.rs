//! Tests for the tokenizer and cursor.

use assert_matches::assert_matches;

use super::*;

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input)
        .tokens()
        .iter()
        .map(Token::kind)
        .collect()
}

fn texts(input: &str) -> Vec<&str> {
    tokenize(input)
        .tokens()
        .iter()
        .map(Token::text)
        .collect()
}

#[test]
fn tokenizing_simple_expression() {
    let tokens = tokenize("3 + x^2 / (1 -");
    assert_eq!(
        tokens.tokens().iter().map(Token::text).collect::<Vec<_>>(),
        ["3", "+", "x", "^", "2", "/", "(", "1", "-", ""]
    );
    assert_eq!(
        tokens.tokens().iter().map(Token::kind).collect::<Vec<_>>(),
        [
            TokenKind::Number,
            TokenKind::Operator(BinaryOp::Add),
            TokenKind::Identifier,
            TokenKind::Operator(BinaryOp::Power),
            TokenKind::Number,
            TokenKind::Operator(BinaryOp::Div),
            TokenKind::LeftParen,
            TokenKind::Number,
            TokenKind::Operator(BinaryOp::Sub),
            TokenKind::EndOfInput,
        ]
    );

    let offsets: Vec<_> = tokens.tokens().iter().map(Token::source_offset).collect();
    assert_eq!(offsets, [0, 2, 4, 5, 6, 8, 10, 11, 13, 14]);
    let ws_lengths: Vec<_> = tokens
        .tokens()
        .iter()
        .map(Token::leading_whitespace_len)
        .collect();
    assert_eq!(ws_lengths, [0, 1, 1, 0, 0, 1, 1, 0, 1, 0]);
}

#[test]
fn tokenizing_numbers() {
    assert_eq!(texts("12 3.5 4. .25"), ["12", "3.5", "4.", ".25", ""]);
    assert!(kinds("12 3.5 4. .25")[..4]
        .iter()
        .all(|&kind| kind == TokenKind::Number));

    // A number immediately followed by a letter is split into two tokens.
    assert_eq!(texts("2x"), ["2", "x", ""]);
    assert_eq!(
        kinds("2x"),
        [TokenKind::Number, TokenKind::Identifier, TokenKind::EndOfInput]
    );
    // Second dot starts a new number.
    assert_eq!(texts("1.2.3"), ["1.2", ".3", ""]);
}

#[test]
fn tokenizing_identifiers() {
    assert_eq!(texts("x2 Foo π"), ["x2", "Foo", "π", ""]);
    assert!(kinds("x2 Foo π")[..3]
        .iter()
        .all(|&kind| kind == TokenKind::Identifier));
    // Underscores are not a part of identifiers.
    assert_eq!(texts("a_b"), ["a", "_", "b", ""]);
    assert_eq!(kinds("a_b")[1], TokenKind::Error);
}

#[test]
fn unrecognized_chars_become_error_tokens() {
    let tokens = tokenize("1 $ ∑");
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[1].kind(), TokenKind::Error);
    assert_eq!(tokens[1].text(), "$");
    assert!(!tokens[1].is_legal());
    // Multi-byte chars are not split.
    assert_eq!(tokens[2].kind(), TokenKind::Error);
    assert_eq!(tokens[2].text(), "∑");
    assert_eq!(tokens.end().source_offset(), "1 $ ∑".len());

    // A lone dot is not a number.
    assert_eq!(kinds("."), [TokenKind::Error, TokenKind::EndOfInput]);
}

#[test]
fn end_of_input_collects_trailing_whitespace() {
    let tokens = tokenize("1 + 2  \n");
    let end = tokens.end();
    assert_eq!(end.kind(), TokenKind::EndOfInput);
    assert_eq!(end.text(), "");
    assert_eq!(end.leading_whitespace(), "  \n");
    assert_eq!(end.source_offset(), 8);
    assert!(!end.is_legal());
    assert_eq!(end.span().location_line(), 2);
}

#[test]
fn empty_inputs() {
    for input in ["", "   ", "\t\n"] {
        let tokens = tokenize(input);
        assert!(tokens.is_empty(), "{input:?}");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens.end().source_offset(), input.len());
        assert_eq!(tokens.render(), input);
    }
    assert!(!tokenize(" 1").is_empty());
}

#[test]
fn tokens_reconstruct_input() {
    let inputs = [
        "3 + x^2 / (1 -",
        "  (( 1.5*y ) ) ",
        "1 $ ∑ \t π^2",
        "\n2\n+\n3\n",
        "..1..",
        "",
    ];
    for input in inputs {
        let tokens = tokenize(input);
        assert_eq!(tokens.render(), input);
        assert_eq!(tokens.input(), input);

        let offsets: Vec<_> = tokens.tokens().iter().map(Token::source_offset).collect();
        assert!(
            offsets.windows(2).all(|pair| pair[0] < pair[1]),
            "{input:?}: {offsets:?}"
        );
    }
}

#[test]
fn token_spans() {
    let tokens = tokenize("1 +\n  foo");
    let span = tokens[2].span();
    assert_eq!(*span.fragment(), "foo");
    assert_eq!(span.location_line(), 2);
    assert_eq!(span.get_column(), 3);
    assert_eq!(span.range(), 6..9);
}

#[test]
fn cursor_basics() {
    let tokens = tokenize("1 + 2");
    let mut cursor = tokens.cursor();
    assert!(cursor.is_at_start());
    assert_eq!(cursor.peek().text(), "1");
    assert_eq!(cursor.advance().text(), "1");
    assert!(!cursor.is_at_start());
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.consumed(), "1");

    cursor.advance();
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.consumed(), "1 + 2");
    // The cursor does not move past the end of input.
    assert_eq!(cursor.advance().kind(), TokenKind::EndOfInput);
    assert_eq!(cursor.position(), 3);
}

#[test]
fn cursor_backtracking() {
    let tokens = tokenize("(x - 1)");
    let mut cursor = tokens.cursor();
    cursor.advance();
    let mark = cursor.mark();
    assert_eq!(mark.index(), 1);

    let mut fork = cursor;
    fork.advance();
    fork.advance();
    assert_eq!(fork.peek().text(), "1");
    // Forking does not affect the original cursor.
    assert_eq!(cursor.peek().text(), "x");

    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.consumed(), "(x -");
    cursor.reset(mark);
    assert_eq!(cursor.peek().text(), "x");
    assert_eq!(cursor.consumed(), "(");
}

#[test]
#[should_panic(expected = "out of bounds")]
fn resetting_cursor_to_foreign_mark() {
    let long = tokenize("1 + 2 + 3");
    let short = tokenize("1");
    let mut long_cursor = long.cursor();
    for _ in 0..4 {
        long_cursor.advance();
    }
    short.cursor().reset(long_cursor.mark());
}

#[test]
fn token_kind_display() {
    assert_eq!(
        TokenKind::Operator(BinaryOp::Mul).to_string(),
        "multiplication operator"
    );
    assert_eq!(TokenKind::EndOfInput.to_string(), "end of input");
    assert_matches!(kinds(")")[0], TokenKind::RightParen);
}
