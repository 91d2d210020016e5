//! Parser evaluating expressions on the fly.
//!
//! The grammar, from the loosest to the tightest binding:
//!
//! ```text
//! expression   := term (('+' | '-') term)*
//! term         := signed_power (('*' | '/') signed_power)*
//! signed_power := ('-' | '+')? power
//! power        := factor ('^' signed_power)?
//! factor       := NUMBER | IDENTIFIER | '(' expression ')'
//! ```
//!
//! Nesting is tracked with an explicit stack of pending operations rather than with recursion,
//! so neither deeply nested parentheses nor long `^` chains can exhaust the call stack.
//! A failure is reported at the token where descending the grammar above would get stuck.

use crate::{
    alloc::Vec, tokenize, BinaryOp, Cursor, Environment, FailureReason, NumLiteral, OpPriority,
    ParseFailure, TokenKind, UnaryOp,
};

#[cfg(test)]
mod tests;

/// Operation waiting for its right-hand side to be evaluated.
#[derive(Debug)]
enum Pending<T> {
    /// Opening parenthesis.
    Group,
    Sign(UnaryOp),
    Binary(T, BinaryOp),
}

impl<T> Pending<T> {
    /// Checks whether this operation must be applied before pushing `next` on top of it.
    /// `None` means that the enclosing group is being closed.
    fn folds_before(&self, next: Option<BinaryOp>) -> bool {
        let priority = match self {
            Self::Group => return false,
            Self::Sign(op) => op.priority(),
            Self::Binary(_, op) => op.priority(),
        };
        next.map_or(true, |next| {
            // `^` is right-associative; all other binary ops are left-associative.
            priority > next.priority()
                || (priority == next.priority() && next.priority() != OpPriority::Power)
        })
    }
}

#[derive(Debug)]
struct Parser<'t, 'a, 'e, T> {
    cursor: Cursor<'t, 'a>,
    env: &'e Environment<T>,
    stack: Vec<Pending<T>>,
}

impl<'t, 'a, 'e, T: NumLiteral> Parser<'t, 'a, 'e, T> {
    fn new(cursor: Cursor<'t, 'a>, env: &'e Environment<T>) -> Self {
        Self {
            cursor,
            env,
            stack: Vec::new(),
        }
    }

    fn fail(&self, reason: FailureReason) -> ParseFailure<'a> {
        ParseFailure::new(reason, &self.cursor)
    }

    fn peek_op(&self) -> Option<BinaryOp> {
        match self.cursor.peek().kind() {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// Parses an expression until the first token that cannot continue it.
    fn expression(&mut self) -> Result<T, ParseFailure<'a>> {
        loop {
            // A value is expected here; it may be preceded by a single sign.
            if let Some(op) = self.peek_op().and_then(UnaryOp::from_binary) {
                self.cursor.advance();
                self.stack.push(Pending::Sign(op));
            }
            let Some(mut value) = self.factor()? else {
                self.stack.push(Pending::Group);
                continue;
            };

            // A binary op or the end of the current group is expected here.
            loop {
                let next_op = self.peek_op();
                value = self.fold(value, next_op);
                if let Some(op) = next_op {
                    self.cursor.advance();
                    self.stack.push(Pending::Binary(value, op));
                    break;
                }

                match self.stack.pop() {
                    Some(Pending::Group) => self.expect(")")?,
                    // `fold()` has emptied the stack down to the innermost group.
                    _ => return Ok(value),
                }
            }
        }
    }

    /// Applies pending operations that bind tighter than `next_op`.
    fn fold(&mut self, mut value: T, next_op: Option<BinaryOp>) -> T {
        while let Some(pending) = self.stack.pop() {
            if !pending.folds_before(next_op) {
                self.stack.push(pending);
                break;
            }
            value = match pending {
                Pending::Sign(op) => op.apply(value),
                Pending::Binary(lhs, op) => op.apply(lhs, value),
                Pending::Group => value,
            };
        }
        value
    }

    /// Parses a number or a variable. Returns `Ok(None)` if an opening parenthesis was consumed.
    fn factor(&mut self) -> Result<Option<T>, ParseFailure<'a>> {
        let token = self.cursor.peek();
        match token.kind() {
            TokenKind::Number => {
                let value =
                    T::parse(token.text()).ok_or_else(|| self.fail(FailureReason::BadFactor))?;
                self.cursor.advance();
                Ok(Some(value))
            }
            TokenKind::Identifier => {
                let value = self
                    .env
                    .get(token.text())
                    .ok_or_else(|| self.fail(FailureReason::UnknownVariable))?;
                self.cursor.advance();
                Ok(Some(value))
            }
            TokenKind::LeftParen => {
                self.cursor.advance();
                Ok(None)
            }
            TokenKind::EndOfInput => Err(self.fail(FailureReason::PrematureEof)),
            TokenKind::Operator(_) | TokenKind::RightParen | TokenKind::Error => {
                Err(self.fail(FailureReason::BadFactor))
            }
        }
    }

    fn expect(&mut self, expected: &'static str) -> Result<(), ParseFailure<'a>> {
        if self.cursor.peek().text() == expected {
            self.cursor.advance();
            Ok(())
        } else {
            Err(self.fail(FailureReason::Expected { token: expected }))
        }
    }
}

/// Parses and evaluates an expression starting from the `cursor` position. The expression
/// must span until the end of input.
///
/// Parsing stops on the first encountered failure; there is no error recovery.
///
/// # Examples
///
/// ```
/// use arithmetic_explain::{parse, tokenize, Environment, FailureReason};
///
/// let env = Environment::<f64>::new();
/// let tokens = tokenize("(1 + 2) * 3");
/// assert_eq!(parse(tokens.cursor(), &env).unwrap(), 9.0);
///
/// let tokens = tokenize("1 2");
/// let failure = parse(tokens.cursor(), &env).unwrap_err();
/// assert_eq!(failure.reason(), FailureReason::Incomplete);
/// assert_eq!(failure.offending_token().text(), "2");
/// ```
pub fn parse<'a, T: NumLiteral>(
    cursor: Cursor<'_, 'a>,
    env: &Environment<T>,
) -> Result<T, ParseFailure<'a>> {
    let mut parser = Parser::new(cursor, env);
    let value = parser.expression()?;
    if parser.cursor.is_at_end() {
        Ok(value)
    } else {
        Err(parser.fail(FailureReason::Incomplete))
    }
}

/// Tokenizes and evaluates the `input`.
///
/// # Examples
///
/// ```
/// use arithmetic_explain::{evaluate, Environment, FailureReason};
///
/// let env = Environment::new().with_var("x", 2.0_f64);
/// assert_eq!(evaluate("2 + 3 * x", &env).unwrap(), 8.0);
/// assert_eq!(evaluate("2 ^ 3 ^ 2", &env).unwrap(), 512.0);
///
/// let failure = evaluate("3 +", &env).unwrap_err();
/// assert_eq!(failure.reason(), FailureReason::PrematureEof);
/// let failure = evaluate("y", &env).unwrap_err();
/// assert_eq!(failure.reason(), FailureReason::UnknownVariable);
/// ```
pub fn evaluate<'a, T: NumLiteral>(
    input: &'a str,
    env: &Environment<T>,
) -> Result<T, ParseFailure<'a>> {
    let tokens = tokenize(input);
    parse(tokens.cursor(), env)
}
