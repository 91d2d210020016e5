//! Evaluator for arithmetic expressions that explains *why* malformed input cannot be parsed
//! and suggests a corrected version of it.
//!
//! The crate is intended for interactive calculators: the user types an expression
//! incrementally and expects specific feedback, rather than a generic "syntax error."
//!
//! # Supported syntax
//!
//! - **Numbers.** Decimal literals with an optional fractional part: `42`, `1.5`, `3.`, `.25`.
//!   Literals are converted into the numeric type chosen by the caller (see [`NumLiteral`]).
//! - **Variables.** A letter followed by letters or digits, such as `x`, `x2` or `π`.
//!   Only variables present in the [`Environment`] are accepted.
//! - Basic **arithmetic operations**: `+`, `-` (binary and unary), unary `+`, `*`, `/`,
//!   `^` (power, right-associative).
//! - **Parentheses** which predictably influence operation priority.
//!
//! Operation priority, from the loosest to the tightest binding: `+` / `-`, `*` / `/`,
//! unary `-` / `+`, `^`. Thus, `-2 ^ 2` evaluates to `-4`, and `2 ^ -1` to `0.5`.
//!
//! # Failures and diagnoses
//!
//! Evaluation either returns a value or a [`ParseFailure`], which is classified by
//! a [`FailureReason`]. A failure can be [explained](ParseFailure::explain) into
//! a [`Diagnosis`], a structured view that states *where* the failure occurred ([`Location`]),
//! *why* ([`Complaint`]), and *what* the user could have meant
//! ([suggested fix](Diagnosis::suggested_fix)). Turning these pieces into human-readable prose
//! is left to the caller.
//!
//! Suggested fixes are found by [`Corrector`], which tries a small, fixed list
//! of single-token [`Edits`] and returns only a fix that evaluates successfully.
//!
//! # Crate features
//!
//! - `std`. Enables support of types from `std`, such as the `Error` trait, and propagates
//!   to dependencies. Without this feature, the crate is `no_std`, but requires an allocator.
//!
//! # Examples
//!
//! ```
//! use arithmetic_explain::{evaluate, Environment};
//!
//! let env = Environment::new().with_var("x", 3.0_f64);
//! let value = evaluate("2 + x ^ 2 / (1 - 4)", &env).unwrap();
//! assert!((value - (-1.0)).abs() < 1e-12);
//! ```
//!
//! Explaining failures:
//!
//! ```
//! use arithmetic_explain::{evaluate, Complaint, Environment, FailureReason, Location};
//!
//! let env = Environment::new().with_var("x", 3.0_f64);
//! let failure = evaluate("(x + 1", &env).unwrap_err();
//! assert_eq!(failure.reason(), FailureReason::Expected { token: ")" });
//!
//! let diagnosis = failure.explain(&env);
//! assert_eq!(diagnosis.location(), Location::UnexpectedEnd { consumed: "(x + 1" });
//! assert_eq!(diagnosis.complaint(), Some(Complaint::Expected { token: ")" }));
//! assert_eq!(diagnosis.suggested_fix(), Some("(x + 1)"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![doc(html_root_url = "https://docs.rs/arithmetic-explain/0.1.0")]
#![warn(missing_docs, missing_debug_implementations)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

// Polyfill for `alloc` types.
mod alloc {
    #[cfg(not(feature = "std"))]
    extern crate alloc;

    #[cfg(not(feature = "std"))]
    pub use alloc::{collections::BTreeMap, string::String, vec::Vec};
    #[cfg(feature = "std")]
    pub use std::{collections::BTreeMap, string::String, vec::Vec};
}

pub use crate::{
    corrections::{Corrector, Edits},
    diagnostics::{explain, Complaint, Diagnosis, Location},
    env::Environment,
    error::{FailureReason, ParseFailure},
    grammars::NumLiteral,
    ops::{BinaryOp, OpPriority, UnaryOp},
    parser::{evaluate, parse},
    spans::{InputSpan, LocatedSpan, Spanned},
    tokens::{tokenize, Cursor, Mark, Token, TokenKind, TokenStream},
};

mod corrections;
mod diagnostics;
mod env;
mod error;
mod grammars;
mod ops;
mod parser;
mod spans;
mod tokens;
