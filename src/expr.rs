//! Expression engine
//!
//! This module orchestrates the complete pipeline that turns monitor input
//! into a machine-word value.
//!
//! The pipeline consists of:
//! 1. Tokenization over the ordered rule table ./expr/rules.rs ./expr/lexing.rs
//! 2. Range utilities (parenthesis pairing, operator priority, main-operator
//!    search) ./expr/ranges.rs
//! 3. Recursive evaluation over token slices ./expr/eval.rs
//!
//! Operator handling
//!
//!     The grammar is deliberately small: unsigned and hex literals, register
//!     references, parentheses, unary dereference and negation, and the
//!     binary operators + - * / == != &&. Instead of building a syntax tree,
//!     evaluation recurses directly over the token sequence, splitting each
//!     range at its main operator (the loosest-binding operator outside any
//!     parentheses, rightmost among ties so that same-precedence chains
//!     evaluate left to right).
//!
//!     The lexer resolves the one ambiguity in the grammar up front: a `*` or
//!     `-` in operand position is unary (dereference / negation), anywhere
//!     else it is binary. See [lexing] for the exact rule.
//!
//! Every evaluation call owns its token sequence, so concurrent evaluations
//! against a shared machine are safe; the rule table is compiled once per
//! process and is read-only afterwards.

pub mod errors;
pub mod eval;
pub mod lexing;
pub mod limits;
pub mod ranges;
pub mod rules;
pub mod tokens;

pub use errors::{EvalError, ExprError, LexError};
pub use eval::eval;
pub use lexing::tokenize;
pub use limits::ExprLimits;
pub use tokens::{dump_tokens, Token, TokenKind};

use crate::machine::{Machine, Word};

/// Evaluate a monitor expression against a machine, with default limits.
///
/// This is the entry point the monitor uses for `p`-style inspection and for
/// watchpoint conditions. Tokenization and evaluation failures both surface
/// as [ExprError]; the caller gets no partial value.
pub fn evaluate<M: Machine + ?Sized>(expression: &str, machine: &M) -> Result<Word, ExprError> {
    evaluate_with(expression, machine, &ExprLimits::default())
}

/// Evaluate a monitor expression with explicit [ExprLimits].
pub fn evaluate_with<M: Machine + ?Sized>(
    expression: &str,
    machine: &M,
    limits: &ExprLimits,
) -> Result<Word, ExprError> {
    let tokens = lexing::tokenize(expression, limits)?;
    let value = eval::eval(&tokens, machine, limits)?;
    Ok(value)
}
