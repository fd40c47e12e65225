//! Error types for the expression engine.
//!
//! Lexing and evaluation keep separate error types because the monitor
//! reports them differently: a [LexError] points at the offending spot in the
//! input line, an [EvalError] describes why a structurally tokenized
//! expression still has no value. [ExprError] is the combined type returned
//! by the `evaluate` entry points.
//!
//! All of these are recoverable. Monitor input is untrusted operator typing
//! and must never abort the process; every failure unwinds the current
//! evaluation with `?` and leaves no partial state behind.

use std::fmt;

/// Errors from tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No rule in the table matches at `position`; `remaining` is the
    /// unconsumed suffix, kept so the monitor can point at the offending
    /// character
    NoMatch { position: usize, remaining: String },

    /// The expression produced more tokens than the configured cap
    TokenOverflow { limit: usize },

    /// A literal or register lexeme exceeded the configured text cap
    TokenTextOverflow { text: String, limit: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::NoMatch { position, remaining } => {
                write!(f, "no lexical rule matches at byte {}: {:?}", position, remaining)
            }
            LexError::TokenOverflow { limit } => {
                write!(f, "expression exceeds the token limit of {}", limit)
            }
            LexError::TokenTextOverflow { text, limit } => {
                write!(f, "lexeme {:?} exceeds the token text limit of {}", text, limit)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Errors from evaluating a token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// An operator is missing an operand, e.g. `1+` or a bare `*`
    EmptyRange,

    /// A single token that is not a usable operand, or a literal whose text
    /// does not fit a machine word
    MalformedOperand(String),

    /// A multi-token range with no operator outside parentheses, e.g. `1+2)`
    NoOperator,

    /// The machine does not recognize the register mnemonic
    UnknownRegister(String),

    /// Division by zero in the `/` operator
    DivisionByZero,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::EmptyRange => write!(f, "operator is missing an operand"),
            EvalError::MalformedOperand(text) => write!(f, "malformed operand: {}", text),
            EvalError::NoOperator => write!(f, "no operator found outside parentheses"),
            EvalError::UnknownRegister(name) => write!(f, "unknown register: {}", name),
            EvalError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Combined error returned by the `evaluate` entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    Lex(LexError),
    Eval(EvalError),
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::Lex(e) => write!(f, "{}", e),
            ExprError::Eval(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExprError::Lex(e) => Some(e),
            ExprError::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for ExprError {
    fn from(e: LexError) -> Self {
        ExprError::Lex(e)
    }
}

impl From<EvalError> for ExprError {
    fn from(e: EvalError) -> Self {
        ExprError::Eval(e)
    }
}
