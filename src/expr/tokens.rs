//! Token types shared across the lexer, range utilities, and evaluator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The classification of a lexical token.
///
/// `Star` and `Minus` are what the rule table produces for `*` and `-`; the
/// lexer reclassifies them as `Dereference` / `Negate` when they appear in
/// operand position. `Whitespace` never reaches a token sequence, it exists
/// so the rule table can consume and discard separator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Spaces and tabs, consumed without emitting a token
    Whitespace,

    /// Decimal literal, e.g. `42`
    UnsignedInt,

    /// Hex literal with `0x` prefix, e.g. `0x2a`
    Hex,

    /// Register reference with `$` sigil, e.g. `$sp`
    Register,

    /// `+`
    Plus,

    /// Binary `-`
    Minus,

    /// Binary `*`
    Star,

    /// `/`
    Slash,

    /// `(`
    LeftParen,

    /// `)`
    RightParen,

    /// `==`
    Equal,

    /// `!=`
    NotEqual,

    /// `&&`
    And,

    /// Unary `*`, reads a machine word from simulated memory
    Dereference,

    /// Unary `-`
    Negate,
}

impl TokenKind {
    /// Whether tokens of this kind carry their matched source text.
    ///
    /// Only literal and register tokens do; operators and parentheses are
    /// fully described by their kind.
    pub fn keeps_text(self) -> bool {
        matches!(self, TokenKind::UnsignedInt | TokenKind::Hex | TokenKind::Register)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Whitespace => "WS",
            TokenKind::UnsignedInt => "Uint",
            TokenKind::Hex => "Hex",
            TokenKind::Register => "Reg",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::And => "&&",
            TokenKind::Dereference => "Deref",
            TokenKind::Negate => "Neg",
        };
        write!(f, "{}", name)
    }
}

/// One classified token of a monitor expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token's classification
    pub kind: TokenKind,

    /// The matched source text, present only for kinds where
    /// [TokenKind::keeps_text] holds
    pub text: Option<String>,
}

impl Token {
    /// A token fully described by its kind (operators and parentheses).
    pub fn bare(kind: TokenKind) -> Self {
        Token { kind, text: None }
    }

    /// A literal or register token carrying its matched text.
    pub fn with_text(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: Some(text.into()),
        }
    }

    /// The token's source text, empty for text-less kinds.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{}({})", self.kind, text),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Render a token sequence as a single compact line, e.g.
/// `Neg Uint(3) + Deref Hex(0x10)`. Used by the monitor's token dump and by
/// snapshot tests.
pub fn dump_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
