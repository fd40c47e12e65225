//! Tokenization of monitor expressions.
//!
//! The scan keeps a byte cursor into the input. At each position every rule
//! in the table is tried in order and the first anchored match wins; the
//! cursor advances by the matched length. Whitespace matches are consumed
//! without emitting a token. A position where no rule matches fails the whole
//! scan with [LexError::NoMatch].
//!
//! Unary/binary disambiguation
//!
//!     `*` and `-` are ambiguous: `2*3` multiplies, `*0x10` dereferences.
//!     The rule table always produces the binary kinds; after a match the
//!     lexer looks at the kind of the immediately preceding emitted token.
//!     With no predecessor, or a predecessor that is a binary operator or an
//!     opening parenthesis, the new token is in operand position and gets
//!     reclassified as Dereference / Negate. The check never looks further
//!     back than one token. Dereference and Negate themselves are not in the
//!     operand-position set, so `--1` lexes as Negate Minus, not Negate
//!     Negate.

use tracing::trace;

use crate::expr::errors::LexError;
use crate::expr::limits::ExprLimits;
use crate::expr::rules;
use crate::expr::tokens::{Token, TokenKind};

/// Token kinds whose successor `*` / `-` is in operand position.
const OPERAND_POSITION_PREDECESSORS: &[TokenKind] = &[
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Star,
    TokenKind::Slash,
    TokenKind::LeftParen,
    TokenKind::Equal,
    TokenKind::NotEqual,
    TokenKind::And,
];

/// Tokenize one monitor expression.
///
/// Returns the token sequence for the whole input, or the first failure.
/// The sequence is a fresh value owned by the caller; nothing is shared
/// between calls.
pub fn tokenize(input: &str, limits: &ExprLimits) -> Result<Vec<Token>, LexError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut position = 0;

    while position < input.len() {
        let rest = &input[position..];
        let Some((rule, kind, len)) = rules::first_match(rest) else {
            return Err(LexError::NoMatch {
                position,
                remaining: rest.to_string(),
            });
        };
        trace!(rule, position, len, lexeme = &rest[..len], "lexical rule matched");

        let lexeme = &rest[..len];
        position += len;

        if kind == TokenKind::Whitespace {
            continue;
        }
        if tokens.len() >= limits.max_tokens {
            return Err(LexError::TokenOverflow {
                limit: limits.max_tokens,
            });
        }

        let token = if kind.keeps_text() {
            if lexeme.len() > limits.max_token_text {
                return Err(LexError::TokenTextOverflow {
                    text: lexeme.to_string(),
                    limit: limits.max_token_text,
                });
            }
            Token::with_text(kind, lexeme)
        } else {
            Token::bare(disambiguate(kind, tokens.last()))
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// Reclassify `*` / `-` as unary when the token sits in operand position.
fn disambiguate(kind: TokenKind, previous: Option<&Token>) -> TokenKind {
    let operand_position = match previous {
        None => true,
        Some(prev) => OPERAND_POSITION_PREDECESSORS.contains(&prev.kind),
    };
    match kind {
        TokenKind::Star if operand_position => TokenKind::Dereference,
        TokenKind::Minus if operand_position => TokenKind::Negate,
        _ => kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::tokens::dump_tokens;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input, &ExprLimits::default())
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("", &ExprLimits::default()), Ok(vec![]));
    }

    #[test]
    fn test_whitespace_is_discarded() {
        assert_eq!(kinds(" \t "), vec![]);
        assert_eq!(
            kinds(" 1 + 2 "),
            vec![TokenKind::UnsignedInt, TokenKind::Plus, TokenKind::UnsignedInt]
        );
    }

    #[test]
    fn test_literals_keep_their_text() {
        let tokens = tokenize("0x1F + 10", &ExprLimits::default()).unwrap();
        assert_eq!(tokens[0], Token::with_text(TokenKind::Hex, "0x1F"));
        assert_eq!(tokens[1], Token::bare(TokenKind::Plus));
        assert_eq!(tokens[2], Token::with_text(TokenKind::UnsignedInt, "10"));
    }

    #[test]
    fn test_star_is_binary_after_an_operand() {
        assert_eq!(
            kinds("2*3"),
            vec![TokenKind::UnsignedInt, TokenKind::Star, TokenKind::UnsignedInt]
        );
    }

    #[test]
    fn test_star_is_deref_at_expression_start() {
        assert_eq!(kinds("*0x10"), vec![TokenKind::Dereference, TokenKind::Hex]);
    }

    #[test]
    fn test_unary_after_every_binary_operator_and_open_paren() {
        for (input, prefix) in [
            ("1+*4", TokenKind::Plus),
            ("1-*4", TokenKind::Minus),
            ("1**4", TokenKind::Star),
            ("1/*4", TokenKind::Slash),
            ("(*4", TokenKind::LeftParen),
            ("1==*4", TokenKind::Equal),
            ("1!=*4", TokenKind::NotEqual),
            ("1&&*4", TokenKind::And),
        ] {
            let kinds = kinds(input);
            let star = kinds.iter().position(|&k| k == TokenKind::Dereference);
            assert!(star.is_some(), "no Dereference in {:?}", input);
            assert_eq!(kinds[star.unwrap() - 1], prefix, "input {:?}", input);
        }
    }

    #[test]
    fn test_binary_after_closing_paren_literal_and_register() {
        assert_eq!(
            kinds("(1)*2"),
            vec![
                TokenKind::LeftParen,
                TokenKind::UnsignedInt,
                TokenKind::RightParen,
                TokenKind::Star,
                TokenKind::UnsignedInt,
            ]
        );
        assert_eq!(
            kinds("0x2-1"),
            vec![TokenKind::Hex, TokenKind::Minus, TokenKind::UnsignedInt]
        );
        assert_eq!(
            kinds("$sp-4"),
            vec![TokenKind::Register, TokenKind::Minus, TokenKind::UnsignedInt]
        );
    }

    #[test]
    fn test_unary_predecessor_keeps_the_next_token_binary() {
        // Dereference / Negate are not in the operand-position set, so the
        // second sign stays binary.
        assert_eq!(
            kinds("--1"),
            vec![TokenKind::Negate, TokenKind::Minus, TokenKind::UnsignedInt]
        );
        assert_eq!(
            kinds("**0x10"),
            vec![TokenKind::Dereference, TokenKind::Star, TokenKind::Hex]
        );
    }

    #[test]
    fn test_no_match_reports_position_and_suffix() {
        let err = tokenize("1 + %foo", &ExprLimits::default()).unwrap_err();
        assert_eq!(
            err,
            LexError::NoMatch {
                position: 4,
                remaining: "%foo".to_string(),
            }
        );
    }

    #[test]
    fn test_token_overflow_is_recoverable() {
        let limits = ExprLimits {
            max_tokens: 3,
            ..ExprLimits::default()
        };
        assert_eq!(
            tokenize("1+1", &limits).map(|t| t.len()),
            Ok(3)
        );
        assert_eq!(
            tokenize("1+1+1", &limits),
            Err(LexError::TokenOverflow { limit: 3 })
        );
    }

    #[test]
    fn test_token_text_overflow_is_recoverable() {
        let long = "9".repeat(32);
        let err = tokenize(&long, &ExprLimits::default()).unwrap_err();
        assert_eq!(
            err,
            LexError::TokenTextOverflow {
                text: long,
                limit: 31,
            }
        );
    }

    #[test]
    fn test_dump_of_a_mixed_expression() {
        let tokens = tokenize("-3 + *0x10", &ExprLimits::default()).unwrap();
        insta::assert_snapshot!(dump_tokens(&tokens), @"Neg Uint(3) + Deref Hex(0x10)");
    }
}
