//! Range utilities over token slices.
//!
//! The evaluator recurses over sub-slices of the token sequence. These
//! helpers answer the two structural questions it asks about a range: is it
//! one fully parenthesized group, and where does it split. Both scan the
//! slice once and never mutate it.

use crate::expr::tokens::{Token, TokenKind};

/// Whether the whole slice is a single parenthesized group.
///
/// True iff the first token is `(`, the last is `)`, and across the interior
/// the running parenthesis depth never goes negative and ends at zero. This
/// is what separates `(a+b)` from `(a)+(b)`: in the latter the first `(`
/// does not pair with the last `)`.
pub fn is_fully_parenthesized(tokens: &[Token]) -> bool {
    let [first, interior @ .., last] = tokens else {
        return false;
    };
    if first.kind != TokenKind::LeftParen || last.kind != TokenKind::RightParen {
        return false;
    }

    let mut depth: i32 = 0;
    for token in interior {
        match token.kind {
            TokenKind::LeftParen => depth += 1,
            TokenKind::RightParen => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Binding priority of an operator kind, `None` for non-operators.
///
/// Lower binds looser and is split first: the main operator of a range is
/// the one evaluated last.
pub fn priority(kind: TokenKind) -> Option<u8> {
    match kind {
        TokenKind::And => Some(0),
        TokenKind::Equal | TokenKind::NotEqual => Some(1),
        TokenKind::Plus | TokenKind::Minus => Some(2),
        TokenKind::Star | TokenKind::Slash => Some(3),
        TokenKind::Dereference | TokenKind::Negate => Some(4),
        _ => None,
    }
}

/// Locate the main operator of a range: the operator outside any parentheses
/// with the loosest binding, rightmost among ties.
///
/// Ties going right is what makes same-precedence binary chains evaluate
/// left to right: `1-2-3` splits at the second `-`, so the left operand is
/// `1-2`. Returns `None` when no operator sits at parenthesis depth zero.
pub fn find_main_operator(tokens: &[Token]) -> Option<usize> {
    let mut depth: i32 = 0;
    let mut best: Option<(usize, u8)> = None;

    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::LeftParen => depth += 1,
            TokenKind::RightParen => depth -= 1,
            kind => {
                let Some(priority) = priority(kind) else {
                    continue;
                };
                if depth != 0 {
                    continue;
                }
                match best {
                    Some((_, best_priority)) if priority > best_priority => {}
                    _ => best = Some((index, priority)),
                }
            }
        }
    }

    best.map(|(index, _)| index)
}
