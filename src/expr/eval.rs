//! Recursive evaluation over token slices.
//!
//! `eval` mirrors the grammar directly instead of going through a syntax
//! tree. A range is either a single operand, a fully parenthesized group, or
//! a split at its main operator. Sub-evaluations run right operand first;
//! the first failure unwinds the whole call with `?` and no partial value
//! escapes.
//!
//! Arithmetic is wrapping machine-word arithmetic. Division by zero is a
//! typed error rather than a panic, since the divisor comes from untrusted
//! operator input. The comparison operators and `&&` yield 0 or 1; both
//! operands of `&&` are evaluated before the combination, there is no
//! short-circuit.

use crate::expr::errors::EvalError;
use crate::expr::limits::ExprLimits;
use crate::expr::ranges::{find_main_operator, is_fully_parenthesized};
use crate::expr::tokens::{Token, TokenKind};
use crate::machine::{Machine, Word};

/// Evaluate a token range to a machine word.
pub fn eval<M: Machine + ?Sized>(
    tokens: &[Token],
    machine: &M,
    limits: &ExprLimits,
) -> Result<Word, EvalError> {
    match tokens {
        [] => Err(EvalError::EmptyRange),
        [token] => eval_operand(token, machine),
        _ if is_fully_parenthesized(tokens) => {
            eval(&tokens[1..tokens.len() - 1], machine, limits)
        }
        _ => {
            let main = find_main_operator(tokens).ok_or(EvalError::NoOperator)?;
            let right = eval(&tokens[main + 1..], machine, limits)?;

            match tokens[main].kind {
                TokenKind::Dereference => Ok(machine.read_memory(right, limits.deref_width)),
                TokenKind::Negate => Ok(right.wrapping_neg()),
                kind => {
                    let left = eval(&tokens[..main], machine, limits)?;
                    apply_binary(kind, left, right)
                }
            }
        }
    }
}

/// Evaluate a single-token range.
fn eval_operand<M: Machine + ?Sized>(token: &Token, machine: &M) -> Result<Word, EvalError> {
    match token.kind {
        TokenKind::UnsignedInt => parse_word(token.text(), 10),
        TokenKind::Hex => {
            let digits = token.text().strip_prefix("0x").unwrap_or(token.text());
            parse_word(digits, 16)
        }
        TokenKind::Register => {
            // exactly one sigil comes off; x0's mnemonic is itself "$0"
            let name = token.text().strip_prefix('$').unwrap_or(token.text());
            machine
                .register(name)
                .ok_or_else(|| EvalError::UnknownRegister(name.to_string()))
        }
        _ => Err(EvalError::MalformedOperand(token.to_string())),
    }
}

fn parse_word(digits: &str, radix: u32) -> Result<Word, EvalError> {
    Word::from_str_radix(digits, radix)
        .map_err(|_| EvalError::MalformedOperand(digits.to_string()))
}

fn apply_binary(kind: TokenKind, left: Word, right: Word) -> Result<Word, EvalError> {
    match kind {
        TokenKind::Plus => Ok(left.wrapping_add(right)),
        TokenKind::Minus => Ok(left.wrapping_sub(right)),
        TokenKind::Star => Ok(left.wrapping_mul(right)),
        TokenKind::Slash => {
            if right == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(left / right)
            }
        }
        TokenKind::Equal => Ok((left == right) as Word),
        TokenKind::NotEqual => Ok((left != right) as Word),
        TokenKind::And => Ok((left != 0 && right != 0) as Word),
        // find_main_operator only yields operator indices, and the unary
        // kinds are handled before the left operand is evaluated
        other => Err(EvalError::MalformedOperand(other.to_string())),
    }
}
