//! Lexical rule table for monitor expressions.
//!
//! The lexer is data driven: tokenization walks this table instead of
//! hand-written character dispatch. Each rule pairs a regex pattern with the
//! token kind it produces. Rules are tried in declaration order and the first
//! rule that matches at the scan position wins, even when a later rule would
//! match a longer substring, so mutually overlapping patterns must be ordered
//! here (two-character operators like `==` ahead of anything that could eat
//! their first character, the hex rule ahead of the decimal rule so `0x10`
//! is not split into `0` and `x10`).
//!
//! The table is compiled once per process. Every pattern gets an injected
//! `^(?:...)` anchor so "matches at the scan position" is enforced by the
//! regex engine itself rather than by offset checks after the fact.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::expr::tokens::TokenKind;

/// The ordered rule table.
///
/// Register mnemonics follow the RV32 register file: `$0` (so the token for
/// x0 reads `$$0`), `ra`, `sp`, `gp`, `tp`, `t0`-`t6`, `s0`-`s11`, `a0`-`a7`,
/// and `pc`. `s10`/`s11` are listed ahead of `s[0-9]` because alternation
/// picks the first alternative that matches, and `$s10` must not lex as `$s1`
/// followed by a stray digit.
pub(crate) const RULES: &[(&str, TokenKind)] = &[
    (r"[ \t]+", TokenKind::Whitespace),
    (r"\+", TokenKind::Plus),
    (r"==", TokenKind::Equal),
    (r"-", TokenKind::Minus),
    (r"\*", TokenKind::Star),
    (r"/", TokenKind::Slash),
    (r"\(", TokenKind::LeftParen),
    (r"\)", TokenKind::RightParen),
    (r"0x[0-9a-fA-F]+", TokenKind::Hex),
    (r"[0-9]+", TokenKind::UnsignedInt),
    (r"!=", TokenKind::NotEqual),
    (r"&&", TokenKind::And),
    (
        r"\$(\$0|ra|sp|gp|tp|t[0-6]|s1[01]|s[0-9]|a[0-7]|pc)",
        TokenKind::Register,
    ),
];

static MATCHERS: Lazy<Vec<(Regex, TokenKind)>> = Lazy::new(|| {
    RULES
        .iter()
        .map(|&(pattern, kind)| {
            let anchored = format!("^(?:{})", pattern);
            let regex = Regex::new(&anchored)
                .unwrap_or_else(|e| panic!("invalid lexical rule {:?}: {}", pattern, e));
            (regex, kind)
        })
        .collect()
});

/// Try every rule in table order against the start of `rest`.
///
/// Returns the winning rule's index, token kind, and matched length, or
/// `None` when no rule matches at this position.
pub(crate) fn first_match(rest: &str) -> Option<(usize, TokenKind, usize)> {
    MATCHERS
        .iter()
        .enumerate()
        .find_map(|(index, (regex, kind))| {
            regex.find(rest).map(|m| (index, *kind, m.end()))
        })
}
