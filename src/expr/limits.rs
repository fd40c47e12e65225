//! Tunable limits for the expression engine.

use serde::{Deserialize, Serialize};

/// Per-call limits and parameters.
///
/// The defaults match the monitor's historical sizing; raising `max_tokens`
/// also raises the evaluator's recursion bound, which is proportional to the
/// token count. The monitor CLI can load these from a YAML file, and missing
/// fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExprLimits {
    /// Maximum number of tokens in one expression
    pub max_tokens: usize,

    /// Maximum length in bytes of a literal or register lexeme
    pub max_token_text: usize,

    /// Byte width of a dereference read
    pub deref_width: usize,
}

impl Default for ExprLimits {
    fn default() -> Self {
        ExprLimits {
            max_tokens: 32,
            max_token_text: 31,
            deref_width: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = ExprLimits::default();
        assert_eq!(limits.max_tokens, 32);
        assert_eq!(limits.max_token_text, 31);
        assert_eq!(limits.deref_width, 4);
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let limits: ExprLimits = serde_yaml::from_str("max_tokens: 64\n").unwrap();
        assert_eq!(limits.max_tokens, 64);
        assert_eq!(limits.max_token_text, 31);
        assert_eq!(limits.deref_width, 4);
    }

    #[test]
    fn test_yaml_round_trip() {
        let limits = ExprLimits {
            max_tokens: 8,
            max_token_text: 15,
            deref_width: 2,
        };
        let yaml = serde_yaml::to_string(&limits).unwrap();
        assert_eq!(serde_yaml::from_str::<ExprLimits>(&yaml).unwrap(), limits);
    }
}
