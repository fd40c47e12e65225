//! Property-based tests for the expression lexer and evaluator.
//!
//! These ensure the engine holds up under arbitrary operator typing: no
//! panics on garbage, and literal values survive the round trip through
//! lexing and evaluation.

use proptest::prelude::*;
use sdb::expr::{evaluate, tokenize, ExprLimits};
use sdb::machine::SimMachine;

proptest! {
    #[test]
    fn decimal_literals_round_trip(n: u32) {
        let machine = SimMachine::new();
        prop_assert_eq!(evaluate(&n.to_string(), &machine), Ok(n));
    }

    #[test]
    fn hex_literals_round_trip_in_both_digit_cases(n: u32) {
        let machine = SimMachine::new();
        prop_assert_eq!(evaluate(&format!("0x{:x}", n), &machine), Ok(n));
        prop_assert_eq!(evaluate(&format!("0x{:X}", n), &machine), Ok(n));
    }

    #[test]
    fn tokenizing_arbitrary_input_never_panics(input in ".*") {
        let _ = tokenize(&input, &ExprLimits::default());
    }

    #[test]
    fn evaluating_expression_shaped_garbage_never_panics(
        input in "[0-9a-fx+*/()=!&$ -]{0,48}"
    ) {
        let machine = SimMachine::new();
        let _ = evaluate(&input, &machine);
    }

    #[test]
    fn outer_parens_do_not_change_the_value(a: u16, b: u16) {
        let machine = SimMachine::new();
        let bare = format!("{}+{}*{}", a, b, a);
        let wrapped = format!("({})", bare);
        prop_assert_eq!(evaluate(&wrapped, &machine), evaluate(&bare, &machine));
    }

    #[test]
    fn tokenize_then_count_respects_the_cap(count in 1usize..40) {
        let expression = vec!["1"; count].join("+");
        let result = tokenize(&expression, &ExprLimits::default());
        if count * 2 - 1 <= 32 {
            prop_assert_eq!(result.map(|t| t.len()), Ok(count * 2 - 1));
        } else {
            prop_assert!(result.is_err());
        }
    }
}
