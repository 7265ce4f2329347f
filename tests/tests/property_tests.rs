//! Property tests over the public API.

use proptest::prelude::*;
use solvent::{evaluate, to_postfix};
use tests::eval_postfix;

// Token spellings of "3 + 4 * 2 / (1 - 5)^2", rejoined with arbitrary
// gap widths before each token.
fn spaced_expression(gaps: &[u8]) -> String {
    let words = [
        "3", "+", "4", "*", "2", "/", "(", "1", "-", "5", ")", "^", "2",
    ];
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        let width = gaps.get(i).copied().unwrap_or(0) as usize % 4;
        out.push_str(&" ".repeat(width));
        out.push_str(word);
    }
    out
}

proptest! {
    #[test]
    fn whitespace_placement_never_changes_the_result(gaps in proptest::collection::vec(any::<u8>(), 13)) {
        let source = spaced_expression(&gaps);
        prop_assert_eq!(evaluate(&source).unwrap(), 3.5);
    }

    #[test]
    fn literal_addition_matches_float_arithmetic(a in 0.0f64..1e9, b in 0.0f64..1e9) {
        let source = format!("{a} + {b}");
        prop_assert_eq!(evaluate(&source).unwrap(), a + b);
    }

    #[test]
    fn evaluation_is_idempotent(a in 0.0f64..1e6, b in 1.0f64..1e6) {
        let source = format!("{a} / {b} + {a}");
        let first = evaluate(&source).unwrap();
        let second = evaluate(&source).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn postfix_round_trip_matches_tree_evaluation(a in 1.0f64..1e3, b in 1.0f64..1e3, c in 1.0f64..1e3) {
        let source = format!("avg({a}, {b}) * ({c} + {a})");
        let rendered = to_postfix(&source).unwrap();
        prop_assert_eq!(eval_postfix(&rendered), evaluate(&source).unwrap());
    }
}
